//! Centralized constants for policy rules, paths, and permissions.

/// Default credential record, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "password.txt";

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "passgate.toml";

/// Environment variable overriding the store location.
pub const STORE_ENV: &str = "PASSGATE_STORE";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PASSGATE_CONFIG";

/// Permission mode for the credential record.
pub const STORE_FILE_MODE: u32 = 0o600;

/// Permission mode for a store directory we create.
pub const STORE_DIR_MODE: u32 = 0o700;

/// Minimum secret length, in characters.
pub const MIN_SECRET_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARS: &[char] = &['?', '@', '*', '_', '+', '-', '%', '&'];

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "passgate=warn";

/// Tracing filter used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "passgate=debug";
