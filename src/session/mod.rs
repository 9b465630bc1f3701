//! Interactive session state machine.
//!
//! A session moves `Bootstrap -> MenuIdle -> AwaitingChoice -> ...` until the
//! exit action reaches `Terminated`. Each transition is a method on
//! [`SessionController`] returning the [`Report`] to show, so the flow can be
//! driven without a console. [`SessionController::run`] wires the transitions
//! to a [`Terminal`].

use crate::core::credstore::{self, CredentialStore};
use crate::core::error::StoreError;
use crate::core::policy;
use anyhow::Result;
use zeroize::Zeroizing;

pub mod action;
pub mod report;

pub use action::{Action, SelectionError};
pub use report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Bootstrap,
    MenuIdle,
    AwaitingChoice,
    Terminated,
}

/// Which secret a terminal is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPrompt {
    NewSecret,
    Login,
}

/// Console seam for [`SessionController::run`].
pub trait Terminal {
    fn show_menu(&mut self) -> Result<()>;
    fn read_choice(&mut self) -> Result<String>;
    fn read_secret(&mut self, prompt: SecretPrompt) -> Result<Zeroizing<String>>;
    fn report(&mut self, report: &Report) -> Result<()>;
}

#[derive(Debug)]
pub struct SessionController {
    store: CredentialStore,
    state: State,
}

impl SessionController {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            state: State::Bootstrap,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// True while bootstrapping against an empty store.
    pub fn needs_setup(&self) -> bool {
        self.state == State::Bootstrap && !self.store.exists()
    }

    /// Leave `Bootstrap`, applying the setup candidate if one was collected.
    ///
    /// Setup is offered once; the session continues to the menu whether or
    /// not the candidate was accepted.
    pub fn bootstrap(&mut self, candidate: Option<&str>) -> Option<Report> {
        if self.state != State::Bootstrap {
            return None;
        }
        let report = candidate.map(|c| self.store_new_secret(c));
        self.state = State::MenuIdle;
        report
    }

    pub fn open_menu(&mut self) {
        if self.state == State::MenuIdle {
            self.state = State::AwaitingChoice;
        }
    }

    /// Parse a menu selection. Bad input returns to `MenuIdle`.
    pub fn select(&mut self, input: &str) -> Result<Action, Report> {
        match Action::parse(input) {
            Ok(action) => Ok(action),
            Err(err) => {
                tracing::debug!(error = %err, "rejected menu selection");
                self.state = State::MenuIdle;
                Err(err.into())
            }
        }
    }

    /// Compare `candidate` byte-for-byte with the stored secret.
    pub fn login(&mut self, candidate: &str) -> Report {
        self.state = State::MenuIdle;
        if !self.store.exists() {
            return Report::NoCredential;
        }
        match self.store.load() {
            Ok(stored) if stored.is_empty() => Report::NoCredential,
            Ok(stored) if stored.as_str() == candidate => {
                tracing::info!("login succeeded");
                Report::LoginSucceeded
            }
            Ok(_) => {
                tracing::warn!("login failed: incorrect password");
                Report::IncorrectPassword
            }
            Err(err) => store_failure(err),
        }
    }

    /// Validate and persist `candidate`, replacing any existing credential.
    pub fn set_password(&mut self, candidate: &str) -> Report {
        self.state = State::MenuIdle;
        self.store_new_secret(candidate)
    }

    pub fn exit(&mut self) -> Report {
        self.state = State::Terminated;
        Report::Goodbye
    }

    /// Drive the session until the exit action.
    ///
    /// Only terminal I/O errors end the loop early.
    pub fn run<T: Terminal>(&mut self, terminal: &mut T) -> Result<()> {
        loop {
            match self.state {
                State::Bootstrap => {
                    let candidate = if self.needs_setup() {
                        tracing::info!(store = %self.store.path().display(), "no credential configured, running setup");
                        Some(terminal.read_secret(SecretPrompt::NewSecret)?)
                    } else {
                        None
                    };
                    if let Some(report) = self.bootstrap(candidate.as_ref().map(|c| c.as_str())) {
                        terminal.report(&report)?;
                    }
                }
                State::MenuIdle => {
                    terminal.show_menu()?;
                    self.open_menu();
                }
                State::AwaitingChoice => {
                    let input = terminal.read_choice()?;
                    let report = match self.select(&input) {
                        Ok(Action::Login) => {
                            let candidate = terminal.read_secret(SecretPrompt::Login)?;
                            self.login(&candidate)
                        }
                        Ok(Action::SetPassword) => {
                            let candidate = terminal.read_secret(SecretPrompt::NewSecret)?;
                            self.set_password(&candidate)
                        }
                        Ok(Action::Exit) => self.exit(),
                        Err(report) => report,
                    };
                    tracing::debug!(failure = report.is_failure(), state = ?self.state, "action finished");
                    terminal.report(&report)?;
                }
                State::Terminated => return Ok(()),
            }
        }
    }

    fn store_new_secret(&self, candidate: &str) -> Report {
        if !credstore::is_single_line(candidate) {
            tracing::info!("candidate password rejected: contains a line break");
            return Report::LineBreakRejected;
        }
        if !policy::validate(candidate) {
            let unmet = policy::unmet_requirements(candidate);
            tracing::info!(?unmet, "candidate password rejected by policy");
            return Report::SecretRejected { unmet };
        }
        match self.store.save(candidate) {
            Ok(()) => {
                tracing::info!(store = %self.store.path().display(), "credential saved");
                Report::SecretSaved
            }
            Err(err) => store_failure(err),
        }
    }
}

fn store_failure(err: StoreError) -> Report {
    tracing::warn!(error = %err, "credential store operation failed");
    Report::StoreFailure(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::policy::Requirement;
    use std::fs;
    use tempfile::TempDir;

    fn controller(dir: &TempDir) -> SessionController {
        SessionController::new(CredentialStore::new(dir.path().join("password.txt")))
    }

    fn at_menu(dir: &TempDir) -> SessionController {
        let mut session = controller(dir);
        session.bootstrap(None);
        session.open_menu();
        session
    }

    #[test]
    fn test_starts_in_bootstrap() {
        let dir = TempDir::new().unwrap();
        let session = controller(&dir);
        assert_eq!(session.state(), State::Bootstrap);
        assert!(session.needs_setup());
    }

    #[test]
    fn test_no_setup_when_credential_exists() {
        let dir = TempDir::new().unwrap();
        let mut session = controller(&dir);
        session.store().save("Abcdef1@").unwrap();
        assert!(!session.needs_setup());
        assert_eq!(session.bootstrap(None), None);
        assert_eq!(session.state(), State::MenuIdle);
    }

    #[test]
    fn test_bootstrap_rejected_still_reaches_menu() {
        let dir = TempDir::new().unwrap();
        let mut session = controller(&dir);
        let report = session.bootstrap(Some("short1")).unwrap();
        assert_eq!(
            report,
            Report::SecretRejected {
                unmet: vec![Requirement::MinLength, Requirement::Uppercase, Requirement::Special],
            }
        );
        assert_eq!(session.state(), State::MenuIdle);
        assert!(!session.store().exists());
    }

    #[test]
    fn test_bootstrap_accepted_persists() {
        let dir = TempDir::new().unwrap();
        let mut session = controller(&dir);
        assert_eq!(session.bootstrap(Some("Abcdef1@")), Some(Report::SecretSaved));
        assert!(session.store().exists());
    }

    #[test]
    fn test_bootstrap_only_once() {
        let dir = TempDir::new().unwrap();
        let mut session = controller(&dir);
        session.bootstrap(None);
        assert_eq!(session.bootstrap(Some("Abcdef1@")), None);
        assert!(!session.store().exists());
    }

    #[test]
    fn test_menu_cycle() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        assert_eq!(session.state(), State::AwaitingChoice);
        assert_eq!(session.select("2"), Ok(Action::SetPassword));
        assert_eq!(session.state(), State::AwaitingChoice);
        session.set_password("Abcdef1@");
        assert_eq!(session.state(), State::MenuIdle);
    }

    #[test]
    fn test_select_bad_input_returns_to_menu() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        assert_eq!(session.select("x"), Err(Report::InvalidInput("x".into())));
        assert_eq!(session.state(), State::MenuIdle);

        session.open_menu();
        assert_eq!(session.select("7"), Err(Report::InvalidChoice(7)));
        assert_eq!(session.state(), State::MenuIdle);
    }

    #[test]
    fn test_login_exact_match_only() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        session.set_password("Abcdef1@");
        assert_eq!(session.login("Abcdef1@"), Report::LoginSucceeded);
        assert_eq!(session.login("abcdef1@"), Report::IncorrectPassword);
        assert_eq!(session.login("Abcdef1@ "), Report::IncorrectPassword);
        assert_eq!(session.login(""), Report::IncorrectPassword);
    }

    #[test]
    fn test_login_without_credential() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        assert_eq!(session.login(""), Report::NoCredential);
        assert_eq!(session.state(), State::MenuIdle);
    }

    #[test]
    fn test_login_read_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        // present and non-empty, but not readable as text
        let path = dir.path().join("password.txt");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();
        let mut session = SessionController::new(CredentialStore::new(&path));
        session.bootstrap(None);
        match session.login("Abcdef1@") {
            Report::StoreFailure(msg) => assert!(msg.contains("password.txt")),
            other => panic!("unexpected report: {:?}", other),
        }
        assert_eq!(session.state(), State::MenuIdle);
    }

    #[test]
    fn test_set_password_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        assert_eq!(session.set_password("Old1@abc"), Report::SecretSaved);
        assert_eq!(session.set_password("New2@xyz"), Report::SecretSaved);
        assert_eq!(session.login("Old1@abc"), Report::IncorrectPassword);
        assert_eq!(session.login("New2@xyz"), Report::LoginSucceeded);
    }

    #[test]
    fn test_set_password_rejected_keeps_old() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        session.set_password("Old1@abc");
        assert!(matches!(
            session.set_password("weak"),
            Report::SecretRejected { .. }
        ));
        assert_eq!(session.login("Old1@abc"), Report::LoginSucceeded);
    }

    #[test]
    fn test_set_password_refuses_line_breaks() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        assert_eq!(session.set_password("\nAbcdef1@"), Report::LineBreakRejected);
        assert_eq!(session.set_password("Abcdef1@\r\n"), Report::LineBreakRejected);
        assert!(!session.store().exists());
        assert_eq!(session.login(""), Report::NoCredential);

        session.set_password("Old1@abc");
        assert_eq!(session.set_password("Abcdef1@\nx"), Report::LineBreakRejected);
        assert_eq!(session.login("Abcdef1@"), Report::IncorrectPassword);
        assert_eq!(session.login("Old1@abc"), Report::LoginSucceeded);
    }

    #[test]
    fn test_bootstrap_refuses_line_breaks() {
        let dir = TempDir::new().unwrap();
        let mut session = controller(&dir);
        assert_eq!(
            session.bootstrap(Some("Abcdef1@\n")),
            Some(Report::LineBreakRejected)
        );
        assert!(!session.store().exists());
    }

    #[test]
    fn test_login_against_blank_first_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("password.txt");
        fs::write(&path, "\nAbcdef1@").unwrap();
        let mut session = SessionController::new(CredentialStore::new(&path));
        session.bootstrap(None);
        assert_eq!(session.login(""), Report::NoCredential);
        assert_eq!(session.login("Abcdef1@"), Report::NoCredential);
    }

    #[test]
    fn test_set_password_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let mut session = SessionController::new(CredentialStore::new(blocker.join("pw.txt")));
        session.bootstrap(None);
        assert!(matches!(
            session.set_password("Abcdef1@"),
            Report::StoreFailure(_)
        ));
        assert_eq!(session.state(), State::MenuIdle);
    }

    #[test]
    fn test_exit_terminates() {
        let dir = TempDir::new().unwrap();
        let mut session = at_menu(&dir);
        assert_eq!(session.select("3"), Ok(Action::Exit));
        assert_eq!(session.exit(), Report::Goodbye);
        assert_eq!(session.state(), State::Terminated);
    }
}
