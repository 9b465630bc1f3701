//! Console implementation of the session [`Terminal`].

use crate::session::{Action, Report, SecretPrompt, Terminal};
use anyhow::{bail, Context, Result};
use dialoguer::console::Term;
use dialoguer::{Input, Password};
use std::io::{self, BufRead, Write};
use zeroize::Zeroizing;

const CHOICE_PROMPT: &str = "Choose an option";

/// How the terminal collects input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// dialoguer prompts on the attached tty; secrets hidden.
    Prompt,
    /// Plain lines from stdin for menu choices and secrets alike.
    Lines,
}

impl InputMode {
    /// dialoguer refuses to prompt unless stderr is a terminal.
    pub fn detect(mask_input: bool, stderr_is_term: bool) -> Self {
        if mask_input && stderr_is_term {
            InputMode::Prompt
        } else {
            InputMode::Lines
        }
    }
}

pub struct ConsoleTerminal {
    mode: InputMode,
}

impl ConsoleTerminal {
    pub fn new(mask_input: bool) -> Self {
        let mode = InputMode::detect(mask_input, Term::stderr().is_term());
        tracing::debug!(?mode, "console input mode");
        Self { mode }
    }
}

fn prompt_text(prompt: SecretPrompt) -> &'static str {
    match prompt {
        SecretPrompt::NewSecret => "Enter a new password",
        SecretPrompt::Login => "Enter password",
    }
}

/// Read one line after writing `prompt`, dropping only the line terminator.
fn read_line_from<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Zeroizing<String>> {
    write!(out, "{}: ", prompt).context("write prompt")?;
    out.flush().context("flush prompt")?;
    let mut buf = Zeroizing::new(String::new());
    let read = reader.read_line(&mut buf).context("read line from stdin")?;
    if read == 0 {
        bail!("stdin closed");
    }
    Ok(Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string()))
}

fn read_plain_line(prompt: &str) -> Result<Zeroizing<String>> {
    read_line_from(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

impl Terminal for ConsoleTerminal {
    fn show_menu(&mut self) -> Result<()> {
        println!();
        println!("Menu:");
        for action in Action::MENU {
            println!("{}", action);
        }
        Ok(())
    }

    fn read_choice(&mut self) -> Result<String> {
        match self.mode {
            InputMode::Prompt => Input::<String>::new()
                .with_prompt(CHOICE_PROMPT)
                .allow_empty(true)
                .interact_text()
                .context("read menu choice"),
            InputMode::Lines => Ok(read_plain_line(CHOICE_PROMPT)?.as_str().to_string()),
        }
    }

    fn read_secret(&mut self, prompt: SecretPrompt) -> Result<Zeroizing<String>> {
        match self.mode {
            InputMode::Prompt => Ok(Zeroizing::new(
                Password::new()
                    .with_prompt(prompt_text(prompt))
                    .allow_empty_password(true)
                    .interact()
                    .context("read password from prompt")?,
            )),
            InputMode::Lines => read_plain_line(prompt_text(prompt)),
        }
    }

    fn report(&mut self, report: &Report) -> Result<()> {
        println!("{}", report);
        Ok(())
    }
}
