use std::io::{self, Write};

/// Capability seam for the interactive keep/delete question, so the
/// decision loop is testable without a terminal.
pub trait ConfirmationProvider {
    fn confirm(&self, prompt: &str) -> io::Result<bool>;
}

/// Blocking stdin prompt. Loops until an explicit Y/N answer; empty
/// input takes the default when one is set.
pub struct StdinConfirmation {
    default: Option<bool>,
}

impl StdinConfirmation {
    pub fn new(default: Option<bool>) -> Self {
        StdinConfirmation { default }
    }
}

impl Default for StdinConfirmation {
    fn default() -> Self {
        StdinConfirmation::new(Some(false))
    }
}

impl ConfirmationProvider for StdinConfirmation {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        prompt_confirm(prompt, self.default)
    }
}

pub fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
