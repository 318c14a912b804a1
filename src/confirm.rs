//! Confirmation guard for destructive actions.
//!
//! A synchronous yes/no precondition in front of delete. Declining aborts
//! with no network call and no state change. Gates are stateless between
//! invocations.

use dialoguer::Confirm;

/// Common interface for confirmation prompts.
pub trait ConfirmationGate {
    /// Present `prompt` and return the operator's decision.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive terminal prompt, defaulting to "no".
pub struct ConsoleGate;

impl ConfirmationGate for ConsoleGate {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Fixed-answer gate for `--yes` flags and tests.
pub struct StaticGate {
    answer: bool,
}

impl StaticGate {
    pub fn approve() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

impl ConfirmationGate for StaticGate {
    fn confirm(&self, _prompt: &str) -> bool {
        self.answer
    }
}
