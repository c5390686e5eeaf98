use colored::Colorize;

use crate::form::{FormState, FormView, Message, MessageKind};

/// Renders the form on a terminal: progress on stderr, outcome on stdout.
pub struct TerminalView {
    quiet: bool,
}

impl TerminalView {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl FormView for TerminalView {
    fn clear_message(&self) {}

    fn set_state(&self, state: FormState) {
        if !self.quiet && state == FormState::Submitting {
            eprintln!("{}", "Signing in...".dimmed());
        }
    }

    fn show_message(&self, message: &Message) {
        let text = match message.kind {
            MessageKind::Success => message.text.green(),
            MessageKind::Danger => message.text.red(),
        };
        println!("{}", text);
        if let Some(d) = &message.details {
            println!("{}", d);
        }
    }
}
