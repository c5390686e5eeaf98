use std::sync::{Mutex, MutexGuard};
use quick_xml::escape::partial_escape;

use crate::form::Message;

pub const IDLE_LABEL: &str = "Sign In";
pub const SUBMITTING_LABEL: &str = "<span class=\"spinner\"></span>Signing in...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

impl FormState {
    pub fn submit_disabled(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormState::Idle => IDLE_LABEL,
            FormState::Submitting => SUBMITTING_LABEL,
        }
    }
}

/// Sink for everything the controller shows the user.
pub trait FormView: Send + Sync {
    fn clear_message(&self);

    fn set_state(&self, state: FormState);

    fn show_message(&self, message: &Message);
}

/// Markup for the message region; text and details are escaped.
pub fn render_message(message: &Message) -> String {
    let mut html = format!(
        "<div class=\"alert {}\" role=\"alert\">{}",
        message.kind.alert_class(),
        partial_escape(message.text.as_str())
    );
    if let Some(d) = &message.details {
        html.push_str(&format!(
            "<div class=\"entity-details\"><pre>{}</pre></div>",
            partial_escape(d.as_str())
        ));
    }
    html.push_str("</div>");
    html
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlSurface {
    pub message: String,
    pub submit_disabled: bool,
    pub submit_label: String,
}

impl Default for HtmlSurface {
    fn default() -> Self {
        Self {
            message: String::new(),
            submit_disabled: false,
            submit_label: IDLE_LABEL.to_owned(),
        }
    }
}

/// Keeps the page's message region and submit button as HTML strings.
#[derive(Debug, Default)]
pub struct HtmlView {
    surface: Mutex<HtmlSurface>,
}

impl HtmlView {
    pub fn snapshot(&self) -> HtmlSurface {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, HtmlSurface> {
        // a panicking holder cannot leave the strings half-written
        self.surface.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FormView for HtmlView {
    fn clear_message(&self) {
        self.lock().message.clear();
    }

    fn set_state(&self, state: FormState) {
        let mut s = self.lock();
        s.submit_disabled = state.submit_disabled();
        s.submit_label = state.submit_label().to_owned();
    }

    fn show_message(&self, message: &Message) {
        self.lock().message = render_message(message);
    }
}
