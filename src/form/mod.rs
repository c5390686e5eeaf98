//! Login form state machine: `Idle -> Submitting -> Idle`, with the outcome
//! rendered into the view on the way back.

mod outcome;
mod view;

pub use outcome::{LoginOutcome, Message, MessageKind, ERROR_PREFIX, REJECTED_TEXT, SUCCESS_TEXT};
pub use view::{
    render_message, FormState, FormView, HtmlSurface, HtmlView, IDLE_LABEL, SUBMITTING_LABEL,
};

use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(feature = "log")]
use log::{debug, info};
#[cfg(not(feature = "log"))]
use crate::{debug, info};

use crate::credentials::Credentials;
use crate::net::Transport;
use crate::soap::{SoapClient, SoapError};

pub struct FormController<V, T> {
    view: V,
    client: SoapClient<T>,
    // ticket of the most recent submission
    sequence: AtomicU64,
}

impl<V: FormView, T: Transport> FormController<V, T> {
    pub fn new(view: V, client: SoapClient<T>) -> Self {
        Self {
            view,
            client,
            sequence: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &SoapClient<T> {
        &self.client
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.sequence.load(Ordering::SeqCst) == ticket
    }

    /// Runs one login attempt and renders its outcome.
    ///
    /// If another submission started while this one was in flight, the result
    /// is still returned but nothing is rendered and the submit control is left
    /// to the newer attempt.
    pub async fn submit(&self, login: &str, password: &str) -> Result<LoginOutcome, SoapError> {
        let ticket = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("submission #{} started", ticket);
        self.view.clear_message();
        self.view.set_state(FormState::Submitting);

        let credentials = Credentials::from_form(login, password);
        let result = self.client
            .login(&credentials)
            .await
            .map(LoginOutcome::interpret);

        if self.is_latest(ticket) {
            match &result {
                Ok(o) if o.is_authenticated() => info!("login accepted"),
                Ok(..) => info!("login rejected"),
                Err(e) => info!("login failed: {}", e),
            }
            self.view.show_message(&Message::from_result(&result));
            self.view.set_state(FormState::Idle);
        } else {
            debug!("submission #{} superseded, discarding its outcome", ticket);
        }
        result
    }
}
