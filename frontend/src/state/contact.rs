//! Contact form payload, submission and the status line it drives.

use std::collections::BTreeMap;
use std::future::Future;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

pub const PENDING_MESSAGE: &str = "Enviando...";
pub const SENT_MESSAGE: &str = "¡Listo! Te contactamos pronto.";
pub const FAILED_MESSAGE: &str = "No pudimos enviar tu mensaje. Inténtalo de nuevo.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint rejected the message with status {status}")]
    Rejected { status: u16 },
    #[error("could not encode payload: {0}")]
    Encode(String),
}

/// Form field name to value, flat. Later fields with the same name win.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactPayload(BTreeMap<String, String>);

impl ContactPayload {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ContactPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::default();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactStatus {
    Idle,
    Pending,
    Sent,
    Failed(SubmitError),
}

impl ContactStatus {
    /// Outcome of one submission. Failures are shown, never retried; the
    /// visitor can press send again.
    pub fn settle(result: Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => ContactStatus::Sent,
            Err(err) => ContactStatus::Failed(err),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContactStatus::Idle => "",
            ContactStatus::Pending => PENDING_MESSAGE,
            ContactStatus::Sent => SENT_MESSAGE,
            ContactStatus::Failed(_) => FAILED_MESSAGE,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ContactStatus::Pending)
    }

    /// Only a delivered message empties the form; a failed one keeps the
    /// visitor's input.
    pub fn clears_form(&self) -> bool {
        matches!(self, ContactStatus::Sent)
    }
}

/// One submission, in order: show pending, wait for `send`, show the
/// outcome, and empty the form only when the message went through.
pub async fn run_submission<S, F, R>(mut show: S, send: F, reset: R) -> ContactStatus
where
    S: FnMut(&ContactStatus),
    F: Future<Output = Result<(), SubmitError>>,
    R: FnOnce(),
{
    show(&ContactStatus::Pending);
    let outcome = ContactStatus::settle(send.await);
    show(&outcome);
    if outcome.clears_form() {
        reset();
    }
    outcome
}

/// Where contact messages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEndpoint {
    /// Waits and reports success without sending anything.
    Simulated { delay_ms: u32 },
    /// POSTs the payload as JSON.
    Http { url: String },
}

impl ContactEndpoint {
    pub async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        match self {
            ContactEndpoint::Simulated { delay_ms } => {
                TimeoutFuture::new(*delay_ms).await;
                gloo_console::log!(
                    "Contacto (demo):",
                    serde_json::to_string(payload).unwrap_or_default()
                );
                Ok(())
            }
            ContactEndpoint::Http { url } => {
                let response = Request::post(url)
                    .json(payload)
                    .map_err(|e| SubmitError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| SubmitError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(SubmitError::Rejected { status: response.status() })
                }
            }
        }
    }
}
