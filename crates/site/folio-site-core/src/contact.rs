//! Contact form submission.
//!
//! The form posts once to a fixed endpoint. Input is checked before anything
//! is sent; after that the only failure is the transport, which is folded
//! into [`SubmissionOutcome::Failed`] with a message pointing at the
//! published address.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ContactError, TransportError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    pub fallback_email: String,
    pub success_title: String,
    pub success_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://formsubmit.co/ajax/yaswanthkuramdasu@gmail.com".to_string(),
            fallback_email: "yaswanthkuramdasu@gmail.com".to_string(),
            success_title: "Message sent!".to_string(),
            success_message: "Thanks for reaching out. I'll get back to you soon.".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trimmed copy of the form, or the first field that fails.
    pub fn validated(&self) -> Result<ContactForm, ContactError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let message = required("message", &self.message)?;
        if !email.contains('@') {
            return Err(ContactError::InvalidEmail {
                email: email.to_string(),
            });
        }
        Ok(ContactForm::new(name, email, message))
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField { field })
    } else {
        Ok(value)
    }
}

/// The request a transport sends.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRequest {
    pub url: String,
    pub body: Value,
}

impl ContactRequest {
    pub fn build(config: &ContactConfig, form: &ContactForm) -> Result<Self, ContactError> {
        let form = form.validated()?;
        Ok(Self {
            url: config.endpoint.clone(),
            body: json!({
                "name": form.name,
                "email": form.email,
                "message": form.message,
                "_success_title": config.success_title,
                "_success_message": config.success_message,
            }),
        })
    }
}

/// Sends a JSON body and reports the HTTP status.
pub trait FormTransport {
    fn post_json(&mut self, url: &str, body: &Value) -> Result<u16, TransportError>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Sent { title: String, message: String },
    Failed { message: String },
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent { .. })
    }

    fn failed(config: &ContactConfig) -> Self {
        SubmissionOutcome::Failed {
            message: format!(
                "Something went wrong sending your message. Please email me directly at {}.",
                config.fallback_email
            ),
        }
    }
}

/// Validate the form and post it once. No retry.
pub fn submit<T: FormTransport + ?Sized>(
    transport: &mut T,
    config: &ContactConfig,
    form: &ContactForm,
) -> Result<SubmissionOutcome, ContactError> {
    let request = ContactRequest::build(config, form)?;
    debug!("contact: posting to {}", request.url);
    let outcome = match transport.post_json(&request.url, &request.body) {
        Ok(status) if (200..300).contains(&status) => SubmissionOutcome::Sent {
            title: config.success_title.clone(),
            message: config.success_message.clone(),
        },
        Ok(status) => {
            warn!("contact: endpoint answered {status}");
            SubmissionOutcome::failed(config)
        }
        Err(err) => {
            warn!("contact: {err}");
            SubmissionOutcome::failed(config)
        }
    };
    Ok(outcome)
}

/// Blocking `reqwest` transport for native hosts.
#[cfg(feature = "http")]
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    pub fn new(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
impl FormTransport for HttpTransport {
    fn post_json(&mut self, url: &str, body: &Value) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}
