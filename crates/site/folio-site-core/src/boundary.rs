//! Report shown by the page's error boundary.

use std::error::Error;

use serde::Serialize;

pub const DEFAULT_MESSAGE: &str = "An unexpected error occurred";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub title: &'static str,
    pub message: String,
    /// Cause chain, when the failure came from a typed error.
    pub detail: Option<String>,
    pub reload_label: &'static str,
}

impl ErrorReport {
    fn with(message: String, detail: Option<String>) -> Self {
        let message = if message.trim().is_empty() {
            DEFAULT_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            title: "Error Detected",
            message,
            detail,
            reload_label: "Reload",
        }
    }

    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let mut lines = vec![err.to_string()];
        let mut source = err.source();
        while let Some(cause) = source {
            lines.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        Self::with(err.to_string(), Some(lines.join("\n")))
    }

    /// A route-level failure (status plus optional status text).
    pub fn from_status(status: u16, status_text: &str) -> Self {
        let message = if status_text.is_empty() {
            String::new()
        } else {
            format!("{status} {status_text}")
        };
        Self::with(message, None)
    }

    /// Text placed on the clipboard by the copy button.
    pub fn copy_text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("Error: {}\n\nStack Trace:\n{detail}", self.message),
            None => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("render failed")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("missing section data")]
    struct Inner;

    #[test]
    fn typed_error_carries_cause_chain() {
        let report = ErrorReport::from_error(&Outer(Inner));
        assert_eq!(report.message, "render failed");
        assert_eq!(
            report.copy_text(),
            "Error: render failed\n\nStack Trace:\nrender failed\ncaused by: missing section data"
        );
    }

    #[test]
    fn status_without_text_uses_default() {
        assert_eq!(ErrorReport::from_status(500, "").message, DEFAULT_MESSAGE);
        let report = ErrorReport::from_status(404, "Not Found");
        assert_eq!(report.message, "404 Not Found");
        assert_eq!(report.copy_text(), "404 Not Found");
    }
}
