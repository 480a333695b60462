use std::fmt;

use anyhow::{Error, anyhow};
use serde_json::Value;
use validator::ValidationErrors;

/// Shown when neither the server nor the failure itself offers a usable message.
pub const FALLBACK_MESSAGE: &str = "حدث خطأ غير متوقع، يرجى المحاولة مرة أخرى";

/// Shown when the backend could not be reached at all.
pub const NETWORK_MESSAGE: &str = "تعذر الاتصال بالخادم، يرجى التحقق من الاتصال";

/// Broad classification of a failure, used for logging and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection refused, DNS failure, timeout.
    Network,
    /// The server answered with a non-success status.
    Http,
    /// The response body did not match the expected shape.
    Decode,
    /// Local form validation rejected the input.
    Validation,
    /// Anything else (I/O on local files, prompt failures).
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    /// Message supplied by the server in the error body, if any.
    pub server_message: Option<String>,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            status: None,
            server_message: None,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn network<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Network, err)
    }

    pub fn decode<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Decode, err)
    }

    /// Builds an error from a non-success response and its (possibly empty) body.
    pub fn http(status: u16, body: &Value) -> Self {
        let server_message = extract_server_message(body);
        let detail = server_message
            .clone()
            .unwrap_or_else(|| "no message in response body".to_string());

        Self {
            kind: ErrorKind::Http,
            status: Some(status),
            server_message,
            error: anyhow!("server responded with status {}: {}", status, detail),
        }
    }

    pub fn validation(errors: &ValidationErrors) -> Self {
        let message = format_errors(errors);
        Self {
            kind: ErrorKind::Validation,
            status: None,
            server_message: Some(message.clone()),
            error: anyhow!("validation failed: {}", message),
        }
    }

    /// Prepends context to the underlying chain without touching the user message.
    pub fn context(self, context: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self {
            error: self.error.context(context),
            ..self
        }
    }

    /// Replaces the user-facing message, keeping status, kind and chain.
    pub fn with_user_message(mut self, message: impl Into<String>) -> Self {
        self.server_message = Some(message.into());
        self
    }

    /// The string a screen shows for this failure.
    ///
    /// Prefers the server-supplied message, then a network hint, then the
    /// generic fallback.
    pub fn user_message(&self) -> String {
        if let Some(message) = &self.server_message {
            return message.clone();
        }

        match self.kind {
            ErrorKind::Network => NETWORK_MESSAGE.to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Pulls a human message out of an error body.
///
/// Looks at `message`, then `error` (string or `{message}`), then the first
/// entry of `errors`, which may be a field map or a plain list.
pub fn extract_server_message(body: &Value) -> Option<String> {
    fn non_empty(value: Option<&Value>) -> Option<String> {
        value
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn first_message(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Array(items) => items.iter().find_map(first_message),
            Value::Object(map) => map.values().find_map(first_message),
            _ => None,
        }
    }

    let obj = body.as_object()?;

    non_empty(obj.get("message"))
        .or_else(|| non_empty(obj.get("error")))
        .or_else(|| obj.get("error").and_then(|e| non_empty(e.get("message"))))
        .or_else(|| obj.get("errors").and_then(first_message))
}

/// Joins every field error into one line, ordered by field name.
///
/// Custom rule messages are written to name their field (`اسم المدرس مطلوب`),
/// so they are used as-is; rules without one fall back to `<field> غير صالح`.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} غير صالح", field))
            })
        })
        .collect::<Vec<_>>()
        .join("، ")
}
