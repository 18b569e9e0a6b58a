//! reqwest wrapper for the recognition endpoint.

use std::time::Duration;

use serde::Deserialize;

/// Default timeout for recognition calls in seconds. Vision-language models
/// can take most of a minute on a large receipt photo.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// What the recognition backend produced for an image.
///
/// Two backend shapes are supported: one returns pre-extracted codes
/// (`{"isbns": [...]}`), the other returns freeform recognized text
/// (`{"text": "..."}` or Ollama-style `{"response": "..."}`) that the caller
/// must pattern-match itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    /// The backend already extracted ISBN codes.
    Codes(Vec<String>),
    /// Freeform recognized text, to be pattern-matched by the caller.
    Text(String),
}

/// Errors from the recognition backend boundary.
///
/// Each failure mode is distinct so the API layer can report slow-backend,
/// down-backend, and backend-application errors separately; none of them is
/// ever collapsed into an empty result.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    /// The backend could not be reached (connection refused, DNS, TLS).
    #[error("Recognition backend unreachable: {0}")]
    Unreachable(reqwest::Error),

    /// The backend did not respond within the configured timeout.
    #[error("Recognition request timed out after {0} seconds")]
    Timeout(u64),

    /// The backend was reachable but returned a non-2xx status. `detail`
    /// carries the upstream's own error text verbatim.
    #[error("Recognition backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },

    /// The backend returned a 2xx response this client could not interpret.
    #[error("Invalid response from recognition backend: {0}")]
    InvalidResponse(String),
}

/// Wire shapes accepted from the backend.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BackendResponse {
    Codes {
        isbns: Vec<String>,
    },
    Text {
        #[serde(alias = "response")]
        text: String,
    },
}

/// HTTP client for a single recognition backend instance.
pub struct OcrClient {
    client: reqwest::Client,
    endpoint_url: String,
    timeout_secs: u64,
}

impl OcrClient {
    /// Create a client for the given recognition endpoint.
    ///
    /// * `endpoint_url` - Full URL of the extraction endpoint, e.g.
    ///   `http://host:8001/extract_isbns`.
    /// * `timeout_secs` - Per-request timeout; the request is abandoned (and
    ///   reported as [`OcrError::Timeout`]) once it elapses.
    pub fn new(endpoint_url: String, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint_url,
            timeout_secs,
        }
    }

    /// Send an image to the backend and interpret its response.
    ///
    /// The image is posted as a multipart `file` field. The bytes are moved
    /// into the request body and dropped with it on every outcome, so no
    /// staged copy outlives the call.
    pub async fn recognize(
        &self,
        filename: &str,
        content_type: &str,
        image: Vec<u8>,
    ) -> Result<Recognition, OcrError> {
        let part = reqwest::multipart::Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| OcrError::InvalidResponse(format!("Invalid content type: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::debug!(endpoint = %self.endpoint_url, filename, "Sending image to recognition backend");

        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .timeout(Duration::from_secs(self.timeout_secs))
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Backend {
                status: status.as_u16(),
                detail: extract_error_detail(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OcrError::InvalidResponse(e.to_string()))?;

        parse_response(&body)
    }

    fn classify_send_error(&self, err: reqwest::Error) -> OcrError {
        if err.is_timeout() {
            OcrError::Timeout(self.timeout_secs)
        } else {
            OcrError::Unreachable(err)
        }
    }
}

/// Interpret a 2xx response body as one of the two supported shapes.
fn parse_response(body: &str) -> Result<Recognition, OcrError> {
    match serde_json::from_str::<BackendResponse>(body) {
        Ok(BackendResponse::Codes { isbns }) => Ok(Recognition::Codes(isbns)),
        Ok(BackendResponse::Text { text }) => Ok(Recognition::Text(text)),
        Err(_) => Err(OcrError::InvalidResponse(format!(
            "Unrecognized response body: {}",
            truncate(body, 200)
        ))),
    }
}

/// Pull the upstream's own error message out of an error response body.
///
/// FastAPI-style backends use `{"detail": "..."}`, Flask-style ones
/// `{"error": "..."}`; anything else is surfaced as raw text.
fn extract_error_detail(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "error"] {
            if let Some(detail) = json.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }
    if body.is_empty() {
        "Unknown error from recognition backend".to_string()
    } else {
        truncate(body, 500)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
