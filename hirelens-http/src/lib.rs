//! Minimal HTTP client with safe logging, retries, and flexible auth.
//!
//! - Request options: headers, `Auth`, query params, timeout, retries
//! - Redacts sensitive query params and never logs secret values
//! - Retries 429/5xx with exponential backoff and `Retry-After` support
//! - Typed JSON decoding plus a plain-text GET for page acquisition
//!
//! Example (no_run):
//! ```rust
//! # async fn demo() -> Result<(), hirelens_http::HttpError> {
//! let client = hirelens_http::HttpClient::new("https://api.example.com")?;
//! let got: serde_json::Value = client
//!     .get_json("v1/items", hirelens_http::RequestOpts::default())
//!     .await?;
//! # Ok(()) }
//! ```
//!
//! Security: `Auth::Bearer` values are sanitized before use, and logs only
//! ever include the auth kind (bearer/header/query/none), not the secret.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

// ==============================
// Errors
// ==============================

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("request build failed: {0}")]
    Build(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}, body_snippet: {1}")]
    Decode(String, String),
    #[error("server returned error {status}: {message}")]
    Api { status: StatusCode, message: String },
}

// ==============================
// Auth & Request Options
// ==============================

/// Authentication strategies supported by the HTTP client helpers.
///
/// ```
/// use hirelens_http::Auth;
///
/// let bearer = Auth::Bearer("token");
/// match bearer {
///     Auth::Bearer(value) => assert_eq!(value, "token"),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug)]
pub enum Auth<'a> {
    /// Authorization: Bearer <token>
    Bearer(&'a str),
    /// Custom header (e.g., Azure OpenAI: api-key)
    Header {
        name: HeaderName,
        value: HeaderValue,
    },
    /// Auth via query param (e.g., SerpAPI: api_key)
    Query { name: &'a str, value: Cow<'a, str> },
    None,
}

/// Per-request tuning knobs for the HTTP client.
///
/// ```
/// use hirelens_http::{Auth, RequestOpts};
/// use std::borrow::Cow;
/// use std::time::Duration;
///
/// let opts = RequestOpts {
///     timeout: Some(Duration::from_secs(30)),
///     retries: Some(1),
///     auth: Some(Auth::Query {
///         name: "api_key",
///         value: Cow::Borrowed("demo"),
///     }),
///     ..Default::default()
/// };
///
/// assert_eq!(opts.timeout.unwrap().as_secs(), 30);
/// assert!(opts.allow_absolute == false);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOpts<'a> {
    pub timeout: Option<Duration>,
    pub retries: Option<usize>,
    pub auth: Option<Auth<'a>>,
    pub headers: Option<HeaderMap>,
    pub query: Option<Vec<(&'a str, Cow<'a, str>)>>, // e.g. [("q", "term".into())]
    /// If true and `path` is an absolute URL, use it as-is (ignore base).
    pub allow_absolute: bool,
}

// ==============================
// Client
// ==============================

#[derive(Clone)]
pub struct HttpClient {
    base: Url,
    inner: Client,
    pub default_timeout: Duration,
    pub max_retries: usize,
}

impl HttpClient {
    /// Construct a client anchored to a base URL.
    ///
    /// ```no_run
    /// use hirelens_http::{HttpClient, HttpError};
    /// use std::time::Duration;
    ///
    /// let client = HttpClient::new("https://api.example.com")?;
    /// assert_eq!(client.default_timeout, Duration::from_secs(15));
    /// assert_eq!(client.max_retries, 2);
    /// # Ok::<(), HttpError>(())
    /// ```
    pub fn new(base: &str) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|e| HttpError::Url(e.to_string()))?;
        let inner = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| HttpError::Build(e.to_string()))?;
        Ok(Self {
            base,
            inner,
            default_timeout: Duration::from_secs(15),
            max_retries: 2,
        })
    }

    /// Override the default timeout returned by [`HttpClient::new`].
    pub fn with_timeout(mut self, dur: Duration) -> Self {
        self.default_timeout = dur;
        self
    }

    /// Override the default retry budget returned by [`HttpClient::new`].
    pub fn with_retries(mut self, n: usize) -> Self {
        self.max_retries = n;
        self
    }

    /// GET JSON with per-request options (headers/query/auth/timeout/retries).
    pub async fn get_json<T>(&self, path: &str, opts: RequestOpts<'_>) -> Result<T, HttpError>
    where
        T: DeserializeOwned,
    {
        let bytes = self.send::<()>(Method::GET, path, None, opts).await?;
        let snippet = snip_body(&bytes);
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::warn!(
                serde_line = %e.line(),
                serde_col = %e.column(),
                serde_err = %e.to_string(),
                body_snippet = %snippet,
                "http.response.decode_error"
            );
            HttpError::Decode(e.to_string(), snippet)
        })
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        opts: RequestOpts<'_>,
    ) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = self.send(Method::POST, path, Some(body), opts).await?;
        let snippet = snip_body(&bytes);
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            tracing::warn!(
                serde_line = %e.line(),
                serde_col = %e.column(),
                serde_err = %e.to_string(),
                body_snippet = %snippet,
                "http.response.decode_error"
            );
            HttpError::Decode(e.to_string(), snippet)
        })
    }

    /// GET a page body as text (lossy UTF-8). Used for HTML acquisition
    /// where JSON decoding makes no sense.
    pub async fn get_text(&self, path: &str, opts: RequestOpts<'_>) -> Result<String, HttpError> {
        let bytes = self.send::<()>(Method::GET, path, None, opts).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    // ==============================
    // Core request loop
    // ==============================

    /// Build, send, and retry a request, returning the raw success body.
    ///
    /// 429 and 5xx responses are retried with exponential backoff, honoring
    /// `Retry-After` when present. Network failures on send or body read
    /// consume the same retry budget.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        mut opts: RequestOpts<'_>,
    ) -> Result<Vec<u8>, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve_url(path, opts.allow_absolute)?;
        let max_retries = opts.retries.unwrap_or(self.max_retries);
        let timeout = opts.timeout.unwrap_or(self.default_timeout);

        // Query-param auth merges into the query set once, up front, so the
        // same params survive every retry.
        if let Some(Auth::Query { name, value }) = &opts.auth {
            let mut q = opts.query.take().unwrap_or_default();
            q.push((*name, value.clone()));
            opts.query = Some(q);
        }

        let auth_kind = match &opts.auth {
            Some(Auth::Bearer(_)) => "bearer",
            Some(Auth::Header { .. }) => "header",
            Some(Auth::Query { .. }) => "query",
            Some(Auth::None) | None => "none",
        };

        let mut attempt = 0usize;
        loop {
            let mut rb = self.inner.request(method.clone(), url.clone());
            rb = rb.timeout(timeout);

            if let Some(q) = &opts.query {
                let pairs: Vec<(&str, &str)> = q.iter().map(|(k, v)| (*k, v.as_ref())).collect();
                rb = rb.query(&pairs);
            }
            if let Some(b) = body {
                rb = rb.json(b);
            }
            if let Some(hdrs) = &opts.headers {
                rb = rb.headers(hdrs.clone());
            }
            match &opts.auth {
                Some(Auth::Bearer(tok)) => {
                    let tok = sanitize_api_key(tok)?;
                    rb = rb.bearer_auth(tok);
                }
                Some(Auth::Header { name, value }) => {
                    rb = rb.header(name, value);
                }
                // Already folded into the query set above.
                Some(Auth::Query { .. }) | Some(Auth::None) | None => {}
            }

            tracing::debug!(
                attempt = attempt + 1,
                max_retries,
                method = %method,
                host_path = %format!("{}{}", url.domain().unwrap_or("-"), url.path()),
                query = ?redact_query_params(opts.query.as_deref()),
                timeout_ms = timeout.as_millis() as u64,
                auth_kind,
                has_body = body.is_some(),
                "http.request.start"
            );

            let t0 = std::time::Instant::now();
            let sent = rb.send().await;
            let (status, headers, bytes) = match read_response(sent).await {
                Ok(parts) => parts,
                Err(message) => {
                    if attempt < max_retries {
                        attempt += 1;
                        let delay = backoff_delay(attempt, false, None);
                        tracing::warn!(
                            attempt,
                            max_retries,
                            backoff_ms = delay.as_millis() as u64,
                            message = %message,
                            "http.retrying.network"
                        );
                        sleep(delay).await;
                        continue;
                    }
                    tracing::warn!(attempt, max_retries, message = %message, "http.network_error");
                    return Err(HttpError::Network(message));
                }
            };

            let snippet = snip_body(&bytes);
            tracing::debug!(
                %status,
                duration_ms = t0.elapsed().as_millis() as u64,
                body_len = bytes.len(),
                "http.response"
            );
            tracing::trace!(body_snippet = %snippet, "http.response.body_snippet");

            if status.is_success() {
                return Ok(bytes);
            }

            let message = extract_error_message(&bytes);
            let retryable = status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error();
            if retryable && attempt < max_retries {
                attempt += 1;
                let delay = backoff_delay(
                    attempt,
                    status == StatusCode::TOO_MANY_REQUESTS,
                    retry_after_delay_secs(&headers),
                );
                tracing::warn!(
                    %status,
                    attempt,
                    max_retries,
                    backoff_ms = delay.as_millis() as u64,
                    message = %message,
                    body_snippet = %snippet,
                    "http.retrying"
                );
                sleep(delay).await;
                continue;
            }

            tracing::warn!(
                %status,
                message = %message,
                body_snippet = %snippet,
                "http.error"
            );
            return Err(HttpError::Api { status, message });
        }
    }

    fn resolve_url(&self, path: &str, allow_absolute: bool) -> Result<Url, HttpError> {
        if allow_absolute {
            if let Ok(abs) = Url::parse(path) {
                return Ok(abs);
            }
        }
        self.base
            .join(path)
            .map_err(|e| HttpError::Url(e.to_string()))
    }
}

// ==============================
// Helpers
// ==============================

async fn read_response(
    sent: Result<reqwest::Response, reqwest::Error>,
) -> Result<(StatusCode, HeaderMap, Vec<u8>), String> {
    let resp = sent.map_err(|e| e.to_string())?;
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp.bytes().await.map_err(|e| e.to_string())?;
    Ok((status, headers, bytes.to_vec()))
}

fn backoff_delay(attempt: usize, is_429: bool, retry_after_secs: Option<u64>) -> Duration {
    if let Some(secs) = retry_after_secs {
        return Duration::from_secs(secs);
    }
    let exp = Duration::from_millis(200u64.saturating_mul(1 << (attempt - 1)));
    if is_429 {
        // default floor for 429 when no Retry-After is present
        exp.max(Duration::from_millis(1100))
    } else {
        exp
    }
}

fn redact_query_params(query: Option<&[(&str, Cow<'_, str>)]>) -> Vec<(String, String)> {
    query
        .map(|q| {
            q.iter()
                .map(|(k, v)| {
                    let is_secret = matches!(
                        k.to_ascii_lowercase().as_str(),
                        "access_token"
                            | "authorization"
                            | "auth"
                            | "key"
                            | "api_key"
                            | "token"
                            | "secret"
                            | "client_secret"
                            | "bearer"
                    );
                    (
                        (*k).to_string(),
                        if is_secret {
                            "<redacted>".to_string()
                        } else {
                            v.as_ref().to_string()
                        },
                    )
                })
                .collect()
        })
        .unwrap_or_default()
}

fn extract_error_message(body: &[u8]) -> String {
    // OpenAI style: {"error":{"message":"..."}}
    #[derive(Deserialize)]
    struct OpenAiEnv {
        error: OpenAiDetail,
    }
    #[derive(Deserialize)]
    struct OpenAiDetail {
        message: String,
    }

    // Generic: {"message":"..."} or {"detail":"..."} or {"error":"..."}
    #[derive(Deserialize)]
    struct Msg {
        #[serde(default)]
        message: String,
        #[serde(default)]
        detail: String,
        #[serde(default)]
        error: String,
    }

    if let Ok(env) = serde_json::from_slice::<OpenAiEnv>(body) {
        return env.error.message;
    }
    if let Ok(m) = serde_json::from_slice::<Msg>(body) {
        if !m.message.is_empty() {
            return m.message;
        }
        if !m.detail.is_empty() {
            return m.detail;
        }
        if !m.error.is_empty() {
            return m.error;
        }
    }
    snip_body(body)
}

fn retry_after_delay_secs(h: &HeaderMap) -> Option<u64> {
    h.get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())?
        .parse()
        .ok()
}

fn snip_body(body: &[u8]) -> String {
    let mut snip = String::from_utf8_lossy(body).to_string();
    if snip.len() > 500 {
        snip.truncate(500);
        snip.push_str("...");
    }
    snip
}

fn sanitize_api_key(raw: &str) -> Result<String, HttpError> {
    // Trim outer spaces/quotes, then strip all ASCII whitespace; keys pasted
    // from dashboards routinely pick up both.
    let mut s = raw
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string();
    s.retain(|ch| !ch.is_ascii_whitespace());

    if !s.is_ascii() {
        return Err(HttpError::Build("API key contains non-ASCII bytes".into()));
    }
    if s.bytes().any(|b| b < 0x20 || b == 0x7F) {
        return Err(HttpError::Build(
            "API key contains control characters".into(),
        ));
    }

    // Validate header value upfront for clear errors
    HeaderValue::from_str(&format!("Bearer {}", s))
        .map_err(|e| HttpError::Build(format!("invalid Authorization header: {e}")))?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_quotes_and_whitespace() {
        let key = sanitize_api_key("  \"sk-abc def\n\"  ").unwrap();
        assert_eq!(key, "sk-abcdef");
    }

    #[test]
    fn sanitize_rejects_control_bytes() {
        assert!(sanitize_api_key("sk-\u{7f}abc").is_err());
    }

    #[test]
    fn redaction_hides_api_key_values() {
        let q: Vec<(&str, Cow<'_, str>)> =
            vec![("q", "acme".into()), ("api_key", "super-secret".into())];
        let redacted = redact_query_params(Some(&q));
        assert_eq!(redacted[0], ("q".to_string(), "acme".to_string()));
        assert_eq!(redacted[1].1, "<redacted>");
    }

    #[test]
    fn backoff_grows_and_floors_429() {
        assert_eq!(backoff_delay(1, false, None), Duration::from_millis(200));
        assert_eq!(backoff_delay(2, false, None), Duration::from_millis(400));
        assert_eq!(backoff_delay(1, true, None), Duration::from_millis(1100));
        assert_eq!(backoff_delay(3, true, Some(7)), Duration::from_secs(7));
    }

    #[test]
    fn error_message_prefers_openai_envelope() {
        let body = br#"{"error":{"message":"deployment not found"}}"#;
        assert_eq!(extract_error_message(body), "deployment not found");

        let body = br#"{"detail":"missing query"}"#;
        assert_eq!(extract_error_message(body), "missing query");

        let body = b"plain text failure";
        assert_eq!(extract_error_message(body), "plain text failure");
    }
}
