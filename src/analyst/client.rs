//! Resilient client for the text-generation endpoint
//!
//! Bounded retry strategy against a shared rate limit:
//! - Max attempts: 5 (default)
//! - 429: exponential backoff `base * 2^attempt + jitter`, jitter uniform
//!   in `[0, base)`, so concurrent callers never retry in lockstep
//! - Other non-2xx and transport errors: retried immediately
//! - Exhausted budget: a fixed renderable error string, never an `Err`
//!
//! The caller boundary is infallible by contract — whatever happens on the
//! wire, [`AnalystClient::generate`] returns a string the UI can display.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::errors::Result;

/// Default attempt budget per call
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Base backoff delay (1 second)
const BASE_DELAY_MS: u64 = 1000;

/// Returned when the attempt budget is exhausted
pub const CONNECT_FAILURE_MESSAGE: &str =
    "Error: Could not connect to Supply Chain Analyst. Please check your network.";

/// Returned on a 200 whose envelope carries no generated text
pub const NO_ANALYSIS_MESSAGE: &str = "No analysis generated.";

/// Fall-through guard; only reachable with a zero attempt budget
const EXHAUSTED_MESSAGE: &str = "Error: Unknown failure after retries.";

/// One text fragment in the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Ordered list of parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Request body for the `generateContent`-style endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    pub system_instruction: Content,
}

impl GenerateRequest {
    pub fn new(system_instruction: &str, user_query: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: user_query.to_string(),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
        }
    }
}

/// Status and body of one endpoint response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam: one HTTP attempt against the endpoint
///
/// `Err` means the request never produced a response (connect failure,
/// timeout); a non-2xx status comes back as `Ok` with that status.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn send(&self, request: &GenerateRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport with a per-attempt deadline
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Build a transport for `endpoint` with `api_key` appended as the
    /// query-string key, timing out each attempt after `timeout`
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}?key={}", endpoint, api_key),
        })
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn send(&self, request: &GenerateRequest) -> Result<RawResponse> {
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status().as_u16();
        // A non-JSON body is fine; text extraction degrades to the placeholder.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Ok(RawResponse { status, body })
    }
}

/// Stateless retrying caller; safe to invoke concurrently, each call runs
/// on its own attempt budget
pub struct AnalystClient<T: GenerateTransport> {
    transport: T,
    max_attempts: u32,
    base_delay: Duration,
}

impl<T: GenerateTransport> AnalystClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_millis(BASE_DELAY_MS),
        }
    }

    /// Custom retry budget (tests shrink the base delay)
    pub fn with_retry(transport: T, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            transport,
            max_attempts,
            base_delay,
        }
    }

    /// Ask the analyst endpoint for a completion
    ///
    /// Always returns a renderable string: generated text on success, the
    /// placeholder on a malformed 200, a fixed error message once the
    /// attempt budget is spent.
    pub async fn generate(&self, system_instruction: &str, user_query: &str) -> String {
        let request = GenerateRequest::new(system_instruction, user_query);

        for attempt in 0..self.max_attempts {
            let final_attempt = attempt + 1 == self.max_attempts;

            match self.transport.send(&request).await {
                Ok(response) if response.status == 429 && !final_attempt => {
                    let delay = self.backoff_delay(attempt);
                    debug!(attempt, delay_ms = delay.as_millis() as u64, "rate limited, backing off");
                    sleep(delay).await;
                }
                Ok(response) if response.is_success() => {
                    return extract_text(&response.body);
                }
                Ok(response) => {
                    if final_attempt {
                        warn!(status = response.status, "analyst request failed after all retries");
                        return CONNECT_FAILURE_MESSAGE.to_string();
                    }
                    debug!(attempt, status = response.status, "analyst request failed, retrying");
                }
                Err(e) => {
                    if final_attempt {
                        warn!(error = %e, "analyst transport failed after all retries");
                        return CONNECT_FAILURE_MESSAGE.to_string();
                    }
                    debug!(attempt, error = %e, "analyst transport error, retrying");
                }
            }
        }

        EXHAUSTED_MESSAGE.to_string()
    }

    /// Backoff for a zero-based attempt index: `base * 2^attempt + jitter`
    /// with jitter uniform in `[0, base)`
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let base = self.base_delay.as_millis() as u64;
        let exponential = base.saturating_mul(2u64.saturating_pow(attempt));
        let jitter = (rand::random::<f64>() * base as f64) as u64;
        Duration::from_millis(exponential.saturating_add(jitter))
    }
}

/// Pull the first generated fragment out of the response envelope
///
/// Missing or empty text is a degenerate success, not an error.
fn extract_text(body: &Value) -> String {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NO_ANALYSIS_MESSAGE.to_string())
}
