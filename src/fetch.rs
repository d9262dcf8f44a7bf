//! HTTP fetching with bounded retries and exponential backoff.
//!
//! The transport sits behind the [`HttpGet`] trait so tests can script
//! responses without a network. [`RetryFetch`] wraps any transport with the
//! retry policy: up to 3 strictly sequential attempts, backoff of `2^i`
//! seconds after failed attempt `i`, a 404 short-circuiting immediately as
//! permanent.
//!
//! # Outcome semantics
//!
//! - 2xx: [`FetchOutcome::Success`] with the response body
//! - 404: [`FetchOutcome::NotFound`], no retry
//! - any other status or transport error: retried, then
//!   [`FetchOutcome::TransientFailure`] carrying the last observed error

use std::error::Error;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{instrument, warn};

/// A raw HTTP response: status code and body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal GET transport. Production uses [`ReqwestGetter`]; tests inject
/// scripted fakes.
pub trait HttpGet {
    /// Issue one GET request. `Err` means a transport-level failure
    /// (connection refused, timeout); a non-2xx status is an `Ok` response.
    async fn get(&self, url: &str) -> Result<HttpResponse, Box<dyn Error>>;
}

/// Terminal result of a full attempt sequence for one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A 2xx response; carries the body.
    Success { body: String },
    /// A 404: the article is gone, never retried.
    NotFound,
    /// All attempts failed with retryable errors; carries the last one.
    TransientFailure { last_error: String },
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestGetter {
    client: reqwest::Client,
}

impl ReqwestGetter {
    /// Build a client with the identifying user agent and per-request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpGet for ReqwestGetter {
    async fn get(&self, url: &str) -> Result<HttpResponse, Box<dyn Error>> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// Retry decorator applying the backoff policy to any [`HttpGet`].
#[derive(Debug, Clone)]
pub struct RetryFetch<T> {
    inner: T,
    max_attempts: usize,
    base_delay: Duration,
}

impl<T> RetryFetch<T>
where
    T: HttpGet,
{
    /// Wrap a transport with the standard policy: 3 attempts, 1 s base delay.
    pub fn new(inner: T) -> Self {
        Self::with_policy(inner, 3, Duration::from_secs(1))
    }

    /// Wrap a transport with an explicit attempt budget and base delay.
    pub fn with_policy(inner: T, max_attempts: usize, base_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts,
            base_delay,
        }
    }

    /// Fetch a URL, retrying transient failures with exponential backoff.
    ///
    /// Never returns an error: every failure mode folds into a
    /// [`FetchOutcome`] so the caller decides what is fatal.
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let mut last_error = String::from("no attempts made");

        for attempt in 0..self.max_attempts {
            match self.inner.get(url).await {
                Ok(resp) if (200..300).contains(&resp.status) => {
                    return FetchOutcome::Success { body: resp.body };
                }
                Ok(resp) if resp.status == 404 => {
                    return FetchOutcome::NotFound;
                }
                Ok(resp) => {
                    last_error = format!("HTTP {}", resp.status);
                    warn!(url, attempt, status = resp.status, "Unexpected status");
                }
                Err(e) => {
                    last_error = e.to_string();
                    warn!(url, attempt, error = %last_error, "Request failed");
                }
            }

            if attempt + 1 < self.max_attempts {
                // backoff calc: 1s, 2s, 4s, ...
                let delay = self.base_delay.saturating_mul(1 << attempt);
                sleep(delay).await;
            }
        }

        FetchOutcome::TransientFailure { last_error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tokio::time::Instant;

    /// Scripted transport: pops one canned response per call.
    struct ScriptedHttp {
        script: Mutex<Vec<Result<HttpResponse, String>>>,
        calls: Mutex<usize>,
    }

    impl ScriptedHttp {
        fn new(mut responses: Vec<Result<HttpResponse, String>>) -> Self {
            responses.reverse();
            Self {
                script: Mutex::new(responses),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl HttpGet for ScriptedHttp {
        async fn get(&self, _url: &str) -> Result<HttpResponse, Box<dyn Error>> {
            *self.calls.lock().unwrap() += 1;
            match self.script.lock().unwrap().pop() {
                Some(Ok(resp)) => Ok(resp),
                Some(Err(e)) => Err(e.into()),
                None => panic!("transport called more times than scripted"),
            }
        }
    }

    fn ok(body: &str) -> Result<HttpResponse, String> {
        Ok(HttpResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn status(code: u16) -> Result<HttpResponse, String> {
        Ok(HttpResponse {
            status: code,
            body: String::new(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_first_attempt_no_backoff() {
        let transport = ScriptedHttp::new(vec![ok("hello")]);
        let fetcher = RetryFetch::new(transport);
        let t0 = Instant::now();
        let outcome = fetcher.fetch("https://pub.example/news/1").await;
        assert_eq!(
            outcome,
            FetchOutcome::Success {
                body: "hello".to_string()
            }
        );
        assert_eq!(t0.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_transients_then_success_waits_three_seconds() {
        let transport = ScriptedHttp::new(vec![
            Err("connection reset".to_string()),
            status(503),
            ok("finally"),
        ]);
        let fetcher = RetryFetch::new(transport);
        let t0 = Instant::now();
        let outcome = fetcher.fetch("https://pub.example/news/2").await;
        assert_eq!(
            outcome,
            FetchOutcome::Success {
                body: "finally".to_string()
            }
        );
        // 1s after attempt 0, 2s after attempt 1
        assert!(t0.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_404_short_circuits_without_retry() {
        let transport = ScriptedHttp::new(vec![status(404)]);
        let fetcher = RetryFetch::new(transport);
        let t0 = Instant::now();
        let outcome = fetcher.fetch("https://pub.example/news/3").await;
        assert_eq!(outcome, FetchOutcome::NotFound);
        assert_eq!(fetcher.inner.calls(), 1);
        assert_eq!(t0.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_attempts_carry_last_error() {
        let transport = ScriptedHttp::new(vec![status(500), status(502), Err("timed out".into())]);
        let fetcher = RetryFetch::new(transport);
        let outcome = fetcher.fetch("https://pub.example/news/4").await;
        assert_eq!(
            outcome,
            FetchOutcome::TransientFailure {
                last_error: "timed out".to_string()
            }
        );
        assert_eq!(fetcher.inner.calls(), 3);
    }
}
