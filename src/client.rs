use std::fmt;

use reqwest::Method;

use crate::{
    join_url, AttemptContext, AttemptFailure, AttemptLogger, HttpResponse, Payload, PostOutcome,
    ReqwestTransport, RetryOptions, Sleeper, TokioSleeper, TracingLogger, Transport,
};

#[derive(Clone)]
/// JSON `POST` client that retries failed attempts on a fixed delay schedule.
pub struct RetryingPoster<T = ReqwestTransport, L = TracingLogger, S = TokioSleeper> {
    base_url: String,
    options: RetryOptions,
    transport: T,
    logger: L,
    sleeper: S,
}

impl<T, L, S> fmt::Debug for RetryingPoster<T, L, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryingPoster")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl RetryingPoster {
    /// Creates a poster using `reqwest`, `tracing` and tokio timers with
    /// default [`RetryOptions`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            options: RetryOptions::default(),
            transport: ReqwestTransport::new(),
            logger: TracingLogger,
            sleeper: TokioSleeper,
        }
    }
}

impl<T, L, S> RetryingPoster<T, L, S> {
    /// Applies the attempt budget and delay schedule.
    pub fn with_options(mut self, opts: RetryOptions) -> Self {
        self.options = opts;
        self
    }

    /// Replaces the transport that performs each exchange.
    pub fn with_transport<T2: Transport>(self, transport: T2) -> RetryingPoster<T2, L, S> {
        RetryingPoster {
            base_url: self.base_url,
            options: self.options,
            transport,
            logger: self.logger,
            sleeper: self.sleeper,
        }
    }

    /// Replaces the sink for failed-attempt entries.
    pub fn with_logger<L2: AttemptLogger>(self, logger: L2) -> RetryingPoster<T, L2, S> {
        RetryingPoster {
            base_url: self.base_url,
            options: self.options,
            transport: self.transport,
            logger,
            sleeper: self.sleeper,
        }
    }

    /// Replaces the wait used between attempts.
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> RetryingPoster<T, L, S2> {
        RetryingPoster {
            base_url: self.base_url,
            options: self.options,
            transport: self.transport,
            logger: self.logger,
            sleeper,
        }
    }

    /// Base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attempt budget and delay schedule in use.
    pub fn options(&self) -> &RetryOptions {
        &self.options
    }

    /// Transport used for each attempt.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Logger receiving failed-attempt entries.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Sleeper used between attempts.
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Full request URL for `endpoint`.
    pub fn url_for(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }
}

impl<T, L, S> RetryingPoster<T, L, S>
where
    T: Transport,
    L: AttemptLogger,
    S: Sleeper,
{
    /// Posts `payload` to `endpoint`, returning the first 2xx response.
    ///
    /// Returns `None` when a client error aborted the call or every attempt
    /// failed. Use [`RetryingPoster::post_with_outcome`] to learn which.
    pub async fn post(&self, endpoint: &str, payload: &Payload) -> Option<HttpResponse> {
        self.post_with_outcome(endpoint, payload)
            .await
            .into_response()
    }

    /// Posts `payload` to `endpoint` and reports how the call ended.
    ///
    /// Every failed attempt is logged: a non-2xx response as a warning, a
    /// transport error as an error. A client-class error ends the call
    /// without further attempts; other failures wait
    /// [`RetryOptions::delay_for`] and try again until the budget is spent.
    pub async fn post_with_outcome(&self, endpoint: &str, payload: &Payload) -> PostOutcome {
        let url = self.url_for(endpoint);
        // A string-keyed JSON map always serializes.
        let encoded = serde_json::to_string(payload).unwrap_or_default();
        let attempts = self.options.attempts();

        let mut attempt = 0usize;
        loop {
            let context = AttemptContext {
                attempt,
                endpoint: &url,
                payload: &encoded,
            };

            let failure = match self.transport.request(Method::POST, &url, payload).await {
                Ok(response) if response.is_success() => return PostOutcome::Success(response),
                Ok(response) => {
                    let status = response.status_code();
                    self.logger.warning(
                        &context.message(&format!("Failed with status code {status}")),
                        &context,
                    );
                    AttemptFailure::Status {
                        status,
                        body: response.body,
                    }
                }
                Err(error) if error.is_client() => {
                    self.logger
                        .error(&context.message(&format!("Client error: {error}")), &context);
                    return PostOutcome::ClientError { attempt, error };
                }
                Err(error) => {
                    self.logger.error(
                        &context.message(&format!("HTTP request error: {error}")),
                        &context,
                    );
                    AttemptFailure::Transport(error)
                }
            };

            if attempt + 1 >= attempts {
                return PostOutcome::Exhausted {
                    attempts,
                    last_failure: failure,
                };
            }

            let delay = self.options.delay_for(attempt);
            tracing::debug!("retrying {} after {} ms", url, delay.as_millis());
            self.sleeper.sleep(delay).await;
            attempt += 1;
        }
    }
}
