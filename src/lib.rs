//! `retrying-poster` sends JSON `POST` requests with a fixed retry schedule.
//!
//! One operation is exposed through two surfaces:
//! - [`RetryingPoster::post`] returns the response on 2xx and `None` otherwise
//! - [`RetryingPoster::post_with_outcome`] returns a [`PostOutcome`] that keeps the failure cause
//!
//! Client-class failures (4xx) abort immediately; everything else is retried
//! up to [`RetryOptions::max_attempts`] times, waiting
//! [`RetryOptions::retry_delays_ms`] between attempts.

mod client;
mod error;
mod logger;
mod options;
mod outcome;
mod sleep;
mod transport;
mod url;

pub use client::RetryingPoster;
pub use error::{AttemptFailure, TransportError};
pub use logger::{AttemptContext, AttemptLogger, TracingLogger};
pub use options::RetryOptions;
pub use outcome::PostOutcome;
pub use sleep::{Sleeper, TokioSleeper};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use url::join_url;

/// JSON object sent as the request body.
pub type Payload = serde_json::Map<String, serde_json::Value>;
