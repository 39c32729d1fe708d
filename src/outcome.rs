use crate::{AttemptFailure, HttpResponse, TransportError};

/// Result of one [`RetryingPoster::post_with_outcome`](crate::RetryingPoster::post_with_outcome) call.
#[derive(Debug)]
pub enum PostOutcome {
    /// An attempt returned a 2xx response.
    Success(HttpResponse),
    /// A client-class failure aborted the loop at `attempt`.
    ClientError {
        attempt: usize,
        error: TransportError,
    },
    /// Every attempt failed; `last_failure` is the final one.
    Exhausted {
        attempts: usize,
        last_failure: AttemptFailure,
    },
}

impl PostOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PostOutcome::Success(_))
    }

    /// Drops the failure cause, keeping only a successful response.
    pub fn into_response(self) -> Option<HttpResponse> {
        match self {
            PostOutcome::Success(response) => Some(response),
            PostOutcome::ClientError { .. } | PostOutcome::Exhausted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::PostOutcome;
    use crate::{AttemptFailure, HttpResponse, TransportError};

    #[test]
    fn only_success_yields_a_response() {
        let ok = PostOutcome::Success(HttpResponse::new(StatusCode::OK, "{}"));
        assert!(ok.is_success());
        assert_eq!(ok.into_response().map(|r| r.status_code()), Some(200));

        let aborted = PostOutcome::ClientError {
            attempt: 0,
            error: TransportError::Client {
                status: 400,
                body: String::new(),
            },
        };
        assert!(aborted.into_response().is_none());

        let exhausted = PostOutcome::Exhausted {
            attempts: 3,
            last_failure: AttemptFailure::Status {
                status: 500,
                body: String::new(),
            },
        };
        assert!(!exhausted.is_success());
        assert!(exhausted.into_response().is_none());
    }
}
