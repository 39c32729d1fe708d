use retrying_poster::{PostOutcome, RetryingPoster};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let base_url = std::env::var("POSTER_BASE_URL")?;
    let poster = RetryingPoster::new(base_url);

    let payload = json!({"event": "signup", "user": {"id": 42, "plan": "pro"}});
    let payload = payload
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("payload must be a JSON object"))?;

    match poster.post_with_outcome("/v1/events", payload).await {
        PostOutcome::Success(response) => {
            println!("{} {}", response.status_code(), response.body);
        }
        PostOutcome::ClientError { attempt, error } => {
            anyhow::bail!("rejected on attempt {attempt}: {error}");
        }
        PostOutcome::Exhausted {
            attempts,
            last_failure,
        } => {
            anyhow::bail!("gave up after {attempts} attempts: {last_failure}");
        }
    }

    Ok(())
}
