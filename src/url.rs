/// Joins a base URL and an endpoint path with exactly one `/` between them.
///
/// Example: `("https://api/", "/v1/items")` → `"https://api/v1/items"`
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
