use std::io::Write;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::cli::Mode;
use crate::entry::LogEntry;
use crate::error::ClientError;

/// Issue the single request for `mode` against `https://<authority>` and
/// write the result to `out`.
pub async fn run(
    client: &Client,
    authority: &str,
    mode: Mode,
    out: &mut dyn Write,
) -> Result<(), ClientError> {
    match mode {
        Mode::Info => get(client, authority, "/", out).await,
        Mode::Health => get(client, authority, "/health", out).await,
        Mode::Test => post_test_entry(client, authority, out).await,
    }
}

/// GET `path` and write the body to `out` verbatim.
///
/// The HTTP status code is deliberately not inspected; a 4xx/5xx body is
/// printed just like a success.
pub async fn get(
    client: &Client,
    authority: &str,
    path: &str,
    out: &mut dyn Write,
) -> Result<(), ClientError> {
    let response = client
        .get(format!("https://{authority}{path}"))
        .send()
        .await?;
    let text = response.text().await.map_err(ClientError::BodyRead)?;
    write!(out, "{text}")?;
    Ok(())
}

/// POST a [`LogEntry::test_data`] payload to `/logs` and write the server's
/// acknowledgment to `out`, prefixed with `Server response: `.
pub async fn post_test_entry(
    client: &Client,
    authority: &str,
    out: &mut dyn Write,
) -> Result<(), ClientError> {
    let body = serde_json::to_vec(&LogEntry::test_data())?;
    let response = client
        .post(format!("https://{authority}/logs"))
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await?;
    let text = response.text().await.map_err(ClientError::BodyRead)?;
    writeln!(out, "Server response: {text}")?;
    Ok(())
}
