use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in a single client invocation.
///
/// Nothing here is retried or recovered; `main` prints the error and exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The trust certificate file could not be read.
    #[error("could not load cert file from path {}: {source}", path.display())]
    CertRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The trust certificate file held no parsable PEM certificate.
    #[error("unable to parse certificate input as PEM from path '{}'", path.display())]
    CertParse { path: PathBuf },

    /// None of `--info`, `--health`, `--test` was given.
    #[error("no mode selected; pass --info, --health or --test")]
    NoMode,

    /// Connection, TLS handshake or HTTP round-trip failure.
    #[error("error while getting response from server: {0}")]
    Network(#[from] reqwest::Error),

    /// The test log entry could not be serialized to JSON.
    #[error("unable to encode log entry: {0}")]
    Encode(#[from] serde_json::Error),

    /// The response body could not be read to completion.
    #[error("unable to read server response: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The output sink rejected a write.
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}
