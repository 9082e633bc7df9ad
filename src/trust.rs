use std::path::Path;

use reqwest::{Certificate, Client};

use crate::error::ClientError;

const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const PEM_END: &str = "-----END CERTIFICATE-----";

/// Read `path` and parse every PEM certificate found in it.
///
/// Blocks that fail to parse are skipped; the call fails only when the file
/// cannot be read or holds no parsable certificate at all, and the returned
/// error names the offending path.
pub fn load_certificates(path: &Path) -> Result<Vec<Certificate>, ClientError> {
    let pem = std::fs::read(path).map_err(|source| ClientError::CertRead {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&pem);
    let mut certs = Vec::new();
    for block in text.split_inclusive(PEM_END) {
        if let Some(start) = block.find(PEM_BEGIN) {
            if let Ok(cert) = Certificate::from_pem(block[start..].as_bytes()) {
                certs.push(cert);
            }
        }
    }
    if certs.is_empty() {
        return Err(ClientError::CertParse {
            path: path.to_path_buf(),
        });
    }
    Ok(certs)
}

/// Build an HTTPS client whose only trusted roots are `certs`.
///
/// The built-in root store is disabled, so a server presenting any
/// certificate that does not chain to one of `certs` fails the handshake.
/// Hostname verification stays on. No timeout is configured.
pub fn pinned_client(certs: Vec<Certificate>) -> Result<Client, ClientError> {
    let mut builder = Client::builder()
        .tls_built_in_root_certs(false)
        .use_native_tls();
    for cert in certs {
        builder = builder.add_root_certificate(cert);
    }
    Ok(builder.build()?)
}
