//! Pre-flight checks for the PEM material referenced by the connection string.
//!
//! Runs before any network activity. The driver itself only opens these files when
//! it builds a TLS stream, where a bad file shows up as a server selection timeout.

use rustls_pemfile::Item;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// What a PEM file contains, by block kind
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PemSummary {
    pub certificates: usize,
    pub private_keys: usize,
}

/// Read `path` and count its certificate and private key blocks
pub fn inspect_pem(path: &Path) -> DatabaseResult<PemSummary> {
    let file = File::open(path).map_err(|e| DatabaseError::certificate(path, e.to_string()))?;
    let mut reader = BufReader::new(file);
    let mut summary = PemSummary::default();

    for item in rustls_pemfile::read_all(&mut reader) {
        match item.map_err(|e| DatabaseError::certificate(path, format!("invalid PEM: {}", e)))? {
            Item::X509Certificate(_) => summary.certificates += 1,
            Item::Pkcs1Key(_) | Item::Pkcs8Key(_) | Item::Sec1Key(_) => summary.private_keys += 1,
            _ => {}
        }
    }

    debug!(
        path = %path.display(),
        certificates = summary.certificates,
        private_keys = summary.private_keys,
        "Inspected PEM file"
    );

    Ok(summary)
}

/// The CA file must hold at least one certificate
pub fn validate_ca_file(path: &Path) -> DatabaseResult<()> {
    let summary = inspect_pem(path)?;
    if summary.certificates == 0 {
        return Err(DatabaseError::certificate(
            path,
            "no CERTIFICATE block found in CA file",
        ));
    }
    Ok(())
}

/// The client file must hold both a certificate and its private key
pub fn validate_cert_key_file(path: &Path) -> DatabaseResult<()> {
    let summary = inspect_pem(path)?;
    if summary.certificates == 0 {
        return Err(DatabaseError::certificate(
            path,
            "no CERTIFICATE block found in client certificate file",
        ));
    }
    if summary.private_keys == 0 {
        return Err(DatabaseError::certificate(
            path,
            "no PRIVATE KEY block found in client certificate file",
        ));
    }
    Ok(())
}
