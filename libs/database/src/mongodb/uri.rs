//! Connection string formatting for X.509 authentication

use super::X509Config;

pub const AUTH_MECHANISM: &str = "MONGODB-X509";

/// Format the connection string for `config`.
///
/// The certificate paths are inserted verbatim into `tlsCAFile` and
/// `tlsCertificateKeyFile`; the subject is percent-encoded into the userinfo.
///
/// ```ignore
/// let uri = build_x509_uri(&X509Config::new("cluster0.example.net"));
/// assert_eq!(
///     uri,
///     "mongodb+srv://cluster0.example.net/?tlsCAFile=/etc/certs/mongodb/ca.pem\
///      &tlsCertificateKeyFile=/etc/certs/mongodb/client.pem&authMechanism=MONGODB-X509"
/// );
/// ```
pub fn build_x509_uri(config: &X509Config) -> String {
    let userinfo = config
        .subject
        .as_deref()
        .map(|subject| urlencoding::encode(subject).into_owned());

    build(config, userinfo.as_deref())
}

/// `userinfo` must already be encoded
pub(super) fn build(config: &X509Config, userinfo: Option<&str>) -> String {
    let scheme = if config.use_srv {
        "mongodb+srv"
    } else {
        "mongodb"
    };

    let userinfo = userinfo.map(|u| format!("{}@", u)).unwrap_or_default();

    format!(
        "{}://{}{}/?tlsCAFile={}&tlsCertificateKeyFile={}&authMechanism={}",
        scheme,
        userinfo,
        config.host,
        config.ca_file.display(),
        config.cert_key_file.display(),
        AUTH_MECHANISM,
    )
}
