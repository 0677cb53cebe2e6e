#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_or_default, env_parse, env_required};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default CA bundle used to validate the cluster's certificate chain
pub const DEFAULT_CA_FILE: &str = "/etc/certs/mongodb/ca.pem";

/// Default combined client certificate + private key file
pub const DEFAULT_CERT_KEY_FILE: &str = "/etc/certs/mongodb/client.pem";

/// Upper bound on server selection for the bootstrap connect
pub const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(2);

/// X.509 connection settings for a managed MongoDB cluster
///
/// # Example
///
/// ```ignore
/// use database::mongodb::X509Config;
///
/// let config = X509Config::new("cluster0.example.mongodb.net")
///     .with_subject("CN=app,OU=clients,O=Example")
///     .with_ca_file("/run/secrets/ca.pem")
///     .with_cert_key_file("/run/secrets/client.pem");
///
/// // From environment variables (requires `config` feature)
/// let config = X509Config::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct X509Config {
    /// Cluster host, e.g. `cluster0.example.mongodb.net`
    pub host: String,

    /// Certificate subject used as the username; omitted from the URI when `None`
    pub subject: Option<String>,

    /// CA bundle (PEM)
    pub ca_file: PathBuf,

    /// Client certificate and private key (PEM, single file)
    pub cert_key_file: PathBuf,

    /// `mongodb+srv://` when true, `mongodb://` otherwise
    pub use_srv: bool,

    pub server_selection_timeout: Duration,

    /// Optional application name for server logs
    pub app_name: Option<String>,
}

impl X509Config {
    /// Create a config for `host` with the default certificate paths and a 2 second
    /// server selection timeout
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            subject: None,
            ca_file: PathBuf::from(DEFAULT_CA_FILE),
            cert_key_file: PathBuf::from(DEFAULT_CERT_KEY_FILE),
            use_srv: true,
            server_selection_timeout: DEFAULT_SERVER_SELECTION_TIMEOUT,
            app_name: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_file = path.into();
        self
    }

    pub fn with_cert_key_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cert_key_file = path.into();
        self
    }

    /// Use a plain `mongodb://` seed list instead of SRV resolution
    pub fn without_srv(mut self) -> Self {
        self.use_srv = false;
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn ca_file(&self) -> &Path {
        &self.ca_file
    }

    pub fn cert_key_file(&self) -> &Path {
        &self.cert_key_file
    }

    /// Full connection string, see [`super::build_x509_uri`]
    pub fn uri(&self) -> String {
        super::build_x509_uri(self)
    }

    /// Connection string with the subject masked, safe for logs
    pub fn redacted_uri(&self) -> String {
        super::uri::build(self, self.subject.as_ref().map(|_| "***"))
    }
}

/// Load X509Config from environment variables
///
/// Environment variables:
/// - `MONGODB_CLUSTER_HOST` (required) - Cluster host
/// - `MONGODB_X509_SUBJECT` (optional) - Certificate subject
/// - `MONGODB_TLS_CA_FILE` (optional, default: `/etc/certs/mongodb/ca.pem`)
/// - `MONGODB_TLS_CERT_KEY_FILE` (optional, default: `/etc/certs/mongodb/client.pem`)
/// - `MONGODB_USE_SRV` (optional, default: true)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_MS` (optional, default: 2000)
/// - `MONGODB_APP_NAME` (optional)
#[cfg(feature = "config")]
impl FromEnv for X509Config {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_required("MONGODB_CLUSTER_HOST")?;
        let timeout_ms = env_parse(
            "MONGODB_SERVER_SELECTION_TIMEOUT_MS",
            DEFAULT_SERVER_SELECTION_TIMEOUT.as_millis() as u64,
        )?;

        Ok(Self {
            host,
            subject: env_optional("MONGODB_X509_SUBJECT"),
            ca_file: env_or_default("MONGODB_TLS_CA_FILE", DEFAULT_CA_FILE).into(),
            cert_key_file: env_or_default("MONGODB_TLS_CERT_KEY_FILE", DEFAULT_CERT_KEY_FILE)
                .into(),
            use_srv: env_parse("MONGODB_USE_SRV", true)?,
            server_selection_timeout: Duration::from_millis(timeout_ms),
            app_name: env_optional("MONGODB_APP_NAME"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x509_config_new_defaults() {
        let config = X509Config::new("cluster0.example.net");
        assert_eq!(config.host, "cluster0.example.net");
        assert_eq!(config.subject, None);
        assert_eq!(config.ca_file(), Path::new("/etc/certs/mongodb/ca.pem"));
        assert_eq!(config.cert_key_file(), Path::new("/etc/certs/mongodb/client.pem"));
        assert!(config.use_srv);
        assert_eq!(config.server_selection_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_x509_config_builders() {
        let config = X509Config::new("db.internal:27017")
            .with_subject("CN=app")
            .with_ca_file("/tmp/ca.pem")
            .with_cert_key_file("/tmp/client.pem")
            .without_srv()
            .with_server_selection_timeout(Duration::from_millis(500))
            .with_app_name("x509-connect");

        assert_eq!(config.subject.as_deref(), Some("CN=app"));
        assert_eq!(config.ca_file(), Path::new("/tmp/ca.pem"));
        assert_eq!(config.cert_key_file(), Path::new("/tmp/client.pem"));
        assert!(!config.use_srv);
        assert_eq!(config.server_selection_timeout, Duration::from_millis(500));
        assert_eq!(config.app_name.as_deref(), Some("x509-connect"));
    }

    #[test]
    fn test_redacted_uri_masks_subject() {
        let config = X509Config::new("cluster0.example.net").with_subject("CN=secret-client");
        let redacted = config.redacted_uri();
        assert!(redacted.starts_with("mongodb+srv://***@cluster0.example.net/"));
        assert!(!redacted.contains("secret-client"));
        assert!(redacted.contains("authMechanism=MONGODB-X509"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_x509_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_CLUSTER_HOST", Some("cluster0.example.net")),
                ("MONGODB_X509_SUBJECT", None),
                ("MONGODB_TLS_CA_FILE", None),
                ("MONGODB_TLS_CERT_KEY_FILE", None),
                ("MONGODB_USE_SRV", None),
                ("MONGODB_SERVER_SELECTION_TIMEOUT_MS", None),
                ("MONGODB_APP_NAME", None),
            ],
            || {
                let config = X509Config::from_env().unwrap();
                assert_eq!(config.host, "cluster0.example.net");
                assert_eq!(config.subject, None);
                assert_eq!(config.ca_file(), Path::new(DEFAULT_CA_FILE));
                assert_eq!(config.cert_key_file(), Path::new(DEFAULT_CERT_KEY_FILE));
                assert!(config.use_srv);
                assert_eq!(config.server_selection_timeout, Duration::from_secs(2));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_x509_config_from_env_overrides() {
        temp_env::with_vars(
            [
                ("MONGODB_CLUSTER_HOST", Some("10.0.0.5:27017")),
                ("MONGODB_X509_SUBJECT", Some("CN=worker,O=Example")),
                ("MONGODB_TLS_CA_FILE", Some("/run/secrets/ca.pem")),
                ("MONGODB_TLS_CERT_KEY_FILE", Some("/run/secrets/client.pem")),
                ("MONGODB_USE_SRV", Some("false")),
                ("MONGODB_SERVER_SELECTION_TIMEOUT_MS", Some("750")),
                ("MONGODB_APP_NAME", Some("worker")),
            ],
            || {
                let config = X509Config::from_env().unwrap();
                assert_eq!(config.subject.as_deref(), Some("CN=worker,O=Example"));
                assert_eq!(config.ca_file(), Path::new("/run/secrets/ca.pem"));
                assert_eq!(config.cert_key_file(), Path::new("/run/secrets/client.pem"));
                assert!(!config.use_srv);
                assert_eq!(config.server_selection_timeout, Duration::from_millis(750));
                assert_eq!(config.app_name.as_deref(), Some("worker"));
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_x509_config_from_env_missing_host() {
        temp_env::with_var_unset("MONGODB_CLUSTER_HOST", || {
            let err = X509Config::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGODB_CLUSTER_HOST"));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_x509_config_from_env_bad_timeout() {
        temp_env::with_vars(
            [
                ("MONGODB_CLUSTER_HOST", Some("cluster0.example.net")),
                ("MONGODB_SERVER_SELECTION_TIMEOUT_MS", Some("two seconds")),
            ],
            || {
                let err = X509Config::from_env().unwrap_err();
                assert!(err.to_string().contains("MONGODB_SERVER_SELECTION_TIMEOUT_MS"));
            },
        );
    }
}
