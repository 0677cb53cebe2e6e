//! MongoDB connector with X.509 client certificate authentication
//!
//! Provides the connection string builder, certificate pre-flight checks,
//! a session guard that releases the client exactly once, and health checks.

mod config;
mod connector;
mod health;
mod session;
pub mod tls;
mod uri;

pub use config::{
    DEFAULT_CA_FILE, DEFAULT_CERT_KEY_FILE, DEFAULT_SERVER_SELECTION_TIMEOUT, X509Config,
};
pub use connector::{client_options, connect_x509, with_session};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use session::MongoSession;
pub use uri::{AUTH_MECHANISM, build_x509_uri};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
