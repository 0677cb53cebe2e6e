//! Database library providing an X.509-authenticated MongoDB connector
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB X.509 connector, session guard and health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb::{X509Config, connect_x509};
//!
//! let config = X509Config::new("cluster0.example.mongodb.net")
//!     .with_subject("CN=app,OU=clients,O=Example");
//!
//! let session = connect_x509(&config).await?;
//! let db = session.database("mydb");
//! // ...
//! session.disconnect().await;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
