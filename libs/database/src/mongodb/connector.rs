use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};
use std::future::Future;
use tracing::{debug, error, info, instrument};

use super::session::MongoSession;
use super::tls::{validate_ca_file, validate_cert_key_file};
use super::{X509Config, build_x509_uri};
use crate::common::{DatabaseError, DatabaseResult};

/// Parse the X.509 connection string for `config` and apply its timeouts
///
/// No I/O happens here beyond SRV resolution for `mongodb+srv` URIs.
pub async fn client_options(config: &X509Config) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(build_x509_uri(config)).await?;

    options.server_selection_timeout = Some(config.server_selection_timeout);

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Connect to a MongoDB cluster with X.509 client certificate authentication
///
/// Runs a single attempt: certificate files are checked first, then the client is
/// built and a `ping` is sent to `admin` so that TLS, authentication and server
/// selection all happen inside this call. Any failure is returned as-is; there is
/// no retry.
///
/// # Example
/// ```ignore
/// use database::mongodb::{X509Config, connect_x509};
///
/// let config = X509Config::new("cluster0.example.mongodb.net");
/// let session = connect_x509(&config).await?;
/// // ...
/// session.disconnect().await;
/// ```
#[instrument(skip_all, fields(host = %config.host))]
pub async fn connect_x509(config: &X509Config) -> DatabaseResult<MongoSession> {
    info!("Attempting to connect to MongoDB at {}", config.redacted_uri());

    validate_ca_file(config.ca_file())?;
    validate_cert_key_file(config.cert_key_file())?;
    debug!("Certificate files look valid");

    let options = client_options(config).await?;
    let client = Client::with_options(options)?;

    if let Err(e) = ping(&client).await {
        error!("MongoDB did not answer ping: {}", e);
        client.shutdown().await;
        return Err(DatabaseError::ConnectionFailed(e.to_string()));
    }

    info!("Successfully connected to MongoDB");
    Ok(MongoSession::new(client))
}

/// Connect, run `f` with the client, then disconnect whatever `f` returned
///
/// # Example
/// ```ignore
/// use database::mongodb::{X509Config, with_session};
///
/// let names = with_session(&config, |client| async move {
///     Ok(client.list_database_names().await?)
/// })
/// .await?;
/// ```
pub async fn with_session<F, Fut, T>(config: &X509Config, f: F) -> DatabaseResult<T>
where
    F: FnOnce(Client) -> Fut,
    Fut: Future<Output = DatabaseResult<T>>,
{
    let session = connect_x509(config).await?;
    let result = f(session.client().clone()).await;
    session.disconnect().await;
    result
}

pub(crate) async fn ping(client: &Client) -> mongodb::error::Result<()> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map(|_| ())
}
