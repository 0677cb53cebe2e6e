use mongodb::{Client, Database};
use tracing::{info, warn};

/// An established MongoDB client that is released exactly once.
///
/// Call [`MongoSession::disconnect`] to shut the client down and wait for its
/// background workers. If the session goes out of scope first (early return,
/// `?`, panic) the `Drop` impl hands the client back to the driver, which
/// closes its pools when the last handle is dropped.
pub struct MongoSession {
    client: Option<Client>,
}

impl MongoSession {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// The underlying driver client
    pub fn client(&self) -> &Client {
        // Only `disconnect` takes the client, and it consumes `self`.
        self.client
            .as_ref()
            .unwrap_or_else(|| unreachable!("client taken before disconnect"))
    }

    pub fn database(&self, name: &str) -> Database {
        self.client().database(name)
    }

    /// Shut the client down, closing all connections
    pub async fn disconnect(mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            info!("MongoDB connection closed");
        }
    }
}

impl Drop for MongoSession {
    fn drop(&mut self) {
        if self.client.take().is_some() {
            warn!("MongoDB session dropped without disconnect; driver will close connections");
        }
    }
}

impl std::fmt::Debug for MongoSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoSession")
            .field("connected", &self.client.is_some())
            .finish()
    }
}
