//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use birdhouse_data::Dataset;

/// Everything [`super::create_server`] needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) dataset: Arc<Dataset>,
}

impl ServerConfig {
    /// Serve `dataset` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, dataset: Arc<Dataset>) -> Self {
        Self { bind_addr, dataset }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
