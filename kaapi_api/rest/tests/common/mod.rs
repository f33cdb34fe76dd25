use kaapi_api_rest::{RestServer, RestServerConfig};
use kaapi_core_contact_contracts::ContactFeatureService;
use kaapi_core_supplier_contracts::SupplierFeatureService;
use tokio::{net::TcpListener, task::JoinHandle};

pub const MAX_BODY_SIZE: usize = 64 * 1024;

pub struct TestServer {
    base_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn spawn(
        contact: impl ContactFeatureService,
        supplier: impl SupplierFeatureService,
    ) -> Self {
        Self::spawn_with_body_limit(contact, supplier, MAX_BODY_SIZE).await
    }

    /// Serves the production router on an ephemeral port.
    pub async fn spawn_with_body_limit(
        contact: impl ContactFeatureService,
        supplier: impl SupplierFeatureService,
        max_body_size: usize,
    ) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let config = RestServerConfig {
            host: addr.ip(),
            port: addr.port(),
            max_body_size,
        };
        let router = RestServer::new(config, contact, supplier).router();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
