use std::{net::IpAddr, sync::Arc};

use axum::{extract::DefaultBodyLimit, Router};
use kaapi_core_contact_contracts::ContactFeatureService;
use kaapi_core_supplier_contracts::SupplierFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Supplier> {
    config: RestServerConfig,
    contact: Contact,
    supplier: Supplier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Request bodies larger than this many bytes are rejected with
    /// `413 Payload Too Large`.
    pub max_body_size: usize,
}

impl<Contact, Supplier> RestServer<Contact, Supplier>
where
    Contact: ContactFeatureService,
    Supplier: SupplierFeatureService,
{
    pub fn new(config: RestServerConfig, contact: Contact, supplier: Supplier) -> Self {
        Self {
            config,
            contact,
            supplier,
        }
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { host, port, .. } = self.config;
        let listener = TcpListener::bind((host, port)).await?;
        info!("Listening on {}", listener.local_addr()?);
        axum::serve(listener, self.router())
            .await
            .map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(Arc::new(self.contact)))
            .merge(routes::supplier::router(Arc::new(self.supplier)))
            .layer(DefaultBodyLimit::max(self.config.max_body_size));

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}
