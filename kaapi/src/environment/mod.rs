use kaapi_api_rest::RestServerConfig;
use kaapi_config::Config;
use types::{ContactFeature, RestServer, SupplierFeature};

pub mod types;

pub fn rest_server(config: &Config) -> RestServer {
    RestServer::new(
        rest_server_config(config),
        ContactFeature::default(),
        SupplierFeature::default(),
    )
}

pub fn rest_server_config(config: &Config) -> RestServerConfig {
    RestServerConfig {
        host: config.http.host,
        port: config.http.port,
        max_body_size: config.http.max_body_size,
    }
}
