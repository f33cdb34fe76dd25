mod macros;

/// The version string reported by the cli and attached to sentry events.
pub const fn kaapi_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
