use shared::ClientConfig;

/// Configuration baked in at build time. Set `GRADE_MAKER_API_URL` when
/// building to point the client at another API host.
pub fn client_config() -> ClientConfig {
    ClientConfig::with_base_url(option_env!("GRADE_MAKER_API_URL"))
}
