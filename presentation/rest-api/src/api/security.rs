use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

use crate::config::admin_config::AdminConfig;

/// Privileged service-key authentication for the admin surface.
///
/// The storefront never sees this credential; only the admin panel sends
/// it. There is no login flow behind it, just the key compare.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-Admin-Key",
    key_in = "header",
    checker = "admin_key_checker"
)]
pub struct AdminKey(pub String);

async fn admin_key_checker(_req: &Request, api_key: ApiKey) -> Option<String> {
    let config = AdminConfig::from_env();
    if api_key.key == config.service_key {
        Some("admin".to_string())
    } else {
        tracing::warn!("Admin request rejected: bad service key");
        None
    }
}
