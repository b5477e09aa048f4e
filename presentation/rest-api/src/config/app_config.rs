use poem::middleware::Cors;

use super::admin_config::AdminConfig;
use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    /// Loads the listener settings. The admin credential is also read here
    /// so a missing key fails the boot, not the first admin request.
    pub fn from_env() -> Self {
        AdminConfig::from_env();

        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
