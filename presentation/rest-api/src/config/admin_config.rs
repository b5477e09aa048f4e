/// The privileged service credential gating every /admin route.
pub struct AdminConfig {
    pub service_key: String,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            service_key: std::env::var("ADMIN_SERVICE_KEY")
                .expect("ADMIN_SERVICE_KEY must be set"),
        }
    }
}
