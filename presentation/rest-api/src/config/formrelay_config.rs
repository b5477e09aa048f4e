const DEFAULT_FORMRELAY_URL: &str = "https://api.web3forms.com";

/// Configuration for the third-party form-relay service that receives
/// general enquiries.
pub struct FormRelayConfig {
    pub access_key: String,
    pub base_url: String,
}

impl FormRelayConfig {
    pub fn from_env() -> Self {
        Self {
            access_key: std::env::var("FORMRELAY_ACCESS_KEY")
                .expect("FORMRELAY_ACCESS_KEY must be set"),
            base_url: std::env::var("FORMRELAY_URL")
                .unwrap_or_else(|_| DEFAULT_FORMRELAY_URL.to_string()),
        }
    }
}
