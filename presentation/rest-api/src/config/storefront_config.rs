/// Public base URL of the storefront, used by the social-preview pages to
/// point crawlers and humans back at the real product page.
pub struct StorefrontConfig {
    pub base_url: String,
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("STOREFRONT_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }
}
