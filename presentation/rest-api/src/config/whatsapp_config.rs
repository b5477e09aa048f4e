/// Configuration for the store's WhatsApp number.
pub struct WhatsAppConfig {
    pub phone: String,
}

impl WhatsAppConfig {
    pub fn from_env() -> Self {
        Self {
            phone: std::env::var("WHATSAPP_PHONE").expect("WHATSAPP_PHONE must be set"),
        }
    }
}
