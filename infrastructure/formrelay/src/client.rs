use reqwest::Client;

/// Shared HTTP client configuration for the form-relay service.
pub struct FormRelayClient {
    pub client: Client,
    pub access_key: String,
    pub base_url: String,
}

impl FormRelayClient {
    pub fn new(access_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            access_key,
            base_url,
        }
    }

    /// Returns the submission endpoint URL.
    pub fn submit_url(&self) -> String {
        format!("{}/submit", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_submit_url_without_double_slash() {
        let client = FormRelayClient::new("key".to_string(), "https://relay.example/".to_string());

        assert_eq!(client.submit_url(), "https://relay.example/submit");
    }
}
