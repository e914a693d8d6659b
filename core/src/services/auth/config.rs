//! Auth orchestration configuration

/// Configuration for the auth service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL activation links are built from; the ticket is appended
    /// as a path segment
    pub activation_base_url: String,
}

impl AuthServiceConfig {
    /// Builds the redeemable URL for an activation ticket
    pub fn activation_url(&self, ticket: &str) -> String {
        format!(
            "{}/{}?purpose=email-verify",
            self.activation_base_url.trim_end_matches('/'),
            ticket
        )
    }
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            activation_base_url: "http://localhost:3000/api/v1/auth/activate".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_url_joins_cleanly() {
        let config = AuthServiceConfig {
            activation_base_url: "https://example.com/activate/".to_string(),
        };
        assert_eq!(
            config.activation_url("abc"),
            "https://example.com/activate/abc?purpose=email-verify"
        );
    }
}
