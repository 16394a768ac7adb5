//! HTTP `AuthProvider` for an identity-toolkit style REST API
//! (email+password sign-in/sign-up, opaque uid in the response).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::{AuthError, AuthIdentity, AuthProvider};

#[derive(Clone)]
pub struct HttpAuthProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HttpAuthProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }

    async fn call(&self, endpoint: &str, email: &str, password: &str) -> Result<AuthIdentity, AuthError> {
        let url = format!("{}/v1/accounts:{}?key={}", self.base_url, endpoint, self.api_key);
        let body = CredentialPayload {
            email,
            password,
            return_secure_token: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Provider(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            warn!("auth provider returned {status}: {message}");
            // Credential-shaped rejections vs provider trouble. Both end up
            // rendered identically to the user.
            return match message.as_str() {
                m if m.starts_with("EMAIL_NOT_FOUND")
                    || m.starts_with("INVALID_PASSWORD")
                    || m.starts_with("INVALID_LOGIN_CREDENTIALS")
                    || m.starts_with("EMAIL_EXISTS")
                    || m.starts_with("WEAK_PASSWORD") =>
                {
                    Err(AuthError::InvalidCredentials)
                }
                _ => Err(AuthError::Provider(message)),
            };
        }

        let account: AccountResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(format!("malformed response: {e}")))?;

        Ok(AuthIdentity {
            external_id: account.local_id,
            email: account.email,
        })
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthIdentity, AuthError> {
        self.call("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthIdentity, AuthError> {
        self.call("signUp", email, password).await
    }
}

#[derive(Debug, Serialize)]
struct CredentialPayload<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorEnvelope {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_response_parses_provider_shape() {
        let json = r#"{"localId": "uid-123", "email": "a@example.com", "idToken": "ignored"}"#;
        let account: AccountResponse = serde_json::from_str(json).unwrap();
        assert_eq!(account.local_id, "uid-123");
        assert_eq!(account.email, "a@example.com");
    }

    #[test]
    fn test_error_envelope_parses_message() {
        let json = r#"{"error": {"code": 400, "message": "EMAIL_NOT_FOUND"}}"#;
        let envelope: ProviderErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.message, "EMAIL_NOT_FOUND");
    }

    #[test]
    fn test_credential_payload_uses_provider_field_names() {
        let payload = CredentialPayload {
            email: "a@example.com",
            password: "hunter2",
            return_secure_token: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["returnSecureToken"], true);
    }
}
