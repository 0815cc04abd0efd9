//! Auth Gateway: exchanges credentials for an access token.

use serde::{Deserialize, Serialize};

use super::{Api, ApiError, ApiResult, failure_message, status_message};
use crate::types::{AuthMode, Credentials};

/// Shown when the server never answered.
const NETWORK_MESSAGE: &str = "Network error or server unreachable.";

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dob: Option<&'a str>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Login follows the OAuth2 password-grant convention: a form-urlencoded
/// body whose `username` field carries the email.
fn login_form(credentials: &Credentials) -> [(&'static str, &str); 2] {
    [
        ("username", credentials.email.as_str()),
        ("password", credentials.password.as_str()),
    ]
}

/// Signup is plain JSON; empty optionals are left off the wire entirely.
fn signup_request(credentials: &Credentials) -> SignupRequest<'_> {
    fn optional(value: &str) -> Option<&str> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    SignupRequest {
        email: &credentials.email,
        password: &credentials.password,
        username: &credentials.username,
        name: optional(&credentials.name),
        dob: optional(&credentials.dob),
    }
}

impl Api {
    /// Exchange credentials for a token. No session-store side effects here;
    /// committing the token is the caller's responsibility.
    pub async fn authenticate(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> ApiResult<String> {
        let request = match mode {
            AuthMode::Login => self
                .http
                .post(self.url("/auth/login"))
                .form(&login_form(credentials)),
            AuthMode::Signup => self
                .http
                .post(self.url("/auth/signup"))
                .json(&signup_request(credentials)),
        };

        let response = request.send().await.map_err(|err| {
            tracing::warn!("auth request failed: {err}");
            ApiError::Network(NETWORK_MESSAGE.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!("auth response unreadable: {err}");
            ApiError::Network(NETWORK_MESSAGE.to_string())
        })?;

        if !status.is_success() {
            return Err(ApiError::Api(failure_message(&body, status_message(status))));
        }

        match serde_json::from_str::<TokenResponse>(&body) {
            Ok(data) => Ok(data.access_token),
            Err(err) => {
                tracing::warn!("malformed token response: {err}");
                Err(ApiError::Api("Malformed token response.".to_string()))
            }
        }
    }
}

pub async fn authenticate(mode: AuthMode, credentials: &Credentials) -> ApiResult<String> {
    let api =
        Api::from_env().map_err(|err| ApiError::Api(format!("Configuration error: {err}")))?;
    api.authenticate(mode, credentials).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_credentials() -> Credentials {
        Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            username: "ab".to_string(),
            name: String::new(),
            dob: String::new(),
        }
    }

    #[test]
    fn test_login_form_maps_email_to_username_field() {
        let creds = signup_credentials();
        let pairs = login_form(&creds);
        assert_eq!(pairs, [("username", "a@b.com"), ("password", "x")]);
    }

    #[test]
    fn test_signup_body_omits_empty_optionals() {
        let creds = signup_credentials();
        let body = serde_json::to_value(signup_request(&creds)).unwrap();

        assert_eq!(body["email"], "a@b.com");
        assert_eq!(body["username"], "ab");
        assert!(body.get("name").is_none());
        assert!(body.get("dob").is_none());
    }

    #[test]
    fn test_signup_body_carries_filled_optionals() {
        let mut creds = signup_credentials();
        creds.name = "Ada Lovelace".to_string();
        creds.dob = "1815-12-10".to_string();

        let body = serde_json::to_value(signup_request(&creds)).unwrap();
        assert_eq!(body["name"], "Ada Lovelace");
        assert_eq!(body["dob"], "1815-12-10");
    }

    #[test]
    fn test_whitespace_optionals_treated_as_absent() {
        let mut creds = signup_credentials();
        creds.name = "   ".to_string();

        let body = serde_json::to_value(signup_request(&creds)).unwrap();
        assert!(body.get("name").is_none());
    }
}
