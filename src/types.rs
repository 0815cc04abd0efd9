use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Error,
}

/// A locally-held image payload attached to an outgoing message.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageAttachment {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// User messages only; assistant and error entries never carry one.
    pub image: Option<ImageAttachment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Raw auth form state. Which fields matter depends on the mode: login uses
/// email and password, signup additionally requires a username; name and dob
/// stay optional everywhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub username: String,
    pub name: String,
    pub dob: String,
}

impl Credentials {
    /// Client-side check before anything goes over the wire.
    pub fn validate(&self, mode: AuthMode) -> Result<(), String> {
        if self.email.trim().is_empty() {
            return Err("Email is required.".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required.".to_string());
        }
        if mode == AuthMode::Signup && self.username.trim().is_empty() {
            return Err("Username is required.".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Credentials {
        Credentials {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            username: "ab".to_string(),
            name: String::new(),
            dob: String::new(),
        }
    }

    #[test]
    fn test_login_requires_email_and_password() {
        assert!(filled().validate(AuthMode::Login).is_ok());

        let mut missing_email = filled();
        missing_email.email = "  ".to_string();
        assert!(missing_email.validate(AuthMode::Login).is_err());

        let mut missing_password = filled();
        missing_password.password = String::new();
        assert!(missing_password.validate(AuthMode::Login).is_err());
    }

    #[test]
    fn test_username_only_required_for_signup() {
        let mut creds = filled();
        creds.username = String::new();
        assert!(creds.validate(AuthMode::Login).is_ok());
        assert!(creds.validate(AuthMode::Signup).is_err());
    }

    #[test]
    fn test_optional_fields_never_block_signup() {
        let creds = filled();
        assert_eq!(creds.name, "");
        assert_eq!(creds.dob, "");
        assert!(creds.validate(AuthMode::Signup).is_ok());
    }
}
