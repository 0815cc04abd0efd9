//! Profile and history fetches for authenticated sessions.

use serde::Deserialize;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use super::{Api, ApiError, ApiResult, failure_message};

/// Placeholder for profile fields the server left out.
const UNKNOWN: &str = "N/A";
const FETCH_FAILURE: &str = "Failed to fetch user profile.";
const NETWORK_MESSAGE: &str = "Network error while fetching profile.";
const HISTORY_FAILURE: &str = "Failed to retrieve chat history.";

const DISPLAY_DATE: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");
const WIRE_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Normalized account attributes; every field is display-ready, no raw
/// nulls survive past the response boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub username: String,
    pub name: String,
    pub email: String,
    pub dob: String,
    pub member_since: String,
}

#[derive(Deserialize)]
struct ProfileResponse {
    username: Option<String>,
    name: Option<String>,
    email: Option<String>,
    dob: Option<String>,
    #[serde(rename = "memberSince")]
    member_since: Option<String>,
}

/// One stored conversation turn, newest first.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HistoryItem {
    #[serde(default)]
    pub user_input_text: String,
    #[serde(default)]
    pub ai_response_text: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

fn not_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Render a wire date for display. The API sends RFC3339 timestamps for
/// `memberSince` and plain `YYYY-MM-DD` for `dob`; anything else passes
/// through untouched rather than degrade to the sentinel.
fn format_date(raw: &str) -> String {
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339)
        && let Ok(rendered) = parsed.format(DISPLAY_DATE)
    {
        return rendered;
    }
    if let Ok(parsed) = Date::parse(raw, WIRE_DATE)
        && let Ok(rendered) = parsed.format(DISPLAY_DATE)
    {
        return rendered;
    }
    raw.to_string()
}

fn normalize(response: ProfileResponse) -> Profile {
    Profile {
        username: not_blank(response.username).unwrap_or_else(|| UNKNOWN.to_string()),
        name: not_blank(response.name).unwrap_or_else(|| UNKNOWN.to_string()),
        email: not_blank(response.email).unwrap_or_else(|| UNKNOWN.to_string()),
        dob: not_blank(response.dob)
            .map(|raw| format_date(&raw))
            .unwrap_or_else(|| UNKNOWN.to_string()),
        member_since: not_blank(response.member_since)
            .map(|raw| format_date(&raw))
            .unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

impl Api {
    /// Authorized profile fetch. Callers only reach this with a token in
    /// hand; the router never routes to the profile view without one.
    pub async fn fetch_profile(&self, token: &str) -> ApiResult<Profile> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("profile request failed: {err}");
                ApiError::Network(NETWORK_MESSAGE.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!("profile response unreadable: {err}");
            ApiError::Network(NETWORK_MESSAGE.to_string())
        })?;

        if !status.is_success() {
            return Err(ApiError::Api(failure_message(&body, FETCH_FAILURE)));
        }

        match serde_json::from_str::<ProfileResponse>(&body) {
            Ok(data) => Ok(normalize(data)),
            Err(err) => {
                tracing::warn!("malformed profile response: {err}");
                Err(ApiError::Api(FETCH_FAILURE.to_string()))
            }
        }
    }

    /// Recent stored conversations for the sidebar history list.
    pub async fn fetch_history(&self, token: &str) -> ApiResult<Vec<HistoryItem>> {
        let response = self
            .http
            .get(self.url("/history/"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("history request failed: {err}");
                ApiError::Network(HISTORY_FAILURE.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!("history response unreadable: {err}");
            ApiError::Network(HISTORY_FAILURE.to_string())
        })?;

        if !status.is_success() {
            return Err(ApiError::Api(failure_message(&body, HISTORY_FAILURE)));
        }

        match serde_json::from_str::<Vec<HistoryItem>>(&body) {
            Ok(items) => Ok(items),
            Err(err) => {
                tracing::warn!("malformed history response: {err}");
                Err(ApiError::Api(HISTORY_FAILURE.to_string()))
            }
        }
    }
}

pub async fn fetch_profile(token: String) -> ApiResult<Profile> {
    let api =
        Api::from_env().map_err(|err| ApiError::Api(format!("Configuration error: {err}")))?;
    api.fetch_profile(&token).await
}

pub async fn fetch_history(token: String) -> ApiResult<Vec<HistoryItem>> {
    let api =
        Api::from_env().map_err(|err| ApiError::Api(format!("Configuration error: {err}")))?;
    api.fetch_history(&token).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_normalize_to_sentinel() {
        let profile = normalize(ProfileResponse {
            username: None,
            name: None,
            email: None,
            dob: None,
            member_since: None,
        });

        assert_eq!(profile.username, UNKNOWN);
        assert_eq!(profile.name, UNKNOWN);
        assert_eq!(profile.email, UNKNOWN);
        assert_eq!(profile.dob, UNKNOWN);
        assert_eq!(profile.member_since, UNKNOWN);
    }

    #[test]
    fn test_blank_fields_normalize_to_sentinel() {
        let profile = normalize(ProfileResponse {
            username: Some("  ".to_string()),
            name: Some(String::new()),
            email: Some("a@b.com".to_string()),
            dob: None,
            member_since: None,
        });

        assert_eq!(profile.username, UNKNOWN);
        assert_eq!(profile.name, UNKNOWN);
        assert_eq!(profile.email, "a@b.com");
    }

    #[test]
    fn test_wire_date_rendered_for_display() {
        assert_eq!(format_date("1815-12-10"), "Dec 10, 1815");
    }

    #[test]
    fn test_rfc3339_timestamp_rendered_for_display() {
        assert_eq!(format_date("2024-03-05T09:30:00Z"), "Mar 5, 2024");
    }

    #[test]
    fn test_unrecognized_date_passes_through() {
        assert_eq!(format_date("sometime in March"), "sometime in March");
    }

    #[test]
    fn test_profile_response_field_mapping() {
        let body = r#"{
            "username": "ada",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "dob": "1815-12-10",
            "memberSince": "2024-03-05T09:30:00Z"
        }"#;
        let profile = normalize(serde_json::from_str::<ProfileResponse>(body).unwrap());

        assert_eq!(profile.username, "ada");
        assert_eq!(profile.dob, "Dec 10, 1815");
        assert_eq!(profile.member_since, "Mar 5, 2024");
    }

    #[test]
    fn test_history_item_tolerates_extra_fields() {
        let body = r#"[{
            "session_id": "abc",
            "user_id": "u1",
            "is_anonymous": false,
            "user_input_text": "hello",
            "ai_response_text": "hi there",
            "timestamp": "2024-03-05T09:30:00Z"
        }]"#;
        let items: Vec<HistoryItem> = serde_json::from_str(body).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].user_input_text, "hello");
        assert_eq!(items[0].image_url, None);
    }
}
