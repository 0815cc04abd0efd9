//! Chat send: one multipart request per user turn.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use super::{Api, ApiError, ApiResult, failure_message};
use crate::types::ImageAttachment;

/// Transcript error entry when the server failed without a detail message.
const GENERIC_FAILURE: &str = "An API error occurred.";
/// Transcript error entry when no response arrived at all.
const NETWORK_MESSAGE: &str = "Failed to connect to the server.";

#[derive(Deserialize)]
struct ChatResponse {
    ai_response: String,
}

impl Api {
    /// Send one user turn and return the assistant's reply text.
    ///
    /// An absent `token` means anonymous mode, a supported path rather than
    /// an error state: the request simply goes out without an Authorization
    /// header and the server treats the turn as a throwaway session.
    pub async fn send_chat(
        &self,
        text: &str,
        image: Option<ImageAttachment>,
        token: Option<&str>,
    ) -> ApiResult<String> {
        let mut form = Form::new().text("user_input_text", text.to_string());
        if let Some(image) = image {
            let part = Part::bytes(image.bytes)
                .file_name(image.name)
                .mime_str(&image.mime)
                .map_err(|err| ApiError::Api(format!("Unsupported image type: {err}")))?;
            form = form.part("image_file", part);
        }

        let mut request = self.http.post(self.url("/chat/")).multipart(form);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|err| {
            tracing::warn!("chat request failed: {err}");
            ApiError::Network(NETWORK_MESSAGE.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            tracing::warn!("chat response unreadable: {err}");
            ApiError::Network(NETWORK_MESSAGE.to_string())
        })?;

        if !status.is_success() {
            return Err(ApiError::Api(failure_message(&body, GENERIC_FAILURE)));
        }

        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(data) => Ok(data.ai_response),
            Err(err) => {
                tracing::warn!("malformed chat response: {err}");
                Err(ApiError::Api(GENERIC_FAILURE.to_string()))
            }
        }
    }
}

pub async fn send_chat(
    text: String,
    image: Option<ImageAttachment>,
    token: Option<String>,
) -> ApiResult<String> {
    let api =
        Api::from_env().map_err(|err| ApiError::Api(format!("Configuration error: {err}")))?;
    api.send_chat(&text, image, token.as_deref()).await
}
