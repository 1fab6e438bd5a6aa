use crate::shared::api_utils::post_json_raw;
use contracts::system::registration::{
    FieldError, RegisterRequest, RegisterResponse, ValidationErrors, VerifyRequest, VerifyResponse,
};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// 422 with per-field messages
    Invalid(Vec<FieldError>),
    Failed(String),
}

/// First message reported for `field`
pub fn field_error(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, SubmitError> {
    if response.status() == 422 {
        let body: ValidationErrors = response
            .json()
            .await
            .map_err(|e| SubmitError::Failed(format!("Failed to parse response: {}", e)))?;
        return Err(SubmitError::Invalid(body.errors));
    }
    if !response.ok() {
        return Err(SubmitError::Failed(format!("HTTP error: {}", response.status())));
    }
    response
        .json()
        .await
        .map_err(|e| SubmitError::Failed(format!("Failed to parse response: {}", e)))
}

pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, SubmitError> {
    let response = post_json_raw("/api/registration", request)
        .await
        .map_err(SubmitError::Failed)?;
    read(response).await
}

pub async fn verify(request: &VerifyRequest) -> Result<VerifyResponse, SubmitError> {
    let response = post_json_raw("/api/registration/verify", request)
        .await
        .map_err(SubmitError::Failed)?;
    read(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_picks_matching_field() {
        let errors = vec![
            FieldError {
                field: "name".into(),
                message: "short".into(),
            },
            FieldError {
                field: "email".into(),
                message: "invalid".into(),
            },
        ];
        assert_eq!(field_error(&errors, "email").as_deref(), Some("invalid"));
        assert_eq!(field_error(&errors, "password"), None);
    }
}
