use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::system::registration::{RegisterRequest, ValidationErrors, VerifyRequest};

use crate::system::registration::service::{get_service, RegistrationError};

fn registration_error_response(e: RegistrationError) -> Response {
    match e {
        RegistrationError::Validation(errors) => {
            tracing::warn!("Registration rejected: {} invalid field(s)", errors.len());
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrors { errors }),
            )
                .into_response()
        }
        RegistrationError::NotInitialized => {
            tracing::error!("Registration service is not initialized");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /api/registration
pub async fn register(Json(request): Json<RegisterRequest>) -> Response {
    let service = match get_service() {
        Ok(s) => s,
        Err(e) => return registration_error_response(e),
    };
    match service.register(request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => registration_error_response(e),
    }
}

/// POST /api/registration/verify
pub async fn verify(Json(request): Json<VerifyRequest>) -> Response {
    match get_service().and_then(|s| s.verify(&request)) {
        Ok(response) => Json(response).into_response(),
        Err(e) => registration_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure_routes;
    use crate::shared::config::RegistrationConfig;
    use crate::system::registration::service::initialize;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use contracts::system::registration::RegisterResponse;
    use tower::ServiceExt;

    async fn post_json(uri: &str, body: &str) -> Response {
        initialize(&RegistrationConfig::default());
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        configure_routes().oneshot(req).await.unwrap()
    }

    async fn body_json<T: serde::de::DeserializeOwned>(resp: Response) -> T {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_registration_returns_422_with_field_errors() {
        let resp = post_json(
            "/api/registration",
            r#"{"name":"A","email":"ana@","password":"123","language":"es"}"#,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ValidationErrors = body_json(resp).await;
        let fields: Vec<&str> = body.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
        assert_eq!(
            body.errors[0].message,
            "El nombre debe tener al menos 2 caracteres."
        );
    }

    #[tokio::test]
    async fn test_malformed_code_returns_422() {
        let resp = post_json(
            "/api/registration/verify",
            r#"{"email":"ana@agence.com","code":"12a"}"#,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ValidationErrors = body_json(resp).await;
        assert_eq!(body.errors.len(), 1);
        assert_eq!(body.errors[0].field, "code");
    }

    #[tokio::test]
    async fn test_valid_registration_returns_ok() {
        let resp = post_json(
            "/api/registration",
            r#"{"name":"Ana","email":"Ana@Agence.com","password":"secret1"}"#,
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: RegisterResponse = body_json(resp).await;
        assert_eq!(body.email, "ana@agence.com");
    }
}
