use chrono::{DateTime, Duration, Utc};
use contracts::system::registration::{
    DeliveryStatus, FieldError, RegisterRequest, RegisterResponse, VerifyOutcome, VerifyRequest,
    VerifyResponse, VERIFICATION_CODE_LEN,
};
use once_cell::sync::OnceCell;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

use super::sender::{TracingSender, VerificationSender};
use crate::shared::config::RegistrationConfig;

static SERVICE: OnceCell<RegistrationService> = OnceCell::new();

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("invalid registration data")]
    Validation(Vec<FieldError>),

    #[error("registration service is not initialized")]
    NotInitialized,
}

/// Registration waiting for its code. The password is never kept.
#[derive(Debug, Clone)]
struct PendingRegistration {
    name: String,
    code: String,
    expires_at: DateTime<Utc>,
}

pub struct RegistrationService {
    pending: Mutex<HashMap<String, PendingRegistration>>,
    sender: Arc<dyn VerificationSender>,
    fixed_code: Option<String>,
    ttl: Duration,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    (0..VERIFICATION_CODE_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

impl RegistrationService {
    pub fn new(config: &RegistrationConfig, sender: Arc<dyn VerificationSender>) -> Self {
        let fixed_code = config
            .fixed_code
            .as_ref()
            .map(|c| c.trim().to_string())
            .filter(|c| {
                let valid = contracts::system::registration::is_valid_code(c);
                if !valid {
                    tracing::warn!("Ignoring registration.fixed_code '{}': not 6 digits", c);
                }
                valid
            });
        Self {
            pending: Mutex::new(HashMap::new()),
            sender,
            fixed_code,
            ttl: Duration::minutes(config.code_ttl_minutes.max(1)),
        }
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<String, PendingRegistration>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn next_code(&self) -> String {
        self.fixed_code.clone().unwrap_or_else(generate_code)
    }

    /// Validate, keep a pending entry and send the code
    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterResponse, RegistrationError> {
        self.register_at(request, Utc::now()).await
    }

    async fn register_at(
        &self,
        request: RegisterRequest,
        now: DateTime<Utc>,
    ) -> Result<RegisterResponse, RegistrationError> {
        let errors = request.validate();
        if !errors.is_empty() {
            return Err(RegistrationError::Validation(errors));
        }

        let email = normalize_email(&request.email);
        let name = request.name.trim().to_string();
        let code = self.next_code();

        {
            let mut pending = self.pending();
            pending.retain(|_, p| p.expires_at > now);
            pending.insert(
                email.clone(),
                PendingRegistration {
                    name: name.clone(),
                    code: code.clone(),
                    expires_at: now + self.ttl,
                },
            );
        }

        let status = match self.sender.send(&email, &name, &code).await {
            Ok(()) => DeliveryStatus::Success,
            Err(e) => {
                tracing::error!("Failed to deliver verification code to {}: {}", email, e);
                self.pending().remove(&email);
                DeliveryStatus::Failure
            }
        };

        Ok(RegisterResponse { email, status })
    }

    pub fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse, RegistrationError> {
        self.verify_at(request, Utc::now())
    }

    fn verify_at(
        &self,
        request: &VerifyRequest,
        now: DateTime<Utc>,
    ) -> Result<VerifyResponse, RegistrationError> {
        let errors = request.validate();
        if !errors.is_empty() {
            return Err(RegistrationError::Validation(errors));
        }

        let email = normalize_email(&request.email);
        let mut pending = self.pending();

        let outcome = match pending.get(&email) {
            None => VerifyOutcome::NotFound,
            Some(entry) if entry.expires_at <= now => {
                pending.remove(&email);
                VerifyOutcome::Expired
            }
            Some(entry) if entry.code == request.code.trim() => {
                tracing::info!("Registration of {} <{}> verified", entry.name, email);
                pending.remove(&email);
                VerifyOutcome::Verified
            }
            Some(_) => VerifyOutcome::InvalidCode,
        };

        Ok(VerifyResponse { email, outcome })
    }
}

/// Build the global service with the log-only sender
pub fn initialize(config: &RegistrationConfig) {
    let service = RegistrationService::new(config, Arc::new(TracingSender));
    if SERVICE.set(service).is_err() {
        tracing::warn!("Registration service already initialized");
    }
}

pub fn get_service() -> Result<&'static RegistrationService, RegistrationError> {
    SERVICE.get().ok_or(RegistrationError::NotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::shared::language::Language;

    struct FailingSender;

    #[async_trait]
    impl VerificationSender for FailingSender {
        async fn send(&self, _: &str, _: &str, _: &str) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("smtp down"))
        }
    }

    fn config(fixed_code: Option<&str>) -> RegistrationConfig {
        RegistrationConfig {
            fixed_code: fixed_code.map(str::to_string),
            code_ttl_minutes: 15,
        }
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ana".into(),
            email: email.into(),
            password: "secret1".into(),
            language: Language::Pt,
        }
    }

    fn verify_request(email: &str, code: &str) -> VerifyRequest {
        VerifyRequest {
            email: email.into(),
            code: code.into(),
            language: Language::Pt,
        }
    }

    #[test]
    fn test_generated_code_has_six_digits() {
        for _ in 0..20 {
            let code = generate_code();
            assert!(contracts::system::registration::is_valid_code(&code));
        }
    }

    #[tokio::test]
    async fn test_register_then_verify_with_fixed_code() {
        let service = RegistrationService::new(&config(Some("123456")), Arc::new(TracingSender));
        let response = service
            .register(register_request(" Ana@Agence.com "))
            .await
            .unwrap();
        assert_eq!(response.email, "ana@agence.com");
        assert_eq!(response.status, DeliveryStatus::Success);

        let wrong = service
            .verify(&verify_request("ana@agence.com", "654321"))
            .unwrap();
        assert_eq!(wrong.outcome, VerifyOutcome::InvalidCode);

        let ok = service
            .verify(&verify_request("ANA@agence.com", "123456"))
            .unwrap();
        assert_eq!(ok.outcome, VerifyOutcome::Verified);

        let again = service
            .verify(&verify_request("ana@agence.com", "123456"))
            .unwrap();
        assert_eq!(again.outcome, VerifyOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_registration_is_rejected() {
        let service = RegistrationService::new(&config(None), Arc::new(TracingSender));
        let mut request = register_request("not-an-email");
        request.password = "123".into();

        match service.register(request).await {
            Err(RegistrationError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected result: {:?}", other.map(|r| r.status)),
        }
    }

    #[tokio::test]
    async fn test_expired_code() {
        let service = RegistrationService::new(&config(Some("123456")), Arc::new(TracingSender));
        let start = Utc::now();
        service
            .register_at(register_request("ana@agence.com"), start)
            .await
            .unwrap();

        let later = start + Duration::minutes(16);
        let result = service
            .verify_at(&verify_request("ana@agence.com", "123456"), later)
            .unwrap();
        assert_eq!(result.outcome, VerifyOutcome::Expired);
    }

    #[tokio::test]
    async fn test_delivery_failure_drops_pending_entry() {
        let service = RegistrationService::new(&config(Some("123456")), Arc::new(FailingSender));
        let response = service
            .register(register_request("ana@agence.com"))
            .await
            .unwrap();
        assert_eq!(response.status, DeliveryStatus::Failure);

        let result = service
            .verify(&verify_request("ana@agence.com", "123456"))
            .unwrap();
        assert_eq!(result.outcome, VerifyOutcome::NotFound);
    }

    #[test]
    fn test_malformed_fixed_code_is_ignored() {
        let service = RegistrationService::new(&config(Some("abc")), Arc::new(TracingSender));
        assert!(service.fixed_code.is_none());
    }

    #[test]
    fn test_malformed_code_fails_validation() {
        let service = RegistrationService::new(&config(None), Arc::new(TracingSender));
        assert!(matches!(
            service.verify(&verify_request("ana@agence.com", "12")),
            Err(RegistrationError::Validation(_))
        ));
    }
}
