use crate::shared::language::Language;
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const VERIFICATION_CODE_LEN: usize = 6;

/// `POST /api/registration`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub email: String,
    pub status: DeliveryStatus,
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Body of a 422 response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// `POST /api/registration/verify`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyOutcome {
    Verified,
    InvalidCode,
    Expired,
    NotFound,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub email: String,
    pub outcome: VerifyOutcome,
}

/// Minimal syntactic e-mail check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && !host.ends_with('.') && tld.len() >= 2
}

/// Exactly six ASCII digits
pub fn is_valid_code(code: &str) -> bool {
    code.len() == VERIFICATION_CODE_LEN && code.chars().all(|c| c.is_ascii_digit())
}

fn message(language: Language, pt: &str, es: &str) -> String {
    match language {
        Language::Pt => pt.to_string(),
        Language::Es => es.to_string(),
    }
}

impl RegisterRequest {
    /// Field errors in the request's language; empty when valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let lang = self.language;
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < NAME_MIN_LEN {
            errors.push(FieldError {
                field: "name".into(),
                message: message(
                    lang,
                    "O nome deve ter pelo menos 2 caracteres.",
                    "El nombre debe tener al menos 2 caracteres.",
                ),
            });
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError {
                field: "email".into(),
                message: message(
                    lang,
                    "Por favor, insira um email válido.",
                    "Por favor, ingrese un email válido.",
                ),
            });
        }
        if self.password.chars().count() < PASSWORD_MIN_LEN {
            errors.push(FieldError {
                field: "password".into(),
                message: message(
                    lang,
                    "A senha deve ter pelo menos 6 caracteres.",
                    "La contraseña debe tener al menos 6 caracteres.",
                ),
            });
        }

        errors
    }
}

impl VerifyRequest {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !is_valid_code(self.code.trim()) {
            errors.push(FieldError {
                field: "code".into(),
                message: message(
                    self.language,
                    "O código deve ter 6 dígitos.",
                    "El código debe tener 6 dígitos.",
                ),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("ana@agence.com.br"));
        assert!(is_valid_email(" ana@agence.com "));
        assert!(!is_valid_email("ana@agence"));
        assert!(!is_valid_email("@agence.com"));
        assert!(!is_valid_email("ana@@agence.com"));
        assert!(!is_valid_email("ana @agence.com"));
        assert!(!is_valid_email("ana@.com"));
    }

    #[test]
    fn test_code_check() {
        assert!(is_valid_code("123456"));
        assert!(!is_valid_code("12345"));
        assert!(!is_valid_code("12345a"));
    }

    #[test]
    fn test_validate_reports_each_field_in_language() {
        let req = RegisterRequest {
            name: "A".into(),
            email: "nope".into(),
            password: "123".into(),
            language: Language::Es,
        };
        let errors = req.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "password"]);
        assert!(errors[0].message.starts_with("El nombre"));
    }

    #[test]
    fn test_verify_request_checks_code_shape() {
        let req = VerifyRequest {
            email: "ana@agence.com".into(),
            code: "12 34".into(),
            language: Language::Pt,
        };
        let errors = req.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "code");
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        let req = RegisterRequest {
            name: "Ana".into(),
            email: "ana@agence.com".into(),
            password: "secret1".into(),
            language: Language::Pt,
        };
        assert!(req.validate().is_empty());
    }
}
