//! Login form and its validation rules.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Submitted login form.
///
/// Absent fields deserialize as empty strings so they fail the "required"
/// rule instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(
        custom(function = "username_present"),
        length(
            max = 64,
            message = "Der Benutzername darf höchstens 64 Zeichen lang sein."
        )
    )]
    pub username: String,

    #[serde(default)]
    #[validate(
        custom(function = "password_present"),
        length(
            max = 128,
            message = "Das Passwort darf höchstens 128 Zeichen lang sein."
        )
    )]
    pub password: String,

    /// Checked by the CSRF middleware before the handler runs.
    #[serde(default)]
    pub csrf_token: String,
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed(message)));
    }
    Ok(())
}

fn username_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Bitte Benutzername eingeben.")
}

fn password_present(value: &str) -> Result<(), ValidationError> {
    required(value, "Bitte Passwort eingeben.")
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Per-field messages shown next to the inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Vec<String>,
    pub password: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    fn from_validation(errors: &ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let messages = |field: &str| -> Vec<String> {
            let Some(errs) = field_errors.get(field) else {
                return Vec::new();
            };
            // A blank field only reports that it is required.
            if let Some(required) = errs.iter().find(|e| e.code == "required") {
                return vec![message_of(required)];
            }
            errs.iter().map(message_of).collect()
        };

        Self {
            username: messages("username"),
            password: messages("password"),
        }
    }
}

impl LoginForm {
    /// Runs field validation.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate()
            .map_err(|errors| FieldErrors::from_validation(&errors))
    }

    /// Username with surrounding whitespace removed.
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}
