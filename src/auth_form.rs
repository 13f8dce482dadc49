//! Auth Form
//!
//! Login/registration form state and client-side validation.

use thiserror::Error;

use crate::session::{self, Services, Session};
use crate::state::StateCell;

pub const USERNAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn label(&self) -> &'static str {
        match self {
            AuthMode::Login => "Iniciar Sesión",
            AuthMode::Register => "Registrarse",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    /// Inline error shown under the fields
    pub error: Option<String>,
}

/// Rejected credentials. `Display` is the message shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("El nombre de usuario es requerido")]
    UsernameRequired,
    #[error("El nombre de usuario debe tener menos de 50 caracteres")]
    UsernameTooLong,
    #[error("La contraseña es requerida")]
    PasswordRequired,
    #[error("La contraseña debe tener al menos 8 caracteres")]
    PasswordTooShort,
}

/// Checks run in order; the first violation wins.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::UsernameRequired);
    }
    if username.chars().count() > USERNAME_MAX_CHARS {
        return Err(ValidationError::UsernameTooLong);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Submit handler for the auth form.
///
/// Invalid input sets the inline error and never reaches the network.
/// A successful registration flips the form to login mode.
pub async fn submit_auth_form(
    services: &Services,
    session: &impl StateCell<Session>,
    form: &impl StateCell<AuthForm>,
) {
    form.write(|f| f.error = None);
    let (mode, username, password) = form.read(|f| (f.mode, f.username.clone(), f.password.clone()));

    if let Err(e) = validate_credentials(&username, &password) {
        log::debug!("auth form rejected: {}", e);
        form.write(|f| f.error = Some(e.to_string()));
        return;
    }

    match mode {
        AuthMode::Login => {
            session::login(services, session, &username, &password).await;
        }
        AuthMode::Register => {
            if session::register(services, &username, &password).await {
                form.write(|f| f.mode = AuthMode::Login);
            }
        }
    }
}
