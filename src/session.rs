//! Session Store
//!
//! Bearer token and user identity, plus the login/register/logout flows.

use std::rc::Rc;

use taskboard_api::{NewUser, TaskApi, User};

use crate::state::StateCell;
use crate::storage::TokenStorage;
use crate::toast::{Notify, Toast};

/// Collaborators shared by every flow, created once at the root
#[derive(Clone)]
pub struct Services {
    pub api: Rc<dyn TaskApi>,
    pub storage: Rc<dyn TokenStorage>,
    pub notifier: Rc<dyn Notify>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    /// Known only after a login in this page; the backend has no profile endpoint
    pub user: Option<User>,
}

impl Session {
    /// Session as left by the previous page load
    pub fn restore(storage: &dyn TokenStorage) -> Self {
        Self {
            token: storage.load(),
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Avatar letter
    pub fn user_initial(&self) -> Option<char> {
        self.user
            .as_ref()
            .and_then(|u| u.username.chars().next())
            .map(|c| c.to_uppercase().next().unwrap_or(c))
    }
}

/// Exchange credentials for a bearer token.
///
/// Failures are reported through a toast; the session stays logged out.
pub async fn login(
    services: &Services,
    session: &impl StateCell<Session>,
    username: &str,
    password: &str,
) -> bool {
    match services.api.login(username, password).await {
        Ok(token) => {
            services.storage.save(&token.access_token);
            session.write(|s| {
                s.token = Some(token.access_token);
                s.user = Some(User {
                    id: None,
                    username: username.to_string(),
                    profile_image: None,
                });
            });
            log::info!("logged in as {}", username);
            services.notifier.notify(Toast::success("¡Sesión iniciada exitosamente!"));
            true
        }
        Err(e) => {
            log::error!("login failed: {}", e);
            services.notifier.notify(Toast::error(
                "Error al iniciar sesión. Por favor verifica tus credenciales.",
            ));
            false
        }
    }
}

/// Create an account. Does not log in.
pub async fn register(services: &Services, username: &str, password: &str) -> bool {
    let user = NewUser {
        username: username.to_string(),
        password: password.to_string(),
        profile_image: None,
    };
    match services.api.register(&user).await {
        Ok(()) => {
            log::info!("registered {}", username);
            services.notifier.notify(Toast::success("¡Registro exitoso! Por favor inicia sesión."));
            true
        }
        Err(e) => {
            log::error!("registration failed: {}", e);
            services.notifier.notify(Toast::error(
                "Error en el registro. Por favor intenta nuevamente.",
            ));
            false
        }
    }
}

pub fn logout(services: &Services, session: &impl StateCell<Session>) {
    services.storage.clear();
    session.write(|s| *s = Session::default());
    log::info!("logged out");
    services.notifier.notify(Toast::success("Sesión cerrada exitosamente"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{harness, Endpoint, MockApi};
    use crate::toast::ToastKind;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_login_persists_token_across_reload() {
        let h = harness(MockApi::new().with_token("tok-123"));
        let session = Rc::new(RefCell::new(Session::default()));

        assert!(login(&h.services, &session, "ana", "secreto123").await);
        assert_eq!(session.borrow().token.as_deref(), Some("tok-123"));
        assert!(session.borrow().is_authenticated());
        assert_eq!(h.notifier.kinds(), vec![ToastKind::Success]);

        // Simulated reload: fresh session read back from durable storage
        let reloaded = Session::restore(&h.storage);
        assert_eq!(reloaded.token.as_deref(), Some("tok-123"));
        assert!(reloaded.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_stays_logged_out() {
        let api = MockApi::new();
        api.fail(Endpoint::Login, 401);
        let h = harness(api);
        let session = Rc::new(RefCell::new(Session::default()));

        assert!(!login(&h.services, &session, "ana", "incorrecta").await);
        assert!(!session.borrow().is_authenticated());
        assert_eq!(h.storage.load(), None);
        assert_eq!(h.notifier.kinds(), vec![ToastKind::Error]);
    }

    #[tokio::test]
    async fn test_login_records_user_initial() {
        let h = harness(MockApi::new());
        let session = Rc::new(RefCell::new(Session::default()));

        login(&h.services, &session, "lucía", "secreto123").await;
        assert_eq!(session.borrow().user_initial(), Some('L'));
        assert_eq!(session.borrow().user.as_ref().and_then(|u| u.id), None);
    }

    #[tokio::test]
    async fn test_register_sends_null_profile_image_and_does_not_log_in() {
        let h = harness(MockApi::new());

        assert!(register(&h.services, "ana", "secreto123").await);
        let sent = h.api.registered();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].username, "ana");
        assert_eq!(sent[0].profile_image, None);
        assert_eq!(h.storage.load(), None);
        assert_eq!(h.notifier.kinds(), vec![ToastKind::Success]);
    }

    #[tokio::test]
    async fn test_register_failure_notifies_error() {
        let api = MockApi::new();
        api.fail(Endpoint::Register, 409);
        let h = harness(api);

        assert!(!register(&h.services, "ana", "secreto123").await);
        assert_eq!(h.notifier.kinds(), vec![ToastKind::Error]);
    }

    #[test]
    fn test_logout_clears_storage_and_memory() {
        let h = harness(MockApi::new());
        h.storage.save("tok");
        let session = Rc::new(RefCell::new(Session::restore(&h.storage)));

        logout(&h.services, &session);

        assert_eq!(*session.borrow(), Session::default());
        assert_eq!(Session::restore(&h.storage).token, None);
        assert_eq!(h.notifier.kinds(), vec![ToastKind::Success]);
    }
}
