//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use taskboard_api::TaskApi;

use crate::session::{Services, Session};
use crate::storage::TokenStorage;
use crate::toast::{ToastNotifier, ToastSlot};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bearer token and user; `None` token means the auth forms are shown
    pub session: RwSignal<Session>,
    /// The single visible toast
    pub toasts: RwSignal<ToastSlot>,
    /// Backend, token storage and notifier (not `Send`, kept local)
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(api: Rc<dyn TaskApi>, storage: Rc<dyn TokenStorage>) -> Self {
        let toasts = RwSignal::new(ToastSlot::default());
        let session = RwSignal::new(Session::restore(storage.as_ref()));
        let services = Services {
            api,
            storage,
            notifier: Rc::new(ToastNotifier::new(toasts)),
        };
        Self {
            session,
            toasts,
            services: StoredValue::new_local(services),
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    /// Current bearer token, without subscribing
    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token.clone())
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
