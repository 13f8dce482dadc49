//! Taskboard Frontend App
//!
//! Root composition: header, auth forms or task board, toast.

use std::rc::Rc;

use leptos::prelude::*;
use taskboard_api::{ApiConfig, HttpTaskApi, TaskApi};

use crate::components::{AppHeader, AuthForms, TasksView, ToastView};
use crate::context::AppContext;
use crate::storage::open_token_storage;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("backend at {}", config.base_url());
    let api: Rc<dyn TaskApi> = Rc::new(HttpTaskApi::new(config));

    let ctx = AppContext::new(api, open_token_storage());
    provide_context(ctx);

    let authenticated = move || ctx.session.with(|s| s.is_authenticated());

    view! {
        <div class="app">
            <AppHeader />

            <main class="main-content">
                <Show when=authenticated fallback=|| view! { <AuthForms /> }>
                    <TasksView />
                </Show>
            </main>

            <ToastView />
        </div>
    }
}
