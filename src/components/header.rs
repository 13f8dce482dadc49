//! App Header Component
//!
//! Logo, plus avatar and logout once signed in.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::session;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |_| {
        session::logout(&ctx.services(), &ctx.session);
    };

    view! {
        <header class="header">
            <div class="header-logo">
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                </svg>
                "Gestor de Tareas"
            </div>
            <Show when=move || ctx.session.with(|s| s.is_authenticated())>
                <div class="header-actions">
                    <div class="user-menu">
                        <div class="user-avatar">
                            {move || ctx.session.with(|s| s.user_initial().map(String::from).unwrap_or_default())}
                        </div>
                        <button class="btn btn-danger" on:click=logout>
                            "Cerrar Sesión"
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}
