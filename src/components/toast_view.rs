//! Toast Component
//!
//! Renders the toast slot, if occupied.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastView() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toasts.with(|slot| slot.current().cloned()).map(|toast| view! {
            <div class=format!("toast {} active", toast.kind.css_class())>
                {toast.kind.icon()}
                <span>{toast.message}</span>
            </div>
        })}
    }
}
