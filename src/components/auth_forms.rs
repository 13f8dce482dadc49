//! Auth Forms Component
//!
//! Login / registration tabs over a single username + password form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth_form::{submit_auth_form, AuthForm, AuthMode};
use crate::context::use_app_context;

#[component]
pub fn AuthForms() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(AuthForm::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let services = ctx.services();
        spawn_local(async move {
            submit_auth_form(&services, &ctx.session, &form).await;
        });
    };

    let is_mode = move |mode: AuthMode| form.with(|f| f.mode == mode);

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <div class="auth-tabs">
                    <button
                        class=move || if is_mode(AuthMode::Login) { "auth-tab active" } else { "auth-tab" }
                        on:click=move |_| form.update(|f| f.mode = AuthMode::Login)
                    >
                        {AuthMode::Login.label()}
                    </button>
                    <button
                        class=move || if is_mode(AuthMode::Register) { "auth-tab active" } else { "auth-tab" }
                        on:click=move |_| form.update(|f| f.mode = AuthMode::Register)
                    >
                        {AuthMode::Register.label()}
                    </button>
                </div>

                <form on:submit=submit>
                    <div class="form-group">
                        <label class="form-label">"Nombre de Usuario"</label>
                        <input
                            type="text"
                            class="form-input"
                            required
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.username = value);
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label">"Contraseña"</label>
                        <input
                            type="password"
                            class="form-input"
                            required
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = value);
                            }
                        />
                    </div>

                    {move || form.with(|f| f.error.clone()).map(|error| view! {
                        <div class="form-error">{error}</div>
                    })}

                    <button type="submit" class="btn btn-primary">
                        {move || form.with(|f| f.mode.label())}
                    </button>
                </form>
            </div>
        </div>
    }
}
