//! Category Modal Component
//!
//! "New category" dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{create_category, BoardState, CATEGORY_DESCRIPTION_MAX_CHARS, CATEGORY_NAME_MAX_CHARS};
use crate::context::use_app_context;

#[component]
pub fn CategoryModal(board: RwSignal<BoardState>) -> impl IntoView {
    let ctx = use_app_context();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = ctx.token() else { return };
        let api = ctx.services().api;
        spawn_local(async move {
            create_category(api.as_ref(), &token, &board).await;
        });
    };

    view! {
        <Show when=move || board.with(|b| b.category_modal_open)>
            <div class="modal-overlay active">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2>"Crear Nueva Categoría"</h2>
                        <button
                            class="modal-close"
                            on:click=move |_| board.update(|b| b.category_modal_open = false)
                        >
                            "×"
                        </button>
                    </div>
                    <form on:submit=submit>
                        <div class="form-group">
                            <label class="form-label">"Nombre de la Categoría"</label>
                            <input
                                type="text"
                                class="form-input"
                                maxlength=CATEGORY_NAME_MAX_CHARS.to_string()
                                required
                                prop:value=move || board.with(|b| b.category_form.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    board.update(|b| b.category_form.name = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label">"Descripción"</label>
                            <textarea
                                class="form-input"
                                maxlength=CATEGORY_DESCRIPTION_MAX_CHARS.to_string()
                                prop:value=move || board.with(|b| b.category_form.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    board.update(|b| b.category_form.description = value);
                                }
                            />
                        </div>

                        <button type="submit" class="btn btn-primary">
                            "Crear Categoría"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
