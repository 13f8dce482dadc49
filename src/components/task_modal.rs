//! Task Modal Component
//!
//! "New task" dialog: text, category and optional due date.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{create_task, BoardState};
use crate::context::use_app_context;

#[component]
pub fn TaskModal(board: RwSignal<BoardState>) -> impl IntoView {
    let ctx = use_app_context();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = ctx.token() else { return };
        let api = ctx.services().api;
        spawn_local(async move {
            create_task(api.as_ref(), &token, &board).await;
        });
    };

    view! {
        <Show when=move || board.with(|b| b.task_modal_open)>
            <div class="modal-overlay active">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2>"Crear Nueva Tarea"</h2>
                        <button
                            class="modal-close"
                            on:click=move |_| board.update(|b| b.task_modal_open = false)
                        >
                            "×"
                        </button>
                    </div>
                    <form on:submit=submit>
                        <div class="form-group">
                            <label class="form-label">"Descripción de la Tarea"</label>
                            <input
                                type="text"
                                class="form-input"
                                required
                                prop:value=move || board.with(|b| b.task_form.text.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    board.update(|b| b.task_form.text = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label class="form-label">"Categoría"</label>
                            <select
                                class="form-input"
                                required
                                prop:value=move || board.with(|b| b.task_form.category_id.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    board.update(|b| b.task_form.category_id = value);
                                }
                            >
                                <option value="">"Seleccionar Categoría"</option>
                                <For
                                    each=move || board.with(|b| b.categories.clone())
                                    key=|c| (c.id, c.name.clone())
                                    children=move |c| {
                                        view! { <option value=c.id.to_string()>{c.name}</option> }
                                    }
                                />
                            </select>
                        </div>

                        <div class="form-group">
                            <label class="form-label">"Fecha de Vencimiento"</label>
                            <input
                                type="datetime-local"
                                class="form-input"
                                prop:value=move || board.with(|b| b.task_form.due_at.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    board.update(|b| b.task_form.due_at = value);
                                }
                            />
                        </div>

                        <button type="submit" class="btn btn-primary">
                            "Crear Tarea"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
