//! Tasks View Component
//!
//! Dashboard, task list and the two creation modals.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskboard_api::TaskStatus;

use crate::board::{change_status, refresh_categories, refresh_tasks, BoardState};
use crate::components::{CategoryModal, Dashboard, TaskModal, TaskRow};
use crate::context::use_app_context;

#[component]
pub fn TasksView() -> impl IntoView {
    let ctx = use_app_context();
    let board = RwSignal::new(BoardState::default());

    // Load both lists on mount; they land in whatever order the server answers
    Effect::new(move |_| {
        let Some(token) = ctx.token() else { return };
        let api = ctx.services().api;
        let categories_api = api.clone();
        spawn_local(async move {
            refresh_tasks(api.as_ref(), &token, &board).await;
        });
        spawn_local(async move {
            refresh_categories(categories_api.as_ref(), &board).await;
        });
    });

    let counts = Memo::new(move |_| board.with(|b| b.counts()));

    let on_status_change = Callback::new(move |(task_id, status): (u32, TaskStatus)| {
        let Some(token) = ctx.token() else { return };
        let api = ctx.services().api;
        spawn_local(async move {
            change_status(api.as_ref(), &token, &board, task_id, status).await;
        });
    });

    view! {
        <Dashboard counts=counts />

        <div class="tasks-header">
            <h2>"Mis Tareas"</h2>
            <div class="task-actions">
                <button
                    class="btn btn-outline"
                    on:click=move |_| board.update(|b| b.category_modal_open = true)
                >
                    "Nueva Categoría"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| board.update(|b| b.task_modal_open = true)
                >
                    "Agregar Nueva Tarea"
                </button>
            </div>
        </div>

        <div class="task-list">
            <For
                each=move || board.with(|b| {
                    b.tasks.iter().map(|t| (b.row_revision, t.clone())).collect::<Vec<_>>()
                })
                key=|(revision, task)| {
                    // Every field a status change can touch; the revision
                    // rebuilds rows whose select was left on a rejected value
                    (*revision, task.id, task.status, task.category_id, task.due_at.clone())
                }
                children=move |(_, task)| {
                    let category_id = task.category_id;
                    let category = Signal::derive(move || {
                        board.with(|b| b.category_name(category_id).map(String::from))
                    });
                    view! {
                        <TaskRow
                            task=task
                            category=category
                            on_status_change=on_status_change
                        />
                    }
                }
            />
        </div>

        <CategoryModal board=board />
        <TaskModal board=board />
    }
}
