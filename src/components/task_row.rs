//! Task Row Component
//!
//! One task: text, category, due date, status badge and status selector.

use leptos::prelude::*;
use taskboard_api::{Task, TaskStatus};

use crate::board::format_timestamp;

#[component]
pub fn TaskRow(
    task: Task,
    /// Resolved category name; empty until categories load or when unknown
    #[prop(into)]
    category: Signal<Option<String>>,
    #[prop(into)] on_status_change: Callback<(u32, TaskStatus)>,
) -> impl IntoView {
    let id = task.id;
    let status = task.status;

    view! {
        <div class="task-item">
            <div class="task-content">
                <h3 class="task-title">{task.text}</h3>
                <span class="task-category">{move || category.get()}</span>
                {task.due_at.map(|due| view! {
                    <span class="task-due">"Vence: " {format_timestamp(&due)}</span>
                })}
            </div>
            <div class="task-actions">
                <span class=format!("status-badge {}", status.css_class())>
                    {status.as_str()}
                </span>
            </div>
            <div class="task-actions">
                <select
                    class=format!("status-select {}", status.css_class())
                    prop:value=status.as_str()
                    on:change=move |ev| {
                        match TaskStatus::from_value(&event_target_value(&ev)) {
                            Some(next) => on_status_change.run((id, next)),
                            None => log::warn!("unknown status selected for task {}", id),
                        }
                    }
                >
                    {TaskStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str() selected={*s == status}>{s.as_str()}</option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
