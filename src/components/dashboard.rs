//! Dashboard Component
//!
//! Task counters above the list.

use leptos::prelude::*;

use crate::board::DashboardCounts;

#[component]
pub fn Dashboard(counts: Memo<DashboardCounts>) -> impl IntoView {
    view! {
        <div class="dashboard-grid">
            <div class="stat-card">
                <h3>"Total de Tareas"</h3>
                <div class="value">{move || counts.get().total}</div>
            </div>
            <div class="stat-card">
                <h3>"En Progreso"</h3>
                <div class="value">{move || counts.get().in_progress}</div>
            </div>
            <div class="stat-card">
                <h3>"Completadas"</h3>
                <div class="value">{move || counts.get().completed}</div>
            </div>
        </div>
    }
}
