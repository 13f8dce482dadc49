//! Taskboard Frontend Entry Point

mod state;
mod storage;
mod toast;
mod session;
mod auth_form;
mod board;
mod context;
mod components;
mod app;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("taskboard starting");
    mount_to_body(App);
}
