//! Toast Notifications
//!
//! A single slot holding the visible toast. Each toast arms its own
//! timer and every timer clears the slot when it fires, whichever toast
//! is showing by then.

use std::collections::VecDeque;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::StateCell;

/// How long a toast stays up
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}

/// Anything that can put a toast on screen
pub trait Notify {
    fn notify(&self, toast: Toast);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastSlot {
    current: Option<Toast>,
    /// Deadlines (ms) of armed timers, oldest first
    timers: VecDeque<f64>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Replace whatever is showing and arm a clear timer
    pub fn show(&mut self, toast: Toast, now_ms: f64) {
        self.current = Some(toast);
        self.timers.push_back(now_ms + f64::from(TOAST_DURATION_MS));
    }

    /// The oldest armed timer fired
    pub fn fire_timer(&mut self) {
        self.timers.pop_front();
        self.current = None;
    }

    /// Fire every timer due at `now_ms`
    #[cfg(test)]
    pub fn expire(&mut self, now_ms: f64) {
        while self.timers.front().is_some_and(|deadline| *deadline <= now_ms) {
            self.fire_timer();
        }
    }
}

/// Browser `Notify`: writes the slot signal and schedules its timer
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    slot: RwSignal<ToastSlot>,
}

impl ToastNotifier {
    pub fn new(slot: RwSignal<ToastSlot>) -> Self {
        Self { slot }
    }
}

impl Notify for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let slot = self.slot;
        StateCell::write(&slot, |s| s.show(toast, js_sys::Date::now()));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            StateCell::write(&slot, |s| s.fire_timer());
        });
    }
}
