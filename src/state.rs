//! State Cells
//!
//! Session, board and toast logic is written against `StateCell` so it runs
//! against Leptos signals in the browser and plain `RefCell`s in tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Shared, mutable state owned by the UI tree.
///
/// Closures must not await; cells are never borrowed across a suspension point.
pub trait StateCell<T> {
    /// Read without subscribing
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn write(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        WithUntracked::with_untracked(self, f)
    }

    fn write(&self, f: impl FnOnce(&mut T)) {
        // A response landing after the owning view unmounted finds the
        // signal disposed; nothing to update then.
        if Update::try_update(self, f).is_none() {
            log::debug!("state update dropped: signal disposed");
        }
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut())
    }
}
