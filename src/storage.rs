//! Token Storage
//!
//! Durable home of the bearer token across page reloads.

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// `None` when there is no window or storage access is denied
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        self.storage.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Err(e) = self.storage.set_item(TOKEN_STORAGE_KEY, token) {
            log::error!("failed to persist token: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Err(e) = self.storage.remove_item(TOKEN_STORAGE_KEY) {
            log::error!("failed to remove token: {:?}", e);
        }
    }
}

/// Process-lifetime storage. Clones share the same slot.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    token: Rc<RefCell<Option<String>>>,
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Browser storage, or memory when localStorage is unavailable
/// (the session then ends with the page).
pub fn open_token_storage() -> Rc<dyn TokenStorage> {
    match BrowserStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("localStorage unavailable, session will not survive a reload");
            Rc::new(MemoryStorage::default())
        }
    }
}
