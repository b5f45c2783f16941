//! LocalStorage 会话存储
//!
//! 通过 `gloo-storage` 访问浏览器 LocalStorage，实现核心库的 `SessionStore`。

use gloo_storage::{LocalStorage, Storage};
use store_admin::SessionStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn remove(&self, key: &str) -> bool {
        LocalStorage::raw().remove_item(key).is_ok()
    }
}
