use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{MediaQueryListEvent, MouseEvent, Storage};

use super::{document, listen, window};
use crate::consts::{DARK_SCHEME_QUERY, THEME_ATTRIBUTE, THEME_TOGGLE_ID};
use crate::error::Result;
use crate::theme::{Theme, ThemeController, ThemeStore};

/// `localStorage` adapter. Without storage every read is empty and writes
/// are dropped.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

fn apply(theme: Theme) -> Result<()> {
    if let Some(root) = document()?.document_element() {
        root.set_attribute(THEME_ATTRIBUTE, theme.as_str())?;
    }
    Ok(())
}

pub fn install() -> Result<()> {
    let controller = ThemeController::initialize(LocalStore::open());
    apply(controller.theme())?;
    let controller = Rc::new(RefCell::new(controller));

    if let Some(toggle) = document()?.get_element_by_id(THEME_TOGGLE_ID) {
        let controller = controller.clone();
        listen(&toggle, "click", move |_: MouseEvent| {
            let theme = controller.borrow_mut().toggle();
            if let Err(e) = apply(theme) {
                log::warn!("Could not apply theme: {e}");
            }
        })?;
    }

    if let Some(media) = window()?.match_media(DARK_SCHEME_QUERY)? {
        listen(&media, "change", move |event: MediaQueryListEvent| {
            if let Some(theme) = controller.borrow_mut().system_scheme_changed(event.matches()) {
                if let Err(e) = apply(theme) {
                    log::warn!("Could not apply theme: {e}");
                }
            }
        })?;
    }

    Ok(())
}
