//! Browser glue (WASM only)
//!
//! Each unit reads the page, registers its listeners and feeds events into
//! the core state machines. Listener closures are leaked for the page
//! lifetime.

mod actions;
mod nav;
mod page;
mod reveal;
mod scroll;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::SiteConfig;
use crate::error::{Error, Result};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Dom("no window".to_string()))
}

pub(crate) fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| Error::Dom("no document".to_string()))
}

/// First element matching `selector`, if any
pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        el.style().set_property(property, value)?;
    }
    Ok(())
}

/// Register `callback` for `event` on `target` for the page lifetime
pub(crate) fn listen<E, F>(target: &web_sys::EventTarget, event: &str, callback: F) -> Result<()>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(callback);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn install_all() {
    let config = Rc::new(SiteConfig::load());

    if let Err(e) = page::install() {
        log::error!("Page bootstrap failed: {e}");
    }
    if let Err(e) = theme::install() {
        log::error!("Theme controller failed: {e}");
    }

    let panel = match nav::install() {
        Ok(panel) => panel,
        Err(e) => {
            log::error!("Mobile menu failed: {e}");
            Rc::new(RefCell::new(nav::NavPanel::detached()))
        }
    };
    if let Err(e) = scroll::install(panel) {
        log::error!("Smooth scroll failed: {e}");
    }
    if let Err(e) = reveal::install() {
        log::error!("Reveal animations failed: {e}");
    }
    if let Err(e) = page::install_header() {
        log::error!("Header scroll effect failed: {e}");
    }
    if let Err(e) = actions::install(config) {
        log::error!("Contact shortcuts failed: {e}");
    }

    log::info!("Portfolio interactions ready");
}

/// Install every unit once the document has loaded
pub fn run() -> Result<()> {
    let document = document()?;
    if crate::page::is_loading(&document.ready_state()) {
        listen(&document, "DOMContentLoaded", move |_: web_sys::Event| {
            install_all();
        })?;
    } else {
        install_all();
    }
    Ok(())
}
