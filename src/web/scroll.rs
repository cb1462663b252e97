use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use super::nav::NavPanel;
use super::{document, listen, query, query_all, window};
use crate::consts::{ANCHOR_SELECTOR, HEADER_SELECTOR};
use crate::error::Result;
use crate::scroll;

fn element_top(id: &str) -> Option<f64> {
    let element = document().ok()?.get_element_by_id(id)?;
    let client_top = element.get_bounding_client_rect().top();
    let scroll_y = window().ok()?.scroll_y().ok()?;
    Some(scroll::document_top(client_top, scroll_y))
}

fn header_height() -> f64 {
    document()
        .ok()
        .and_then(|d| query(&d, HEADER_SELECTOR))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn install(panel: Rc<RefCell<NavPanel>>) -> Result<()> {
    let document = document()?;
    let anchors = query_all(&document, ANCHOR_SELECTOR)?;
    let count = anchors.len();

    for anchor in anchors {
        let panel = panel.clone();
        let target = anchor.clone();
        listen(&anchor, "click", move |event: MouseEvent| {
            event.prevent_default();

            let href = target.get_attribute("href").unwrap_or_default();
            let plan = scroll::plan(&href, element_top, header_height());
            if let Some(top) = plan.top {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                if let Ok(window) = window() {
                    window.scroll_to_with_scroll_to_options(&options);
                }
            }
            if plan.close_menu {
                panel.borrow_mut().close();
            }
        })?;
    }

    log::info!("Smooth scroll wired to {count} anchors");
    Ok(())
}
