use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{document, query_all, set_style};
use crate::error::Result;
use crate::reveal::{
    INDEX_ATTRIBUTE, ROOT_MARGIN, RevealSet, RevealState, THRESHOLD, TARGET_SELECTOR, TRANSITION,
};

fn apply_style(element: &web_sys::Element, state: RevealState) -> Result<()> {
    let style = state.style();
    set_style(element, "opacity", style.opacity)?;
    set_style(element, "transform", style.transform)?;
    Ok(())
}

pub fn install() -> Result<()> {
    let targets = query_all(&document()?, TARGET_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }
    let set = Rc::new(RefCell::new(RevealSet::new(targets.len())));

    let callback = {
        let set = set.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(index) = target
                        .get_attribute(INDEX_ATTRIBUTE)
                        .and_then(|i| i.parse::<usize>().ok())
                    else {
                        continue;
                    };
                    if set.borrow_mut().observe(index, entry.is_intersecting()) {
                        if let Err(e) = apply_style(&target, RevealState::Shown) {
                            log::warn!("Reveal style failed: {e}");
                        }
                        observer.unobserve(&target);
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for (index, element) in targets.iter().enumerate() {
        element.set_attribute(INDEX_ATTRIBUTE, &index.to_string())?;
        apply_style(element, RevealState::Hidden)?;
        set_style(element, "transition", TRANSITION)?;
        observer.observe(element);
    }

    log::info!("Observing {} reveal targets", set.borrow().len());
    Ok(())
}
