use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Event;

use super::{document, listen, query, set_style, window};
use crate::consts::{HEADER_SELECTOR, YEAR_ID};
use crate::error::Result;
use crate::header::HeaderScroll;
use crate::page::{PageFade, year_text};

/// Footer year and the deferred whole-page fade-in
pub fn install() -> Result<()> {
    let document = document()?;

    if let Some(year) = document.get_element_by_id(YEAR_ID) {
        let now = js_sys::Date::new_0();
        year.set_text_content(Some(&year_text(now.get_full_year())));
    }

    if let Some(body) = document.body() {
        let fade = PageFade::default();
        body.style().set_property("opacity", fade.initial_opacity)?;
        Timeout::new(fade.delay_ms, move || {
            let style = body.style();
            let _ = style.set_property("transition", fade.transition);
            let _ = style.set_property("opacity", fade.final_opacity);
        })
        .forget();
    }

    Ok(())
}

/// Header background/shadow switch on scroll
pub fn install_header() -> Result<()> {
    let Some(header) = query(&document()?, HEADER_SELECTOR) else {
        return Ok(());
    };
    let state = Rc::new(RefCell::new(HeaderScroll::new()));
    let window = window()?;
    let win = window.clone();
    listen(&window, "scroll", move |_: Event| {
        let Ok(scroll_y) = win.scroll_y() else {
            return;
        };
        if let Some(style) = state.borrow_mut().update(scroll_y) {
            let _ = set_style(&header, "background-color", style.background());
            let _ = set_style(&header, "box-shadow", style.box_shadow());
        }
    })?;
    Ok(())
}
