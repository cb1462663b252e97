use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Node};

use super::{document, listen, query, query_all, window};
use crate::consts::{
    HEADER_RIGHT_SELECTOR, MENU_BUTTON_CLASS, NAV_LINK_SELECTOR, NAV_OPEN_CLASS, NAV_SELECTOR,
    THEME_TOGGLE_ID,
};
use crate::error::Result;
use crate::nav::{MOBILE_MENU_CSS, MenuIcon, NavMenu};

/// Menu state plus the elements it drives
pub struct NavPanel {
    menu: NavMenu,
    nav: Option<Element>,
    button: Option<Element>,
}

impl NavPanel {
    /// Panel with no elements; state changes have no visible effect
    pub fn detached() -> Self {
        Self {
            menu: NavMenu::new(),
            nav: None,
            button: None,
        }
    }

    pub fn toggle(&mut self) {
        let icon = self.menu.toggle();
        self.render(icon);
    }

    pub fn close(&mut self) {
        let icon = self.menu.close();
        self.render(icon);
    }

    fn resized(&mut self, width: f64) {
        if let Some(icon) = self.menu.resized(width) {
            self.render(icon);
        }
    }

    fn clicked(&mut self, target: Option<&Node>) {
        let inside = |el: &Option<Element>| el.as_ref().is_some_and(|e| e.contains(target));
        let (in_button, in_panel) = (inside(&self.button), inside(&self.nav));
        if let Some(icon) = self.menu.clicked_elsewhere(in_button, in_panel) {
            self.render(icon);
        }
    }

    fn render(&self, icon: MenuIcon) {
        if let Some(nav) = &self.nav {
            let _ = nav
                .class_list()
                .toggle_with_force(NAV_OPEN_CLASS, self.menu.is_open());
        }
        // Swap the class on the existing icon so a click target inside the
        // button stays attached while the document click handler runs.
        if let Some(button) = &self.button {
            match button.first_element_child() {
                Some(glyph) => glyph.set_class_name(icon.class_name()),
                None => button.set_inner_html(&icon.markup()),
            }
        }
    }
}

fn create_button() -> Result<Option<Element>> {
    let document = document()?;
    let Some(header_right) = query(&document, HEADER_RIGHT_SELECTOR) else {
        return Ok(None);
    };

    let button = document.create_element("button")?;
    button.set_class_name(MENU_BUTTON_CLASS);
    button.set_inner_html(&MenuIcon::Bars.markup());
    button.set_attribute("aria-label", "Toggle menu")?;

    let theme_toggle = document.get_element_by_id(THEME_TOGGLE_ID);
    header_right.insert_before(&button, theme_toggle.as_deref())?;

    if let Some(head) = document.head() {
        let style = document.create_element("style")?;
        style.set_text_content(Some(MOBILE_MENU_CSS));
        head.append_child(&style)?;
    }

    Ok(Some(button))
}

pub fn install() -> Result<Rc<RefCell<NavPanel>>> {
    let document = document()?;
    let panel = Rc::new(RefCell::new(NavPanel {
        menu: NavMenu::new(),
        nav: query(&document, NAV_SELECTOR),
        button: create_button()?,
    }));

    let button = panel.borrow().button.clone();
    if let Some(button) = button {
        let panel = panel.clone();
        listen(&button, "click", move |_: MouseEvent| {
            panel.borrow_mut().toggle();
        })?;
    }

    for link in query_all(&document, NAV_LINK_SELECTOR)? {
        let panel = panel.clone();
        listen(&link, "click", move |_: MouseEvent| {
            panel.borrow_mut().close();
        })?;
    }

    {
        let panel = panel.clone();
        let window = window()?;
        let win = window.clone();
        listen(&window, "resize", move |_: Event| {
            let width = win.inner_width().ok().and_then(|w| w.as_f64());
            if let Some(width) = width {
                panel.borrow_mut().resized(width);
            }
        })?;
    }

    {
        let panel = panel.clone();
        listen(&document, "click", move |event: MouseEvent| {
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            panel.borrow_mut().clicked(node);
        })?;
    }

    log::info!("Mobile menu installed");
    Ok(panel)
}
