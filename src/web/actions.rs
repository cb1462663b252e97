use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement, HtmlInputElement, MouseEvent};

use super::{document, listen, query, query_all, window};
use crate::config::SiteConfig;
use crate::consts::{ACTION_ATTRIBUTE, ACTION_SELECTOR, CONTACT_FORM_SELECTOR, NEWSLETTER_SELECTOR};
use crate::contact::{ContactAction, Egress};
use crate::error::Result;
use crate::forms::{FormSubmission, NewsletterOutcome, submit_form, submit_newsletter};

fn follow(egress: &Egress) -> Result<()> {
    let window = window()?;
    match egress {
        Egress::Navigate(uri) => window.location().set_href(uri)?,
        Egress::OpenNewContext(url) => {
            window.open_with_url_and_target(url, "_blank")?;
        }
    }
    Ok(())
}

fn alert(message: &str) {
    if let Ok(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

fn install_buttons(config: &Rc<SiteConfig>) -> Result<usize> {
    let mut wired = 0;
    for control in query_all(&document()?, ACTION_SELECTOR)? {
        let tag = control.get_attribute(ACTION_ATTRIBUTE).unwrap_or_default();
        let Some(action) = ContactAction::from_tag(&tag) else {
            log::warn!("Unknown {ACTION_ATTRIBUTE} \"{tag}\"");
            continue;
        };
        let config = config.clone();
        listen(&control, "click", move |event: MouseEvent| {
            let egress = action.egress(&config);
            if matches!(egress, Egress::Navigate(_)) {
                event.prevent_default();
            }
            if let Err(e) = follow(&egress) {
                log::warn!("{} action failed: {e}", action.as_tag());
            }
        })?;
        wired += 1;
    }
    Ok(wired)
}

fn collect(form: &HtmlFormElement) -> Result<FormSubmission> {
    let data = FormData::new_with_form(form)?;
    let mut submission = FormSubmission::new();
    if let Some(entries) = js_sys::try_iter(&data)? {
        for entry in entries {
            let pair = js_sys::Array::from(&entry?);
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                submission.insert(name, value);
            }
        }
    }
    Ok(submission)
}

fn install_contact_form(config: &Rc<SiteConfig>) -> Result<()> {
    let Some(form) = query(&document()?, CONTACT_FORM_SELECTOR)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let config = config.clone();
    let target = form.clone();
    listen(&target, "submit", move |event: Event| {
        event.prevent_default();
        let submission = match collect(&form) {
            Ok(submission) => submission,
            Err(e) => {
                log::warn!("Could not read form: {e}");
                return;
            }
        };
        let ack = submit_form(&submission, &config.form_ack);
        alert(&ack.message);
        if ack.reset {
            form.reset();
        }
    })
}

fn install_newsletter(config: &Rc<SiteConfig>) -> Result<()> {
    let Some(form) = query(&document()?, NEWSLETTER_SELECTOR) else {
        return Ok(());
    };
    let config = config.clone();
    let target = form.clone();
    listen(&target, "submit", move |event: Event| {
        event.prevent_default();
        let Some(input) = form
            .query_selector("input[type=\"email\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let NewsletterOutcome::Acknowledged { message } =
            submit_newsletter(&input.value(), &config.newsletter_ack)
        {
            alert(&message);
            input.set_value("");
        }
    })
}

pub fn install(config: Rc<SiteConfig>) -> Result<()> {
    let wired = install_buttons(&config)?;
    install_contact_form(&config)?;
    install_newsletter(&config)?;
    log::info!("Contact shortcuts installed ({wired} buttons)");
    Ok(())
}
