use crate::constants::*;
use crate::dom;
use portfolio_core::constants::{NOTICE_EXIT_MS, NOTICE_VISIBLE_MS};
use portfolio_core::{ContactSubmission, Notice, NOTICE_EXIT_ANIMATION};
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<web::HtmlTextAreaElement>()
        .map(|t| t.value())
        .unwrap_or_default()
}

/// Validate on submit and report the outcome with a notice; nothing is sent.
pub fn wire_contact_form(document: &web::Document) {
    let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
        log::debug!("[contact] no #{}", CONTACT_FORM_ID);
        return;
    };
    let doc = document.clone();
    let form_el = form.clone();
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let submission = ContactSubmission::from_raw(
            &field_value(&doc, CONTACT_NAME_ID),
            &field_value(&doc, CONTACT_EMAIL_ID),
            &field_value(&doc, CONTACT_SUBJECT_ID),
            &field_value(&doc, CONTACT_MESSAGE_ID),
        );
        let result = submission.validate();
        show_notice(&doc, &Notice::for_submission(&result));
        match result {
            Ok(()) => {
                log::info!("[contact] submission accepted");
                if let Some(f) = form_el.dyn_ref::<web::HtmlFormElement>() {
                    f.reset();
                }
            }
            Err(e) => log::debug!("[contact] rejected: {}", e),
        }
    });
}

/// Replace any visible notice with `notice`, then fade it out and remove it.
pub fn show_notice(document: &web::Document, notice: &Notice) {
    if let Some(existing) = dom::query_one(document, NOTICE_SELECTOR) {
        existing.remove();
    }
    let Some(body) = document.body() else {
        return;
    };
    let el = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("notice element error: {:?}", e);
            return;
        }
    };
    el.set_class_name(&notice.class_name());
    el.set_text_content(Some(&notice.message));
    if let Some(html) = dom::as_html(&el) {
        html.style().set_css_text(&notice.inline_style());
    }
    if body.append_child(&el).is_err() {
        return;
    }

    dom::set_timeout(NOTICE_VISIBLE_MS, move || {
        if let Some(html) = dom::as_html(&el) {
            dom::set_style(html, "animation", NOTICE_EXIT_ANIMATION);
        }
        dom::set_timeout(NOTICE_EXIT_MS, move || el.remove());
    });
}
