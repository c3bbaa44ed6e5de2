use crate::constants::*;
use crate::dom;
use crate::reveal;
use crate::typing;
use glam::Vec2;
use portfolio_core::constants::{is_desktop_width, CURSOR_DOT_LIFETIME_MS, HERO_TYPING_SPEED_MS};
use portfolio_core::{copyright_line, cursor_dot_style, CursorTrail, Tilt, TILT_RESET_CSS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Short-lived dots following the pointer on desktop widths.
pub fn wire_cursor_trail(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let doc = document.clone();
    let trail: Rc<RefCell<CursorTrail<web::Element>>> = Rc::new(RefCell::new(CursorTrail::default()));
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        if !is_desktop_width(dom::viewport_width()) {
            return;
        }
        let Ok(dot) = doc.create_element("div") else {
            return;
        };
        dot.set_class_name("cursor-dot");
        if let Some(html) = dom::as_html(&dot) {
            html.style()
                .set_css_text(&cursor_dot_style(ev.client_x(), ev.client_y()));
        }
        if body.append_child(&dot).is_err() {
            return;
        }
        if let Some(evicted) = trail.borrow_mut().push(dot.clone()) {
            evicted.remove();
        }
        dom::set_timeout(CURSOR_DOT_LIFETIME_MS, move || dot.remove());
    });
}

pub fn wire_card_tilt(document: &web::Document) {
    for card in dom::query_all(document, PROJECT_CARD_SELECTOR) {
        let Ok(card) = card.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let c = card.clone();
        dom::add_listener(&card, "mousemove", move |ev: web::MouseEvent| {
            if !is_desktop_width(dom::viewport_width()) {
                return;
            }
            let rect = c.get_bounding_client_rect();
            let tilt = Tilt::for_pointer(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            dom::set_style(&c, "transform", &tilt.css());
        });
        let c = card.clone();
        dom::add_listener(&card, "mouseleave", move |_: web::Event| {
            dom::set_style(&c, "transform", TILT_RESET_CSS);
        });
    }
}

/// Keyboard "skip to content" link, hidden above the viewport until focused.
pub fn insert_skip_link(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let Some(link) = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    _ = link.set_attribute("href", SKIP_LINK_TARGET);
    link.set_class_name("skip-link");
    link.set_text_content(Some(SKIP_LINK_TEXT));
    link.style().set_css_text(SKIP_LINK_STYLE);

    let l = link.clone();
    dom::add_listener(&link, "focus", move |_: web::Event| dom::set_style(&l, "top", "0"));
    let l = link.clone();
    dom::add_listener(&link, "blur", move |_: web::Event| {
        dom::set_style(&l, "top", SKIP_LINK_HIDDEN_TOP)
    });

    _ = body.insert_before(&link, body.first_child().as_ref());
}

fn set_menus_display(document: &web::Document, value: &str) {
    for menu in dom::query_all(document, NAV_MENU_SELECTOR) {
        if let Some(menu) = dom::as_html(&menu) {
            dom::set_style(menu, "display", value);
        }
    }
}

pub fn wire_print_mode(document: &web::Document) {
    let doc = document.clone();
    dom::add_window_listener("beforeprint", move || set_menus_display(&doc, "none"));
    let doc = document.clone();
    dom::add_window_listener("afterprint", move || set_menus_display(&doc, ""));
}

pub fn update_copyright_year(document: &web::Document) {
    if let Some(el) = dom::query_one(document, FOOTER_YEAR_SELECTOR) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&copyright_line(year, SITE_OWNER)));
    }
}

fn on_page_loaded(document: &web::Document) {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(LOADED_CLASS);
    }
    if FEATURE_TYPING_EFFECT {
        if let Some(subtitle) = dom::query_one(document, HERO_SUBTITLE_SELECTOR) {
            typing::retype(subtitle, HERO_TYPING_SPEED_MS);
        }
    }
    let doc = document.clone();
    dom::set_timeout(REVEAL_AFTER_LOAD_MS, move || reveal::reveal_visible(&doc));
}

/// Run load-time work now if the page already finished loading.
pub fn wire_page_load(document: &web::Document) {
    if document.ready_state() == "complete" {
        on_page_loaded(document);
        return;
    }
    let doc = document.clone();
    dom::add_window_listener("load", move || on_page_loaded(&doc));
}
