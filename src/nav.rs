use crate::constants::*;
use crate::dom;
use fnv::FnvHashMap;
use portfolio_core::{active_section, anchor_scroll_target, navbar_scrolled, MenuState, SectionBounds};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn apply_hamburger(hamburger: &web::Element, state: MenuState) {
    let spans = dom::query_all_in(hamburger, "span");
    for (span, style) in spans.iter().zip(state.hamburger_spans()) {
        if let Some(span) = dom::as_html(span) {
            dom::set_style(span, style.property, style.value);
        }
    }
}

/// Hamburger toggles the mobile menu; following any nav link closes it.
pub fn wire_menu(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        dom::query_one(document, HAMBURGER_SELECTOR),
        dom::query_one(document, NAV_MENU_SELECTOR),
    ) else {
        log::debug!("[nav] no hamburger menu");
        return;
    };
    let state = Rc::new(Cell::new(MenuState::default()));

    {
        let state = state.clone();
        let menu = menu.clone();
        let burger = hamburger.clone();
        dom::add_listener(&hamburger, "click", move |_: web::Event| {
            let mut s = state.get();
            let open = s.toggle();
            state.set(s);
            _ = menu.class_list().toggle_with_force("active", open);
            apply_hamburger(&burger, s);
        });
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let state = state.clone();
        let menu = menu.clone();
        let burger = hamburger.clone();
        dom::add_listener(&link, "click", move |_: web::Event| {
            let mut s = state.get();
            s.close();
            state.set(s);
            _ = menu.class_list().remove_1("active");
            apply_hamburger(&burger, s);
        });
    }
}

pub fn wire_navbar_scroll(document: &web::Document) {
    let Some(navbar) = dom::query_one(document, NAVBAR_SELECTOR) else {
        return;
    };
    dom::add_window_listener("scroll", move || {
        _ = navbar
            .class_list()
            .toggle_with_force("scrolled", navbar_scrolled(dom::scroll_y()));
    });
}

/// In-page anchors scroll smoothly, leaving room for the fixed navbar.
pub fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, IN_PAGE_ANCHOR_SELECTOR) {
        let doc = document.clone();
        let a = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            // a bare "#" is not a valid selector and simply finds nothing
            let Some(target) = dom::query_html(&doc, &href) else {
                return;
            };
            let nav_height = dom::query_html(&doc, NAVBAR_SELECTOR)
                .map(|n| n.offset_height() as f64)
                .unwrap_or(0.0);
            let top = anchor_scroll_target(target.offset_top() as f64, nav_height);
            if let Some(w) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(top);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}

/// Returns a pass that marks the nav link of the section in view.
pub fn active_link_updater(document: &web::Document) -> impl FnMut() + 'static {
    let sections: Vec<(String, web::HtmlElement)> = dom::query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| {
            let id = el.id();
            el.dyn_into::<web::HtmlElement>().ok().map(|h| (id, h))
        })
        .collect();
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let by_href: FnvHashMap<String, web::Element> = links
        .iter()
        .filter_map(|l| l.get_attribute("href").map(|h| (h, l.clone())))
        .collect();

    move || {
        let bounds: Vec<SectionBounds> = sections
            .iter()
            .map(|(id, el)| SectionBounds {
                id: id.as_str(),
                offset_top: el.offset_top() as f64,
                height: el.offset_height() as f64,
            })
            .collect();
        let Some(id) = active_section(dom::scroll_y(), &bounds) else {
            return;
        };
        for link in &links {
            _ = link.class_list().remove_1("active");
        }
        if let Some(link) = by_href.get(&format!("#{id}")) {
            _ = link.class_list().add_1("active");
        }
    }
}
