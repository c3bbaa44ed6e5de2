use crate::constants::*;
use crate::dom;
use portfolio_core::constants::{COUNTER_DURATION_MS, COUNTER_TICK_MS, STAT_TARGETS};
use portfolio_core::{parallax_offsets, should_reveal, Counter};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Add `reveal active` to every reveal target whose top has scrolled into view.
pub fn reveal_visible(document: &web::Document) {
    let window_height = dom::viewport_height();
    for el in dom::query_all(document, REVEAL_SELECTOR) {
        if should_reveal(el.get_bounding_client_rect().top(), window_height) {
            _ = el.class_list().add_2("reveal", "active");
        }
    }
}

pub fn wire_parallax(document: &web::Document) {
    let Some(content) = dom::query_html(document, HERO_CONTENT_SELECTOR) else {
        return;
    };
    let visual = dom::query_html(document, HERO_VISUAL_SELECTOR);
    dom::add_window_listener("scroll", move || {
        let Some((content_y, visual_y)) = parallax_offsets(dom::scroll_y(), dom::viewport_width())
        else {
            return;
        };
        dom::set_style(&content, "transform", &format!("translateY({content_y}px)"));
        if let Some(visual) = &visual {
            dom::set_style(visual, "transform", &format!("translateY({visual_y}px)"));
        }
    });
}

// Calls `on_visible` the first time each target intersects, then stops
// watching it.
fn observe_once(
    targets: &[web::Element],
    threshold: Option<f64>,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) {
    if targets.is_empty() {
        return;
    }
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = match threshold {
        Some(t) => {
            let opts = web::IntersectionObserverInit::new();
            opts.set_threshold(&JsValue::from_f64(t));
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
        }
        None => web::IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    match observer {
        Ok(observer) => {
            for t in targets {
                observer.observe(t);
            }
        }
        Err(e) => log::warn!("IntersectionObserver error: {:?}", e),
    }
    callback.forget();
}

fn animate_counter(el: web::Element, target: f64) {
    let Some(window) = web::window() else {
        return;
    };
    let mut counter = Counter::new(target, COUNTER_DURATION_MS);
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let tick = Closure::wrap(Box::new(move || {
        el.set_text_content(Some(&counter.tick()));
        if counter.is_finished() {
            if let (Some(id), Some(w)) = (handle_tick.take(), web::window()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    match window
        .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), COUNTER_TICK_MS)
    {
        Ok(id) => handle.set(Some(id)),
        Err(e) => log::warn!("setInterval error: {:?}", e),
    }
    tick.forget();
}

/// Count the hero stats up once they are half visible.
pub fn wire_stat_counters(document: &web::Document) {
    let Some(stats) = dom::query_one(document, HERO_STATS_SELECTOR) else {
        return;
    };
    observe_once(&[stats], Some(OBSERVER_THRESHOLD), |block| {
        let numbers = dom::query_all_in(block, STAT_NUMBER_SELECTOR);
        for (stat, target) in numbers.into_iter().zip(STAT_TARGETS) {
            animate_counter(stat, target);
        }
    });
}

/// Collapse skill bars, then grow each to its `--progress` width when seen.
pub fn wire_skill_bars(document: &web::Document) {
    let bars = dom::query_all(document, SKILL_BAR_SELECTOR);
    for bar in &bars {
        if let Some(bar) = dom::as_html(bar) {
            dom::set_style(bar, "width", "0");
        }
    }
    observe_once(&bars, Some(OBSERVER_THRESHOLD), |bar| {
        if let Some(bar) = dom::as_html(bar) {
            let progress = bar
                .style()
                .get_property_value(SKILL_PROGRESS_PROPERTY)
                .unwrap_or_default();
            dom::set_style(bar, "width", &progress);
        }
    });
}

pub fn wire_lazy_images(document: &web::Document) {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR);
    observe_once(&images, None, |img| {
        let (Some(src), Some(image)) = (
            img.get_attribute("data-src"),
            img.dyn_ref::<web::HtmlImageElement>(),
        ) else {
            return;
        };
        image.set_src(&src);
        _ = img.remove_attribute("data-src");
    });
}
