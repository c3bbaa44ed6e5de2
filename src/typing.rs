use crate::dom;
use portfolio_core::Typewriter;
use web_sys as web;

/// Clear `el` and type its current text back in.
pub fn retype(el: web::Element, speed_ms: i32) {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    type_next(Typewriter::with_speed(text, speed_ms), el);
}

fn type_next(mut writer: Typewriter, el: web::Element) {
    let Some(shown) = writer.next_frame().map(str::to_owned) else {
        return;
    };
    el.set_text_content(Some(&shown));
    let speed = writer.speed_ms();
    dom::set_timeout(speed, move || type_next(writer, el));
}
