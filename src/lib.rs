#![cfg(target_arch = "wasm32")]
use portfolio_core::constants::SCROLL_DEBOUNCE_MS;
use portfolio_core::{CURSOR_KEYFRAMES, NOTICE_KEYFRAMES};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod constants;
mod contact;
mod debounce;
mod dom;
mod effects;
mod nav;
mod reveal;
mod typing;

pub use background::ParticleBackground;

fn greet_console() {
    log::info!("👋 Hello there!");
    log::info!("Interested in the code? Check out my GitHub!");
    log::info!("https://github.com/akshaytiwari");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Navigation
    nav::wire_menu(&document);
    nav::wire_navbar_scroll(&document);
    nav::wire_smooth_scroll(&document);

    // Scroll-driven effects; reveal and highlight are debounced
    reveal::reveal_visible(&document);
    {
        let doc = document.clone();
        dom::add_window_listener(
            "scroll",
            debounce::debounce(SCROLL_DEBOUNCE_MS, move || reveal::reveal_visible(&doc)),
        );
        dom::add_window_listener(
            "scroll",
            debounce::debounce(SCROLL_DEBOUNCE_MS, nav::active_link_updater(&document)),
        );
    }
    reveal::wire_parallax(&document);
    reveal::wire_stat_counters(&document);
    reveal::wire_skill_bars(&document);
    reveal::wire_lazy_images(&document);

    // Contact form
    dom::inject_style(&document, NOTICE_KEYFRAMES);
    contact::wire_contact_form(&document);

    // Decorations
    dom::inject_style(&document, CURSOR_KEYFRAMES);
    effects::wire_cursor_trail(&document);
    effects::wire_card_tilt(&document);
    effects::update_copyright_year(&document);
    effects::insert_skip_link(&document);
    effects::wire_print_mode(&document);
    effects::wire_page_load(&document);

    // A broken canvas only costs the background, not the rest of the page.
    if let Err(e) = background::init(&document) {
        log::warn!("[particles] disabled: {:?}", e);
    }

    greet_console();
    log::info!("✨ Portfolio loaded successfully!");
    Ok(())
}
