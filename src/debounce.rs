use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Trailing-edge debounce: `f` runs `wait_ms` after the last call.
pub fn debounce(wait_ms: i32, f: impl FnMut() + 'static) -> impl FnMut() + 'static {
    let f = Rc::new(RefCell::new(f));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let pending_later = pending.clone();
    let later = Closure::wrap(Box::new(move || {
        pending_later.set(None);
        (*f.borrow_mut())();
    }) as Box<dyn FnMut()>);

    move || {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            later.as_ref().unchecked_ref(),
            wait_ms,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(e) => log::warn!("debounce setTimeout error: {:?}", e),
        }
    }
}
