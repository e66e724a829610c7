//! Browser frame scheduling and viewport measurement.
//!
//! These helpers are `#[cfg(feature = "csr")]` because they depend on
//! `web_sys` and only exist in the browser.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Run `task` on the next animation frame, or immediately when no frame can be requested.
#[cfg(feature = "csr")]
pub fn next_frame(task: impl FnOnce() + 'static) {
    let task = Rc::new(RefCell::new(Some(task)));
    let Some(window) = web_sys::window() else {
        run_once(&task);
        return;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let task_for_cb = Rc::clone(&task);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        run_once(&task_for_cb);
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => *holder.borrow_mut() = Some(cb),
        Err(e) => {
            log::warn!("requestAnimationFrame failed, running inline: {e:?}");
            run_once(&task);
        }
    }
}

#[cfg(feature = "csr")]
fn run_once<F: FnOnce()>(task: &Rc<RefCell<Option<F>>>) {
    let next = task.borrow_mut().take();
    if let Some(task) = next {
        task();
    }
}

/// Height of the browser viewport in CSS pixels.
#[cfg(feature = "csr")]
pub fn viewport_height() -> Option<f64> {
    let window = web_sys::window()?;
    match window.inner_height() {
        Ok(value) => value.as_f64(),
        Err(e) => {
            log::debug!("innerHeight unavailable: {e:?}");
            None
        }
    }
}
