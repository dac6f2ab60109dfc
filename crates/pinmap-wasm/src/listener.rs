// crates/pinmap-wasm/src/listener.rs

//! Scoped keydown subscription.
//!
//! The Enter key selects the first suggestion. The handler is registered on
//! `window` when the view mounts and must be deregistered when the view goes
//! away; [`KeySubscription`] ties removal to drop so no handler outlives the
//! view it was mounted for.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Guard for a mounted keydown handler. Call [`KeySubscription::unmount`]
/// (or `free()` from JS) on view teardown.
#[wasm_bindgen]
pub struct KeySubscription {
    target: web_sys::EventTarget,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

/// Register the Enter-selects-first-suggestion handler on `window`.
///
/// `on_fly` is invoked with the fly target `{ lat, lng, zoom }` whenever a
/// selection happens. The handler reads live session state on every event,
/// so it never acts on a stale suggestion list.
#[wasm_bindgen]
pub fn mount_key_listener(on_fly: js_sys::Function) -> Result<KeySubscription, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window to listen on"))?;

    let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if event.key() != "Enter" {
            return;
        }
        let target = crate::activate();
        if !target.is_null() {
            let _ = on_fly.call1(&JsValue::NULL, &target);
        }
    });

    window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    Ok(KeySubscription {
        target: window.into(),
        closure,
    })
}

#[wasm_bindgen]
impl KeySubscription {
    /// Deregister the handler. Consumes the guard; dropping from JS via
    /// `free()` has the same effect.
    pub fn unmount(self) {}
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.closure.as_ref().unchecked_ref());
    }
}
