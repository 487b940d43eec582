//! Self-detaching DOM listeners: `popstate` on the window and outside-click
//! dismissal for the filter dropdown.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Listener on the global `window`, if there is one.
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Fires `on_dismiss` when a pointer goes down outside the element with
/// `container_id`. Detached on drop.
pub struct DismissListener {
    _listener: EventListener,
}

impl DismissListener {
    pub fn new(container_id: &str, mut on_dismiss: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let lookup = document.clone();
        let container_id = container_id.to_string();

        let listener = EventListener::new(document.into(), "pointerdown", move |event| {
            let Ok(event) = event.dyn_into::<web_sys::Event>() else {
                return;
            };
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = match lookup.get_element_by_id(&container_id) {
                Some(container) => container.contains(target.as_ref()),
                None => false,
            };
            if !inside {
                on_dismiss();
            }
        });

        Some(Self {
            _listener: listener,
        })
    }
}
