use navsearch_core::debounce::Timer;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// `setTimeout`/`clearTimeout` for one instance.
///
/// The callback is bound after the owning instance exists, since it needs a
/// handle back to it. Arming while unbound does nothing.
pub(crate) struct WebTimer {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl WebTimer {
    pub(crate) fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    pub(crate) fn bind(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl Timer for WebTimer {
    /// `0` is never a live timeout id, so clearing it is harmless.
    type Handle = i32;

    fn arm(&mut self, delay: Duration) -> i32 {
        let Some(callback) = &self.callback else {
            tracing::warn!("timer armed before a callback was bound");
            return 0;
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .unwrap_or_else(|err| {
                tracing::warn!(?err, "setTimeout failed");
                0
            })
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
