//! Viewport subscriptions for the web renderer.
//!
//! The component owns exactly two external subscriptions: an
//! `IntersectionObserver` on its root element and a passive `scroll` listener
//! on the window. Both are acquired together in [`ViewportListeners::attach`]
//! and released together when the value is dropped, so teardown happens on
//! every exit path of the owning scope.

use dioxus::prelude::*;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::progress::{viewport_progress, VISIBILITY_THRESHOLD};

pub(crate) struct ViewportListeners {
    window: web_sys::Window,
    observer: IntersectionObserver,
    // Owned so the JS callbacks stay valid for the listeners' lifetime.
    _on_intersect: Closure<dyn FnMut(js_sys::Array)>,
    on_scroll: Closure<dyn FnMut()>,
}

impl ViewportListeners {
    /// Observe `target` for visibility and the window for scroll, writing
    /// into the given signals. Returns `None` when no window is available, in
    /// which case the divider simply never animates.
    pub(crate) fn attach(
        target: web_sys::Element,
        mut visible: Signal<bool>,
        progress: Signal<f64>,
    ) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window object; scroll bumper will not animate");
            return None;
        };

        let on_intersect = Closure::<dyn FnMut(js_sys::Array)>::new(
            move |entries: js_sys::Array| {
                if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                    visible.set(entry.is_intersecting());
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                tracing::warn!("failed to create intersection observer: {err:?}");
                return None;
            }
        };
        observer.observe(&target);

        let scroll_window = window.clone();
        let scroll_target = target.clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            report_progress(&scroll_target, &scroll_window, progress);
        });

        let listener_options = AddEventListenerOptions::new();
        listener_options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &listener_options,
        ) {
            tracing::warn!("failed to register scroll listener: {err:?}");
        }

        // Seed the progress before the first scroll event arrives.
        report_progress(&target, &window, progress);

        Some(Self {
            window,
            observer,
            _on_intersect: on_intersect,
            on_scroll,
        })
    }
}

impl Drop for ViewportListeners {
    fn drop(&mut self) {
        self.observer.disconnect();
        let _ = self.window.remove_event_listener_with_callback(
            "scroll",
            self.on_scroll.as_ref().unchecked_ref(),
        );
    }
}

fn report_progress(
    target: &web_sys::Element,
    window: &web_sys::Window,
    mut progress: Signal<f64>,
) {
    let Some(height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
        return;
    };
    let top = target.get_bounding_client_rect().top();
    progress.set(viewport_progress(top, height));
}
