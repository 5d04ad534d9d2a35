//! Debounced window-resize subscription scoped to the calling component.
//!
//! The pending debounce timer is held in a `PendingTimer` owned by the
//! reactive scope, not by the listener closure. Cleanup removes the listener
//! and cancels that timer, so a resize still settling at unmount never fires
//! into disposed signals. The JS side may keep the listener closure alive
//! until it is collected; it holds nothing that can still run.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

/// Quiet period before a burst of resize events is reported.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;

/// Slot for the one outstanding debounce timer.
///
/// Dropping a timer handle cancels it, so arming over a pending timer or
/// clearing the slot is what cancels.
#[derive(Debug)]
pub struct PendingTimer<H> {
    handle: Option<H>,
}

impl<H> Default for PendingTimer<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> PendingTimer<H> {
    /// Replace any pending timer with `handle`.
    pub fn arm(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// Drop the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

/// Call `on_resize` once the window has stopped resizing for
/// [`RESIZE_DEBOUNCE_MS`]. No-op outside the browser.
pub fn use_debounced_resize(on_resize: impl Fn() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;
        use leptos::prelude::*;
        use std::rc::Rc;

        let on_resize = Rc::new(on_resize);
        let pending: StoredValue<PendingTimer<Timeout>, LocalStorage> = StoredValue::new_local(PendingTimer::default());
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let on_resize = Rc::clone(&on_resize);
            let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || on_resize());
            pending.try_update_value(|p| p.arm(timeout));
        });
        on_cleanup(move || {
            handle.remove();
            pending.try_update_value(PendingTimer::cancel);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_resize;
    }
}
