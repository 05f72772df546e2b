//! Viewport width tracking with scoped subscriptions.
//!
//! The viewport is process-wide UI state with an explicit attach/detach
//! lifecycle. Before the host completes its initial attachment the width
//! reads as 0 (or a host-provided fallback) and resize notifications are
//! dropped, so measurement-dependent work can be deferred safely.

use tracing::trace;

/// Handle for a registered width subscriber. Passing it back to
/// [`Viewport::unsubscribe`] removes the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type SubscriberFn = Box<dyn FnMut(f64)>;

/// Observable viewport width tied to host attachment.
pub struct Viewport {
    width: f64,
    mounted: bool,
    next_subscription: u64,
    subscribers: Vec<(u64, SubscriberFn)>,
}

impl Viewport {
    /// Create an unattached viewport reporting width 0.
    pub fn new() -> Self {
        Self::with_width(0.0)
    }

    /// Create an unattached viewport with a host-provided fallback width.
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            mounted: false,
            next_subscription: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current viewport width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Whether the host has completed initial attachment.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mark the viewport attached and read the host's current width.
    pub fn attach(&mut self, width: f64) {
        self.mounted = true;
        self.set_width(width);
    }

    /// Mark the viewport detached. Resize handling stops and every
    /// remaining subscription is torn down.
    pub fn detach(&mut self) {
        self.mounted = false;
        self.subscribers.clear();
    }

    /// Handle a host resize notification. No-op until mounted, which also
    /// makes late notifications after teardown harmless.
    pub fn handle_resize(&mut self, width: f64) {
        if !self.mounted {
            trace!(width, "resize ignored while unmounted");
            return;
        }
        self.set_width(width);
    }

    /// Register a subscriber invoked with the new width on every accepted
    /// update.
    pub fn subscribe(&mut self, subscriber: impl FnMut(f64) + 'static) -> Subscription {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        Subscription(id)
    }

    /// Remove a subscriber. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.subscribers.retain(|(id, _)| *id != subscription.0);
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(width);
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width)
            .field("mounted", &self.mounted)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unmounted_reports_zero() {
        let viewport = Viewport::new();
        assert!(!viewport.is_mounted());
        assert!((viewport.width() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_fallback_width() {
        let viewport = Viewport::with_width(1024.0);
        assert!(!viewport.is_mounted());
        assert!((viewport.width() - 1024.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_before_mount_is_noop() {
        let mut viewport = Viewport::new();
        viewport.handle_resize(800.0);
        assert!((viewport.width() - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_attach_then_resize() {
        let mut viewport = Viewport::new();
        viewport.attach(1280.0);
        assert!(viewport.is_mounted());
        assert!((viewport.width() - 1280.0).abs() < 0.001);

        viewport.handle_resize(900.0);
        assert!((viewport.width() - 900.0).abs() < 0.001);
    }

    #[test]
    fn test_subscribers_notified() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut viewport = Viewport::new();
        viewport.subscribe(move |width| sink.borrow_mut().push(width));

        viewport.attach(1280.0);
        viewport.handle_resize(640.0);

        assert_eq!(&*seen.borrow(), &[1280.0, 640.0]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut viewport = Viewport::new();
        let subscription = viewport.subscribe(move |width| sink.borrow_mut().push(width));
        viewport.attach(1280.0);
        viewport.unsubscribe(subscription);
        viewport.handle_resize(640.0);

        assert_eq!(&*seen.borrow(), &[1280.0]);
    }

    #[test]
    fn test_detach_tears_down() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut viewport = Viewport::new();
        viewport.subscribe(move |width| sink.borrow_mut().push(width));
        viewport.attach(1280.0);
        viewport.detach();

        assert!(!viewport.is_mounted());
        viewport.handle_resize(640.0);
        assert_eq!(&*seen.borrow(), &[1280.0]);

        // Re-attaching does not resurrect the dropped subscription.
        viewport.attach(700.0);
        assert_eq!(&*seen.borrow(), &[1280.0]);
    }
}
