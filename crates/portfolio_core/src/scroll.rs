//! Threshold flags derived from the page scroll offset.
//!
//! [`ScrollSignal`] fans the latest offset out to registered
//! [`ScrollListener`]s. A listener deregisters itself when dropped.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    rc::{Rc, Weak},
};

/// Offset after which the navigation bar gets its drop shadow.
pub const NAV_SHADOW_THRESHOLD: f32 = 10.0;
/// Offset after which the back-to-top button is shown.
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollVisibility {
    threshold: f32,
    visible: bool,
}

impl ScrollVisibility {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn observe(&mut self, position: f32) -> bool {
        self.visible = position > self.threshold;
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    position: f32,
    listeners: BTreeMap<u64, ScrollVisibility>,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSignal {
    registry: Rc<RefCell<Registry>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag for `threshold`, seeded from the current offset.
    pub fn subscribe(&self, threshold: f32) -> ScrollListener {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;

        let mut flag = ScrollVisibility::new(threshold);
        flag.observe(registry.position);
        registry.listeners.insert(id, flag);
        tracing::trace!(id, threshold, "scroll listener registered");

        ScrollListener {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    pub fn publish(&self, position: f32) {
        let mut registry = self.registry.borrow_mut();
        registry.position = position;
        for flag in registry.listeners.values_mut() {
            flag.observe(position);
        }
    }

    pub fn position(&self) -> f32 {
        self.registry.borrow().position
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

#[derive(Debug)]
pub struct ScrollListener {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl ScrollListener {
    /// False once the signal itself has been dropped.
    pub fn visible(&self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let visible = registry
            .borrow()
            .listeners
            .get(&self.id)
            .is_some_and(ScrollVisibility::visible);
        visible
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::trace!(id = self.id, "scroll listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_strictly_greater_than_threshold() {
        let mut flag = ScrollVisibility::new(300.0);
        assert!(!flag.observe(0.0));
        assert!(!flag.observe(300.0));
        assert!(flag.observe(300.5));
        assert!(!flag.observe(12.0));
        assert!(!flag.visible());
    }

    #[test]
    fn listeners_with_different_thresholds_share_one_signal() {
        let signal = ScrollSignal::new();
        let shadow = signal.subscribe(NAV_SHADOW_THRESHOLD);
        let back_to_top = signal.subscribe(BACK_TO_TOP_THRESHOLD);

        signal.publish(50.0);
        assert!(shadow.visible());
        assert!(!back_to_top.visible());

        signal.publish(301.0);
        assert!(shadow.visible());
        assert!(back_to_top.visible());

        signal.publish(10.0);
        assert!(!shadow.visible());
        assert!(!back_to_top.visible());
    }

    #[test]
    fn late_subscriber_sees_current_position() {
        let signal = ScrollSignal::new();
        signal.publish(500.0);
        let listener = signal.subscribe(BACK_TO_TOP_THRESHOLD);
        assert!(listener.visible());
        assert_eq!(signal.position(), 500.0);
    }

    #[test]
    fn dropping_listener_deregisters_it() {
        let signal = ScrollSignal::new();
        let first = signal.subscribe(1.0);
        let second = signal.subscribe(2.0);
        assert_eq!(signal.listener_count(), 2);

        drop(first);
        assert_eq!(signal.listener_count(), 1);
        drop(second);
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn listener_outliving_signal_reports_hidden() {
        let signal = ScrollSignal::new();
        let listener = signal.subscribe(0.0);
        signal.publish(100.0);
        assert!(listener.visible());
        drop(signal);
        assert!(!listener.visible());
    }
}
