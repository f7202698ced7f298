//! Subject/Observer primitive
//!
//! A synchronous publish-subscribe building block. A [`Subject`] keeps a list
//! of attached observers and delivers each notification to every one of them,
//! in attachment order, on the caller's thread. Observers are externally
//! owned; the subject only holds additional shared handles and identifies
//! observers by handle identity, never by value.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Error an observer may return from [`Observer::update`]
///
/// A failing observer is isolated by the subject: its error is logged and
/// delivery continues to the remaining observers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("observer update failed: {reason}")]
pub struct ObserverError {
    /// Human-readable description of why the update was rejected
    pub reason: String,
}

impl ObserverError {
    /// Creates an error with the given reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during subject bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubjectError {
    /// Attempted to detach an observer that was never attached
    #[error("observer is not attached to this subject")]
    ObserverNotFound,
}

/// A listener attached to a [`Subject`], notified synchronously on every
/// state change
pub trait Observer {
    /// Receives the subject's current display string
    ///
    /// # Arguments
    /// * `display_value` - The string the subject wants rendered
    ///
    /// # Returns
    /// Ok(()) if the update was handled, or ObserverError to report a
    /// failure without stopping delivery to other observers
    fn update(&mut self, display_value: &str) -> Result<(), ObserverError>;
}

/// Shared handle to an externally owned observer
///
/// The subject stores clones of these handles; `Rc::ptr_eq` on the handle is
/// the identity used for attach/detach.
pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// The publisher role in the observer pattern
///
/// Holds the attached observers and fans notifications out to them. The
/// subject performs no locking and no queuing: [`Subject::notify`] runs each
/// observer's `update` inline before returning.
#[derive(Default)]
pub struct Subject {
    /// Attached observers in attachment order
    observers: Vec<SharedObserver>,
}

impl Subject {
    /// Creates a subject with no attached observers
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Attaches an observer
    ///
    /// Idempotent by handle identity: attaching the same handle twice leaves
    /// a single registration, so a repeated attach never causes duplicate
    /// notifications.
    pub fn attach(&mut self, observer: SharedObserver) {
        let already_attached = self.observers.iter().any(|o| Rc::ptr_eq(o, &observer));
        if !already_attached {
            self.observers.push(observer);
        }
    }

    /// Detaches an observer
    ///
    /// # Returns
    /// Ok(()) if the observer was attached, or SubjectError::ObserverNotFound
    /// if it was not
    pub fn detach(&mut self, observer: &SharedObserver) -> Result<(), SubjectError> {
        let position = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
            .ok_or(SubjectError::ObserverNotFound)?;
        self.observers.remove(position);
        Ok(())
    }

    /// Returns the number of attached observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Notifies every attached observer, in attachment order
    ///
    /// Each observer receives exactly one `update` per call. A failing
    /// observer (an `Err` return, or a handle whose cell is already borrowed)
    /// is reported at `warn` level and does not prevent delivery to the
    /// observers after it.
    pub fn notify(&self, display_value: &str) {
        for (index, observer) in self.observers.iter().enumerate() {
            match observer.try_borrow_mut() {
                Ok(mut observer) => {
                    if let Err(err) = observer.update(display_value) {
                        tracing::warn!(index, %err, "observer rejected update");
                    }
                }
                Err(_) => {
                    tracing::warn!(index, "observer already borrowed, skipping update");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Records every value it receives; optionally fails each update
    struct Probe {
        seen: Vec<String>,
        fail: bool,
    }

    impl Probe {
        fn new() -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                seen: Vec::new(),
                fail: false,
            }))
        }

        fn failing() -> Rc<RefCell<Self>> {
            Rc::new(RefCell::new(Self {
                seen: Vec::new(),
                fail: true,
            }))
        }
    }

    impl Observer for Probe {
        fn update(&mut self, display_value: &str) -> Result<(), ObserverError> {
            self.seen.push(display_value.to_string());
            if self.fail {
                Err(ObserverError::new("probe configured to fail"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn notify_reaches_attached_observer() {
        let probe = Probe::new();
        let mut subject = Subject::new();
        subject.attach(probe.clone());

        subject.notify("42");

        assert_eq!(probe.borrow().seen, vec!["42".to_string()]);
    }

    #[test]
    fn attach_is_idempotent() {
        let probe = Probe::new();
        let mut subject = Subject::new();
        subject.attach(probe.clone());
        subject.attach(probe.clone());

        assert_eq!(subject.observer_count(), 1);

        subject.notify("7");
        // One registration, one update per notify
        assert_eq!(probe.borrow().seen.len(), 1);
    }

    #[test]
    fn notify_preserves_attachment_order() {
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));

        struct Tagged {
            tag: &'static str,
            order: Rc<RefCell<Vec<&'static str>>>,
        }

        impl Observer for Tagged {
            fn update(&mut self, _display_value: &str) -> Result<(), ObserverError> {
                self.order.borrow_mut().push(self.tag);
                Ok(())
            }
        }

        let first: SharedObserver = Rc::new(RefCell::new(Tagged {
            tag: "first",
            order: order.clone(),
        }));
        let second: SharedObserver = Rc::new(RefCell::new(Tagged {
            tag: "second",
            order: order.clone(),
        }));

        let mut subject = Subject::new();
        subject.attach(first);
        subject.attach(second);
        subject.notify("0");

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn failing_observer_does_not_block_later_observers() {
        let failing = Probe::failing();
        let healthy = Probe::new();

        let mut subject = Subject::new();
        subject.attach(failing.clone());
        subject.attach(healthy.clone());

        subject.notify("1");
        subject.notify("2");

        // Both observers saw both notifications despite the first one failing
        assert_eq!(failing.borrow().seen, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(healthy.borrow().seen, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn detach_stops_notifications() {
        let probe = Probe::new();
        let handle: SharedObserver = probe.clone();

        let mut subject = Subject::new();
        subject.attach(handle.clone());
        subject.notify("before");

        subject.detach(&handle).unwrap();
        subject.notify("after");

        assert_eq!(probe.borrow().seen, vec!["before".to_string()]);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn detach_of_unknown_observer_is_an_error() {
        let probe = Probe::new();
        let handle: SharedObserver = probe;

        let mut subject = Subject::new();
        assert_eq!(
            subject.detach(&handle),
            Err(SubjectError::ObserverNotFound)
        );
    }
}
