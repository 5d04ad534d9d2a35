use super::*;
use std::cell::Cell;
use std::rc::Rc;

/// Stand-in timer handle that records when it is dropped (cancelled).
struct FakeTimer {
    cancelled: Rc<Cell<u32>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.cancelled.set(self.cancelled.get() + 1);
    }
}

fn timer(cancelled: &Rc<Cell<u32>>) -> FakeTimer {
    FakeTimer {
        cancelled: Rc::clone(cancelled),
    }
}

#[test]
fn new_slot_has_nothing_pending() {
    let mut slot = PendingTimer::<FakeTimer>::default();
    assert!(!slot.is_pending());
    assert!(!slot.cancel());
}

#[test]
fn arming_again_cancels_the_previous_timer() {
    let cancelled = Rc::new(Cell::new(0));
    let mut slot = PendingTimer::default();
    slot.arm(timer(&cancelled));
    slot.arm(timer(&cancelled));
    slot.arm(timer(&cancelled));
    assert_eq!(cancelled.get(), 2);
    assert!(slot.is_pending());
}

#[test]
fn teardown_cancels_the_pending_timer() {
    let cancelled = Rc::new(Cell::new(0));
    let mut slot = PendingTimer::default();
    slot.arm(timer(&cancelled));
    assert!(slot.cancel());
    assert_eq!(cancelled.get(), 1);
    assert!(!slot.is_pending());
    assert!(!slot.cancel());
}

#[test]
fn debounce_window_is_200ms() {
    assert_eq!(RESIZE_DEBOUNCE_MS, 200);
}
