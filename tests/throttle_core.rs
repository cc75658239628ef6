use std::cell::RefCell;
use std::rc::Rc;

use call_guard_core::scheduler::ManualScheduler;
use call_guard_core::wrappers::ThrottleCore;

#[test]
fn test_leading_edge_executes_synchronously() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let mut wrapper = ThrottleCore::new(scheduler.clone(), move |v: u32| sink.borrow_mut().push(v), 100);

    // The first call in a window executes before any timer elapses
    wrapper.call(7);
    assert_eq!(seen.borrow().as_slice(), &[7]);
}

#[test]
fn test_calls_within_window_are_dropped() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let mut wrapper = ThrottleCore::new(scheduler.clone(), move |v: u32| sink.borrow_mut().push(v), 100);

    wrapper.call(1); // t=0: opens the window, executes
    scheduler.advance_to(50);
    wrapper.call(2); // t=50: strictly inside the window, dropped
    scheduler.advance_to(90);
    wrapper.call(3); // t=90: still inside, dropped
    assert_eq!(seen.borrow().as_slice(), &[1]);

    // Dropped arguments are permanently lost: closing the window must not
    // replay them
    scheduler.advance_to(500);
    assert_eq!(seen.borrow().as_slice(), &[1]);
}

#[test]
fn test_window_reopens_after_limit() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let mut wrapper = ThrottleCore::new(scheduler.clone(), move |v: u32| sink.borrow_mut().push(v), 100);

    // Calls at t=0, 50, 90, 150 with a 100-tick window
    wrapper.call(10);
    scheduler.advance_to(50);
    wrapper.call(20);
    scheduler.advance_to(90);
    wrapper.call(30);
    scheduler.advance_to(150);
    wrapper.call(40);

    // Executions at t=0 and t=150 only, each with its own call's arguments
    assert_eq!(seen.borrow().as_slice(), &[10, 40]);
}

#[test]
fn test_call_exactly_at_window_close() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let mut wrapper = ThrottleCore::new(scheduler.clone(), move |v: u32| sink.borrow_mut().push(v), 100);

    wrapper.call(1);
    // The window covers [0, 100); a call at exactly t=100 opens a new one
    scheduler.advance_to(100);
    wrapper.call(2);
    assert_eq!(seen.borrow().as_slice(), &[1, 2]);

    // And the new window suppresses as usual
    scheduler.advance_to(199);
    wrapper.call(3);
    assert_eq!(seen.borrow().as_slice(), &[1, 2]);
}

#[test]
fn test_zero_limit_degenerates_to_always_execute() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let mut wrapper = ThrottleCore::new(scheduler.clone(), move |v: u32| sink.borrow_mut().push(v), 0);

    // A zero-length window still suppresses until the next dispatch
    wrapper.call(1);
    wrapper.call(2);
    assert_eq!(seen.borrow().as_slice(), &[1]);

    // The window closes without time moving, so every paced call executes
    scheduler.advance(0);
    wrapper.call(3);
    assert_eq!(seen.borrow().as_slice(), &[1, 3]);
}

#[test]
fn test_instances_are_isolated() {
    let scheduler = Rc::new(ManualScheduler::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink_a = Rc::clone(&seen);
    let mut wrapper_a =
        ThrottleCore::new(scheduler.clone(), move |v: u32| sink_a.borrow_mut().push(("a", v)), 100);
    let sink_b = Rc::clone(&seen);
    let mut wrapper_b =
        ThrottleCore::new(scheduler.clone(), move |v: u32| sink_b.borrow_mut().push(("b", v)), 100);

    // a's open window must not suppress b's leading edge
    wrapper_a.call(1);
    scheduler.advance_to(50);
    wrapper_b.call(2);
    assert_eq!(seen.borrow().as_slice(), &[("a", 1), ("b", 2)]);

    // Both windows are now open; both wrappers suppress independently
    wrapper_a.call(3);
    wrapper_b.call(4);
    assert_eq!(seen.borrow().as_slice(), &[("a", 1), ("b", 2)]);
}
