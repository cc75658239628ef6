//! The scheduling collaborator used by all call-rate wrappers.
//!
//! Wrappers never keep time themselves. They register deferred callbacks with
//! a [`Scheduler`] supplied by the host environment and return to their caller
//! immediately. This module defines the trait, the opaque [`TimerHandle`]
//! identifying a scheduled callback, and [`ManualScheduler`], a deterministic
//! reference implementation driven explicitly by the application.

use std::cell::RefCell;

use crate::Uint;

/// Opaque identity of a scheduled, not-yet-cancelled deferred callback.
///
/// Handles are unique per scheduler and never reused, so holding on to a
/// handle after its timer has fired is harmless: cancelling it is a silent
/// no-op rather than an accidental cancellation of a newer timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Deferred work registered with a [`Scheduler`].
///
/// Invoked exactly once by the host when the timer's deadline is reached,
/// unless the timer is cancelled first.
pub type TimerCallback = Box<dyn FnOnce()>;

/// A host timer facility: schedule a callback after a delay, cancel a
/// previously scheduled callback.
///
/// The model is single-threaded and cooperative. `schedule` must never run
/// the callback synchronously, even for a zero delay; the callback runs at
/// the host's next dispatch opportunity at the earliest.
pub trait Scheduler {
    /// Registers `callback` to run once `delay_ticks` have elapsed from the
    /// scheduler's current time, returning a handle for cancellation.
    fn schedule(&self, callback: TimerCallback, delay_ticks: Uint) -> TimerHandle;

    /// Cancels a pending timer. Unconditional and silent: cancelling a
    /// handle whose timer already fired, was already cancelled, or never
    /// existed has no observable effect.
    fn cancel(&self, handle: TimerHandle);
}

/// A deterministic, manually driven [`Scheduler`].
///
/// Time only moves when the application calls [`advance_to`](Self::advance_to)
/// or [`advance`](Self::advance); due callbacks fire during that call, in
/// deadline order (insertion order within the same deadline). Callbacks may
/// themselves schedule or cancel timers.
///
/// This serves both as the crate's test harness and as a stand-in for a real
/// host timer facility in environments that pump their own event loop.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use call_guard_core::scheduler::{ManualScheduler, Scheduler};
///
/// let scheduler = ManualScheduler::new();
/// let fired = Rc::new(Cell::new(false));
///
/// let flag = Rc::clone(&fired);
/// scheduler.schedule(Box::new(move || flag.set(true)), 10);
///
/// scheduler.advance_to(9);
/// assert!(!fired.get());
/// scheduler.advance_to(10);
/// assert!(fired.get());
/// ```
pub struct ManualScheduler {
    inner: RefCell<ManualSchedulerState>,
}

struct ManualSchedulerState {
    /// Current time in ticks
    now: Uint,
    /// Next handle value to hand out; monotonic, never reused
    next_handle: u64,
    /// Pending timers in insertion order
    timers: Vec<TimerEntry>,
}

struct TimerEntry {
    handle: TimerHandle,
    deadline: Uint,
    callback: TimerCallback,
}

impl ManualScheduler {
    /// Creates a scheduler with no pending timers, positioned at tick 0.
    pub fn new() -> Self {
        ManualScheduler {
            inner: RefCell::new(ManualSchedulerState {
                now: 0,
                next_handle: 1,
                timers: Vec::new(),
            }),
        }
    }

    /// Returns the scheduler's current time in ticks.
    pub fn now(&self) -> Uint {
        self.inner.borrow().now
    }

    /// Returns the number of timers scheduled but not yet fired or cancelled.
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Advances the current time by `delta_ticks`, firing every timer whose
    /// deadline falls on or before the new time. See [`advance_to`](Self::advance_to).
    pub fn advance(&self, delta_ticks: Uint) {
        let target = self.now().saturating_add(delta_ticks);
        self.advance_to(target);
    }

    /// Advances the current time to `tick`, firing every due timer.
    ///
    /// Timers fire in deadline order; two timers with the same deadline fire
    /// in the order they were scheduled. The current time moves through each
    /// deadline as its timer fires, so a callback that schedules a new timer
    /// sees the time its own deadline established, and a new timer due on or
    /// before `tick` fires within the same call (after the callback that
    /// scheduled it returns, never synchronously inside `schedule`).
    ///
    /// # Panics
    ///
    /// Panics if `tick` precedes the current time.
    pub fn advance_to(&self, tick: Uint) {
        loop {
            // Take one due timer out before invoking it, so the callback can
            // re-enter schedule/cancel without the state borrow being held.
            let callback = {
                let mut inner = self.inner.borrow_mut();
                assert!(tick >= inner.now, "target tick must not precede the current tick");

                let due = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| entry.deadline <= tick)
                    .min_by_key(|(_, entry)| (entry.deadline, entry.handle.0))
                    .map(|(index, _)| index);

                match due {
                    Some(index) => {
                        let entry = inner.timers.remove(index);
                        if entry.deadline > inner.now {
                            inner.now = entry.deadline;
                        }
                        entry.callback
                    }
                    None => {
                        inner.now = tick;
                        break;
                    }
                }
            };
            callback();
        }
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        ManualScheduler::new()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, callback: TimerCallback, delay_ticks: Uint) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle(inner.next_handle);
        inner.next_handle += 1;
        let deadline = inner.now.saturating_add(delay_ticks);
        inner.timers.push(TimerEntry {
            handle,
            deadline,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.timers.retain(|entry| entry.handle != handle);
    }
}
