use std::cell::Cell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::scheduler::Scheduler;
use crate::Uint;

/// Core implementation of the throttle call-rate control wrapper.
///
/// Throttling executes the wrapped callable immediately on the first
/// invocation attempt in a window, then suppresses every further attempt
/// until `limit_ticks` have elapsed from the window-opening call. Suppressed
/// attempts are dropped entirely: no execution, no state change, and no
/// queued replay of their arguments.
///
/// # Wrapper Behavior
///
/// - The first attempt in a window runs synchronously, inside `call`
/// - Attempts strictly within `limit_ticks` of the opening attempt are lost
/// - An attempt at or after window close opens a new window and runs
///   immediately
/// - At most one execution per `limit_ticks`-length window
///
/// The one piece of state is a cooling-down flag: set when a window opens,
/// cleared by a timer when the window closes. The cooldown timer is never
/// cancelled early.
///
/// # Zero Limit
///
/// `limit_ticks = 0` degenerates toward always-execute: the window closes at
/// the scheduler's next dispatch opportunity.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use call_guard_core::scheduler::ManualScheduler;
/// use call_guard_core::wrappers::ThrottleCore;
///
/// let scheduler = Rc::new(ManualScheduler::new());
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let mut scroll = ThrottleCore::new(
///     scheduler.clone(),
///     move |offset: u32| sink.borrow_mut().push(offset),
///     100,
/// );
///
/// scroll.call(1); // t=0: opens a window, runs immediately
/// scheduler.advance(50);
/// scroll.call(2); // t=50: inside the window, dropped
/// scheduler.advance(100);
/// scroll.call(3); // t=150: window closed at t=100, runs immediately
///
/// assert_eq!(seen.borrow().as_slice(), &[1, 3]);
/// ```
pub struct ThrottleCore<A, F> {
    /// Suppression window measured from the window-opening call, in ticks
    limit_ticks: Uint,
    /// Host timer facility the window-closing callback is registered with
    scheduler: Rc<dyn Scheduler>,
    /// Wrapped callable; only ever invoked from inside `call`
    callback: F,
    /// Whether the wrapper is inside a suppression window. Shared with the
    /// window-closing callback, which clears it.
    cooling_down: Rc<Cell<bool>>,
    _args: PhantomData<fn(A)>,
}

impl<A, F> ThrottleCore<A, F>
where
    F: FnMut(A),
{
    /// Creates a throttle wrapper around `callback` with the given window
    /// length.
    ///
    /// The wrapper owns its cooling-down state exclusively; wrapping the
    /// same callable twice yields two fully independent wrappers.
    pub fn new(scheduler: Rc<dyn Scheduler>, callback: F, limit_ticks: Uint) -> Self {
        ThrottleCore {
            limit_ticks,
            scheduler,
            callback,
            cooling_down: Rc::new(Cell::new(false)),
            _args: PhantomData,
        }
    }

    /// Records an invocation attempt with `args` and returns immediately.
    ///
    /// Outside a window this invokes the callable synchronously with `args`
    /// before returning, then opens a suppression window of `limit_ticks`.
    /// Inside a window the attempt is dropped and `args` are discarded; the
    /// wrapper never replays a suppressed attempt.
    ///
    /// A failure raised by the callable propagates directly to the caller of
    /// `call`, since the leading-edge execution is synchronous.
    pub fn call(&mut self, args: A) {
        if self.cooling_down.get() {
            return;
        }

        (self.callback)(args);
        self.cooling_down.set(true);

        // The handle is dropped: the cooldown always runs to completion.
        let cooling_down = Rc::clone(&self.cooling_down);
        let _ = self
            .scheduler
            .schedule(Box::new(move || cooling_down.set(false)), self.limit_ticks);
    }
}
