use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::scheduler::{Scheduler, TimerHandle};
use crate::Uint;

/// Core implementation of the debounce call-rate control wrapper.
///
/// Debouncing defers execution of the wrapped callable until a quiet period of
/// `delay_ticks` has elapsed since the most recent invocation attempt. Each
/// attempt supersedes the previous one: its arguments replace the previously
/// captured arguments, and its timer replaces the previously pending timer.
///
/// # Wrapper Behavior
///
/// - Every `call` cancels the pending timer, if any, then schedules a new one
/// - The callable runs with the arguments of the LAST attempt only
/// - A burst of attempts closer together than `delay_ticks` produces exactly
///   one execution, `delay_ticks` after the final attempt
/// - Zero attempts produce zero executions
///
/// # Zero Delay
///
/// `delay_ticks = 0` still defers execution to the scheduler's next dispatch
/// opportunity. The callable never runs synchronously inside `call`.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use call_guard_core::scheduler::ManualScheduler;
/// use call_guard_core::wrappers::DebounceCore;
///
/// let scheduler = Rc::new(ManualScheduler::new());
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let mut search = DebounceCore::new(
///     scheduler.clone(),
///     move |query: &str| sink.borrow_mut().push(query),
///     100,
/// );
///
/// // Three keystrokes at t=0, t=30, t=60 coalesce into one lookup
/// search.call("r");
/// scheduler.advance(30);
/// search.call("ru");
/// scheduler.advance(30);
/// search.call("rust");
///
/// // The quiet period ends at t=160; only the last query survives
/// scheduler.advance(100);
/// assert_eq!(seen.borrow().as_slice(), ["rust"]);
/// ```
pub struct DebounceCore<A, F> {
    /// Quiet period measured from the most recent attempt, in ticks
    delay_ticks: Uint,
    /// Host timer facility deferred executions are registered with
    scheduler: Rc<dyn Scheduler>,
    /// Wrapped callable, shared with the currently deferred execution
    callback: Rc<RefCell<F>>,
    /// Handle of the most recently scheduled, not-yet-superseded timer.
    /// Zero or one pending timer exists per wrapper at any time.
    pending: Option<TimerHandle>,
    _args: PhantomData<fn(A)>,
}

impl<A, F> DebounceCore<A, F>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    /// Creates a debounce wrapper around `callback` with the given quiet
    /// period.
    ///
    /// The wrapper owns its pending-timer state exclusively; wrapping the
    /// same callable twice yields two fully independent wrappers.
    pub fn new(scheduler: Rc<dyn Scheduler>, callback: F, delay_ticks: Uint) -> Self {
        DebounceCore {
            delay_ticks,
            scheduler,
            callback: Rc::new(RefCell::new(callback)),
            pending: None,
            _args: PhantomData,
        }
    }

    /// Records an invocation attempt with `args` and returns immediately.
    ///
    /// Any previously pending execution is cancelled first (a silent no-op if
    /// none is pending or it already fired), so stale arguments can never
    /// reach the callable. The deferred execution scheduled here invokes the
    /// callable with exactly the `args` given to this attempt.
    ///
    /// Failures raised by the callable are not intercepted; they propagate
    /// out of the host's dispatch, not out of `call`, and are therefore
    /// usually unobservable to the code that made the attempt.
    pub fn call(&mut self, args: A) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }

        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.schedule(
            Box::new(move || (*callback.borrow_mut())(args)),
            self.delay_ticks,
        );
        self.pending = Some(handle);
    }
}
