//! Call-rate control wrappers for Rust applications.
//!
//! This library provides two small wrapper objects, debounce and throttle,
//! that wrap an arbitrary callable and control how often the underlying
//! callable actually executes in response to a rapid sequence of invocation
//! attempts. Both are deterministic and single-threaded: they keep no clocks
//! and spawn nothing, deferring all timing to a pluggable scheduling
//! collaborator.
//!
//! # Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use call_guard_core::scheduler::ManualScheduler;
//! use call_guard_core::wrappers::DebounceCore;
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! // Debounce a lookup so it only fires 100 ticks after the last keystroke
//! let sink = Rc::clone(&seen);
//! let mut search = DebounceCore::new(
//!     scheduler.clone(),
//!     move |query: &str| sink.borrow_mut().push(query),
//!     100,
//! );
//!
//! search.call("r");
//! scheduler.advance(30);
//! search.call("rust");
//! scheduler.advance(100);
//!
//! assert_eq!(seen.borrow().as_slice(), ["rust"]);
//! ```
//!
//! # Available Wrappers
//!
//! ## [Debounce](wrappers::DebounceCore)
//! Defers execution until a quiet period has elapsed since the last attempt;
//! a burst of attempts coalesces into one execution with the last arguments:
//! ```rust
//! # use std::rc::Rc;
//! # use call_guard_core::scheduler::ManualScheduler;
//! # use call_guard_core::wrappers::DebounceCore;
//! # let scheduler = Rc::new(ManualScheduler::new());
//! let wrapper = DebounceCore::new(scheduler.clone(), |_: u32| {}, 100);
//! ```
//!
//! ## [Throttle](wrappers::ThrottleCore)
//! Executes immediately on the first attempt in a window, then drops further
//! attempts until the window closes:
//! ```rust
//! # use std::rc::Rc;
//! # use call_guard_core::scheduler::ManualScheduler;
//! # use call_guard_core::wrappers::ThrottleCore;
//! # let scheduler = Rc::new(ManualScheduler::new());
//! let wrapper = ThrottleCore::new(scheduler.clone(), |_: u32| {}, 100);
//! ```
//!
//! # Core Concepts
//!
//! ## Time Representation
//! All delays and windows are abstract "ticks" ([`Uint`]). This lets the
//! library work with any time unit (milliseconds, frames, etc.) by mapping
//! your time source to tick values. The tick width is chosen at compile time
//! via the `tick_u64` (default) and `tick_u128` features.
//!
//! ## The Scheduler Collaborator
//! Wrappers depend only on a [`Scheduler`](scheduler::Scheduler) exposing
//! `schedule(callback, delay) -> handle` and `cancel(handle)`. Production
//! hosts supply their own timer facility; [`ManualScheduler`](scheduler::ManualScheduler)
//! is a deterministic implementation driven explicitly by the application.
//!
//! ## Execution Model
//! Every `call` on a wrapper returns synchronously. Deferred executions run
//! inside the host's dispatch, so a failure raised there never reaches the
//! code that made the original attempt. Throttle's leading-edge execution is
//! the one exception: it runs inside `call` itself.
//!
//! ## Error Handling
//! The wrappers introduce no error types. `call` is infallible, and failures
//! raised by the wrapped callable propagate uncaught through whichever side
//! invoked it.
//!
//! # Wrapper Selection Guide
//!
//! Choose your wrapper based on which attempt must win:
//!
//! - **Wait until the caller goes quiet, keep the latest arguments**: use
//!   [`DebounceCore`](wrappers::DebounceCore)
//! - **React at once, ignore the noise that follows**: use
//!   [`ThrottleCore`](wrappers::ThrottleCore)

pub mod scheduler;
pub mod types;
pub mod wrappers;

pub use types::Uint;
