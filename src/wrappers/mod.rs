//! Call-rate control wrapper implementations.
//!
//! This module contains the wrapper objects that control how often a wrapped
//! callable actually executes in response to a rapid sequence of invocation
//! attempts. Each wrapper owns its state exclusively; two wrappers around the
//! same callable never interfere with each other.
//!
//! # Available Wrappers
//!
//! - **[`DebounceCore`]** - Defers execution until a quiet period has elapsed
//!   since the most recent attempt; only the latest arguments survive
//! - **[`ThrottleCore`]** - Executes immediately on the first attempt in a
//!   window, then drops further attempts until the window closes
//!
//! # Wrapper Comparison
//!
//! | Wrapper | Executes | Surviving arguments | Use Case |
//! |----------|---------------------------|---------------------|---------------------------|
//! | Debounce | After the final attempt | Last attempt's | Search input, resize end |
//! | Throttle | At most once per window | First attempt's | Scroll, drag, mouse move |
//!
//! # Execution Model
//!
//! Both wrappers return synchronously from every `call`; any deferred work is
//! registered with the [`Scheduler`](crate::scheduler::Scheduler) collaborator
//! and runs when the host dispatches it.

pub mod debounce_core;
pub use debounce_core::DebounceCore;

pub mod throttle_core;
pub use throttle_core::ThrottleCore;
