//! # asynceither: an `Either` with asynchronous combinators
//!
//! [`Either<L, R>`] holds exactly one of an error value (`Left`) or a success
//! value (`Right`). Its combinators accept caller functions that return
//! futures, so each step of a chain may suspend before producing the next
//! `Either`.
//!
//! ## Core Types
//!
//! - **[`Either<L, R>`]**: the two-variant container
//! - **[`AsyncCatching<T>`]**: an `Either` whose error is a [`Fault`]
//! - **[`Fault`]**: a captured panic or error
//!
//! ## Key Features
//!
//! - **Short-circuiting**: `map`, `flat_map`, `zip` and friends pass `Left` through untouched
//! - **Explicit recovery**: only `handle_error`, `recover` and the `get_or_*` family turn an error into a value
//! - **Fault capture**: [`catch`], [`try_catch`], `map_catching` and `recover_catching` turn panics into `Left`
//! - **Opt-in unwraps**: panicking unwraps live in [`unchecked`], outside the [`prelude`]
//!
//! ## Example
//!
//! ```
//! use asynceither::prelude::*;
//! use futures::executor::block_on;
//!
//! let total = block_on(async {
//!     catch(|| async { "21".parse::<i32>().unwrap() })
//!         .await
//!         .map(|v| async move { v * 2 })
//!         .await
//!         .get_or_default(0)
//! });
//! assert_eq!(total, 42);
//! ```
//!
//! ## Cancellation
//!
//! Combinators never spawn work and hold nothing across calls. Dropping a
//! chain's future cancels it; the catching operators never turn that into a
//! `Left`.

macro_rules! fault_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arg)+);
        }
    };
}

mod capture;
mod catching;
mod combinators;
mod either;
mod fault;

pub mod prelude;
pub mod unchecked;

pub use capture::*;
pub use catching::AsyncCatching;
pub use either::Either;
pub use fault::Fault;
