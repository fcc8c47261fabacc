//! Asynchronous combinators on [`Either`](crate::Either).
//!
//! Every combinator that takes a caller function awaits the future that
//! function returns, and suspends nowhere else. Chains therefore run strictly
//! in call order:
//!
//! ```
//! use asynceither::Either;
//! use futures::executor::block_on;
//!
//! let result = block_on(async {
//!     let x: Either<&str, i32> = Either::Right(5);
//!     x.map(|v| async move { v * 2 })
//!         .await
//!         .flat_map(|v| async move { if v > 5 { Either::Right(v) } else { Either::Left("small") } })
//!         .await
//!         .get_or_else(0)
//! });
//! assert_eq!(result, 10);
//! ```
//!
//! - `map`: map, map_left, flat_map, handle_error_with, handle_error, left_if_null
//! - `fold`: fold, get_or_handle, get_or_else, on_left, on_right, exists
//! - `zip`: zip, zip_with, compose

mod fold;
mod map;
mod zip;
