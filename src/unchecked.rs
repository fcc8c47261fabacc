//! Unwraps that panic on `Left`.
//!
//! These operators bypass the total, error-as-data contract of [`Either`], so
//! they are kept out of the [`prelude`](crate::prelude). Calling them requires
//! importing this module explicitly, which keeps every unchecked unwrap visible
//! at the call site:
//!
//! ```
//! use asynceither::unchecked::UncheckedGet;
//! use asynceither::Either;
//!
//! let x: Either<&str, i32> = Either::Right(3);
//! assert_eq!(x.unchecked_get(), 3);
//! ```
use std::any::Any;
use std::fmt::Debug;

use crate::{AsyncCatching, Either, Fault};

/// Opt-in unchecked unwrap for any [`Either`].
pub trait UncheckedGet<R>: Sized {
    /// Returns the success value, panicking on `Left`.
    ///
    /// # Panics
    ///
    /// If the error is a [`Fault`], that exact fault is the panic payload, so
    /// [`catch`](crate::catch) recovers it unchanged. Any other error panics
    /// with [`Fault::MissingValue`] carrying the error's `Debug` form.
    ///
    /// ```should_panic
    /// use asynceither::unchecked::UncheckedGet;
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, i32> = Either::Left("error");
    /// x.unchecked_get(); // panics
    /// ```
    fn unchecked_get(self) -> R;
}

impl<L, R> UncheckedGet<R> for Either<L, R>
where
    L: Debug + Send + 'static,
{
    #[track_caller]
    fn unchecked_get(self) -> R {
        match self {
            Either::Right(value) => value,
            Either::Left(error) => raise(error),
        }
    }
}

/// Opt-in unchecked unwrap for [`AsyncCatching`].
pub trait UncheckedCatching<T>: Sized {
    /// Returns the value, re-raising the held fault as a panic.
    fn get_or_throw(self) -> T;
}

impl<T> UncheckedCatching<T> for AsyncCatching<T> {
    #[track_caller]
    fn get_or_throw(self) -> T {
        self.unchecked_get()
    }
}

#[track_caller]
fn raise<L: Debug + Send + 'static>(error: L) -> ! {
    fault_event!(trace, target: "asynceither::unchecked", error = ?error, "unchecked unwrap of Left");
    let description = format!("expected Right, got Left, error={error:?}");
    let fault = match (Box::new(error) as Box<dyn Any + Send>).downcast::<Fault>() {
        Ok(fault) => *fault,
        Err(_) => Fault::MissingValue(description),
    };
    std::panic::panic_any(fault)
}
