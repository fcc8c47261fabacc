//! Turning raised faults into `Left` values.
//!
//! [`catch`] runs an asynchronous computation and converts a panic raised
//! while running it into `Left(Fault)`. [`try_catch`] additionally lifts an
//! `Err` returned by the computation.
//!
//! # Cancellation
//!
//! Neither function ever observes cancellation: dropping the returned future
//! drops the computation with it and no `Either` is produced. A caller that
//! aborts a catching chain sees the abort through whatever mechanism it used
//! (`Abortable`, `JoinHandle::abort`, a `select!` branch), never as a `Left`.
//!
//! # Examples
//!
//! ```
//! use asynceither::{catch, try_catch, Either, Fault};
//! use futures::executor::block_on;
//!
//! let ok = block_on(catch(|| async { 6 * 7 }));
//! assert_eq!(ok.right(), Some(42));
//!
//! let failed = block_on(try_catch(|| async { "x".parse::<i32>().map_err(Fault::new) }));
//! assert!(failed.is_left());
//! ```
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::{AsyncCatching, Either, Fault};

fn captured(fault: Fault) -> Fault {
    fault_event!(debug, target: "asynceither::catch", fault = %fault, "computation faulted, captured as Left");
    fault
}

/// Run `supplier` and await its future, capturing any panic as `Left`.
///
/// The supplier itself is called inside the guarded region, so a panic raised
/// before it returns its future is captured too.
pub async fn catch<T, F, Fut>(supplier: F) -> AsyncCatching<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match AssertUnwindSafe(async move { supplier().await })
        .catch_unwind()
        .await
    {
        Ok(value) => Either::Right(value),
        Err(payload) => Either::Left(captured(Fault::from_panic(payload))),
    }
}

/// Like [`catch`], for computations that report faults through `Result`.
///
/// `Err(e)` becomes `Left(e.into())`; panics are captured as in [`catch`].
pub async fn try_catch<T, E, F, Fut>(supplier: F) -> AsyncCatching<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<Fault>,
{
    match catch(supplier).await {
        Either::Right(Ok(value)) => Either::Right(value),
        Either::Right(Err(error)) => Either::Left(captured(error.into())),
        Either::Left(fault) => Either::Left(fault),
    }
}

/// Extension for running a zero-argument asynchronous computation under [`catch`].
///
/// ```
/// use asynceither::EitherCatching;
/// use futures::executor::block_on;
///
/// let compute = || async { 1 + 1 };
/// assert_eq!(block_on(compute.either_catching()).right(), Some(2));
/// ```
pub trait EitherCatching<T> {
    /// Run the computation, converting a raised fault into `Left`.
    fn either_catching(self) -> impl Future<Output = AsyncCatching<T>>;
}

impl<T, F, Fut> EitherCatching<T> for F
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    fn either_catching(self) -> impl Future<Output = AsyncCatching<T>> {
        catch(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{abortable, pending, Aborted};
    use std::hint::black_box;

    #[test]
    fn test_catch_right() {
        let result = block_on(catch(|| async { 10 / black_box(2) }));
        assert_eq!(result.right(), Some(5));
    }

    #[test]
    fn test_catch_divide_by_zero() {
        let result = block_on(catch(|| async { 10 / black_box(0) }));
        match result {
            Either::Left(Fault::Panic(message)) => assert!(message.contains("divide by zero")),
            other => panic!("expected a captured panic, got {other:?}"),
        }
    }

    #[test]
    fn test_catch_panic_before_future() {
        let result: AsyncCatching<u8> = block_on(catch(|| -> std::future::Ready<u8> {
            panic!("supplier refused")
        }));
        assert!(matches!(result, Either::Left(Fault::Panic(ref m)) if m == "supplier refused"));
    }

    #[test]
    fn test_catch_across_suspension() {
        let result = block_on(catch(|| async {
            let (tx, rx) = futures::channel::oneshot::channel::<u32>();
            tx.send(3).ok();
            let value = rx.await.ok();
            if value == Some(3) {
                panic!("after await");
            }
            value
        }));
        assert!(matches!(result, Either::Left(Fault::Panic(ref m)) if m == "after await"));
    }

    #[test]
    fn test_try_catch_err() {
        let result = block_on(try_catch(|| async { Err::<u8, _>("refused") }));
        match result {
            Either::Left(fault) => assert_eq!(fault.to_string(), "refused"),
            other => panic!("expected Left, got {other:?}"),
        }
    }

    #[test]
    fn test_try_catch_ok() {
        let result = block_on(try_catch(|| async { Ok::<_, Fault>(9) }));
        assert_eq!(result.right(), Some(9));
    }

    #[test]
    fn test_either_catching() {
        let compute = || async { panic!("lazy") };
        let result: AsyncCatching<()> = block_on(compute.either_catching());
        assert!(result.is_left());
    }

    #[test]
    fn test_abort_is_not_converted() {
        let (guarded, handle) = abortable(catch(|| pending::<u32>()));
        handle.abort();
        assert_eq!(block_on(guarded).map(|e| e.is_left()), Err(Aborted));
    }
}
