//! Operators specific to [`AsyncCatching`], the `Either` whose error is a [`Fault`].
//!
//! Besides naming the general combinators in fault terms, this module holds the
//! only combinators other than [`catch`](crate::catch) that turn a raised
//! fault into data: [`map_catching`](AsyncCatching::map_catching) and
//! [`recover_catching`](AsyncCatching::recover_catching).
use std::future::Future;

use crate::{catch, Either, Fault};

/// An [`Either`] whose error channel holds a [`Fault`].
pub type AsyncCatching<T> = Either<Fault, T>;

impl<T> AsyncCatching<T> {
    /// Lifts a `Result`, converting its error into a [`Fault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::AsyncCatching;
    ///
    /// let parsed = AsyncCatching::from_result("12".parse::<u8>().map_err(asynceither::Fault::new));
    /// assert_eq!(parsed.get_or_none(), Some(12));
    /// ```
    pub fn from_result<E: Into<Fault>>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error.into()),
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        self.is_right()
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.is_left()
    }

    #[inline]
    pub fn get_or_none(self) -> Option<T> {
        self.right()
    }

    /// Returns the held fault, if any.
    #[inline]
    pub fn fault_or_none(self) -> Option<Fault> {
        self.left()
    }

    /// Returns the value, or the one computed by `on_failure` from the fault.
    pub async fn get_or_recover<F, Fut>(self, on_failure: F) -> T
    where
        F: FnOnce(Fault) -> Fut,
        Fut: Future<Output = T>,
    {
        self.get_or_handle(on_failure).await
    }

    #[inline]
    pub fn get_or_default(self, default: T) -> T {
        self.get_or_else(default)
    }

    /// Maps the value, capturing a panic raised by `transform` as a new `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::{AsyncCatching, Either};
    /// use futures::executor::block_on;
    ///
    /// let x: AsyncCatching<u32> = Either::Right(0);
    /// let out = block_on(x.map_catching(|v| async move { 100 / v }));
    /// assert!(out.is_failure());
    /// ```
    pub async fn map_catching<O, F, Fut>(self, transform: F) -> AsyncCatching<O>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = O>,
    {
        self.flat_map(move |value| catch(move || transform(value)))
            .await
    }

    /// Converts a fault into a success value. Always yields `Right`.
    pub async fn recover<F, Fut>(self, transform: F) -> Self
    where
        F: FnOnce(Fault) -> Fut,
        Fut: Future<Output = T>,
    {
        self.handle_error(transform).await
    }

    /// Like [`recover`](AsyncCatching::recover), but a panic raised by
    /// `transform` is captured as a new `Left` holding that new fault.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::{AsyncCatching, Either, Fault};
    /// use futures::executor::block_on;
    ///
    /// let failed: AsyncCatching<i32> = Either::Left(Fault::from("first"));
    /// let out: AsyncCatching<i32> = block_on(failed.recover_catching(|_| async { panic!("second") }));
    /// assert_eq!(out.fault_or_none().map(|f| f.to_string()), Some("panicked: second".into()));
    /// ```
    pub async fn recover_catching<F, Fut>(self, transform: F) -> Self
    where
        F: FnOnce(Fault) -> Fut,
        Fut: Future<Output = T>,
    {
        match self {
            Either::Left(fault) => catch(move || transform(fault)).await,
            Either::Right(value) => Either::Right(value),
        }
    }

    pub async fn on_failure<O, F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&Fault) -> Fut,
        Fut: Future<Output = O>,
    {
        self.on_left(action).await
    }

    pub async fn on_success<O, F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = O>,
    {
        self.on_right(action).await
    }
}
