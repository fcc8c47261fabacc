use std::future::Future;

use crate::Either;

impl<L, R> Either<L, R> {
    /// Transforms the success value with an asynchronous function.
    ///
    /// `Left` passes through without calling `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    ///
    /// let x: Either<&str, i32> = Either::Right(5);
    /// assert_eq!(block_on(x.map(|v| async move { v * 2 })), Either::Right(10));
    ///
    /// let y: Either<&str, i32> = Either::Left("error");
    /// assert_eq!(block_on(y.map(|v| async move { v * 2 })), Either::Left("error"));
    /// ```
    pub async fn map<O, F, Fut>(self, f: F) -> Either<L, O>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = O>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r).await),
        }
    }

    /// Transforms the error value with an asynchronous function.
    ///
    /// `Right` passes through without calling `f`.
    pub async fn map_left<M, F, Fut>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = M>,
    {
        match self {
            Either::Left(l) => Either::Left(f(l).await),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Replaces the success value with the `Either` produced by `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    ///
    /// let half = |v: i32| async move {
    ///     if v % 2 == 0 { Either::Right(v / 2) } else { Either::Left("odd") }
    /// };
    ///
    /// assert_eq!(block_on(Either::<&str, i32>::Right(8).flat_map(half)), Either::Right(4));
    /// assert_eq!(block_on(Either::<&str, i32>::Right(7).flat_map(half)), Either::Left("odd"));
    /// ```
    pub async fn flat_map<O, F, Fut>(self, f: F) -> Either<L, O>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, O>>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r).await,
        }
    }

    /// Replaces the error value with the `Either` produced by `f`.
    pub async fn handle_error_with<M, F, Fut>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = Either<M, R>>,
    {
        match self {
            Either::Left(l) => f(l).await,
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Converts the error into a success value, so the result is always `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    ///
    /// let x: Either<&str, i32> = Either::Left("err");
    /// assert_eq!(block_on(x.handle_error(|_| async { -1 })), Either::Right(-1));
    ///
    /// let y: Either<&str, i32> = Either::Right(3);
    /// assert_eq!(block_on(y.handle_error(|_| async { 0 })), Either::Right(3));
    /// ```
    pub async fn handle_error<F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Either::Left(l) => Either::Right(f(l).await),
            Either::Right(r) => Either::Right(r),
        }
    }
}

impl<L, R> Either<L, Option<R>> {
    /// Turns a `Right(None)` into `Left(None)`, narrowing the success channel.
    ///
    /// An existing error moves to `Left(Some(error))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, Option<i32>> = Either::Right(Some(1));
    /// assert_eq!(x.left_if_null(), Either::Right(1));
    ///
    /// let y: Either<&str, Option<i32>> = Either::Right(None);
    /// assert_eq!(y.left_if_null(), Either::Left(None));
    ///
    /// let z: Either<&str, Option<i32>> = Either::Left("err");
    /// assert_eq!(z.left_if_null(), Either::Left(Some("err")));
    /// ```
    pub fn left_if_null(self) -> Either<Option<L>, R> {
        match self {
            Either::Left(l) => Either::Left(Some(l)),
            Either::Right(Some(r)) => Either::Right(r),
            Either::Right(None) => Either::Left(None),
        }
    }
}
