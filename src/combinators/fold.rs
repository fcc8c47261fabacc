use std::future::Future;

use crate::Either;

impl<L, R> Either<L, R> {
    /// Runs exactly one of the two branches and returns its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    ///
    /// let x: Either<&str, i32> = Either::Right(3);
    /// let text = block_on(x.fold(
    ///     |v| async move { format!("value {v}") },
    ///     |e| async move { format!("error {e}") },
    /// ));
    /// assert_eq!(text, "value 3");
    /// ```
    pub async fn fold<O, FR, FutR, FL, FutL>(self, if_right: FR, if_left: FL) -> O
    where
        FR: FnOnce(R) -> FutR,
        FutR: Future<Output = O>,
        FL: FnOnce(L) -> FutL,
        FutL: Future<Output = O>,
    {
        match self {
            Either::Left(l) => if_left(l).await,
            Either::Right(r) => if_right(r).await,
        }
    }

    /// Returns the success value, or computes one from the error.
    pub async fn get_or_handle<F, Fut>(self, f: F) -> R
    where
        F: FnOnce(L) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Either::Left(l) => f(l).await,
            Either::Right(r) => r,
        }
    }

    /// Returns the success value, or `default` for any error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, i32> = Either::Right(10);
    /// assert_eq!(x.get_or_else(0), 10);
    ///
    /// let y: Either<&str, i32> = Either::Left("error");
    /// assert_eq!(y.get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    /// Awaits `f` on the error for its effect and returns `self` unchanged.
    ///
    /// `f` receives a reference, so the future it returns must not borrow it.
    pub async fn on_left<O, F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&L) -> Fut,
        Fut: Future<Output = O>,
    {
        if let Either::Left(l) = &self {
            f(l).await;
        }
        self
    }

    /// Awaits `f` on the success value for its effect and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    /// use std::cell::RefCell;
    ///
    /// let seen = RefCell::new(Vec::new());
    /// let x: Either<&str, i32> = Either::Right(7);
    /// let x = block_on(x.on_right(|v| {
    ///     seen.borrow_mut().push(*v);
    ///     async {}
    /// }));
    ///
    /// assert_eq!(x, Either::Right(7));
    /// assert_eq!(*seen.borrow(), vec![7]);
    /// ```
    pub async fn on_right<O, F, Fut>(self, f: F) -> Self
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = O>,
    {
        if let Either::Right(r) = &self {
            f(r).await;
        }
        self
    }

    /// Returns `true` if the value is a `Right` satisfying `predicate`.
    pub async fn exists<F, Fut>(&self, predicate: F) -> bool
    where
        F: FnOnce(&R) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(r) => predicate(r).await,
        }
    }
}
