use std::future::Future;

use crate::Either;

impl<L, R> Either<L, R> {
    /// Pairs two success values.
    ///
    /// If either side is `Left`, that error is returned; when both are, the
    /// error of `self` wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let a: Either<&str, i32> = Either::Right(1);
    /// let b: Either<&str, char> = Either::Right('x');
    /// assert_eq!(a.zip(b), Either::Right((1, 'x')));
    ///
    /// let a: Either<&str, i32> = Either::Left("first");
    /// let b: Either<&str, char> = Either::Left("second");
    /// assert_eq!(a.zip(b), Either::Left("first"));
    /// ```
    pub fn zip<O>(self, other: Either<L, O>) -> Either<L, (R, O)> {
        match (self, other) {
            (Either::Left(l), _) => Either::Left(l),
            (Either::Right(_), Either::Left(l)) => Either::Left(l),
            (Either::Right(r), Either::Right(o)) => Either::Right((r, o)),
        }
    }

    /// Combines two success values with an asynchronous function.
    ///
    /// Short-circuits exactly like [`Either::zip`]; `f` runs only when both are `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    ///
    /// let a: Either<&str, i32> = Either::Right(3);
    /// let b: Either<&str, i32> = Either::Right(4);
    /// assert_eq!(block_on(a.zip_with(b, |x, y| async move { x + y })), Either::Right(7));
    /// ```
    pub async fn zip_with<O, P, F, Fut>(self, other: Either<L, O>, f: F) -> Either<L, P>
    where
        F: FnOnce(R, O) -> Fut,
        Fut: Future<Output = P>,
    {
        self.flat_map(move |r| other.map(move |o| f(r, o))).await
    }

    /// Applies the function held in `self` to the success value of `fb`.
    ///
    /// An error in `self` wins over an error in `fb`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    /// use futures::executor::block_on;
    ///
    /// let f: Either<&str, _> = Either::Right(|x: i32| async move { x * 10 });
    /// let v: Either<&str, i32> = Either::Right(4);
    /// assert_eq!(block_on(f.compose(v)), Either::Right(40));
    /// ```
    pub async fn compose<A, O, Fut>(self, fb: Either<L, A>) -> Either<L, O>
    where
        R: FnOnce(A) -> Fut,
        Fut: Future<Output = O>,
    {
        self.flat_map(move |f| fb.map(f)).await
    }
}
