use std::fmt;

/// A value that is either an error (`Left`) or a success (`Right`).
///
/// `Either` is the container every combinator in this crate consumes and
/// produces. Combinators take `self` by value and return a new `Either`; the
/// active variant is never changed in place.
///
/// # Examples
///
/// ```rust
/// use asynceither::Either;
///
/// let ok: Either<&str, i32> = Either::Right(42);
/// let err: Either<&str, i32> = Either::Left("not found");
///
/// assert!(ok.is_right());
/// assert_eq!(err.to_string(), "Left[error=not found]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The error or alternative value
    Left(L),
    /// The success value
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if the value is `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, i32> = Either::Left("error");
    /// assert!(x.is_left());
    ///
    /// let y: Either<&str, i32> = Either::Right(1);
    /// assert!(!y.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if the value is `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, i32> = Either::Right(1);
    /// assert!(x.is_right());
    ///
    /// let y: Either<&str, i32> = Either::Left("error");
    /// assert!(!y.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Converts from `Either<L, R>` to `Option<R>`, discarding the error, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, i32> = Either::Right(2);
    /// assert_eq!(x.right(), Some(2));
    ///
    /// let y: Either<&str, i32> = Either::Left("error");
    /// assert_eq!(y.right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Converts from `Either<L, R>` to `Option<L>`, discarding the success value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Borrows the success value as an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<&str, String> = Either::Right("value".to_string());
    /// assert_eq!(x.to_optional(), Some(&"value".to_string()));
    /// ```
    #[inline]
    pub fn to_optional(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Converts from `&mut Either<L, R>` to `Either<&mut L, &mut R>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let mut x: Either<&str, i32> = Either::Right(1);
    /// if let Either::Right(v) = x.as_mut() {
    ///     *v = 100;
    /// }
    /// assert_eq!(x, Either::Right(100));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Either<&mut L, &mut R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Converts from `Either<L, R>` to `Either<R, L>` by swapping variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// Returns `true` if the value is a `Right` equal to `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<i32, i32> = Either::Right(42);
    /// assert!(x.contains(&42));
    /// assert!(!x.contains(&7));
    ///
    /// let y: Either<i32, i32> = Either::Left(42);
    /// assert!(!y.contains(&42));
    /// ```
    #[inline]
    pub fn contains<U>(&self, element: &U) -> bool
    where
        U: PartialEq<R>,
    {
        matches!(self, Either::Right(v) if element == v)
    }

    /// Converts into the equivalent `Result`, with `Right` as `Ok`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Returns the textual form, as produced by `Display`.
    pub fn show(&self) -> String
    where
        L: fmt::Display,
        R: fmt::Display,
    {
        self.to_string()
    }
}

impl<L, R> Either<Option<L>, R> {
    /// Lifts a possibly absent value: `Some(v)` becomes `Right(v)`, `None`
    /// becomes `Left(None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asynceither::Either;
    ///
    /// let x: Either<Option<&str>, i32> = Either::from_nullable(Some(3));
    /// assert_eq!(x, Either::Right(3));
    ///
    /// let y: Either<Option<&str>, i32> = Either::from_nullable(None);
    /// assert_eq!(y, Either::Left(None));
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<R>) -> Self {
        match value {
            Some(r) => Either::Right(r),
            None => Either::Left(None),
        }
    }

    /// Unwraps anything convertible into an `Option` and lifts it with
    /// [`Either::from_nullable`].
    #[inline]
    pub fn from_optional(optional: impl Into<Option<R>>) -> Self {
        Self::from_nullable(optional.into())
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(error) => write!(f, "Left[error={error}]"),
            Either::Right(value) => write!(f, "Right[value={value}]"),
        }
    }
}
