//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. Throughout this library it
//! is the signal driving tree unfolding:
//!
//! - `Left(a)` marks a *pending* leaf that still needs expansion through
//!   the user-supplied step function
//! - `Right(b)` marks a *done* leaf carrying a final result
//!
//! # Examples
//!
//! ```rust
//! use treefold::either::Either;
//!
//! let pending: Either<u32, String> = Either::Left(42);
//! let done: Either<u32, String> = Either::Right("finished".to_string());
//!
//! // Pattern matching is exhaustive over the two variants.
//! match pending {
//!     Either::Left(seed) => println!("expand further from {seed}"),
//!     Either::Right(result) => println!("already resolved to {result}"),
//! }
//!
//! // fold handles both cases with one expression.
//! let description = done.fold(
//!     |seed| format!("pending: {seed}"),
//!     |result| format!("done: {result}"),
//! );
//! assert_eq!(description, "done: finished");
//! ```

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention in this library:
/// - `Left` means "continue": the value is an intermediate seed that needs
///   further expansion
/// - `Right` means "stop": the value is a final result
///
/// # Type Parameters
///
/// * `L` - The type of the left (pending) value
/// * `R` - The type of the right (done) value
///
/// # Examples
///
/// ```rust
/// use treefold::either::Either;
///
/// let step: Either<u32, u32> = Either::Left(10);
/// let advanced = step.map_left(|seed| seed / 2);
/// assert_eq!(advanced, Either::Left(5));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, marking a value that still needs expansion.
    Left(L),
    /// The right variant, marking a final result.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let pending: Either<u32, String> = Either::Left(42);
    /// assert!(pending.is_left());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let done: Either<u32, String> = Either::Right("finished".to_string());
    /// assert!(done.is_right());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let pending: Either<u32, String> = Either::Left(42);
    /// assert_eq!(pending.left(), Some(42));
    ///
    /// let done: Either<u32, String> = Either::Right("finished".to_string());
    /// assert_eq!(done.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let done: Either<u32, String> = Either::Right("finished".to_string());
    /// assert_eq!(done.right(), Some("finished".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let pending: Either<u32, String> = Either::Left(42);
    /// assert_eq!(pending.map_left(|seed| seed - 1), Either::Left(41));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let done: Either<u32, String> = Either::Right("finished".to_string());
    /// assert_eq!(done.map_right(|result| result.len()), Either::Right(8));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is also known as "case analysis" or "pattern matching" as a
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let pending: Either<u32, u32> = Either::Left(42);
    /// assert_eq!(pending.fold(|seed| seed + 1, |result| result), 43);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use treefold::either::Either;
    ///
    /// let done: Either<String, i32> = Either::Right(42);
    /// let result: Result<i32, String> = done.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

static_assertions::assert_impl_all!(Either<i32, String>: Send, Sync);
