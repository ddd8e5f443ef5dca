//! Minimal effect interface shared by the synchronous and asynchronous engines.
//!
//! Collection and map validation is written once against [`Effect`] and
//! instantiated twice: with [`Immediate`], whose computations are plain values,
//! and with [`Deferred`] (feature `async`), whose computations are boxed
//! futures joined concurrently.
//!
//! Values flowing through an effect must be `Send + 'static` so the deferred
//! instance can box them; this is why element types of validated collections
//! carry the same bound.
//!
//! # Examples
//!
//! ```
//! use valid_rail::effect::{Effect, Immediate};
//!
//! let doubled = Immediate::traverse(vec![1, 2, 3], |n| Immediate::pure(n * 2));
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

/// `pure`, `map`, `flat_map`, `traverse` and `product` over a computation type.
pub trait Effect {
    /// A computation producing `T`.
    type Output<T: Send + 'static>;

    fn pure<T: Send + 'static>(value: T) -> Self::Output<T>;

    fn map<T, U, F>(fa: Self::Output<T>, f: F) -> Self::Output<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static;

    fn flat_map<T, U, F>(fa: Self::Output<T>, f: F) -> Self::Output<U>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> Self::Output<U> + Send + 'static;

    /// Runs `f` over every item and gathers the outputs in input order.
    ///
    /// Every computation is created before any is awaited, so a deferred
    /// effect runs them concurrently.
    fn traverse<T, U, I, F>(items: I, f: F) -> Self::Output<Vec<U>>
    where
        I: IntoIterator<Item = T>,
        U: Send + 'static,
        F: FnMut(T) -> Self::Output<U>;

    fn product<T, U>(fa: Self::Output<T>, fb: Self::Output<U>) -> Self::Output<(T, U)>
    where
        T: Send + 'static,
        U: Send + 'static;
}

/// Eager evaluation: a computation is its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Effect for Immediate {
    type Output<T: Send + 'static> = T;

    #[inline]
    fn pure<T: Send + 'static>(value: T) -> T {
        value
    }

    #[inline]
    fn map<T, U, F>(fa: T, f: F) -> U
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        f(fa)
    }

    #[inline]
    fn flat_map<T, U, F>(fa: T, f: F) -> U
    where
        T: Send + 'static,
        U: Send + 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        f(fa)
    }

    #[inline]
    fn traverse<T, U, I, F>(items: I, f: F) -> Vec<U>
    where
        I: IntoIterator<Item = T>,
        U: Send + 'static,
        F: FnMut(T) -> U,
    {
        items.into_iter().map(f).collect()
    }

    #[inline]
    fn product<T, U>(fa: T, fb: U) -> (T, U)
    where
        T: Send + 'static,
        U: Send + 'static,
    {
        (fa, fb)
    }
}

#[cfg(feature = "async")]
pub use deferred::Deferred;

#[cfg(feature = "async")]
mod deferred {
    use futures_util::future::{self, BoxFuture, FutureExt};

    use super::Effect;

    /// Boxed-future evaluation; `traverse` and `product` join concurrently.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Deferred;

    impl Effect for Deferred {
        type Output<T: Send + 'static> = BoxFuture<'static, T>;

        fn pure<T: Send + 'static>(value: T) -> BoxFuture<'static, T> {
            future::ready(value).boxed()
        }

        fn map<T, U, F>(fa: BoxFuture<'static, T>, f: F) -> BoxFuture<'static, U>
        where
            T: Send + 'static,
            U: Send + 'static,
            F: FnOnce(T) -> U + Send + 'static,
        {
            fa.map(f).boxed()
        }

        fn flat_map<T, U, F>(fa: BoxFuture<'static, T>, f: F) -> BoxFuture<'static, U>
        where
            T: Send + 'static,
            U: Send + 'static,
            F: FnOnce(T) -> BoxFuture<'static, U> + Send + 'static,
        {
            fa.then(f).boxed()
        }

        fn traverse<T, U, I, F>(items: I, f: F) -> BoxFuture<'static, Vec<U>>
        where
            I: IntoIterator<Item = T>,
            U: Send + 'static,
            F: FnMut(T) -> BoxFuture<'static, U>,
        {
            let pending: Vec<_> = items.into_iter().map(f).collect();
            future::join_all(pending).boxed()
        }

        fn product<T, U>(
            fa: BoxFuture<'static, T>,
            fb: BoxFuture<'static, U>,
        ) -> BoxFuture<'static, (T, U)>
        where
            T: Send + 'static,
            U: Send + 'static,
        {
            future::join(fa, fb).boxed()
        }
    }
}
