//! Zero-or-one element iterators shared by the containers.
//!
//! Both `Optional` and `Try` iterate as a sequence of at most one element:
//! the payload of a `Full`, or the success value of a `Success`. A borrowed
//! iteration can be restarted at will since each call to `iter()` builds a
//! fresh [`Single`].

use std::iter::FusedIterator;

/// Borrowing iterator over at most one element.
///
/// Created by `Optional::iter` and `Try::iter`.
#[derive(Debug)]
pub struct Single<'a, T> {
    element: Option<&'a T>,
}

impl<'a, T> Single<'a, T> {
    pub(crate) const fn new(element: Option<&'a T>) -> Self {
        Self { element }
    }
}

impl<T> Clone for Single<'_, T> {
    fn clone(&self) -> Self {
        Self {
            element: self.element,
        }
    }
}

impl<'a, T> Iterator for Single<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.element.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.element.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Single<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.element.take()
    }
}

impl<T> ExactSizeIterator for Single<'_, T> {}

impl<T> FusedIterator for Single<'_, T> {}

/// Owning iterator over at most one element.
///
/// Created by the `IntoIterator` implementations of the containers.
#[derive(Debug, Clone)]
pub struct IntoSingle<T> {
    element: Option<T>,
}

impl<T> IntoSingle<T> {
    pub(crate) const fn new(element: Option<T>) -> Self {
        Self { element }
    }
}

impl<T> Iterator for IntoSingle<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.element.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.element.is_some());
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoSingle<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.element.take()
    }
}

impl<T> ExactSizeIterator for IntoSingle<T> {}

impl<T> FusedIterator for IntoSingle<T> {}
