use std::{marker::PhantomData, ops::Range};

use crate::core::id::IntegerIdType;

#[derive(Debug, Clone)]
pub struct RangeIds<I: IntegerIdType> {
    range: Range<usize>,
    ty: PhantomData<I>,
}

impl<I: IntegerIdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I: IntegerIdType> ExactSizeIterator for RangeIds<I> {}

impl<I: IntegerIdType> From<Range<usize>> for RangeIds<I> {
    fn from(range: Range<usize>) -> Self {
        Self {
            range,
            ty: PhantomData,
        }
    }
}
