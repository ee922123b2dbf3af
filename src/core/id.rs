//! Traits and types used for identifying vertices in graphs.
//!
//! Any type that is `Clone + Eq + Hash + Debug` can serve as a vertex
//! identifier ([`IdType`]), which is all the algorithms need. Storages that
//! identify vertices by a contiguous range of integers use [`VertexId`] and
//! expose the integer conversions via [`IntegerIdType`].

use std::{fmt::Debug, hash::Hash};

/// A unique identification of a vertex in a graph.
///
/// The trait is implemented for every type satisfying the supertraits, so
/// implicit graphs can use their natural identifiers (characters, strings,
/// coordinates, ...) directly.
pub trait IdType: Clone + Eq + Hash + Debug {}

impl<T> IdType for T where T: Clone + Eq + Hash + Debug {}

/// Type-level specification that an ID type is representable by integer.
///
/// All integer values up to some upper bound should be valid IDs and there
/// should be no discontinuity, so that the ID can be used for indexing into
/// contiguous storage.
pub trait IntegerIdType: IdType + Copy + Ord + From<usize> + Into<usize> {
    /// Converts an `u64` into the corresponding ID.
    fn from_bits(bits: u64) -> Self;

    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize {
        (*self).into()
    }

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(index: usize) -> Self {
        Self::from(index)
    }
}

/// The default representation of an integer index for vertices. Generic type
/// `N` can be used to control the byte size of the backing integer (`u64` by
/// default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<N = u64>(N);

macro_rules! impl_int_id {
    ($id_ty:ident, $int_ty:ty) => {
        impl IntegerIdType for $id_ty<$int_ty> {
            fn from_bits(bits: u64) -> Self {
                Self(bits as $int_ty)
            }
        }

        impl From<usize> for $id_ty<$int_ty> {
            fn from(index: usize) -> Self {
                Self(index.try_into().expect("id type overflow"))
            }
        }

        impl From<$id_ty<$int_ty>> for usize {
            fn from(id: $id_ty<$int_ty>) -> Self {
                id.0.try_into().expect("id type overflow")
            }
        }
    };
}

impl_int_id!(VertexId, usize);
impl_int_id!(VertexId, u64);
impl_int_id!(VertexId, u32);
impl_int_id!(VertexId, u16);
impl_int_id!(VertexId, u8);
