//! Strongly typed, zero-cost identifier wrappers.
//!
//! Checkpoint, edge, and package ids are the persisted primary keys handed
//! out by the store collaborator.  They are `Copy + Ord + Hash` so they work
//! as map keys and sort keys without ceremony.  The inner integer is `pub`;
//! `.index()` is provided for raw-id matrix indexing.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a matrix or `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The id following `self`, or `None` once the id space is
            /// exhausted.  Used by stores to allocate keys.
            #[inline]
            pub fn next(self) -> Option<$name> {
                self.0.checked_add(1).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Id of a checkpoint (road-network node).
    pub struct NodeId(u32);
}

typed_id! {
    /// Id of a persisted edge record.
    pub struct EdgeId(u32);
}

typed_id! {
    /// Id of a delivery package.
    pub struct PackageId(u32);
}
