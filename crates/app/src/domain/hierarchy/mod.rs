//! Nested read views over the catalog hierarchy.
//!
//! Reads attach the descendant chain level by level, bounded by a [`Depth`],
//! and always attach the (at most three) ancestors of the requested rows.
//! Ancestors never carry descendants, so a view never contains a cycle.

mod loader;
mod repository;

use thiserror::Error;

pub(crate) use loader::HierarchyLoader;

/// How many descendant levels a read attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("depth must be between 0 and {max}", max = Depth::MAX_LEVELS)]
pub struct DepthError;

impl Depth {
    /// Brands sit three levels above products.
    pub const MAX_LEVELS: u8 = 3;

    /// Only the requested rows and their ancestors.
    pub const NONE: Self = Self(0);

    /// Every level below the requested rows.
    pub const FULL: Self = Self(Self::MAX_LEVELS);

    /// # Errors
    ///
    /// Returns an error when `levels` exceeds [`Depth::MAX_LEVELS`].
    pub const fn new(levels: u8) -> Result<Self, DepthError> {
        if levels > Self::MAX_LEVELS {
            return Err(DepthError);
        }

        Ok(Self(levels))
    }

    #[must_use]
    pub const fn levels(self) -> u8 {
        self.0
    }

    /// The depth left for the next level down, or `None` when exhausted.
    #[must_use]
    pub const fn descend(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(levels) => Some(Self(levels)),
            None => None,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u8> for Depth {
    type Error = DepthError;

    fn try_from(levels: u8) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_defaults_to_full_chain() {
        assert_eq!(Depth::default(), Depth::FULL);
        assert_eq!(Depth::default().levels(), 3);
    }

    #[test]
    fn depth_rejects_more_levels_than_the_hierarchy_has() {
        assert_eq!(Depth::new(4), Err(DepthError));
        assert_eq!(Depth::new(3), Ok(Depth::FULL));
        assert_eq!(Depth::try_from(0), Ok(Depth::NONE));
    }

    #[test]
    fn descend_counts_down_to_none() {
        let two = Depth::FULL.descend();

        assert_eq!(two.map(Depth::levels), Some(2));
        assert_eq!(Depth::NONE.descend(), None);
    }

    #[test]
    fn depth_error_names_the_bound() {
        assert_eq!(DepthError.to_string(), "depth must be between 0 and 3");
    }
}
