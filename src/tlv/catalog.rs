//! Precomputed (Tag, Length) pairs
//!
//! Every section starts with one of 256 * 256 tag/length combinations. The catalog
//! holds all of them in tag-major, length-minor order and is built once per process.

use std::sync::OnceLock;

/// Number of (tag, length) combinations
pub const CATALOG_SIZE: usize = 256 * 256;

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagLength {
    pub tag: u8,
    pub length: u8,
}

impl TagLength {
    /// Tag and length bytes as written on disk
    pub fn to_bytes(self) -> [u8; 2] {
        [self.tag, self.length]
    }
}

/// Ordered, immutable set of every (tag, length) pair
#[derive(Debug, Clone)]
pub struct TagLengthCatalog {
    entries: Vec<TagLength>,
}

static SHARED: OnceLock<TagLengthCatalog> = OnceLock::new();

impl TagLengthCatalog {
    /// Build the full catalog: tag outer loop, length inner loop
    pub fn build() -> Self {
        let mut entries = Vec::with_capacity(CATALOG_SIZE);
        for tag in 0..=u8::MAX {
            for length in 0..=u8::MAX {
                entries.push(TagLength { tag, length });
            }
        }
        Self { entries }
    }

    /// Process-wide catalog, built on first use
    pub fn shared() -> &'static TagLengthCatalog {
        SHARED.get_or_init(Self::build)
    }

    /// Restricted catalog for exercising exhaustion on a finite space
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<TagLength>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<TagLength> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = TagLength> + '_ {
        self.entries.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        let catalog = TagLengthCatalog::build();
        assert_eq!(catalog.len(), CATALOG_SIZE);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_tag_major_order() {
        let catalog = TagLengthCatalog::build();
        assert_eq!(catalog.get(0), Some(TagLength { tag: 0, length: 0 }));
        assert_eq!(catalog.get(1), Some(TagLength { tag: 0, length: 1 }));
        assert_eq!(catalog.get(255), Some(TagLength { tag: 0, length: 255 }));
        assert_eq!(catalog.get(256), Some(TagLength { tag: 1, length: 0 }));
        assert_eq!(
            catalog.get(CATALOG_SIZE - 1),
            Some(TagLength {
                tag: 255,
                length: 255
            })
        );
        assert_eq!(catalog.get(CATALOG_SIZE), None);

        // Strictly increasing under (tag, length) ordering
        let entries: Vec<_> = catalog.iter().collect();
        assert!(entries.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_shared_is_built_once() {
        let a = TagLengthCatalog::shared();
        let b = TagLengthCatalog::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.len(), CATALOG_SIZE);
    }
}
