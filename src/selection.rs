//! Cross-page selection set.
//!
//! The selection set maps artwork IDs to the artwork data that was selected.
//! Membership alone defines whether a row is checked; the set outlives page
//! navigation and is never trimmed.

use std::collections::BTreeMap;

use crate::api::{Artwork, ArtworkId};

/// All artworks selected so far, keyed by ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    entries: BTreeMap<ArtworkId, Artwork>,
}

impl SelectionSet {
    /// Create an empty selection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an artwork is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Insert an artwork, overwriting any existing entry for its ID.
    pub fn insert(&mut self, artwork: Artwork) {
        self.entries.insert(artwork.id, artwork);
    }

    /// Number of selected artworks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reconcile the selection against the rows of one page.
    ///
    /// `checked` is the subset of `page` that is currently checked. Each row
    /// of `page` found in `checked` is inserted (taking the checked copy);
    /// every other row of `page` is removed. IDs not on `page` are left alone.
    pub fn reconcile_page(&mut self, page: &[Artwork], checked: &[Artwork]) {
        for artwork in page {
            match checked.iter().find(|c| c.id == artwork.id) {
                Some(found) => {
                    self.entries.insert(found.id, found.clone());
                }
                None => {
                    self.entries.remove(&artwork.id);
                }
            }
        }
    }

    /// The rows of `page` that are currently selected, in page order.
    pub fn checked_on<'a>(&self, page: &'a [Artwork]) -> Vec<&'a Artwork> {
        page.iter().filter(|a| self.contains(a.id)).collect()
    }

    /// IDs of the selected artworks.
    #[cfg(test)]
    pub fn ids(&self) -> std::collections::HashSet<ArtworkId> {
        self.entries.keys().copied().collect()
    }
}

impl Extend<Artwork> for SelectionSet {
    fn extend<I: IntoIterator<Item = Artwork>>(&mut self, iter: I) {
        for artwork in iter {
            self.insert(artwork);
        }
    }
}
