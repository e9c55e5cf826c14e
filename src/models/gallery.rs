use std::collections::HashSet;

use super::artwork::{Artwork, AspectRatio};
use crate::error::CatalogError;

/// Ordered artwork list. Order is both display order and lightbox
/// navigation order.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    artworks: Vec<Artwork>,
}

impl Gallery {
    /// Build a gallery, rejecting duplicate ids and malformed aspect hints.
    pub fn new(artworks: Vec<Artwork>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(artworks.len());
        for art in &artworks {
            if !seen.insert(art.id) {
                return Err(CatalogError::DuplicateId(art.id));
            }
            if let Some(raw) = &art.aspect_ratio {
                if AspectRatio::parse(raw).is_none() {
                    return Err(CatalogError::InvalidAspectRatio {
                        id: art.id,
                        value: raw.clone(),
                    });
                }
            }
        }
        Ok(Self { artworks })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Artwork> {
        self.artworks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artwork> {
        self.artworks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn art(id: u32) -> Artwork {
        Artwork::new(id, format!("work {}", id), "2024", format!("/images/{}.png", id))
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Gallery::new(vec![art(1), art(2), art(1)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(1));
    }

    #[test]
    fn test_rejects_bad_aspect_ratio() {
        let err = Gallery::new(vec![art(3).with_aspect_ratio("wide")]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidAspectRatio { id: 3, value: "wide".to_string() }
        );
    }

    #[test]
    fn test_order_and_lookup() {
        let gallery = Gallery::new(vec![art(5), art(1), art(4)]).unwrap();
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.get(0).map(|a| a.id), Some(5));
        assert!(gallery.get(3).is_none());
        let ids: Vec<u32> = gallery.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 1, 4]);
    }
}
