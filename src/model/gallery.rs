use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::pipeline::sanitize::{defaults, images_or, Sanitize};
use crate::pipeline::ListRecord;

const PREVIEW_LEN: usize = 3;

/// An album row as stored in the `gallery_albums` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlbumRecord {
    pub id: i64,
    pub title: String,
    pub image_urls: Option<Vec<String>>,
}

/// A render-ready gallery album with at least one photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub image_urls: Vec<String>,
}

impl Album {
    /// The photos fanned out on the album card, at most three.
    pub fn preview(&self) -> &[String] {
        &self.image_urls[..self.image_urls.len().min(PREVIEW_LEN)]
    }

    /// Count shown under the album title.
    pub fn photo_count(&self) -> usize {
        self.image_urls.len()
    }
}

impl Sanitize for RawAlbumRecord {
    type Clean = Album;

    fn sanitize(&self) -> Album {
        Album {
            id: self.id,
            title: self.title.clone(),
            image_urls: images_or(&self.image_urls, &defaults::BANNER_IMAGES),
        }
    }
}

impl ListRecord for Album {
    type Facet = Infallible;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(images: &[&str]) -> Album {
        RawAlbumRecord {
            id: 1,
            title: "Sports Fest".to_string(),
            image_urls: Some(images.iter().map(|s| s.to_string()).collect()),
        }
        .sanitize()
    }

    #[test]
    fn preview_caps_at_three_photos() {
        assert_eq!(album(&["a", "b"]).preview().len(), 2);
        assert_eq!(album(&["a", "b", "c", "d"]).preview(), ["a", "b", "c"]);
    }

    #[test]
    fn empty_album_gets_placeholder_photos() {
        let sanitized = RawAlbumRecord {
            id: 2,
            title: "Community Drive".to_string(),
            image_urls: None,
        }
        .sanitize();
        assert_eq!(sanitized.photo_count(), defaults::BANNER_IMAGES.len());
    }
}
