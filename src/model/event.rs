use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::classify::{classify_opt, EventCategory};
use crate::pipeline::sanitize::{defaults, images_or, text_or, Sanitize};
use crate::pipeline::{FacetOrder, ListRecord};

/// An event row as stored in the `events` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEventRecord {
    pub id: String,
    pub title: String,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

/// A render-ready event; `id` is the slug used as the detail-page path
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: Option<DateTime<Utc>>,
    pub description: String,
    pub image_urls: Vec<String>,
}

impl Event {
    /// Badge category at the given instant.
    ///
    /// Derived on every call; the same event flips from `Upcoming` to
    /// `Past` once the clock passes its start.
    pub fn category_at(&self, at: DateTime<Utc>) -> EventCategory {
        classify_opt(self.date, at)
    }

    /// Image for the detail-page hero section.
    pub fn hero_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Card label like "August 15, 2024".
    pub fn date_label(&self) -> Option<String> {
        self.date.map(|d| d.format("%B %-d, %Y").to_string())
    }
}

impl Sanitize for RawEventRecord {
    type Clean = Event;

    fn sanitize(&self) -> Event {
        Event {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date,
            description: text_or(&self.description, defaults::DESCRIPTION),
            image_urls: images_or(&self.image_urls, &defaults::BANNER_IMAGES),
        }
    }
}

impl ListRecord for Event {
    type Facet = i32;

    const FACET_ORDER: FacetOrder = FacetOrder::NewestFirst;

    fn facet(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn raw(date: Option<DateTime<Utc>>) -> RawEventRecord {
        RawEventRecord {
            id: "annual-day-2024".to_string(),
            title: "Annual Day Celebration 2024".to_string(),
            date,
            description: None,
            image_urls: None,
        }
    }

    #[test]
    fn missing_description_and_images_get_defaults() {
        let event = raw(None).sanitize();
        assert_eq!(event.description, "No description available.");
        assert_eq!(event.image_urls.len(), 3);
        assert_eq!(event.hero_image(), Some(defaults::BANNER_IMAGES[0]));
    }

    #[test]
    fn date_label_is_the_card_format() {
        let date = Utc.with_ymd_and_hms(2024, 8, 15, 10, 0, 0).unwrap();
        let event = raw(Some(date)).sanitize();
        assert_eq!(event.date_label().as_deref(), Some("August 15, 2024"));
    }

    #[test]
    fn category_follows_the_clock() {
        let date = Utc.with_ymd_and_hms(2024, 8, 15, 10, 0, 0).unwrap();
        let event = raw(Some(date)).sanitize();
        let before = Utc.with_ymd_and_hms(2024, 8, 14, 10, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 8, 16, 10, 0, 0).unwrap();
        assert_eq!(event.category_at(before), EventCategory::Upcoming);
        assert_eq!(event.category_at(after), EventCategory::Past);
    }

    #[test]
    fn facet_is_the_start_year() {
        let date = Utc.with_ymd_and_hms(2024, 8, 15, 10, 0, 0).unwrap();
        assert_eq!(raw(Some(date)).sanitize().facet(), Some(2024));
        assert_eq!(raw(None).sanitize().facet(), None);
    }
}
