use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::{Event, RawEventRecord};
use crate::pipeline::sanitize::Sanitize;
use crate::store::{self, Order, Table};

#[instrument(skip(http, config))]
pub(crate) async fn get_events(http: &reqwest::Client, config: &SiteConfig) -> Result<Vec<Event>> {
    let rows: Vec<RawEventRecord> =
        store::fetch_rows(http, config, Table::Events, Some(Order::descending("date"))).await?;
    let events = rows.iter().map(Sanitize::sanitize).collect_vec();
    debug!(count = events.len(), "loaded events");
    Ok(events)
}

#[instrument(skip(http, config))]
pub(crate) async fn get_event(
    http: &reqwest::Client,
    config: &SiteConfig,
    id: &str,
) -> Result<Event> {
    let row: RawEventRecord = store::fetch_row(http, config, Table::Events, id).await?;
    Ok(row.sanitize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_rows_decode_and_sanitize() {
        let body = r#"[
            {"id": "annual-day-2024", "title": "Annual Day Celebration 2024",
             "date": "2024-08-15T10:00:00Z",
             "description": "A day of fun and performances.",
             "image_urls": ["https://cdn.example/annual-day.jpg"]},
            {"id": "sports-fest", "title": "Sports Fest",
             "date": null, "description": null, "image_urls": []}
        ]"#;
        let rows: Vec<RawEventRecord> = serde_json::from_str(body).unwrap();
        let events = rows.iter().map(Sanitize::sanitize).collect_vec();

        assert_eq!(events[0].image_urls.len(), 1);
        assert!(events[0].date.is_some());
        assert_eq!(events[1].description, "No description available.");
        assert_eq!(events[1].image_urls.len(), 3);
    }
}
