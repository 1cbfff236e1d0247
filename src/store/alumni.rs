use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::{AlumniProfile, RawAlumniRecord};
use crate::pipeline::sanitize::Sanitize;
use crate::store::{self, Order, Table};

#[instrument(skip(http, config))]
pub(crate) async fn get_alumni(
    http: &reqwest::Client,
    config: &SiteConfig,
) -> Result<Vec<AlumniProfile>> {
    let rows: Vec<RawAlumniRecord> = store::fetch_rows(
        http,
        config,
        Table::Alumni,
        Some(Order::descending("graduation_batch")),
    )
    .await?;
    let profiles = rows.iter().map(Sanitize::sanitize).collect_vec();
    debug!(count = profiles.len(), "loaded alumni profiles");
    Ok(profiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_rows_decode_and_sanitize() {
        let body = r#"[
            {"id": 1, "name": "Priya Sharma", "image_url": "https://cdn.example/priya.jpg",
             "company": "Google", "linkedin_url": null, "graduation_batch": 2020},
            {"id": 2, "name": "Rohan Verma", "image_url": null,
             "company": null, "linkedin_url": null, "graduation_batch": null}
        ]"#;
        let rows: Vec<RawAlumniRecord> = serde_json::from_str(body).unwrap();
        let profiles = rows.iter().map(Sanitize::sanitize).collect_vec();

        assert_eq!(profiles[0].company, "Google");
        assert_eq!(profiles[0].linkedin_url, "#");
        assert_eq!(profiles[1].company, "Freelancer");
        assert!(!profiles[1].image_url.is_empty());
    }

    #[test]
    fn rows_without_optional_columns_decode() {
        let body = r#"[{"id": 3, "name": "Anjali Mehta"}]"#;
        let rows: Vec<RawAlumniRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(rows[0].graduation_batch, None);
    }
}
