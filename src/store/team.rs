use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::{RawTeamMemberRecord, TeamMember};
use crate::pipeline::sanitize::Sanitize;
use crate::store::{self, Order, Table};

#[instrument(skip(http, config))]
pub(crate) async fn get_team(
    http: &reqwest::Client,
    config: &SiteConfig,
) -> Result<Vec<TeamMember>> {
    let rows: Vec<RawTeamMemberRecord> = store::fetch_rows(
        http,
        config,
        Table::TeamMembers,
        Some(Order::ascending("display_order")),
    )
    .await?;
    let team = rows.iter().map(Sanitize::sanitize).collect_vec();
    debug!(count = team.len(), "loaded team roster");
    Ok(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_rows_decode_and_sanitize() {
        let body = r#"[
            {"id": 1, "name": "Aarav Sharma", "role": "President",
             "image_url": "https://cdn.example/aarav.jpg",
             "linkedin_url": "https://linkedin.com/in/aarav"},
            {"id": 2, "name": "Diya Patel", "role": null,
             "image_url": null, "linkedin_url": null}
        ]"#;
        let rows: Vec<RawTeamMemberRecord> = serde_json::from_str(body).unwrap();
        let team = rows.iter().map(Sanitize::sanitize).collect_vec();

        assert_eq!(team[0].role, "President");
        assert_eq!(team[0].linkedin_url.as_deref(), Some("https://linkedin.com/in/aarav"));
        assert_eq!(team[1].role, "Volunteer");
        assert_eq!(team[1].linkedin_url, None);
    }
}
