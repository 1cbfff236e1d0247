use chrono::Utc;

use prayas_site_data::model::TeamSections;
use prayas_site_data::{SiteClient, SiteConfig};

#[tokio::main]
async fn main() {
    let client = SiteClient::new(SiteConfig::from_env().unwrap());

    std::fs::create_dir_all("snapshot").unwrap();

    let alumni = client.get_alumni().await.unwrap();
    println!("Fetched {} alumni profiles", alumni.len());
    serde_json::to_writer_pretty(
        std::fs::File::create("snapshot/alumni.json").unwrap(),
        &alumni,
    )
    .unwrap();

    let events = client.get_events().await.unwrap();
    let now = Utc::now();
    for event in &events {
        println!("[{}] {}", event.category_at(now), event.title);
    }
    serde_json::to_writer_pretty(
        std::fs::File::create("snapshot/events.json").unwrap(),
        &events,
    )
    .unwrap();

    let albums = client.get_albums().await.unwrap();
    println!("Fetched {} albums", albums.len());
    serde_json::to_writer_pretty(
        std::fs::File::create("snapshot/albums.json").unwrap(),
        &albums,
    )
    .unwrap();

    let team = TeamSections::partition(client.get_team().await.unwrap());
    println!(
        "Fetched team: {} leadership, {} core, {} members",
        team.leadership.len(),
        team.core.len(),
        team.members.len()
    );
    serde_json::to_writer_pretty(std::fs::File::create("snapshot/team.json").unwrap(), &team)
        .unwrap();
}
