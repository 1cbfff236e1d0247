use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::{Album, RawAlbumRecord};
use crate::pipeline::sanitize::Sanitize;
use crate::store::{self, Table};

#[instrument(skip(http, config))]
pub(crate) async fn get_albums(http: &reqwest::Client, config: &SiteConfig) -> Result<Vec<Album>> {
    let rows: Vec<RawAlbumRecord> =
        store::fetch_rows(http, config, Table::GalleryAlbums, None).await?;
    let albums = rows.iter().map(Sanitize::sanitize).collect_vec();
    debug!(count = albums.len(), "loaded gallery albums");
    Ok(albums)
}
