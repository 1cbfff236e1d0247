//! Fetch and decode for the managed content store.
//!
//! Every query is a single GET against the store's PostgREST interface;
//! no retry, no caching. Rows are decoded here and sanitized before they
//! leave this module, so the loosely-typed shapes never reach callers.

pub(crate) mod alumni;
pub(crate) mod events;
pub(crate) mod gallery;
pub(crate) mod team;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};

/// Content tables exposed through the store's REST interface.
#[derive(Debug, Clone, Copy, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Table {
    Alumni,
    Events,
    GalleryAlbums,
    TeamMembers,
}

#[derive(Debug, Clone, Copy, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
enum Direction {
    Asc,
    Desc,
}

/// Server-side ordering for a collection query.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Order {
    column: &'static str,
    direction: Direction,
}

impl Order {
    pub(crate) fn ascending(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Asc,
        }
    }

    pub(crate) fn descending(column: &'static str) -> Self {
        Self {
            column,
            direction: Direction::Desc,
        }
    }
}

fn list_url(config: &SiteConfig, table: Table, order: Option<Order>) -> String {
    let mut url = config.rest_url(&format!("{table}?select=*"));
    if let Some(Order { column, direction }) = order {
        url.push_str(&format!("&order={column}.{direction}"));
    }
    url
}

fn row_url(config: &SiteConfig, table: Table, id: &str) -> String {
    config.rest_url(&format!("{table}?select=*&id=eq.{id}&limit=1"))
}

/// Fetch every row of `table`, decoded as `T`.
pub(crate) async fn fetch_rows<T: DeserializeOwned>(
    http: &reqwest::Client,
    config: &SiteConfig,
    table: Table,
    order: Option<Order>,
) -> Result<Vec<T>> {
    let url = list_url(config, table, order);
    get_json(http, config, &url).await
}

/// Fetch the row of `table` with the given id, or `NotFound`.
pub(crate) async fn fetch_row<T: DeserializeOwned>(
    http: &reqwest::Client,
    config: &SiteConfig,
    table: Table,
    id: &str,
) -> Result<T> {
    let url = row_url(config, table, id);
    let rows: Vec<T> = get_json(http, config, &url).await?;
    rows.into_iter().next().ok_or_else(|| SiteError::NotFound {
        table: table.into(),
        id: id.to_string(),
    })
}

async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    config: &SiteConfig,
    url: &str,
) -> Result<T> {
    debug!(url, "querying content store");

    let response = http
        .get(url)
        .header("apikey", config.api_key())
        .bearer_auth(config.api_key())
        .send()
        .await
        .map_err(|e| SiteError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SiteError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| SiteError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| SiteError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
