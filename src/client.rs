use tracing::instrument;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::*;
use crate::store;

/// The main entry point for loading site content.
///
/// `SiteClient` wraps a [`reqwest::Client`] and exposes one method per
/// content collection. Each method issues a single query against the
/// managed store and returns sanitized, render-ready models; there is no
/// retry and no caching between calls.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> prayas_site_data::Result<()> {
/// use prayas_site_data::{SiteClient, SiteConfig};
///
/// let client = SiteClient::new(SiteConfig::from_env()?);
/// let alumni = client.get_alumni().await?;
/// println!("Found {} alumni profiles", alumni.len());
/// # Ok(())
/// # }
/// ```
pub struct SiteClient {
    http: reqwest::Client,
    config: SiteConfig,
}

impl SiteClient {
    /// Create a client with default HTTP settings.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(config: SiteConfig, client: reqwest::Client) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Fetch all alumni profiles, most recent graduation batch first.
    #[instrument(skip(self))]
    pub async fn get_alumni(&self) -> Result<Vec<AlumniProfile>> {
        store::alumni::get_alumni(&self.http, &self.config).await
    }

    /// Fetch all events, most recent start date first.
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        store::events::get_events(&self.http, &self.config).await
    }

    /// Fetch a single event by its slug for the detail page.
    ///
    /// Returns [`SiteError::NotFound`](crate::SiteError::NotFound) when no
    /// event has the given id; callers render that as a "not found" view.
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &str) -> Result<Event> {
        store::events::get_event(&self.http, &self.config, id).await
    }

    /// Fetch all gallery albums.
    #[instrument(skip(self))]
    pub async fn get_albums(&self) -> Result<Vec<Album>> {
        store::gallery::get_albums(&self.http, &self.config).await
    }

    /// Fetch the team roster in display order; feed it to
    /// [`TeamSections::partition`] for the page's fixed groups.
    #[instrument(skip(self))]
    pub async fn get_team(&self) -> Result<Vec<TeamMember>> {
        store::team::get_team(&self.http, &self.config).await
    }
}
