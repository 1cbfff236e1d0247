/// All errors that can occur while loading site content.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Response body was not the JSON shape the store promises.
    #[error("failed to decode rows from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A single-row fetch by id matched nothing.
    #[error("no {table} row with id {id}")]
    NotFound { table: &'static str, id: String },

    /// A required environment variable is unset or empty.
    #[error("missing configuration: {var} is not set")]
    MissingConfig { var: &'static str },
}

pub type Result<T> = std::result::Result<T, SiteError>;
