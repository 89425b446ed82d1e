use thiserror::Error;

/// HTTP failure while fetching the profile page or a thumbnail.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not connect to {url}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The embedded page payload is missing or no longer has the shape we expect.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("no <script type=\"application/json\"> data block found in page")]
    MissingDataBlock,

    #[error("data block is not valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("payload has no `{path}`")]
    MissingSegment { path: String },

    #[error("payload `{path}` is {found}, expected {expected}")]
    UnexpectedShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("thumbnail URL has no file name: {0}")]
    NoFileName(String),
}
