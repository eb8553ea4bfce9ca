use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display(
        "Please export your API key as an environment variable, eg: export VULTR_API_KEY='<api_key_from_vultr_account>'"
    ))]
    MissingApiKey,

    #[snafu(display("invalid value '{value}' for environment variable '{key}'"))]
    InvalidEnvVar { key: String, value: String },

    #[snafu(display("API key contains characters not allowed in an HTTP header"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
    },

    #[snafu(display("invalid API endpoint '{endpoint}'"))]
    InvalidEndpoint { endpoint: String },

    #[snafu(display("'{segment}' cannot be used as a path segment"))]
    InvalidPathSegment { segment: String },

    #[snafu(display("please provide an object storage ID"))]
    MissingObjectStorageId,

    #[snafu(display("please provide a Cluster ID"))]
    MissingClusterId,

    #[snafu(display("invalid clusterID: {source}"))]
    InvalidClusterId { source: std::num::ParseIntError },

    #[snafu(display("{message} (HTTP {status})"))]
    Api { status: u16, message: String },

    #[snafu(display("error retrieving object storage list : {source}"))]
    ListObjectStoragesFailed { source: Box<Error> },

    #[snafu(display("error getting object storage info : {source}"))]
    GetObjectStorageFailed { source: Box<Error> },

    #[snafu(display("error creating object storage : {source}"))]
    CreateObjectStorageFailed { source: Box<Error> },

    #[snafu(display("error updating object storage label : {source}"))]
    UpdateLabelFailed { source: Box<Error> },

    #[snafu(display("unable to delete object storage : {source}"))]
    DeleteObjectStorageFailed { source: Box<Error> },

    #[snafu(display("unable to regenerate keys for object storage : {source}"))]
    RegenerateKeysFailed { source: Box<Error> },

    #[snafu(display("error retrieving object storage cluster list : {source}"))]
    ListClustersFailed { source: Box<Error> },

    #[snafu(display("error retrieving object storage cluster tier list: {source}"))]
    ListClusterTiersFailed { source: Box<Error> },

    #[snafu(display("error retrieving object storage tier list : {source}"))]
    ListTiersFailed { source: Box<Error> },

    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Http { source: error }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json { source: error }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io { source: error }
    }
}
