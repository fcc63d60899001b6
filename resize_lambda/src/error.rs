use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AWS_REGION is not set")]
    MissingRegion,

    #[error("invalid value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("No records found in S3 event")]
    EmptyEvent,

    #[error("No bucket name found in S3 event")]
    MissingBucket,

    #[error("No object key found in S3 event")]
    MissingKey,

    /// A `%` not followed by two hex digits.
    #[error("Object key {key} has a malformed percent escape")]
    MalformedEscape { key: String },

    #[error("Object key {key} does not decode to UTF-8")]
    KeyDecode {
        key: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to fetch s3://{bucket}/{key}: {message}")]
    Fetch {
        bucket: String,
        key: String,
        message: String,
    },

    #[error("Failed to write s3://{bucket}/{key}: {message}")]
    Store {
        bucket: String,
        key: String,
        message: String,
    },
}
