use thiserror::Error;

/// Fatal failure while loading the score sheet. Nothing is rendered after one.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid export URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("GET {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("CSV parse error at record {record}: {source}")]
    Csv {
        record: usize,
        #[source]
        source: csv::Error,
    },
}

/// Activity name that is not one of the four tracked scores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown activity `{0}` (expected Selfcare, Interpersonal, Communication or Work)")]
pub struct UnknownActivity(pub String);
