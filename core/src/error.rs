use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type DataResult<T> = Result<T, DataError>;
