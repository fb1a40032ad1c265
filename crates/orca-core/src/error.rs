pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read records: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column {column:?}")]
    MissingColumn { column: &'static str },
}
