#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("particle {id} has a non-finite target or radius")]
    NonFinite { id: u32 },
    #[error("particle {id} has radius {radius}, radii must be positive")]
    NonPositiveRadius { id: u32, radius: f64 },
    #[error("particle id {id} appears more than once")]
    DuplicateId { id: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
