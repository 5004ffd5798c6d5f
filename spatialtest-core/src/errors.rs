use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpatialTestError {
    #[error("need to provide cDNA length if normalizing")]
    MissingLength,

    #[error("at least 2 variant positions are required, got {0}")]
    TooFewVariants(usize),

    #[error("domain map is empty")]
    EmptyDomainMap,

    #[error("cDNA length must be at least 2, got {0}")]
    InvalidLength(u32),

    #[error("variant position {0} outside cDNA range [1, {1}]")]
    VariantOutOfRange(u32, u32),

    #[error("variant positions are 1-based, got 0")]
    ZeroVariantPosition,

    #[error("domain boundaries must strictly increase: {0} and {1} share boundary {2}")]
    DuplicateBoundary(String, String, u32),
}
