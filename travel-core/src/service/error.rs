use crate::error::InvalidArgument;

#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum QueryError {
    #[from]
    #[display("invalid argument: {source}")]
    InvalidArgument { source: InvalidArgument },
    #[display("{entity} {id} is not found")]
    NotFound { entity: &'static str, id: i32 },
    #[display("storage backend is unavailable")]
    BackendUnavailable { source: anyhow::Error },
}
