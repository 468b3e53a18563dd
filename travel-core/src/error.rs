/// Rejected caller input. Never retried by the query services.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidArgument {
    #[display("page number must be at least 1 but got {value}")]
    PageNumber { value: i64 },
    #[display("page size must be at least 1 but got {value}")]
    PageSize { value: u64 },
}
