#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid page size: {page_size} (must be greater than zero)")]
    InvalidPageSize { page_size: i64 },
}
