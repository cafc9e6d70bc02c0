use crate::types::DbId;

/// Failures raised deliberately by request handlers, as opposed to failures
/// coming out of the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A well-formed identifier matched no row.
    #[error("{entity} with id: {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },
}
