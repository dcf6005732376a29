use thiserror::Error;

/// Failures reported by [`BoardStore`](super::store::BoardStore).
///
/// These are integration errors: the caller handed over an identifier that is
/// stale or never existed. The store leaves its state untouched whenever one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("column `{0}` not found")]
    ColumnNotFound(String),

    #[error("task `{0}` not found")]
    TaskNotFound(String),

    #[error("column id `{0}` is used more than once")]
    DuplicateColumn(String),

    #[error("task id `{0}` is used more than once")]
    DuplicateTask(String),
}
