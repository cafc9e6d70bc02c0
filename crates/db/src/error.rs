//! Translation of driver errors into the failure shapes the API cares about.
//!
//! This is the only place that looks at PostgreSQL SQLSTATE codes. Callers
//! match on [`DbError`] variants instead.

/// `invalid_text_representation`, e.g. `'abc'::int`.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
/// `numeric_value_out_of_range`, e.g. an integer overflowing INT4.
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
/// `not_null_violation`.
const NOT_NULL_VIOLATION: &str = "23502";
/// SQLSTATE class 23: integrity constraint violations.
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// Failure of a repository call.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A value could not be converted to the column or parameter type.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A NOT NULL column received no value.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Any other integrity constraint (foreign key, unique, check).
    #[error("constraint {constraint} violated")]
    ConstraintOther {
        constraint: String,
        #[source]
        source: sqlx::Error,
    },

    /// Connection failures, decode errors and everything unclassified.
    #[error(transparent)]
    Unknown(sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return DbError::Unknown(err);
        };

        let code = db_err.code().map(|c| c.into_owned());
        match code.as_deref() {
            Some(INVALID_TEXT_REPRESENTATION | NUMERIC_VALUE_OUT_OF_RANGE) => {
                DbError::MalformedInput(db_err.message().to_string())
            }
            Some(NOT_NULL_VIOLATION) => DbError::MissingField(db_err.message().to_string()),
            Some(c) if c.starts_with(INTEGRITY_CONSTRAINT_CLASS) => {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                DbError::ConstraintOther {
                    constraint,
                    source: err,
                }
            }
            _ => DbError::Unknown(err),
        }
    }
}
