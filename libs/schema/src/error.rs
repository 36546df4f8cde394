//! Schema definition errors.

use thiserror::Error;

/// Errors found when validating a table definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The table name is empty.
    #[error("table name cannot be empty")]
    EmptyTableName,

    /// A column was declared without a name.
    #[error("table '{table}' has a column with an empty name")]
    EmptyColumnName { table: String },

    /// The same column was declared twice.
    #[error("table '{table}' declares column '{column}' more than once")]
    DuplicateColumn { table: String, column: String },

    /// More than one column was marked as the primary key.
    #[error("table '{table}' declares more than one primary key ('{first}' and '{second}')")]
    MultiplePrimaryKeys {
        table: String,
        first: String,
        second: String,
    },
}
