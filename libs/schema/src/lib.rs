//! # varkeys-schema
//!
//! Migration helpers for key columns whose type is configured per model.
//!
//! [`SchemaBuilder`] is the set of column primitives a table definition
//! offers (`id`, `ulid`, `uuid`, the `foreign_*` columns and the morph
//! pairs). [`VariableKeys`] sits on top of it and picks the primitive for a
//! [`varkeys_id::PrimaryKeyKind`] or [`varkeys_id::MorphKind`]:
//!
//! | call | AutoIncrement | ULID | UUID |
//! |---|---|---|---|
//! | `variable_primary_key` | `id` | `ulid().primary()` | `uuid().primary()` |
//! | `variable_foreign_key` | `foreign_id` | `foreign_ulid` | `foreign_uuid` |
//!
//! [`Blueprint`] records a table and compiles it to PostgreSQL.

mod blueprint;
mod builder;
mod column;
mod error;
mod foreign;
mod grammar;
mod variable;

pub use blueprint::Blueprint;
pub use builder::{DefaultMorphKey, SchemaBuilder, DEFAULT_KEY_COLUMN};
pub use column::{ColumnDefinition, ColumnType, IndexDefinition, DEFAULT_STRING_LENGTH};
pub use error::SchemaError;
pub use foreign::{
    guess_table, ForeignIdColumn, ForeignKeyDefinition, PendingReference, ReferentialAction,
    DEFAULT_REFERENCED_COLUMN,
};
pub use grammar::PostgresGrammar;
pub use variable::VariableKeys;
