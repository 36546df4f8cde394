//! The schema-building primitives the variable key dispatch is written
//! against.
//!
//! [`crate::Blueprint`] implements them for PostgreSQL DDL. Other builders
//! (an adapter over a migration framework, a recorder in tests) implement
//! the same trait and get [`crate::VariableKeys`] for free.

use serde::{Deserialize, Serialize};

use crate::column::ColumnDefinition;
use crate::foreign::ForeignIdColumn;

/// Column name used when a primary key column is not named.
pub const DEFAULT_KEY_COLUMN: &str = "id";

/// Id column type used by generic [`SchemaBuilder::morphs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultMorphKey {
    #[default]
    Int,
    Uuid,
    Ulid,
}

/// Column-creation primitives of a table definition.
pub trait SchemaBuilder {
    /// Auto-incrementing big integer primary key.
    fn id(&mut self, column: &str) -> &mut ColumnDefinition;

    /// Fixed-length ULID column.
    fn ulid(&mut self, column: &str) -> &mut ColumnDefinition;

    /// UUID column.
    fn uuid(&mut self, column: &str) -> &mut ColumnDefinition;

    /// Unsigned big integer foreign key column.
    fn foreign_id(&mut self, column: &str) -> ForeignIdColumn<'_>;

    /// ULID foreign key column.
    fn foreign_ulid(&mut self, column: &str) -> ForeignIdColumn<'_>;

    /// UUID foreign key column.
    fn foreign_uuid(&mut self, column: &str) -> ForeignIdColumn<'_>;

    /// `{name}_type` and `{name}_id` using the builder's default morph key.
    fn morphs(&mut self, name: &str, nullable: bool);

    /// Morph pair with an unsigned big integer id.
    fn numeric_morphs(&mut self, name: &str, nullable: bool);

    /// Morph pair with a UUID id.
    fn uuid_morphs(&mut self, name: &str, nullable: bool);

    /// Morph pair with a ULID id.
    fn ulid_morphs(&mut self, name: &str, nullable: bool);
}
