//! Recorded table definitions.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::builder::{DefaultMorphKey, SchemaBuilder};
use crate::column::{push_column, ColumnDefinition, ColumnType, IndexDefinition};
use crate::foreign::{ForeignIdColumn, ForeignKeyDefinition};
use crate::grammar::PostgresGrammar;
use crate::SchemaError;

/// A table definition built up column by column.
///
/// Columns, indexes and foreign keys are kept in declaration order and
/// compiled to PostgreSQL by [`Blueprint::to_sql`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    table: String,
    columns: Vec<ColumnDefinition>,
    indexes: Vec<IndexDefinition>,
    foreign_keys: Vec<ForeignKeyDefinition>,
    #[serde(skip)]
    default_morph_key: DefaultMorphKey,
}

impl Blueprint {
    /// Starts a definition for `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            default_morph_key: DefaultMorphKey::default(),
        }
    }

    /// Sets the id type used by generic morphs.
    #[must_use]
    pub fn with_default_morph_key(mut self, key: DefaultMorphKey) -> Self {
        self.default_morph_key = key;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn indexes(&self) -> &[IndexDefinition] {
        &self.indexes
    }

    pub fn foreign_keys(&self) -> &[ForeignKeyDefinition] {
        &self.foreign_keys
    }

    pub fn default_morph_key(&self) -> DefaultMorphKey {
        self.default_morph_key
    }

    /// Declares a default-length string column.
    pub fn string(&mut self, column: &str) -> &mut ColumnDefinition {
        self.add_column(column, ColumnType::STRING)
    }

    /// Declares an unsigned big integer column.
    pub fn unsigned_big_integer(&mut self, column: &str) -> &mut ColumnDefinition {
        self.add_column(column, ColumnType::UnsignedBigInteger)
    }

    /// Adds a composite index over `columns`.
    pub fn index(&mut self, columns: &[&str]) -> &mut IndexDefinition {
        let columns = columns.iter().map(|c| (*c).to_string()).collect();
        self.indexes.push(IndexDefinition::new(&self.table, columns));
        let last = self.indexes.len() - 1;
        &mut self.indexes[last]
    }

    /// Checks the table name, that column names are non-empty and unique,
    /// and that at most one column is the primary key.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.table.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        let mut seen = HashSet::new();
        let mut primary: Option<&str> = None;
        for column in &self.columns {
            if column.name.trim().is_empty() {
                return Err(SchemaError::EmptyColumnName {
                    table: self.table.clone(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    table: self.table.clone(),
                    column: column.name.clone(),
                });
            }
            if column.primary {
                if let Some(first) = primary {
                    return Err(SchemaError::MultiplePrimaryKeys {
                        table: self.table.clone(),
                        first: first.to_string(),
                        second: column.name.clone(),
                    });
                }
                primary = Some(column.name.as_str());
            }
        }

        Ok(())
    }

    /// Validates and compiles the table to PostgreSQL statements.
    pub fn to_sql(&self) -> Result<Vec<String>, SchemaError> {
        self.validate()?;
        let statements = PostgresGrammar.compile(self);

        debug!(
            table = %self.table,
            columns = self.columns.len(),
            statements = statements.len(),
            "Compiled blueprint"
        );

        Ok(statements)
    }

    fn add_column(&mut self, column: &str, column_type: ColumnType) -> &mut ColumnDefinition {
        push_column(&mut self.columns, ColumnDefinition::new(column, column_type))
    }

    fn add_foreign(&mut self, column: &str, column_type: ColumnType) -> ForeignIdColumn<'_> {
        let column = push_column(&mut self.columns, ColumnDefinition::new(column, column_type));
        ForeignIdColumn::new(&self.table, column, &mut self.foreign_keys)
    }

    fn add_morphs(&mut self, name: &str, id_type: ColumnType, nullable: bool) {
        let type_column = format!("{name}_type");
        let id_column = format!("{name}_id");

        self.add_column(&type_column, ColumnType::STRING).nullable = nullable;
        self.add_column(&id_column, id_type).nullable = nullable;

        self.indexes
            .push(IndexDefinition::new(&self.table, vec![type_column, id_column]));
    }
}

impl SchemaBuilder for Blueprint {
    fn id(&mut self, column: &str) -> &mut ColumnDefinition {
        self.add_column(column, ColumnType::BigIncrements).primary()
    }

    fn ulid(&mut self, column: &str) -> &mut ColumnDefinition {
        self.add_column(column, ColumnType::ULID)
    }

    fn uuid(&mut self, column: &str) -> &mut ColumnDefinition {
        self.add_column(column, ColumnType::Uuid)
    }

    fn foreign_id(&mut self, column: &str) -> ForeignIdColumn<'_> {
        self.add_foreign(column, ColumnType::UnsignedBigInteger)
    }

    fn foreign_ulid(&mut self, column: &str) -> ForeignIdColumn<'_> {
        self.add_foreign(column, ColumnType::ULID)
    }

    fn foreign_uuid(&mut self, column: &str) -> ForeignIdColumn<'_> {
        self.add_foreign(column, ColumnType::Uuid)
    }

    fn morphs(&mut self, name: &str, nullable: bool) {
        match self.default_morph_key {
            DefaultMorphKey::Int => self.numeric_morphs(name, nullable),
            DefaultMorphKey::Uuid => self.uuid_morphs(name, nullable),
            DefaultMorphKey::Ulid => self.ulid_morphs(name, nullable),
        }
    }

    fn numeric_morphs(&mut self, name: &str, nullable: bool) {
        self.add_morphs(name, ColumnType::UnsignedBigInteger, nullable);
    }

    fn uuid_morphs(&mut self, name: &str, nullable: bool) {
        self.add_morphs(name, ColumnType::Uuid, nullable);
    }

    fn ulid_morphs(&mut self, name: &str, nullable: bool) {
        self.add_morphs(name, ColumnType::ULID, nullable);
    }
}
