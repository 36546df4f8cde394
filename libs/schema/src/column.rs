//! Column and index definitions.

use serde::Serialize;
use varkeys_id::ULID_LEN;

/// Default length of string columns.
pub const DEFAULT_STRING_LENGTH: u16 = 255;

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnType {
    /// Auto-incrementing big integer.
    BigIncrements,
    /// Big integer without sign, used for integer foreign keys and morph ids.
    UnsignedBigInteger,
    /// Fixed-length character column.
    Char { length: u16 },
    /// Native UUID column.
    Uuid,
    /// Variable-length string column.
    String { length: u16 },
}

impl ColumnType {
    /// Fixed-length column sized for a ULID.
    pub const ULID: Self = Self::Char {
        length: ULID_LEN as u16,
    };

    /// Default-length string column.
    pub const STRING: Self = Self::String {
        length: DEFAULT_STRING_LENGTH,
    };
}

/// A column declared on a table, with its fluent modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,

    /// Storage type.
    pub column_type: ColumnType,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// Whether the column is the primary key.
    pub primary: bool,

    /// Whether the column carries a unique constraint.
    pub unique: bool,

    /// Whether the column gets its own index.
    pub index: bool,
}

impl ColumnDefinition {
    /// Creates a NOT NULL column with no modifiers.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            primary: false,
            unique: false,
            index: false,
        }
    }

    /// Allows NULL values.
    pub fn nullable(&mut self) -> &mut Self {
        self.nullable = true;
        self
    }

    /// Marks the column as the primary key.
    pub fn primary(&mut self) -> &mut Self {
        self.primary = true;
        self
    }

    /// Adds a unique constraint.
    pub fn unique(&mut self) -> &mut Self {
        self.unique = true;
        self
    }

    /// Adds a single-column index.
    pub fn index(&mut self) -> &mut Self {
        self.index = true;
        self
    }
}

/// A (possibly composite) index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDefinition {
    /// Index name.
    pub name: String,

    /// Indexed columns, in order.
    pub columns: Vec<String>,
}

impl IndexDefinition {
    /// Creates an index named `{table}_{columns}_index`.
    pub fn new(table: &str, columns: Vec<String>) -> Self {
        let name = index_name(table, &columns, "index");
        Self { name, columns }
    }
}

/// Builds a conventional constraint or index name.
pub(crate) fn index_name(table: &str, columns: &[String], suffix: &str) -> String {
    let mut name = String::from(table);
    for column in columns {
        name.push('_');
        name.push_str(column);
    }
    name.push('_');
    name.push_str(suffix);

    name.to_lowercase().replace(['-', '.'], "_")
}

/// Pushes a column and returns a handle to it.
pub(crate) fn push_column(
    columns: &mut Vec<ColumnDefinition>,
    column: ColumnDefinition,
) -> &mut ColumnDefinition {
    columns.push(column);
    let last = columns.len() - 1;
    &mut columns[last]
}
