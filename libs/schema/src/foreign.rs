//! Foreign key columns and constraints.

use std::fmt;

use serde::Serialize;

use crate::column::{index_name, ColumnDefinition};

/// Column referenced when none is given.
pub const DEFAULT_REFERENCED_COLUMN: &str = "id";

/// Action taken on the referencing row when the referenced row changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    SetNull,
    NoAction,
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReferentialAction::Cascade => "cascade",
            ReferentialAction::Restrict => "restrict",
            ReferentialAction::SetNull => "set null",
            ReferentialAction::NoAction => "no action",
        };
        write!(f, "{}", s)
    }
}

/// A foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyDefinition {
    /// Constraint name.
    pub name: String,

    /// Referencing column on this table.
    pub column: String,

    /// Referenced table.
    pub on: String,

    /// Referenced column.
    pub references: String,

    /// Action on delete of the referenced row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ReferentialAction>,

    /// Action on update of the referenced key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_update: Option<ReferentialAction>,
}

impl ForeignKeyDefinition {
    /// Creates a constraint named `{table}_{column}_foreign`.
    pub fn new(
        table: &str,
        column: impl Into<String>,
        on: impl Into<String>,
        references: impl Into<String>,
    ) -> Self {
        let column = column.into();
        let name = index_name(table, std::slice::from_ref(&column), "foreign");
        Self {
            name,
            column,
            on: on.into(),
            references: references.into(),
            on_delete: None,
            on_update: None,
        }
    }

    pub fn cascade_on_delete(&mut self) -> &mut Self {
        self.on_delete = Some(ReferentialAction::Cascade);
        self
    }

    pub fn restrict_on_delete(&mut self) -> &mut Self {
        self.on_delete = Some(ReferentialAction::Restrict);
        self
    }

    pub fn null_on_delete(&mut self) -> &mut Self {
        self.on_delete = Some(ReferentialAction::SetNull);
        self
    }

    pub fn no_action_on_delete(&mut self) -> &mut Self {
        self.on_delete = Some(ReferentialAction::NoAction);
        self
    }

    pub fn cascade_on_update(&mut self) -> &mut Self {
        self.on_update = Some(ReferentialAction::Cascade);
        self
    }

    pub fn restrict_on_update(&mut self) -> &mut Self {
        self.on_update = Some(ReferentialAction::Restrict);
        self
    }
}

/// Handle returned by the `foreign_*` column primitives.
///
/// Column modifiers consume and return the handle so they chain; the
/// constraint methods end the chain and hand back the constraint.
#[derive(Debug)]
pub struct ForeignIdColumn<'a> {
    table: &'a str,
    column: &'a mut ColumnDefinition,
    foreign_keys: &'a mut Vec<ForeignKeyDefinition>,
}

impl<'a> ForeignIdColumn<'a> {
    /// Wraps a freshly declared column of `table`.
    ///
    /// Constraints added through the handle are pushed onto `foreign_keys`.
    pub fn new(
        table: &'a str,
        column: &'a mut ColumnDefinition,
        foreign_keys: &'a mut Vec<ForeignKeyDefinition>,
    ) -> Self {
        Self {
            table,
            column,
            foreign_keys,
        }
    }

    /// The underlying column.
    pub fn column(&self) -> &ColumnDefinition {
        self.column
    }

    #[must_use]
    pub fn nullable(self) -> Self {
        self.column.nullable = true;
        self
    }

    #[must_use]
    pub fn index(self) -> Self {
        self.column.index = true;
        self
    }

    #[must_use]
    pub fn unique(self) -> Self {
        self.column.unique = true;
        self
    }

    /// References `id` on `table`, or on the table guessed from the column
    /// name when `table` is `None` (`author_id` references `authors`).
    pub fn constrained(self, table: Option<&str>) -> &'a mut ForeignKeyDefinition {
        let on = match table {
            Some(table) => table.to_string(),
            None => guess_table(&self.column.name, DEFAULT_REFERENCED_COLUMN),
        };
        self.push_constraint(on, DEFAULT_REFERENCED_COLUMN.to_string())
    }

    /// Starts an explicit reference; finish it with [`PendingReference::on`].
    pub fn references(self, column: &str) -> PendingReference<'a> {
        PendingReference {
            handle: self,
            references: column.to_string(),
        }
    }

    fn push_constraint(self, on: String, references: String) -> &'a mut ForeignKeyDefinition {
        let foreign_keys = self.foreign_keys;
        foreign_keys.push(ForeignKeyDefinition::new(
            self.table,
            self.column.name.clone(),
            on,
            references,
        ));
        let last = foreign_keys.len() - 1;
        &mut foreign_keys[last]
    }
}

/// A reference waiting for its target table.
#[derive(Debug)]
pub struct PendingReference<'a> {
    handle: ForeignIdColumn<'a>,
    references: String,
}

impl<'a> PendingReference<'a> {
    pub fn on(self, table: &str) -> &'a mut ForeignKeyDefinition {
        self.handle.push_constraint(table.to_string(), self.references)
    }
}

/// Guesses the referenced table from a foreign key column name.
///
/// Strips the trailing `_{references}` and pluralizes what is left.
pub fn guess_table(column: &str, references: &str) -> String {
    let suffix = format!("_{references}");
    let stem = match column.rfind(&suffix) {
        Some(pos) if pos > 0 => &column[..pos],
        _ => column,
    };
    pluralize(stem)
}

fn pluralize(word: &str) -> String {
    const SIBILANTS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().last();
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }

    if SIBILANTS.iter().any(|s| word.ends_with(s)) {
        return format!("{word}es");
    }

    format!("{word}s")
}
