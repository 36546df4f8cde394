//! PostgreSQL DDL compilation.

use crate::column::{index_name, ColumnDefinition, ColumnType};
use crate::foreign::ForeignKeyDefinition;
use crate::Blueprint;

/// Compiles blueprints to PostgreSQL statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresGrammar;

impl PostgresGrammar {
    /// Compiles `create table`, then indexes, then foreign keys.
    pub fn compile(&self, blueprint: &Blueprint) -> Vec<String> {
        let table = blueprint.table();
        let mut statements = Vec::with_capacity(1 + blueprint.indexes().len());

        let columns: Vec<String> = blueprint
            .columns()
            .iter()
            .map(|column| self.column(column))
            .collect();
        statements.push(format!(
            "create table {} ({})",
            wrap(table),
            columns.join(", ")
        ));

        for column in blueprint.columns() {
            let name = std::slice::from_ref(&column.name);
            if column.unique {
                statements.push(format!(
                    "alter table {} add constraint {} unique ({})",
                    wrap(table),
                    wrap(&index_name(table, name, "unique")),
                    wrap(&column.name)
                ));
            }
            if column.index {
                statements.push(format!(
                    "create index {} on {} ({})",
                    wrap(&index_name(table, name, "index")),
                    wrap(table),
                    wrap(&column.name)
                ));
            }
        }

        for index in blueprint.indexes() {
            statements.push(format!(
                "create index {} on {} ({})",
                wrap(&index.name),
                wrap(table),
                wrap_all(&index.columns)
            ));
        }

        for foreign in blueprint.foreign_keys() {
            statements.push(self.foreign(table, foreign));
        }

        statements
    }

    fn column(&self, column: &ColumnDefinition) -> String {
        let mut sql = format!("{} {}", wrap(&column.name), self.type_name(column.column_type));

        sql.push_str(if column.nullable { " null" } else { " not null" });
        if column.primary {
            sql.push_str(" primary key");
        }

        sql
    }

    fn type_name(&self, column_type: ColumnType) -> String {
        match column_type {
            ColumnType::BigIncrements => "bigserial".to_string(),
            // PostgreSQL has no unsigned integers.
            ColumnType::UnsignedBigInteger => "bigint".to_string(),
            ColumnType::Char { length } => format!("char({length})"),
            ColumnType::Uuid => "uuid".to_string(),
            ColumnType::String { length } => format!("varchar({length})"),
        }
    }

    fn foreign(&self, table: &str, foreign: &ForeignKeyDefinition) -> String {
        let mut sql = format!(
            "alter table {} add constraint {} foreign key ({}) references {} ({})",
            wrap(table),
            wrap(&foreign.name),
            wrap(&foreign.column),
            wrap(&foreign.on),
            wrap(&foreign.references)
        );

        if let Some(action) = foreign.on_delete {
            sql.push_str(&format!(" on delete {action}"));
        }
        if let Some(action) = foreign.on_update {
            sql.push_str(&format!(" on update {action}"));
        }

        sql
    }
}

/// Quotes an identifier, doubling embedded quotes.
fn wrap(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

fn wrap_all(identifiers: &[String]) -> String {
    identifiers
        .iter()
        .map(|i| wrap(i))
        .collect::<Vec<_>>()
        .join(", ")
}
