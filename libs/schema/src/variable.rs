//! Kind-driven column dispatch.

use varkeys_id::{MorphKind, PrimaryKeyKind};

use crate::builder::{SchemaBuilder, DEFAULT_KEY_COLUMN};
use crate::column::ColumnDefinition;
use crate::foreign::ForeignIdColumn;

/// Key columns whose type follows a configured kind.
///
/// Implemented for every [`SchemaBuilder`], so a migration writes
///
/// ```ignore
/// table.variable_primary_key(kind, "id");
/// table.variable_foreign_key("author_id", author_kind).constrained(None);
/// table.variable_morphs("commentable", morph_kind, false);
/// ```
///
/// instead of matching on the kind at every call site.
pub trait VariableKeys: SchemaBuilder {
    /// Declares `column` as the primary key, typed by `kind`.
    fn variable_primary_key(&mut self, kind: PrimaryKeyKind, column: &str) -> &mut ColumnDefinition {
        match kind {
            PrimaryKeyKind::AutoIncrement => self.id(column),
            PrimaryKeyKind::Ulid => self.ulid(column).primary(),
            PrimaryKeyKind::Uuid => self.uuid(column).primary(),
        }
    }

    /// [`VariableKeys::variable_primary_key`] on the `id` column.
    fn variable_primary_key_default(&mut self, kind: PrimaryKeyKind) -> &mut ColumnDefinition {
        self.variable_primary_key(kind, DEFAULT_KEY_COLUMN)
    }

    /// Declares a foreign key column typed like a `kind` primary key.
    fn variable_foreign_key(&mut self, column: &str, kind: PrimaryKeyKind) -> ForeignIdColumn<'_> {
        match kind {
            PrimaryKeyKind::AutoIncrement => self.foreign_id(column),
            PrimaryKeyKind::Ulid => self.foreign_ulid(column),
            PrimaryKeyKind::Uuid => self.foreign_uuid(column),
        }
    }

    /// Declares the `{name}_type`/`{name}_id` pair with an id typed by `kind`.
    fn variable_morphs(&mut self, name: &str, kind: MorphKind, nullable: bool) {
        match kind {
            MorphKind::String => self.morphs(name, nullable),
            MorphKind::Numeric => self.numeric_morphs(name, nullable),
            MorphKind::Uuid => self.uuid_morphs(name, nullable),
            MorphKind::Ulid => self.ulid_morphs(name, nullable),
        }
    }
}

impl<B: SchemaBuilder + ?Sized> VariableKeys for B {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::foreign::ForeignKeyDefinition;

    /// Records which primitive each dispatch reached.
    #[derive(Debug, Default)]
    struct Recorder {
        calls: Vec<String>,
        columns: Vec<ColumnDefinition>,
        foreign_keys: Vec<ForeignKeyDefinition>,
    }

    impl Recorder {
        fn record(&mut self, call: &str, column: &str) -> &mut ColumnDefinition {
            self.calls.push(format!("{call}({column})"));
            self.columns.push(ColumnDefinition::new(
                column,
                crate::ColumnType::STRING,
            ));
            let last = self.columns.len() - 1;
            &mut self.columns[last]
        }

        fn record_foreign(&mut self, call: &str, column: &str) -> ForeignIdColumn<'_> {
            self.calls.push(format!("{call}({column})"));
            self.columns.push(ColumnDefinition::new(
                column,
                crate::ColumnType::STRING,
            ));
            let last = self.columns.len() - 1;
            ForeignIdColumn::new("t", &mut self.columns[last], &mut self.foreign_keys)
        }
    }

    impl SchemaBuilder for Recorder {
        fn id(&mut self, column: &str) -> &mut ColumnDefinition {
            self.record("id", column)
        }
        fn ulid(&mut self, column: &str) -> &mut ColumnDefinition {
            self.record("ulid", column)
        }
        fn uuid(&mut self, column: &str) -> &mut ColumnDefinition {
            self.record("uuid", column)
        }
        fn foreign_id(&mut self, column: &str) -> ForeignIdColumn<'_> {
            self.record_foreign("foreign_id", column)
        }
        fn foreign_ulid(&mut self, column: &str) -> ForeignIdColumn<'_> {
            self.record_foreign("foreign_ulid", column)
        }
        fn foreign_uuid(&mut self, column: &str) -> ForeignIdColumn<'_> {
            self.record_foreign("foreign_uuid", column)
        }
        fn morphs(&mut self, name: &str, nullable: bool) {
            self.calls.push(format!("morphs({name}, {nullable})"));
        }
        fn numeric_morphs(&mut self, name: &str, nullable: bool) {
            self.calls.push(format!("numeric_morphs({name}, {nullable})"));
        }
        fn uuid_morphs(&mut self, name: &str, nullable: bool) {
            self.calls.push(format!("uuid_morphs({name}, {nullable})"));
        }
        fn ulid_morphs(&mut self, name: &str, nullable: bool) {
            self.calls.push(format!("ulid_morphs({name}, {nullable})"));
        }
    }

    #[rstest]
    #[case(PrimaryKeyKind::AutoIncrement, "id(id)", false)]
    #[case(PrimaryKeyKind::Ulid, "ulid(id)", true)]
    #[case(PrimaryKeyKind::Uuid, "uuid(id)", true)]
    fn test_primary_key_dispatch(
        #[case] kind: PrimaryKeyKind,
        #[case] call: &str,
        #[case] marked_primary: bool,
    ) {
        let mut recorder = Recorder::default();
        recorder.variable_primary_key_default(kind);

        assert_eq!(recorder.calls, vec![call.to_string()]);
        assert_eq!(recorder.columns[0].primary, marked_primary);
    }

    #[rstest]
    #[case(PrimaryKeyKind::AutoIncrement, "foreign_id(owner_id)")]
    #[case(PrimaryKeyKind::Ulid, "foreign_ulid(owner_id)")]
    #[case(PrimaryKeyKind::Uuid, "foreign_uuid(owner_id)")]
    fn test_foreign_key_dispatch(#[case] kind: PrimaryKeyKind, #[case] call: &str) {
        let mut recorder = Recorder::default();
        recorder
            .variable_foreign_key("owner_id", kind)
            .constrained(Some("owners"))
            .cascade_on_delete();

        assert_eq!(recorder.calls, vec![call.to_string()]);
        assert_eq!(recorder.foreign_keys.len(), 1);
        assert_eq!(recorder.foreign_keys[0].on, "owners");
    }

    #[rstest]
    #[case(MorphKind::String, "morphs(taggable, false)")]
    #[case(MorphKind::Numeric, "numeric_morphs(taggable, false)")]
    #[case(MorphKind::Uuid, "uuid_morphs(taggable, false)")]
    #[case(MorphKind::Ulid, "ulid_morphs(taggable, false)")]
    fn test_morph_dispatch(#[case] kind: MorphKind, #[case] call: &str) {
        let mut recorder = Recorder::default();
        recorder.variable_morphs("taggable", kind, false);
        assert_eq!(recorder.calls, vec![call.to_string()]);
    }

    #[test]
    fn test_morph_dispatch_forwards_nullable() {
        let mut recorder = Recorder::default();
        recorder.variable_morphs("imageable", MorphKind::Ulid, true);
        assert_eq!(recorder.calls, vec!["ulid_morphs(imageable, true)".to_string()]);
    }
}
