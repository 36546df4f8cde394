//! End-to-end widget lifecycle test.
//!
//! Walks one model through everything the libraries offer:
//!
//! 1. Load a key map from disk
//! 2. Build the migration for the model's tables
//! 3. Create an entity without a key and let the hook assign one
//! 4. Attach pivot rows in bulk
//! 5. Reset the registry between runs
//!
//! ## Running
//!
//! ```bash
//! cargo test -p varkeys-e2e --test widget_lifecycle
//! ```

use std::collections::HashSet;
use std::io::Write;
use std::thread;

use serde_json::{json, Value};
use varkeys_id::{is_ulid, is_uuid, KeyType, PrimaryKeyKind, Row, ULID_LEN};
use varkeys_registry::{
    HasVariableKey, KeyRegistry, ModelError, RegistryConfig, SharedKeyRegistry,
};
use varkeys_schema::{Blueprint, ColumnType, VariableKeys};

const WIDGET: &str = "shop::Widget";
const ORDER: &str = "shop::Order";
const CUSTOMER: &str = "shop::Customer";

const KEY_MAP: &str = r#"
[models."shop::Widget"]
primary_key = "ulid"
morph = "ulid"

[models."shop::Order"]
primary_key = "uuid"

[models."shop::Customer"]
primary_key = "auto_increment"
morph = "numeric"
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn load_registry() -> KeyRegistry {
    let mut file = tempfile::NamedTempFile::new().expect("create key map");
    file.write_all(KEY_MAP.as_bytes()).expect("write key map");

    RegistryConfig::load(file.path())
        .expect("load key map")
        .into_registry()
}

#[derive(Debug)]
struct Widget {
    id: Option<Value>,
    name: String,
}

impl Widget {
    fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
        }
    }
}

impl HasVariableKey for Widget {
    fn model_id(&self) -> &str {
        WIDGET
    }

    fn key(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    fn set_key(&mut self, value: String) {
        self.id = Some(Value::String(value));
    }
}

#[derive(Debug)]
struct Order {
    id: Option<Value>,
}

impl HasVariableKey for Order {
    fn model_id(&self) -> &str {
        ORDER
    }

    fn key(&self) -> Option<&Value> {
        self.id.as_ref()
    }

    fn set_key(&mut self, value: String) {
        self.id = Some(Value::String(value));
    }
}

#[test]
fn widget_created_without_id_gets_ulid() {
    init_tracing();
    let registry = load_registry();

    let mut widget = Widget::new("sprocket");
    widget.before_create(&registry).expect("before_create");

    let id = widget.id.as_ref().and_then(Value::as_str).expect("id set");
    assert_eq!(id.len(), ULID_LEN);
    assert!(is_ulid(id));
    assert_eq!(widget.name, "sprocket");

    let metadata = widget.key_metadata(&registry).expect("metadata");
    assert!(!metadata.incrementing);
    assert_eq!(metadata.key_type, KeyType::String);
    assert_eq!(metadata.unique_ids, vec!["id".to_string()]);
}

#[test]
fn migration_follows_key_map() {
    init_tracing();
    let registry = load_registry();

    let mut widgets = Blueprint::new("widgets");
    widgets.variable_primary_key_default(registry.primary_key_kind(WIDGET).unwrap());
    widgets.string("name");

    let mut orders = Blueprint::new("orders");
    orders.variable_primary_key_default(registry.primary_key_kind(ORDER).unwrap());
    orders
        .variable_foreign_key("customer_id", registry.primary_key_kind(CUSTOMER).unwrap())
        .constrained(None)
        .cascade_on_delete();
    orders
        .variable_foreign_key("widget_id", registry.primary_key_kind(WIDGET).unwrap())
        .nullable()
        .constrained(None)
        .null_on_delete();

    let mut reviews = Blueprint::new("reviews");
    reviews.variable_primary_key_default(PrimaryKeyKind::AutoIncrement);
    reviews.variable_morphs("reviewable", registry.morph_kind(WIDGET).unwrap(), true);

    assert_eq!(widgets.column("id").unwrap().column_type, ColumnType::ULID);
    assert_eq!(orders.column("id").unwrap().column_type, ColumnType::Uuid);
    assert_eq!(
        orders.column("customer_id").unwrap().column_type,
        ColumnType::UnsignedBigInteger
    );
    assert_eq!(orders.column("widget_id").unwrap().column_type, ColumnType::ULID);
    assert!(orders.column("widget_id").unwrap().nullable);
    assert_eq!(
        reviews.column("reviewable_id").unwrap().column_type,
        ColumnType::ULID
    );

    let sql = orders.to_sql().expect("orders ddl");
    assert_eq!(
        sql[0],
        "create table \"orders\" (\"id\" uuid not null primary key, \
         \"customer_id\" bigint not null, \
         \"widget_id\" char(26) null)"
    );
    assert!(sql[1].ends_with("references \"customers\" (\"id\") on delete cascade"));
    assert!(sql[2].ends_with("references \"widgets\" (\"id\") on delete set null"));

    let sql = reviews.to_sql().expect("reviews ddl");
    assert_eq!(sql.len(), 2);
    assert!(sql[0].contains("\"reviewable_type\" varchar(255) null"));
}

#[test]
fn order_with_integer_id_is_rejected() {
    let registry = load_registry();

    let mut order = Order { id: Some(json!(99)) };
    let err = order.before_create(&registry).unwrap_err();

    assert!(matches!(err, ModelError::NonStringUuid { found: "integer", .. }));
    assert_eq!(order.id, Some(json!(99)));
}

#[test]
fn pivot_rows_get_distinct_keys() {
    let registry = load_registry();
    let template: Row = match json!({ "quantity": 1 }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    };

    let rows = registry
        .enrich_pivot_rows(ORDER, 1..=5_u64, &template)
        .expect("order is registered");
    let keys: HashSet<&str> = rows
        .values()
        .map(|row| row["id"].as_str().expect("string id"))
        .collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(keys.len(), 5);
    assert!(keys.iter().all(|k| is_uuid(k)));

    let customer_rows = registry
        .enrich_pivot_rows(CUSTOMER, [1_u64, 2], &template)
        .expect("customer is registered");
    assert!(customer_rows.values().all(|row| !row.contains_key("id")));
}

#[test]
fn shared_registry_serves_threads_until_cleared() {
    let shared = SharedKeyRegistry::new(load_registry());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut widget = Widget::new("gear");
                widget.before_create(&shared).map(|_| widget.id)
            })
        })
        .collect();

    let ids: HashSet<String> = handles
        .into_iter()
        .map(|h| h.join().expect("thread").expect("before_create"))
        .filter_map(|id| id.and_then(|v| v.as_str().map(str::to_string)))
        .collect();
    assert_eq!(ids.len(), 4);

    shared.clear();
    assert!(!shared.is_registered(WIDGET));

    let mut widget = Widget::new("late");
    let err = widget.before_create(&shared).unwrap_err();
    assert!(matches!(err, ModelError::NotRegistered(_)));
    assert!(widget.incrementing(&shared).is_err());
}
