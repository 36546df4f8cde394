//! # varkeys-id
//!
//! Key kinds and key values for models whose primary key type is chosen
//! by configuration.
//!
//! ## Kinds
//!
//! - [`PrimaryKeyKind`]: auto-increment integer, ULID, or UUID
//! - [`MorphKind`]: storage of the `_id` half of a polymorphic column pair
//!
//! ## Values
//!
//! [`KeyValue::generate`] produces the value to insert for a kind:
//!
//! - ULID: 26 lowercase characters, time-ordered
//! - UUID: 36 lowercase characters, version 4
//! - auto-increment: nothing, the database assigns it
//!
//! [`enrich_row`] and [`enrich_rows`] apply the same generation to pivot
//! rows that never pass through an entity hook.

mod error;
mod kinds;
mod rows;
mod value;

pub use error::IdError;
pub use kinds::{KeyType, MorphKind, PrimaryKeyKind};
pub use rows::{enrich_row, enrich_rows, Row, KEY_COLUMN};
pub use value::{generate, is_ulid, is_uuid, KeyValue, ULID_LEN, UUID_LEN};

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
