//! Shared DynamoDB types.
//!
//! Structs use `#[serde(rename_all = "PascalCase")]`; acronym-bearing members
//! (`SSEDescription`, `KMSMasterKeyArn`, ...) carry explicit renames.
//! Optional members and empty collections are left off the wire.

use std::collections::HashMap;

use crate::attribute_value::AttributeValue;

mod backup;
mod batch;
mod capacity;
mod condition;
mod global_table;
mod index;
mod key;
mod table;
mod ttl;

pub use backup::*;
pub use batch::*;
pub use capacity::*;
pub use condition::*;
pub use global_table::*;
pub use index::*;
pub use key::*;
pub use table::*;
pub use ttl::*;

/// An item: attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// A primary key: the key attribute names to their values.
pub type Key = HashMap<String, AttributeValue>;
