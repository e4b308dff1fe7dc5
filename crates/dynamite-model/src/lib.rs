//! DynamoDB wire model for the Dynamite client.
//!
//! Every type here mirrors a shape of the DynamoDB `awsJson1_0` protocol
//! (API version `2012-08-10`). Structs serialize with `PascalCase` field
//! names, optional members are omitted when unset, and string enums carry an
//! `Unknown` variant so that values introduced by the service after this
//! crate was written still deserialize.
//!
//! - [`attribute_value`]: the `AttributeValue` tagged union.
//! - [`types`]: shared structures (key schema, indexes, backups, ...).
//! - [`input`] / [`output`]: one request and one response shape per operation.
//! - [`operations`]: the operation enum and its declared error sets.
//! - [`error`]: the service error taxonomy.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

#[macro_use]
mod macros;

pub mod attribute_value;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use attribute_value::AttributeValue;
pub use error::{ServiceError, ServiceErrorCode};
pub use operations::DynamoDbOperation;
pub use types::{Item, Key};
