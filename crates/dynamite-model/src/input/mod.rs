//! Request shapes, one per operation.
//!
//! Required members are constructor arguments; everything else is set with
//! chainable `with_*` methods, so `PutItemInput::new("t", item)
//! .with_return_values(ReturnValue::AllOld)` reads like the overloads of
//! other SDKs.

mod backup;
mod batch;
mod global_table;
mod item;
mod read;
mod table;
mod tag;
mod ttl;

pub use backup::*;
pub use batch::*;
pub use global_table::*;
pub use item::*;
pub use read::*;
pub use table::*;
pub use tag::*;
pub use ttl::*;
