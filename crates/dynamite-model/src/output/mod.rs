//! Response shapes, one per operation.
//!
//! Every member is optional or defaults to empty so that a response from a
//! newer or older service version still decodes.

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
