//! Fee table models.

pub mod flag;
pub mod model;
pub mod table;

pub use flag::CardFlag;
pub use model::{FeeQuery, FeeRequest, FeeResponse, FeeUpdateRequest};
pub use table::TableNumber;
