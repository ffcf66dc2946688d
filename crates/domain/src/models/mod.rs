//! Domain models.

mod payment;
mod permission;
mod product;
mod role;

pub use payment::*;
pub use permission::*;
pub use product::*;
pub use role::*;
