pub mod compat;
pub mod energize;
pub mod progress;
pub mod validate;

pub use compat::*;
pub use energize::*;
pub use progress::*;
pub use validate::*;
