pub mod catalog;
pub mod order;
pub mod summary;

pub use catalog::*;
pub use order::*;
pub use summary::*;
