#[macro_use]
mod convenience;

mod iter;
mod macros;

pub mod errors;
pub mod nested;
pub mod slice;

pub use convenience::*;

pub use errors::SliceError;
pub use iter::SliceIndices;
pub use nested::{Nested, print_nested};
pub use slice::Slice;
