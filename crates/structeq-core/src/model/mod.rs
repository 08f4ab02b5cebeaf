pub mod scalar;
pub mod value;

pub use scalar::{Key, Scalar};
pub use value::{Mapping, Value};
