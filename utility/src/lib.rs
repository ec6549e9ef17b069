mod error;
mod fluor;
pub use fluor::*;

pub use error::*;
