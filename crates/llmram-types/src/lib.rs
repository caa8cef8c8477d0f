pub mod error;
pub mod quantization;
pub mod request;

pub use error::{Error, Result};
pub use quantization::*;
pub use request::*;
