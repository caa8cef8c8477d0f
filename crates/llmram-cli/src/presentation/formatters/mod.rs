pub mod number;

pub use number::{format_billions, format_bytes_as_gb, format_gb, format_percent};
