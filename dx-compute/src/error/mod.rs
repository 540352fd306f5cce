pub mod kind;

pub use dx_error::Error;
