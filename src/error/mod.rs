mod error;

pub use error::VmError;
