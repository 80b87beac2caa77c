//! Emits Hack VM code, one command per line.

pub mod codegen;
pub mod error;
pub mod vm;

pub use codegen::{Emitter, VmEmitter, VmWriter};
pub use error::VmError;
pub use vm::{ArithmeticCommand, Command, PopSegment, Segment};

pub type Result<T> = std::result::Result<T, VmError>;
