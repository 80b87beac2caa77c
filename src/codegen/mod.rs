pub mod emitter;
pub mod writer;

pub use emitter::{Emitter, VmEmitter};
pub use writer::VmWriter;
