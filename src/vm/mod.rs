pub mod command;
pub mod ops;
pub mod parser;
pub mod segment;

pub use command::{ArithmeticCommand, Command};
pub use ops::{Lowering, binary_op, unary_op};
pub use parser::parse_program;
pub use segment::{PopSegment, Segment};
