//! Lowering of Jack source operators to VM code.
//!
//! Most operators map onto a single arithmetic command. Multiplication and
//! division have no VM instruction and become calls into the OS `Math` class.

use super::command::{ArithmeticCommand, Command};

pub const MULTIPLY: &str = "Math.multiply";
pub const DIVIDE: &str = "Math.divide";

/// What a source operator becomes in VM code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lowering {
    Arithmetic(ArithmeticCommand),
    /// OS routine taking both operands from the stack
    Call(&'static str),
}

impl Lowering {
    pub fn to_command(self) -> Command {
        match self {
            Lowering::Arithmetic(command) => Command::Arithmetic(command),
            Lowering::Call(name) => Command::Call(name.to_string(), 2),
        }
    }
}

/// Binary operators: `+ - * / & | < > =`
pub fn binary_op(op: char) -> Option<Lowering> {
    let lowering = match op {
        '+' => Lowering::Arithmetic(ArithmeticCommand::Add),
        '-' => Lowering::Arithmetic(ArithmeticCommand::Sub),
        '=' => Lowering::Arithmetic(ArithmeticCommand::Eq),
        '>' => Lowering::Arithmetic(ArithmeticCommand::Gt),
        '<' => Lowering::Arithmetic(ArithmeticCommand::Lt),
        '&' => Lowering::Arithmetic(ArithmeticCommand::And),
        '|' => Lowering::Arithmetic(ArithmeticCommand::Or),
        '*' => Lowering::Call(MULTIPLY),
        '/' => Lowering::Call(DIVIDE),
        _ => return None,
    };
    Some(lowering)
}

/// Unary operators: `-` and `~`
pub fn unary_op(op: char) -> Option<ArithmeticCommand> {
    match op {
        '-' => Some(ArithmeticCommand::Neg),
        '~' => Some(ArithmeticCommand::Not),
        _ => None,
    }
}
