use std::fmt;
use std::str::FromStr;

use super::segment::{PopSegment, Segment};
use crate::error::VmError;

/// Stack arithmetic and logic commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticCommand {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

impl ArithmeticCommand {
    pub const ALL: [ArithmeticCommand; 9] = [
        ArithmeticCommand::Add,
        ArithmeticCommand::Sub,
        ArithmeticCommand::Neg,
        ArithmeticCommand::Eq,
        ArithmeticCommand::Gt,
        ArithmeticCommand::Lt,
        ArithmeticCommand::And,
        ArithmeticCommand::Or,
        ArithmeticCommand::Not,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArithmeticCommand::Add => "add",
            ArithmeticCommand::Sub => "sub",
            ArithmeticCommand::Neg => "neg",
            ArithmeticCommand::Eq => "eq",
            ArithmeticCommand::Gt => "gt",
            ArithmeticCommand::Lt => "lt",
            ArithmeticCommand::And => "and",
            ArithmeticCommand::Or => "or",
            ArithmeticCommand::Not => "not",
        }
    }
}

impl fmt::Display for ArithmeticCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ArithmeticCommand {
    type Err = VmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArithmeticCommand::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| VmError::UnknownArithmetic(s.to_string()))
    }
}

/// A single line of VM code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(Segment, u16),
    Pop(PopSegment, u16),
    Arithmetic(ArithmeticCommand),
    Label(String),
    Goto(String),
    IfGoto(String),
    Call(String, u16),
    Function(String, u16),
    Return,
}

impl Command {
    pub fn opcode(&self) -> &'static str {
        match self {
            Command::Push(..) => "push",
            Command::Pop(..) => "pop",
            Command::Arithmetic(command) => command.as_str(),
            Command::Label(_) => "label",
            Command::Goto(_) => "goto",
            Command::IfGoto(_) => "if-goto",
            Command::Call(..) => "call",
            Command::Function(..) => "function",
            Command::Return => "return",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opcode = self.opcode();
        match self {
            Command::Push(segment, index) => write!(f, "{} {} {}", opcode, segment, index),
            Command::Pop(segment, index) => write!(f, "{} {} {}", opcode, segment, index),
            Command::Label(label) | Command::Goto(label) | Command::IfGoto(label) => {
                write!(f, "{} {}", opcode, label)
            }
            Command::Call(name, n) | Command::Function(name, n) => {
                write!(f, "{} {} {}", opcode, name, n)
            }
            Command::Arithmetic(_) | Command::Return => write!(f, "{}", opcode),
        }
    }
}

fn parse_count(token: &str) -> Result<u16, VmError> {
    token
        .parse::<u16>()
        .map_err(|e| VmError::Syntax(format!("invalid index `{}`: {}", token, e)))
}

fn arity_error(opcode: &str, expected: usize, found: usize) -> VmError {
    VmError::Syntax(format!(
        "`{}` takes {} operand(s), found {}",
        opcode, expected, found
    ))
}

/// Parses one normalized VM line, without comments or surrounding whitespace.
/// Errors carry no line number; callers reading whole files tag them with
/// [`VmError::at_line`].
impl FromStr for Command {
    type Err = VmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let Some((&opcode, operands)) = tokens.split_first() else {
            return Err(VmError::Syntax("empty command".to_string()));
        };

        let operands_exactly = |n: usize| {
            if operands.len() == n {
                Ok(())
            } else {
                Err(arity_error(opcode, n, operands.len()))
            }
        };

        match opcode {
            "push" => {
                operands_exactly(2)?;
                Ok(Command::Push(operands[0].parse()?, parse_count(operands[1])?))
            }
            "pop" => {
                operands_exactly(2)?;
                let segment = PopSegment::try_from(operands[0].parse::<Segment>()?)?;
                Ok(Command::Pop(segment, parse_count(operands[1])?))
            }
            "label" => {
                operands_exactly(1)?;
                Ok(Command::Label(operands[0].to_string()))
            }
            "goto" => {
                operands_exactly(1)?;
                Ok(Command::Goto(operands[0].to_string()))
            }
            "if-goto" => {
                operands_exactly(1)?;
                Ok(Command::IfGoto(operands[0].to_string()))
            }
            "call" => {
                operands_exactly(2)?;
                Ok(Command::Call(operands[0].to_string(), parse_count(operands[1])?))
            }
            "function" => {
                operands_exactly(2)?;
                Ok(Command::Function(operands[0].to_string(), parse_count(operands[1])?))
            }
            "return" => {
                operands_exactly(0)?;
                Ok(Command::Return)
            }
            other => {
                let command = other.parse::<ArithmeticCommand>()?;
                operands_exactly(0)?;
                Ok(Command::Arithmetic(command))
            }
        }
    }
}
