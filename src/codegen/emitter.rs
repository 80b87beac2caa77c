use crate::Result;
use crate::vm::{ArithmeticCommand, Command, PopSegment, Segment};

/// A sink for lines of VM code
pub trait Emitter {
    /// Appends `line` followed by a single `\n`
    fn emit_line(&mut self, line: &str) -> Result<()>;
}

/// One method per VM command. Each call appends exactly one line, in call
/// order.
pub trait VmEmitter: Emitter {
    fn write_command(&mut self, command: &Command) -> Result<()>;
    fn write_push(&mut self, segment: Segment, index: u16) -> Result<()>;
    fn write_pop(&mut self, segment: PopSegment, index: u16) -> Result<()>;
    fn write_arithmetic(&mut self, command: ArithmeticCommand) -> Result<()>;

    /// Labels are written as-is. A label containing `\n` ends up as more than
    /// one physical line but still counts as one emitted line.
    fn write_label(&mut self, label: &str) -> Result<()>;
    /// Same as [`VmEmitter::write_label`]: the label is not validated.
    fn write_goto(&mut self, label: &str) -> Result<()>;
    /// Same as [`VmEmitter::write_label`]: the label is not validated.
    fn write_if(&mut self, label: &str) -> Result<()>;
    fn write_call(&mut self, name: &str, n_args: u16) -> Result<()>;
    fn write_function(&mut self, name: &str, n_vars: u16) -> Result<()>;
    fn write_return(&mut self) -> Result<()>;
}

impl<T: Emitter> VmEmitter for T {
    fn write_command(&mut self, command: &Command) -> Result<()> {
        self.emit_line(&command.to_string())
    }

    fn write_push(&mut self, segment: Segment, index: u16) -> Result<()> {
        self.write_command(&Command::Push(segment, index))
    }

    fn write_pop(&mut self, segment: PopSegment, index: u16) -> Result<()> {
        self.write_command(&Command::Pop(segment, index))
    }

    fn write_arithmetic(&mut self, command: ArithmeticCommand) -> Result<()> {
        self.write_command(&Command::Arithmetic(command))
    }

    fn write_label(&mut self, label: &str) -> Result<()> {
        self.write_command(&Command::Label(label.to_string()))
    }

    fn write_goto(&mut self, label: &str) -> Result<()> {
        self.write_command(&Command::Goto(label.to_string()))
    }

    fn write_if(&mut self, label: &str) -> Result<()> {
        self.write_command(&Command::IfGoto(label.to_string()))
    }

    fn write_call(&mut self, name: &str, n_args: u16) -> Result<()> {
        self.write_command(&Command::Call(name.to_string(), n_args))
    }

    fn write_function(&mut self, name: &str, n_vars: u16) -> Result<()> {
        self.write_command(&Command::Function(name.to_string(), n_vars))
    }

    fn write_return(&mut self) -> Result<()> {
        self.write_command(&Command::Return)
    }
}
