use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::emitter::Emitter;
use crate::Result;

/// Writes VM code to an output stream it owns for its whole lifetime.
///
/// `close` consumes the writer, so nothing can be emitted after the stream
/// has been released.
pub struct VmWriter<W: Write> {
    writer: W,
    destination: Option<PathBuf>,
    lines: usize,
}

impl VmWriter<BufWriter<File>> {
    /// Creates (or truncates) the `.vm` file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        debug!("opened VM output {}", path.display());

        Ok(Self {
            writer: BufWriter::new(file),
            destination: Some(path.to_path_buf()),
            lines: 0,
        })
    }
}

impl<W: Write> VmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            destination: None,
            lines: 0,
        }
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Flushes and hands back the underlying stream
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Flushes and releases the output stream
    pub fn close(self) -> Result<()> {
        let destination = self.destination.clone();
        let lines = self.lines;
        drop(self.finish()?);

        match destination {
            Some(path) => info!("VM file written to [{}]", path.display()),
            None => info!("VM output closed after {} lines", lines),
        }
        Ok(())
    }
}

impl<W: Write> Emitter for VmWriter<W> {
    fn emit_line(&mut self, line: &str) -> Result<()> {
        debug!("emit: {}", line);
        writeln!(self.writer, "{}", line)?;
        self.lines += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::codegen::VmEmitter;
    use crate::error::VmError;
    use crate::vm::{ArithmeticCommand, PopSegment, Segment};

    fn output(writer: VmWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_in_memory_output() {
        let mut writer = VmWriter::new(Vec::new());
        writer.write_function("Main.main", 0).unwrap();
        writer.write_push(Segment::Constant, 2).unwrap();
        writer.write_push(Segment::Constant, 3).unwrap();
        writer.write_call("Math.multiply", 2).unwrap();
        writer.write_pop(PopSegment::TEMP, 0).unwrap();
        writer.write_push(Segment::Constant, 0).unwrap();
        writer.write_return().unwrap();

        assert_eq!(writer.lines_written(), 7);
        assert_eq!(writer.destination(), None);
        assert_eq!(
            output(writer),
            "function Main.main 0\npush constant 2\npush constant 3\ncall Math.multiply 2\npop temp 0\npush constant 0\nreturn\n"
        );
    }

    #[test]
    fn test_arithmetic_line() {
        let mut writer = VmWriter::new(Vec::new());
        writer.write_arithmetic(ArithmeticCommand::Add).unwrap();
        assert_eq!(output(writer), "add\n");
    }

    #[test]
    fn test_close_in_memory() {
        let mut writer = VmWriter::new(Vec::new());
        writer.write_return().unwrap();
        assert!(writer.close().is_ok());
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("device full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_io_errors_propagate() {
        let mut writer = VmWriter::new(FailingSink);
        let err = writer.write_return().unwrap_err();

        assert!(matches!(err, VmError::Io(_)));
        assert!(!err.is_contract_violation());
        assert_eq!(writer.lines_written(), 0);
    }

    #[test]
    fn test_close_reports_flush_errors() {
        let mut writer = VmWriter::new(BufWriter::new(FailingSink));
        writer.write_return().unwrap();
        assert_eq!(writer.lines_written(), 1);

        let err = writer.close().unwrap_err();
        assert!(matches!(err, VmError::Io(_)));
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_unvalidated_label_spans_lines() {
        let mut writer = VmWriter::new(Vec::new());
        writer.write_label("A\npush constant 1").unwrap();

        assert_eq!(writer.lines_written(), 1);
        assert_eq!(output(writer), "label A\npush constant 1\n");
    }
}
