use std::io;

use thiserror::Error;

/// Errors raised while emitting or reading VM code
#[derive(Debug, Error)]
pub enum VmError {
    /// The constant segment is read-only
    #[error("cannot pop into the constant segment")]
    PopConstant,

    /// Not one of add, sub, neg, eq, gt, lt, and, or, not
    #[error("unknown arithmetic command `{0}`")]
    UnknownArithmetic(String),

    #[error("unknown memory segment `{0}`")]
    UnknownSegment(String),

    /// Malformed VM line (bad operand count, bad index, empty command)
    #[error("{0}")]
    Syntax(String),

    /// Any of the above, tagged with the 1-based source line it came from
    #[error("line {line}: {source}")]
    AtLine { line: usize, source: Box<VmError> },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl VmError {
    /// Contract violations are bugs in the calling code generator, not
    /// runtime conditions worth recovering from.
    pub fn is_contract_violation(&self) -> bool {
        match self {
            VmError::PopConstant | VmError::UnknownArithmetic(_) => true,
            VmError::AtLine { source, .. } => source.is_contract_violation(),
            _ => false,
        }
    }

    /// Attach a 1-based source line number to an error raised while reading a
    /// single VM line. The inner error is kept as is.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            VmError::Io(err) => VmError::Io(err),
            VmError::AtLine { source, .. } => VmError::AtLine { line, source },
            other => VmError::AtLine {
                line,
                source: Box::new(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violations() {
        assert!(VmError::PopConstant.is_contract_violation());
        assert!(VmError::UnknownArithmetic("mul".to_string()).is_contract_violation());
        assert!(!VmError::UnknownSegment("heap".to_string()).is_contract_violation());
        assert!(!VmError::Syntax("empty command".to_string()).is_contract_violation());
        assert!(!VmError::from(io::Error::other("disk full")).is_contract_violation());
    }

    #[test]
    fn test_at_line_wraps_message() {
        let err = VmError::UnknownSegment("heap".to_string()).at_line(7);
        assert_eq!(err.to_string(), "line 7: unknown memory segment `heap`");
    }

    #[test]
    fn test_at_line_keeps_contract_violations() {
        let err = VmError::PopConstant.at_line(3);
        assert!(err.is_contract_violation());
        assert!(matches!(
            &err,
            VmError::AtLine { line: 3, source } if matches!(**source, VmError::PopConstant)
        ));

        let err = VmError::UnknownArithmetic("mul".to_string()).at_line(4).at_line(5);
        assert!(err.is_contract_violation());
        assert_eq!(err.to_string(), "line 5: unknown arithmetic command `mul`");
    }

    #[test]
    fn test_at_line_keeps_io_errors() {
        let err = VmError::from(io::Error::other("disk full")).at_line(2);
        assert!(matches!(err, VmError::Io(_)));
    }
}
