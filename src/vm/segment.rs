use std::fmt;
use std::str::FromStr;

use crate::error::VmError;

/// Memory segments addressable by `push` and `pop`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Constant,
    Argument,
    Local,
    Static,
    This,
    That,
    Pointer,
    Temp,
}

impl Segment {
    pub const ALL: [Segment; 8] = [
        Segment::Constant,
        Segment::Argument,
        Segment::Local,
        Segment::Static,
        Segment::This,
        Segment::That,
        Segment::Pointer,
        Segment::Temp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Constant => "constant",
            Segment::Argument => "argument",
            Segment::Local => "local",
            Segment::Static => "static",
            Segment::This => "this",
            Segment::That => "that",
            Segment::Pointer => "pointer",
            Segment::Temp => "temp",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Segment {
    type Err = VmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|segment| segment.as_str() == s)
            .ok_or_else(|| VmError::UnknownSegment(s.to_string()))
    }
}

/// A segment that can be the target of `pop`, i.e. anything but `constant`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PopSegment(Segment);

impl PopSegment {
    pub const ARGUMENT: PopSegment = PopSegment(Segment::Argument);
    pub const LOCAL: PopSegment = PopSegment(Segment::Local);
    pub const STATIC: PopSegment = PopSegment(Segment::Static);
    pub const THIS: PopSegment = PopSegment(Segment::This);
    pub const THAT: PopSegment = PopSegment(Segment::That);
    pub const POINTER: PopSegment = PopSegment(Segment::Pointer);
    pub const TEMP: PopSegment = PopSegment(Segment::Temp);

    pub fn segment(&self) -> Segment {
        self.0
    }
}

impl TryFrom<Segment> for PopSegment {
    type Error = VmError;

    fn try_from(segment: Segment) -> Result<Self, Self::Error> {
        match segment {
            Segment::Constant => Err(VmError::PopConstant),
            other => Ok(PopSegment(other)),
        }
    }
}

impl From<PopSegment> for Segment {
    fn from(segment: PopSegment) -> Self {
        segment.0
    }
}

impl fmt::Display for PopSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_names_are_lowercase() {
        for segment in Segment::ALL {
            let name = segment.to_string();
            assert_eq!(name, format!("{:?}", segment).to_lowercase());
        }
    }

    #[test]
    fn test_segment_from_str() {
        assert_eq!("local".parse::<Segment>().unwrap(), Segment::Local);
        assert_eq!("that".parse::<Segment>().unwrap(), Segment::That);
        assert!(matches!(
            "Local".parse::<Segment>(),
            Err(VmError::UnknownSegment(name)) if name == "Local"
        ));
    }

    #[test]
    fn test_pop_segment_rejects_constant() {
        let err = PopSegment::try_from(Segment::Constant).unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_pop_segment_accepts_the_rest() {
        for segment in Segment::ALL.into_iter().skip(1) {
            let pop = PopSegment::try_from(segment).unwrap();
            assert_eq!(pop.segment(), segment);
            assert_eq!(pop.to_string(), segment.to_string());
        }
    }
}
