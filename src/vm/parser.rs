use log::trace;

use super::command::Command;
use crate::Result;

/// Strips a trailing `//` comment and surrounding whitespace
fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => line[..pos].trim(),
        None => line.trim(),
    }
}

/// Parses a whole VM source file. Blank lines and comments are skipped;
/// errors report the 1-based line they came from.
pub fn parse_program(source: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();

    for (number, raw) in source.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }

        let command = line.parse::<Command>().map_err(|e| e.at_line(number + 1))?;
        trace!("line {}: {}", number + 1, command);
        commands.push(command);
    }

    Ok(commands)
}
