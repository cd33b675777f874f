//! Program Loader.
//!
//! This module turns LS-8 program text into a memory image. It performs:
//! 1. **Parsing:** One instruction byte per line, written in base 2, with `#` comments.
//! 2. **Leniency:** Lines without a base-2 literal (blank lines, comment-only
//!    lines, headers) are skipped without error. A literal wider than 8 bits
//!    is truncated to its low byte with a warning.
//! 3. **File loading:** Reads a program file and places it in CPU memory at address 0.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::common::error::LoadError;
use crate::core::Cpu;

/// Parses one source line into an instruction byte.
///
/// Everything from the first `#` on is a comment. The rest is trimmed and
/// must be a base-2 literal, optionally prefixed `0b`, with `_` allowed
/// between digits. A literal wider than 8 bits keeps its low byte so that
/// every line holding a literal still occupies exactly one address.
///
/// # Returns
///
/// `Some(byte)` for an instruction line, `None` for anything else.
pub fn parse_line(line: &str) -> Option<u8> {
    binary_digits(line).and_then(|digits| low_byte(&digits))
}

/// Parses program text into a dense byte image.
///
/// Bytes are assigned consecutive addresses starting at 0 in the order their
/// lines appear.
pub fn parse_program(source: &str) -> Vec<u8> {
    source
        .lines()
        .enumerate()
        .filter_map(|(lineno, line)| {
            let Some(digits) = binary_digits(line) else {
                if !line.trim().is_empty() {
                    tracing::debug!(line = lineno + 1, text = line, "skipping line");
                }
                return None;
            };
            if digits.trim_start_matches('0').len() > u8::BITS as usize {
                tracing::warn!(
                    line = lineno + 1,
                    text = line,
                    "value wider than 8 bits, keeping the low byte"
                );
            }
            low_byte(&digits)
        })
        .collect()
}

/// Base-2 digits of the literal on `line`, separators removed.
fn binary_digits(line: &str) -> Option<String> {
    let code = line.split('#').next().unwrap_or_default().trim();
    let literal = code.strip_prefix("0b").unwrap_or(code);
    if literal.is_empty()
        || literal.starts_with('_')
        || literal.ends_with('_')
        || literal.contains("__")
    {
        return None;
    }
    let digits: String = literal.chars().filter(|&c| c != '_').collect();
    digits
        .chars()
        .all(|c| c == '0' || c == '1')
        .then_some(digits)
}

/// Value of the last eight digits.
fn low_byte(digits: &str) -> Option<u8> {
    let start = digits.len().saturating_sub(u8::BITS as usize);
    u8::from_str_radix(&digits[start..], 2).ok()
}

/// Reads a program file and parses it into a byte image.
///
/// # Arguments
///
/// * `path` - Path to the `.ls8` program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read.
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source);
    tracing::debug!(path = %path.display(), bytes = image.len(), "parsed program file");
    Ok(image)
}

/// Reads a program file and loads it into `cpu` memory at address 0.
///
/// # Returns
///
/// The number of bytes loaded.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Cpu`] if the program does not fit in memory.
pub fn load_file_into<W: Write>(
    cpu: &mut Cpu<W>,
    path: impl AsRef<Path>,
) -> Result<usize, LoadError> {
    let image = load_program_file(path)?;
    cpu.load_program(&image)?;
    Ok(image.len())
}
