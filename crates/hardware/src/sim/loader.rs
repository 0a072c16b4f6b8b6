//! Program Loader.
//!
//! This module turns LS-8 program images into bytes. It performs:
//! 1. **Reading:** Loads the image text from disk.
//! 2. **Parsing:** One byte per line, written as a base-2 literal. Everything from
//!    the first `#` on a line is a comment; lines that are empty after stripping
//!    comments and whitespace are skipped.
//!
//! Parsing is all-or-nothing: the first malformed line fails the whole image,
//! so a partially parsed program can never reach memory.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::LoadError;

/// Marker that starts a comment.
const COMMENT_MARKER: char = '#';

/// Optional prefix accepted in front of a binary literal.
const BINARY_PREFIX: &str = "0b";

/// Parses a program image.
///
/// # Arguments
///
/// * `source` - The image text.
///
/// # Returns
///
/// The program bytes in order, or the first malformed line.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let image = "\
/// ## print 8
/// 10000010 # LDI R0,8
/// 00000000
/// 00001000
///
/// 01000111 # PRN R0
/// 00000000
/// 00000001 # HLT
/// ";
/// assert_eq!(parse_program(image).unwrap(), vec![0x82, 0, 8, 0x47, 0, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let code = line
            .split(COMMENT_MARKER)
            .next()
            .unwrap_or_default()
            .trim();
        if code.is_empty() {
            continue;
        }
        let digits = code.strip_prefix(BINARY_PREFIX).unwrap_or(code);
        let byte = u8::from_str_radix(digits, 2).map_err(|_| LoadError::InvalidLiteral {
            line: idx + 1,
            text: code.to_string(),
        })?;
        program.push(byte);
    }
    Ok(program)
}

/// Reads and parses a program image file.
///
/// # Arguments
///
/// * `path` - Path to the image.
///
/// # Returns
///
/// The program bytes, or an I/O or parse error.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let program = parse_program(&source)?;
    debug!(path = %path.display(), bytes = program.len(), "program image parsed");
    Ok(program)
}
