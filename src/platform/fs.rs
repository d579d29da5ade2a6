// ShowLog - platform/fs.rs
//
// Filesystem access for captured logs.
// The handle is opened, drained, and closed inside each call so nothing
// stays open while the interactive session runs.

use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every line of a captured log.
///
/// Invalid UTF-8 is replaced rather than rejected: device captures often
/// contain stray control bytes from the terminal session. Line terminators
/// (`\n` and `\r\n`) are removed.
pub fn read_log_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "Log file read");
    Ok(lines)
}

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
