use std::fs;
use std::io;
use std::path::Path;

/// Outcome of reading the provisioning file. `Unreadable` carries the IO
/// error for logging; callers never propagate it, the build must go on.
#[derive(Debug)]
pub enum FileScan {
    Absent,
    Lines(Vec<String>),
    Unreadable(io::Error),
}

/// Reads the provisioning file and reduces it to its useful lines. A missing
/// file is a normal state, not an error.
pub fn scan_env_file(path: &Path) -> FileScan {
    match fs::read_to_string(path) {
        Ok(raw) => FileScan::Lines(useful_lines(&raw)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => FileScan::Absent,
        Err(err) => FileScan::Unreadable(err),
    }
}

/// Trimmed, non-blank lines in file order. A line whose first non-whitespace
/// character is `#` is a comment and is dropped whole; `#` anywhere else is
/// ordinary value text.
fn useful_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
