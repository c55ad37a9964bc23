use std::io::{self, BufRead};

/// Read one line and trim surrounding whitespace.
///
/// Returns `Ok(None)` once the reader is exhausted. Bytes that are not
/// valid UTF-8 are replaced rather than rejected.
pub fn read_trimmed_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}
