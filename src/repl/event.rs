use std::io::{self, BufRead};

/// Line-level input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplEvent {
    /// One line, with its `\n` or `\r\n` terminator removed.
    Line(String),
    /// The input stream is closed.
    Eof,
}

/// Block until a full line (or EOF) arrives.
///
/// Invalid UTF-8 is replaced rather than reported, so the line still
/// reaches the validators and gets rejected there.
pub fn read_event(input: &mut impl BufRead) -> io::Result<ReplEvent> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(ReplEvent::Eof);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    let line = String::from_utf8_lossy(&buf).into_owned();
    log::debug!("Read line: {:?}", line);
    Ok(ReplEvent::Line(line))
}
