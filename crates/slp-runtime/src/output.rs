//! Output writers for `print` statements
//!
//! The interpreter writes print lines through a shared writer handle so the
//! host can redirect them (tests and embedders capture into a buffer).

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Shared writer handle
pub type OutputWriter = Rc<RefCell<dyn Write>>;

/// Captured output bytes
pub type CaptureBuffer = Rc<RefCell<Vec<u8>>>;

/// Writer for the process's standard output
pub fn stdout_writer() -> OutputWriter {
    Rc::new(RefCell::new(io::stdout()))
}

/// Writer that appends into an in-memory buffer
///
/// Returns the writer and the buffer it fills.
pub fn capture_writer() -> (OutputWriter, CaptureBuffer) {
    let buffer: CaptureBuffer = Rc::new(RefCell::new(Vec::new()));
    let writer: OutputWriter = buffer.clone();
    (writer, buffer)
}

/// Captured output as text
pub fn captured_text(buffer: &CaptureBuffer) -> String {
    String::from_utf8_lossy(&buffer.borrow()).into_owned()
}
