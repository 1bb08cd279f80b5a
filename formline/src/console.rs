//! Console seam between the form model and the host terminal.

use std::io;

/// One prompt/response exchange with the user.
///
/// The form core never touches stdin/stdout directly; the application
/// supplies a real console and tests supply a scripted one.
pub trait Console {
    /// Print `text` as a prompt and read one raw line of input.
    fn prompt(&mut self, text: &str) -> io::Result<String>;
}
