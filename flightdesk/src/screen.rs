//! Terminal collaborators: screen clearing and the stdin-backed console.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use formline::Console;

/// Clear the terminal and home the cursor.
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
}

/// Console backed by real stdin/stdout, one line per prompt.
pub struct StdinConsole;

impl Console for StdinConsole {
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}
