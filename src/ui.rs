//! The user-interaction seam: anything that can show text and read a line.

use std::io::{self, BufRead, Write};

/// Console-style interaction used by the session and resolver.
pub trait UserInterface {
    /// Show `text`, followed by a newline when `newline` is true.
    fn prompt(&mut self, text: &str, newline: bool) -> io::Result<()>;

    /// Read one line of input without the trailing newline.
    fn read_line(&mut self) -> io::Result<String>;

    fn say(&mut self, text: &str) -> io::Result<()> {
        self.prompt(text, true)
    }
}

impl<T: UserInterface + ?Sized> UserInterface for &mut T {
    fn prompt(&mut self, text: &str, newline: bool) -> io::Result<()> {
        (**self).prompt(text, newline)
    }

    fn read_line(&mut self) -> io::Result<String> {
        (**self).read_line()
    }
}

/// Terminal implementation over any reader/writer pair (stdin/stdout in the binary).
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
}

impl ConsoleUi<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleUi<R, W> {
    fn prompt(&mut self, text: &str, newline: bool) -> io::Result<()> {
        if newline {
            writeln!(self.output, "{}", text)
        } else {
            write!(self.output, "{}", text)?;
            self.output.flush()
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        // Non-UTF-8 bytes (e.g. a Latin-1 console) become U+FFFD instead of failing.
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_console_reads_lines_without_newline() {
        let mut ui = ConsoleUi::new(Cursor::new("Oulu\r\n2\n"), Vec::new());
        assert_eq!(ui.read_line().unwrap(), "Oulu");
        assert_eq!(ui.read_line().unwrap(), "2");
    }

    #[test]
    fn test_console_tolerates_invalid_utf8() {
        let mut ui = ConsoleUi::new(Cursor::new(b"J\xe4rvenp\xe4\nOulu\n".to_vec()), Vec::new());
        assert_eq!(ui.read_line().unwrap(), "J\u{FFFD}rvenp\u{FFFD}");
        assert_eq!(ui.read_line().unwrap(), "Oulu");
    }

    #[test]
    fn test_console_eof_is_error() {
        let mut ui = ConsoleUi::new(Cursor::new(""), Vec::new());
        let err = ui.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_console_prompt_newline_flag() {
        let mut ui = ConsoleUi::new(Cursor::new(""), Vec::new());
        ui.prompt("a: ", false).unwrap();
        ui.say("b").unwrap();
        assert_eq!(String::from_utf8(ui.into_output()).unwrap(), "a: b\n");
    }
}
