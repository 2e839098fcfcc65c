use std::{fmt::Display, io::BufRead};

use common::sink::{write_line, write_text, Sink};

use crate::AppError;

/// Line oriented prompt over any reader, echoing to the shared sink.
pub(crate) struct Console<R> {
    input: R,
    out: Sink,
}

impl<R: BufRead> Console<R> {
    pub fn new(input: R, out: Sink) -> Self {
        Console { input, out }
    }

    pub fn out(&self) -> &Sink {
        &self.out
    }

    pub fn say(&self, line: impl Display) -> Result<(), AppError> {
        write_line(&self.out, &line.to_string()).map_err(|e| AppError::Output(e.to_string()))
    }

    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, AppError> {
        write_text(&self.out, question).map_err(|e| AppError::Output(e.to_string()))?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io::Cursor, rc::Rc};

    use common::sink::Sink;

    use crate::AppError;

    use super::Console;

    #[test]
    fn test_ask() {
        // Given
        let buffer = Rc::new(RefCell::new(Vec::new()));
        let sink: Sink = buffer.clone();
        let mut console = Console::new(Cursor::new("  Billboard \n"), sink);

        // When
        let first = console.ask("Name: ").unwrap();
        let second = console.ask("Name: ").unwrap();

        // Then
        assert_eq!(Some("Billboard".to_string()), first);
        assert_eq!(None, second, "Should report the end of input");
        assert_eq!(b"Name: Name: ".to_vec(), *buffer.borrow());
    }

    #[test]
    fn test_say_with_busy_sink() {
        // Given
        let buffer = Rc::new(RefCell::new(Vec::new()));
        let sink: Sink = buffer.clone();
        let mut console = Console::new(Cursor::new("answer\n"), sink);
        let _guard = buffer.borrow_mut();

        // When
        let said = console.say("hello");
        let asked = console.ask("Name: ");

        // Then
        assert!(
            matches!(said, Err(AppError::Output(_))),
            "Should report a busy sink instead of panicking"
        );
        assert!(matches!(asked, Err(AppError::Output(_))));
    }
}
