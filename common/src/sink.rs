use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// Shared writer the observers print their reactions to.
pub type Sink = Rc<RefCell<dyn Write>>;

pub fn stdout() -> Sink {
    Rc::new(RefCell::new(io::stdout()))
}

/// Writes and flushes `text` as is, failing instead of panicking when the sink is already borrowed.
pub fn write_text(sink: &Sink, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = sink.try_borrow_mut()?;
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn write_line(sink: &Sink, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    write_text(sink, &format!("{line}\n"))
}
