use std::{
    cell::RefCell,
    collections::VecDeque,
    io::{self, BufRead, Write},
    rc::Rc,
};

/// The text channel used by the I/O builtins.
pub trait Console {
    /// Writes `text` as-is, without adding a newline.
    fn write(&mut self, text: &str);

    /// Reads one line without its line terminator.
    ///
    /// Returns `None` once the input is exhausted.
    fn read_line(&mut self) -> Option<String>;
}

/// A console on the process's standard output and standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
            log::warn!("failed to write to stdout: {e}");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(strip_terminator(line)),
            Err(e) => {
                log::warn!("failed to read from stdin: {e}");
                None
            },
        }
    }
}

/// An in-memory console.
///
/// Input is served from a fixed list of lines. Output is appended to a
/// shared buffer that stays readable after the console has been handed to an
/// [`Evaluator`](super::core::Evaluator).
///
/// # Example
/// ```
/// use monkey::interpreter::evaluator::console::{BufferConsole, Console};
///
/// let mut console = BufferConsole::new(["first"]);
/// let output = console.output();
///
/// console.write("hello");
/// assert_eq!(console.read_line().as_deref(), Some("first"));
/// assert_eq!(console.read_line(), None);
/// assert_eq!(output.borrow().as_str(), "hello");
/// ```
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    input:  VecDeque<String>,
    output: Rc<RefCell<String>>,
}

impl BufferConsole {
    /// Creates a console that will answer `read_line` with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { input:  lines.into_iter().map(Into::into).collect(),
               output: Rc::default(), }
    }

    /// A handle to everything written so far.
    #[must_use]
    pub fn output(&self) -> Rc<RefCell<String>> {
        Rc::clone(&self.output)
    }
}

impl Console for BufferConsole {
    fn write(&mut self, text: &str) {
        self.output.borrow_mut().push_str(text);
    }

    fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }
}

fn strip_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
