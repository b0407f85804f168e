//! Terminal output with optional capture for tests.

use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;

type Buffer = Arc<Mutex<Vec<u8>>>;

/// Destination of one output stream.
#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Stderr,
    Captured(Buffer),
}

impl Sink {
    fn write_line(&self, args: fmt::Arguments<'_>) {
        // Output is best effort; a closed pipe must not abort a dump.
        let _ = match self {
            Self::Stdout => writeln!(io::stdout().lock(), "{args}"),
            Self::Stderr => writeln!(io::stderr().lock(), "{args}"),
            Self::Captured(buf) => writeln!(
                buf.lock().unwrap_or_else(PoisonError::into_inner),
                "{args}"
            ),
        };
    }
}

fn read_buffer(buf: &Buffer) -> String {
    String::from_utf8_lossy(&buf.lock().unwrap_or_else(PoisonError::into_inner)).into_owned()
}

/// Handle on the output captured by [`IOStreams::test_with_output`].
#[derive(Debug, Clone)]
pub struct TestOutput {
    out: Buffer,
    err: Buffer,
}

impl TestOutput {
    /// Everything written to stdout so far.
    pub fn stdout(&self) -> String {
        read_buffer(&self.out)
    }

    /// Everything written to stderr so far.
    pub fn stderr(&self) -> String {
        read_buffer(&self.err)
    }
}

/// Stdout and stderr for user-facing messages.
///
/// Commands write through the `ios_*` macros rather than `println!` so that
/// tests can capture what the user would see.
#[derive(Debug, Clone)]
pub struct IOStreams {
    out: Sink,
    err: Sink,
    color: bool,
}

impl IOStreams {
    /// Streams bound to the process terminal.
    ///
    /// Color is used only when stdout is a color-capable terminal and
    /// `NO_COLOR` is unset.
    pub fn system() -> Self {
        let color = std::env::var_os("NO_COLOR").is_none()
            && io::stdout().is_terminal()
            && Term::stdout().features().colors_supported();
        Self {
            out: Sink::Stdout,
            err: Sink::Stderr,
            color,
        }
    }

    /// Uncolored streams writing into in-memory buffers.
    pub fn test_with_output() -> (Self, TestOutput) {
        let out = Buffer::default();
        let err = Buffer::default();
        let ios = Self {
            out: Sink::Captured(Arc::clone(&out)),
            err: Sink::Captured(Arc::clone(&err)),
            color: false,
        };
        (ios, TestOutput { out, err })
    }

    /// Turn colored output on or off.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write one line to stdout.
    pub fn out_line(&self, args: fmt::Arguments<'_>) {
        self.out.write_line(args);
    }

    /// Write one line to stderr.
    pub fn err_line(&self, args: fmt::Arguments<'_>) {
        self.err.write_line(args);
    }

    /// Styling that matches the color setting of these streams.
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme {
            enabled: self.color,
        }
    }
}

/// Message styling: green success, yellow notices, red errors, blue names.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    enabled: bool,
}

impl ColorScheme {
    fn paint(self, text: &str, style: console::Style) -> String {
        if self.enabled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Green text.
    pub fn success(self, text: &str) -> String {
        self.paint(text, console::Style::new().green())
    }

    /// Yellow text.
    pub fn warning(self, text: &str) -> String {
        self.paint(text, console::Style::new().yellow())
    }

    /// Red text.
    pub fn error(self, text: &str) -> String {
        self.paint(text, console::Style::new().red())
    }

    /// Blue text, used for repository names.
    pub fn blue(self, text: &str) -> String {
        self.paint(text, console::Style::new().blue())
    }

    /// Green check mark.
    pub fn success_icon(self) -> String {
        self.success("✓")
    }

    /// Yellow info sign.
    pub fn info_icon(self) -> String {
        self.warning("ℹ")
    }

    /// Red cross.
    pub fn error_icon(self) -> String {
        self.error("X")
    }
}

/// `println!` onto the stdout of an [`IOStreams`].
#[macro_export]
macro_rules! ios_println {
    ($ios:expr) => {
        $ios.out_line(format_args!(""))
    };
    ($ios:expr, $($arg:tt)*) => {
        $ios.out_line(format_args!($($arg)*))
    };
}

/// `eprintln!` onto the stderr of an [`IOStreams`].
#[macro_export]
macro_rules! ios_eprintln {
    ($ios:expr) => {
        $ios.err_line(format_args!(""))
    };
    ($ios:expr, $($arg:tt)*) => {
        $ios.err_line(format_args!($($arg)*))
    };
}
