use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

use crate::myers::Edit;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
            }
        }
    }
}

/// Writes diff entries as `+line`, `-line` and ` line`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    /// Resolves `choice` once, up front.
    pub fn new(choice: ColorChoice) -> Self {
        Renderer {
            color: choice.enabled(),
        }
    }

    /// Writes a single entry followed by a newline.
    pub fn write_entry<W: Write, T: Display>(&self, w: &mut W, edit: &Edit<T>) -> io::Result<()> {
        if !self.color {
            return writeln!(w, "{edit}");
        }
        match edit {
            Edit::Insert(_) => writeln!(w, "{}", edit.green()),
            Edit::Delete(_) => writeln!(w, "{}", edit.red()),
            Edit::Match(_) => writeln!(w, "{}", edit.default_color()),
        }
    }

    /// Writes every entry, one line each.
    pub fn write_diff<W: Write, T: Display>(&self, w: &mut W, diff: &[Edit<T>]) -> io::Result<()> {
        for edit in diff {
            self.write_entry(w, edit)?;
        }
        Ok(())
    }
}
