//! Terminal output formatting for the raster CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. Status output
//! goes to stderr; stdout is reserved for machine-readable output.

use std::io::{self, IsTerminal, Write};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const CLEAR_LINE: &str = "\x1b[K";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "   Rendering shapes (800x600, no anti-aliasing)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a success/completion line with a green bold verb.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Report `done` of `total` units of work. On a terminal the line is
    /// redrawn in place until [`Printer::finish_progress`]; otherwise a
    /// status line is printed at every tenth of the total.
    pub fn progress(&self, verb: &str, done: usize, total: usize, unit: &str) {
        if self.color {
            let mut stderr = io::stderr().lock();
            let _ = write!(
                stderr,
                "\r{BOLD}{CYAN}{verb:>VERB_WIDTH$}{RESET} {done}/{total} {unit}{CLEAR_LINE}"
            );
            let _ = stderr.flush();
        } else if is_milestone(done, total) {
            self.print_line(CYAN, verb, &format!("{done}/{total} {unit}"));
        }
    }

    /// Clear a redrawn progress line.
    pub fn finish_progress(&self) {
        if self.color {
            let mut stderr = io::stderr().lock();
            let _ = write!(stderr, "\r{CLEAR_LINE}");
            let _ = stderr.flush();
        }
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `done` falls on a tenth of `total`. The last unit always does.
fn is_milestone(done: usize, total: usize) -> bool {
    let step = (total / 10).max(1);
    done == total || done % step == 0
}

/// Pluralize a count: `plural(1, "scene", "scenes")` → "1 scene".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "scene", "scenes"), "1 scene");
        assert_eq!(plural(0, "scene", "scenes"), "0 scenes");
        assert_eq!(plural(4, "scene", "scenes"), "4 scenes");
    }

    #[test]
    fn test_display_path_absolute() {
        use std::path::Path;
        let p = Path::new("/nonexistent/path/to/out.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/out.png");
    }

    #[test]
    fn test_milestones_every_tenth() {
        let hits: Vec<usize> = (1..=600).filter(|&d| is_milestone(d, 600)).collect();
        assert_eq!(hits, (1..=10).map(|k| k * 60).collect::<Vec<_>>());
    }

    #[test]
    fn test_milestones_small_totals() {
        assert!((1..=3).all(|d| is_milestone(d, 3)));
        let hits: Vec<usize> = (1..=25).filter(|&d| is_milestone(d, 25)).collect();
        assert_eq!(hits.last(), Some(&25));
        assert!(hits.contains(&2) && !hits.contains(&3));
    }

    #[test]
    fn test_plain_dim_has_no_escapes() {
        assert_eq!(Printer::plain().dim("[0, 8]"), "[0, 8]");
    }
}
