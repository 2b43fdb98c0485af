//! Terminal output for filescope
//!
//! Consistent, styled messages for the CLI. Data output (file lists, JSON)
//! goes to stdout; warnings and errors go to stderr so they never mix with
//! piped results.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green(), message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a section header
    pub fn section_header(&self, title: &str, count: usize) {
        if !self.quiet {
            println!(
                "{} {}",
                style(title).bold().cyan(),
                style(format!("({})", count)).dim()
            );
        }
    }

    /// Print a file path; shown even in quiet mode since it is the result
    pub fn file(&self, path: &str) {
        println!("{}", path);
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            let styled_value = if highlight {
                style(value).green().bold()
            } else {
                style(value).white()
            };
            println!("  {:<20} {}", style(key).dim(), styled_value);
        }
    }

    /// Print raw structured output (JSON)
    pub fn raw(&self, content: &str) {
        println!("{}", content);
    }
}
