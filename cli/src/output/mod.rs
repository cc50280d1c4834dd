//! Output formatting module

pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool) -> Self {
        let use_colors =
            !no_color && Term::stdout().is_term() && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles }
    }

    /// Print a success message prefixed with `✓`.
    pub fn success(&self, msg: &str) {
        println!("  {} {msg}", "✓".style(self.styles.success));
    }

    /// Print a warning message prefixed with `⚠`.
    pub fn warn(&self, msg: &str) {
        println!("  {} {msg}", "⚠".style(self.styles.warning));
    }

    /// Print an error message to stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {msg}", "Error:".style(self.styles.error));
    }

    /// Print a raw admin record, unstyled, so it stays machine-readable.
    pub fn record(&self, record: &str) {
        println!("{record}");
    }
}
