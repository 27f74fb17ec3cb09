//! Terminal rendering of pipeline events.
//!
//! Each event is printed as a coloured `[SEVERITY]` line; the synthesized
//! command gets its own highlighted block. Colour is only used when the
//! stream is a terminal.

use std::io::{IsTerminal, Write};

use drun_runtime::event::{EventSink, PipelineEvent, Severity};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
pub(crate) const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";
pub(crate) const RESET: &str = "\x1b[0m";

/// ANSI styling, or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette that emits ANSI escapes.
    pub const COLOR: Self = Self { enabled: true };
    /// Palette that emits nothing.
    pub const PLAIN: Self = Self { enabled: false };

    /// Colour when stdout is a terminal.
    pub fn detect() -> Self {
        Self {
            enabled: std::io::stdout().is_terminal(),
        }
    }

    /// Returns the escape code when enabled.
    pub const fn paint(self, code: &'static str) -> &'static str {
        if self.enabled { code } else { "" }
    }

    fn severity(self, severity: Severity) -> &'static str {
        self.paint(match severity {
            Severity::Info => BLUE,
            Severity::Success => GREEN,
            Severity::Warning => YELLOW,
            Severity::Error => RED,
        })
    }
}

/// Renders one event as the text printed for the operator.
pub fn render(event: &PipelineEvent, program: &str, palette: Palette) -> String {
    let reset = palette.paint(RESET);
    if let PipelineEvent::CommandReady { command } = event {
        let (cyan, bold) = (palette.paint(CYAN), palette.paint(BOLD));
        return format!(
            "{cyan}Generated command:{reset}\n{bold}{}{reset}\n",
            command.to_shell_line(program)
        );
    }
    let severity = event.severity();
    format!("{}[{severity}]{reset} {event}", palette.severity(severity))
}

/// Event sink that prints to the terminal.
///
/// Errors go to stderr, everything else to stdout.
#[derive(Debug, Clone)]
pub struct TerminalSink {
    program: String,
    palette: Palette,
}

impl TerminalSink {
    /// Creates a sink that renders commands for the given container CLI.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            palette: Palette::detect(),
        }
    }
}

impl EventSink for TerminalSink {
    fn emit(&self, event: &PipelineEvent) {
        let line = render(event, &self.program, self.palette);
        // Best-effort: a closed stdout must not abort the pipeline.
        let _ = if event.severity() == Severity::Error {
            writeln!(std::io::stderr().lock(), "{line}")
        } else {
            writeln!(std::io::stdout().lock(), "{line}")
        };
    }
}

/// Tells the operator that the dry run left the container alone.
pub fn print_dry_run_notice() {
    let palette = Palette::detect();
    let (dim, reset) = (palette.paint(DIM), palette.paint(RESET));
    let _ = writeln!(
        std::io::stdout().lock(),
        "{dim}Dry run: the container was not stopped, removed or recreated.{reset}"
    );
}
