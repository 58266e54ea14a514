//! Fixed-layout terminal dashboard drawn with cursor-control sequences.

use std::io::{self, Write};

use crossterm::{cursor, queue, terminal};

use crate::indicators::Snapshot;
use crate::signals::SignalReport;

/// Lines in the fixed block above the advisory message: six metric
/// lines plus the blank separator. The erase arithmetic in
/// [`Dashboard::erase_block`] depends on this staying in sync with
/// [`Dashboard::draw`].
const FIXED_BLOCK_LINES: u16 = 7;

/// Placeholder shown for any absent value.
const PLACEHOLDER: &str = "--";

/// Banner printed once at startup.
const HEADER: &str = "\
▄▄███▄▄·██████╗ ████████╗ ██████╗██████╗  █████╗ ███████╗██╗  ██╗
██╔════╝██╔══██╗╚══██╔══╝██╔════╝██╔══██╗██╔══██╗██╔════╝██║  ██║
███████╗██████╔╝   ██║   ██║     ██║  ██║███████║███████╗███████║
╚════██║██╔══██╗   ██║   ██║     ██║  ██║██╔══██║╚════██║██╔══██║
███████║██████╔╝   ██║   ╚██████╗██████╔╝██║  ██║███████║██║  ██║
╚═▀▀▀══╝╚═════╝    ╚═╝    ╚═════╝╚═════╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝";

/// Terminal dashboard writing to any byte sink.
///
/// Restores cursor visibility and clears the screen on drop, so an
/// interrupted or failed run never leaves the operator's terminal with
/// a hidden cursor.
#[derive(Debug)]
pub struct Dashboard<W: Write> {
    out: W,
    entered: bool,
}

impl<W: Write> Dashboard<W> {
    /// Create a dashboard over the given sink.
    pub fn new(out: W) -> Self {
        Self {
            out,
            entered: false,
        }
    }

    /// Clear the screen, hide the cursor and print the banner.
    pub fn enter(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Hide
        )?;
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out)?;
        self.out.flush()?;

        self.entered = true;
        Ok(())
    }

    /// Print the transient status line shown while the fetchers run.
    pub fn status_fetching(&mut self) -> io::Result<()> {
        writeln!(self.out, "Fetching data...")?;
        self.out.flush()
    }

    /// Replace the status line with the metric block and advisory message.
    pub fn draw(&mut self, snapshot: &Snapshot, report: &SignalReport) -> io::Result<()> {
        self.erase_lines(1)?;

        let (fear_value, fear_label) = match &snapshot.fear_greed {
            Some(fg) => (fg.value.to_string(), fg.classification.as_str()),
            None => (PLACEHOLDER.to_string(), PLACEHOLDER),
        };

        writeln!(self.out, "🔸 BTC Price:       ${}", fmt_value(snapshot.price))?;
        writeln!(self.out, "🔸 BTC ATH:         ${}", fmt_value(snapshot.ath))?;
        writeln!(self.out, "🔸 200-day MA:      ${}", fmt_value(snapshot.ma200))?;
        writeln!(self.out, "🔸 Mayer Multiple:  {}", fmt_value(snapshot.mayer))?;
        writeln!(self.out, "🔸 Fear & Greed:    {fear_value} ({fear_label})")?;
        writeln!(
            self.out,
            "🔸 Fees (sat/vB):   [Fast] {}, [Normal] {}, [Cheap] {}",
            fmt_value(snapshot.fees.fastest),
            fmt_value(snapshot.fees.half_hour),
            fmt_value(snapshot.fees.hour)
        )?;
        writeln!(self.out)?;

        for line in report.lines() {
            writeln!(self.out, "{line}")?;
        }

        self.out.flush()
    }

    /// Erase the metric block and the advisory lines of the last draw.
    pub fn erase_block(&mut self, report_line_count: usize) -> io::Result<()> {
        self.erase_lines(report_line_count as u16 + FIXED_BLOCK_LINES)?;
        self.out.flush()
    }

    /// Show the cursor again and clear the screen.
    pub fn exit(&mut self) -> io::Result<()> {
        self.restore()?;
        self.entered = false;
        Ok(())
    }

    fn erase_lines(&mut self, n: u16) -> io::Result<()> {
        for _ in 0..n {
            queue!(
                self.out,
                cursor::MoveToPreviousLine(1),
                terminal::Clear(terminal::ClearType::CurrentLine)
            )?;
        }
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            cursor::Show
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Dashboard<W> {
    fn drop(&mut self) {
        if self.entered {
            let _ = self.restore();
        }
    }
}

/// Numeric display helper, `--` when absent.
fn fmt_value(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
