use std::io::{self, Write};
use std::time::Duration;

use overlap_check::searcher::{Comparison, ExtractionFailure};
use overlap_check::Sensitivity;

/// Human-readable rendering of a run.
pub struct Report<W> {
    out: W,
}

impl<W> Report<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn start(&mut self, num_files: usize, sensitivity: Sensitivity) -> io::Result<()> {
        writeln!(
            self.out,
            "Initializing program on {num_files} files... (sensitivity: {sensitivity})\n"
        )?;
        writeln!(self.out, "Gathering data on files...")
    }

    pub fn no_files(&mut self) -> io::Result<()> {
        writeln!(self.out, "No .txt files found.")
    }

    pub fn skipped(&mut self, failures: &[ExtractionFailure]) -> io::Result<()> {
        for failure in failures {
            writeln!(self.out, "Skipped {}: {}", failure.id(), failure.error)?;
        }
        Ok(())
    }

    pub fn comparison(&mut self, comparison: &Comparison) -> io::Result<()> {
        writeln!(self.out, "Scanning files...\n")?;
        for r in comparison.results() {
            writeln!(
                self.out,
                "Compare: {} to {} Count: {}",
                r.left, r.right, r.shared
            )?;
        }
        Ok(())
    }

    pub fn finish(&mut self, num_flagged: usize, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "\n{num_flagged} possible acts of plagiarism detected."
        )?;
        writeln!(self.out, "Execution Time: {} seconds", elapsed.as_secs_f64())?;
        self.out.flush()
    }
}
