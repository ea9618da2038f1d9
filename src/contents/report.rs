use super::PackageStatistics;
use crate::errors::{ErrorKind, Result};

use std::fmt;
use std::io::{self, Write};

/// Columns added after the longest displayed package name.
pub const NAME_PADDING: usize = 10;

const NAME_HEADER: &str = "package name";
const COUNT_HEADER: &str = "number of files";

/// Top packages of a Contents file, ready to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<(String, u64)>,
    total: usize,
    width: usize,
}

impl Report {
    /// Selects the `top_n` packages with the most files.
    ///
    /// Asking for at least as many packages as there are selects all of them,
    /// and the rendered report then starts with a notice line.
    pub fn new(statistics: &PackageStatistics, top_n: i64) -> Result<Report> {
        if top_n <= 0 {
            return Err(ErrorKind::InvalidArgument(top_n).into());
        }

        let mut ranked = statistics.ranked();
        let total = ranked.len();
        ranked.truncate(usize::try_from(top_n).unwrap_or(usize::MAX));

        let width = ranked
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0)
            + NAME_PADDING;

        Ok(Report {
            entries: ranked
                .into_iter()
                .map(|(name, count)| (name.to_string(), count))
                .collect(),
            total,
            width,
        })
    }

    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shows_all(&self) -> bool {
        self.entries.len() == self.total
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.to_string().as_bytes())?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.shows_all() {
            writeln!(f, "Displaying all {} packages.", self.total)?;
        }
        writeln!(f, "{:<width$}{}", NAME_HEADER, COUNT_HEADER, width = self.width)?;
        for (name, count) in &self.entries {
            writeln!(f, "{:<width$}{}", name, count, width = self.width)?;
        }
        Ok(())
    }
}

/// Writes the `top_n` packages with the most files to `out`.
///
/// Nothing is written when `top_n` is not positive.
pub fn summarize<W: Write>(statistics: &PackageStatistics, top_n: i64, out: &mut W) -> Result<()> {
    let report = Report::new(statistics, top_n)?;
    report.write_to(out)?;
    Ok(())
}

pub fn print_summary(statistics: &PackageStatistics, top_n: i64) -> Result<()> {
    let stdout = io::stdout();
    summarize(statistics, top_n, &mut stdout.lock())
}
