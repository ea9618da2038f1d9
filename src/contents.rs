//! Parsing of Debian `Contents` index files.
//!
//! Each meaningful line of a Contents file has two columns: the path of an
//! installed file and a comma separated list of the packages shipping it.
//!
//! ```text
//! usr/share/terminfo/b/bterm    debian-installer/bogl-bterm-udeb,debian-installer/rootskel-gtk
//! ```

mod report;

pub use report::{print_summary, summarize, Report, NAME_PADDING};

use std::collections::{hash_map, HashMap};

/// Number of files shipped by each package of a Contents file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PackageStatistics {
    file_counts: HashMap<String, u64>,
}

impl PackageStatistics {
    pub fn new() -> PackageStatistics {
        PackageStatistics::default()
    }

    pub fn len(&self) -> usize {
        self.file_counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_counts.is_empty()
    }

    pub fn get(&self, package_name: &str) -> Option<u64> {
        self.file_counts.get(package_name).copied()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, u64> {
        self.file_counts.iter()
    }

    /// Entries ordered by file count, largest first. Packages with the same
    /// count are ordered by name.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .file_counts
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    fn add_file(&mut self, package_name: &str) {
        match self.file_counts.get_mut(package_name) {
            Some(count) => *count += 1,
            None => {
                self.file_counts.insert(package_name.to_string(), 1);
            }
        }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for PackageStatistics {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        PackageStatistics {
            file_counts: iter
                .into_iter()
                .map(|(name, count)| (name.into(), count))
                .collect(),
        }
    }
}

/// Counts the files of every package listed in `text`.
///
/// Only lines made of exactly two whitespace separated fields are taken into
/// account. Headers, blank lines and paths containing spaces are skipped.
pub fn parse(text: &str) -> PackageStatistics {
    let mut statistics = PackageStatistics::new();

    for line in text.split(is_line_break) {
        let fields: Vec<&str> = line
            .split(is_field_separator)
            .filter(|field| !field.is_empty())
            .collect();
        if let [_path, package_list] = fields[..] {
            for package_name in package_list.split(',') {
                statistics.add_file(package_name);
            }
        }
    }

    statistics
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

// Information separators count as blanks too.
fn is_field_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
