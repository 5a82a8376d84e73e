//! Line preparation
//!
//! Embedded fragments arrive as raw strings; before block parsing they are
//! dedented and every line is tagged with the virtual source name so
//! diagnostics can point back into the fragment.

/// Virtual source name for lines of an embedded fragment.
pub const VIRTUAL_SOURCE: &str = "<docbridge>";

/// One line of an embedded fragment, tagged with its virtual origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine {
    pub text: String,
    pub source: &'static str,
    /// 1-based line number within the fragment.
    pub line: usize,
}

impl TaggedLine {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn indent(&self) -> usize {
        self.text.len() - self.text.trim_start_matches(' ').len()
    }
}

/// Strip the longest common leading whitespace from all non-blank lines.
pub fn dedent(text: &str) -> String {
    let common = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(text.len());
    for (index, line) in text.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        if line.trim().is_empty() {
            // Blank lines stay blank rather than keeping stray indentation.
            continue;
        }
        out.push_str(&line[common..]);
    }
    out
}

/// Split a fragment into tagged lines.
pub fn tag_lines(text: &str) -> Vec<TaggedLine> {
    text.lines()
        .enumerate()
        .map(|(index, line)| TaggedLine {
            text: line.to_string(),
            source: VIRTUAL_SOURCE,
            line: index + 1,
        })
        .collect()
}
