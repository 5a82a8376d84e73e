//! Title-tracking parser state
//!
//! The block grammar infers section nesting from the order in which title
//! adornment characters first appear. That state belongs to the enclosing
//! document; nested parses run with a fresh memo and restore the enclosing
//! one afterwards.

/// Section/title tracking state for one document parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserMemo {
    /// Adornment characters in order of first use; index + 1 is the
    /// section level that adornment introduces.
    pub title_styles: Vec<char>,
    /// Depth of the innermost open section.
    pub section_level: usize,
}

impl ParserMemo {
    /// Level for an adornment character, registering it on first use.
    pub fn level_for(&mut self, adornment: char) -> usize {
        match self.title_styles.iter().position(|&c| c == adornment) {
            Some(index) => index + 1,
            None => {
                self.title_styles.push(adornment);
                self.title_styles.len()
            }
        }
    }
}
