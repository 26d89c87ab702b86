//! Plain text patterns: one character per cell.

use super::PatternDefinition;

impl PatternDefinition {
    /// Parses a pattern drawn as text, one line per row.
    ///
    /// * **Living** cells are represented by `*` or `O`;
    /// * Any other character is a **dead** cell;
    /// * Lines starting with `!` or `#` are comments.
    ///
    /// Short lines are padded with dead cells to the longest line.
    /// Input without any row gives an empty pattern.
    pub fn from_plaintext<S: Into<String>>(name: S, text: &str) -> Self {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches(&['\r', ' ', '\t'][..]))
            .filter(|line| !line.starts_with('!') && !line.starts_with('#'))
            .collect();
        // Blank lines at the end are not rows.
        let height = rows
            .iter()
            .rposition(|line| !line.is_empty())
            .map_or(0, |i| i + 1);
        let rows = &rows[..height];
        let width = rows.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(width * height);
        for line in rows {
            let start = cells.len();
            cells.extend(line.chars().map(|c| c == '*' || c == 'O'));
            cells.resize(start + width, false);
        }
        PatternDefinition::new(name, width, cells)
    }
}
