use std::fmt;

/// One displayed character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub ch: char,
    /// Random glyph standing in for a character that has not settled
    pub scrambling: bool,
}

impl FrameCell {
    pub fn settled(ch: char) -> Self {
        Self { ch, scrambling: false }
    }

    pub fn scrambling(ch: char) -> Self {
        Self { ch, scrambling: true }
    }
}

/// Output of one animation frame; also the animator's display buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrambleFrame {
    cells: Vec<FrameCell>,
}

impl ScrambleFrame {
    /// Frame showing `text` with nothing scrambling
    pub fn plain(text: &str) -> Self {
        Self {
            cells: text.chars().map(FrameCell::settled).collect(),
        }
    }

    pub fn cells(&self) -> &[FrameCell] {
        &self.cells
    }

    /// Plain text, scramble glyphs included
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|c| c.ch)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn scrambling_count(&self) -> usize {
        self.cells.iter().filter(|c| c.scrambling).count()
    }

    /// Group consecutive cells by scramble flag, for styled rendering
    pub fn runs(&self) -> Vec<(String, bool)> {
        let mut runs: Vec<(String, bool)> = Vec::new();
        for cell in &self.cells {
            match runs.last_mut() {
                Some((text, scrambling)) if *scrambling == cell.scrambling => text.push(cell.ch),
                _ => runs.push((cell.ch.to_string(), cell.scrambling)),
            }
        }
        runs
    }
}

impl From<Vec<FrameCell>> for ScrambleFrame {
    fn from(cells: Vec<FrameCell>) -> Self {
        Self { cells }
    }
}

impl fmt::Display for ScrambleFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.cells {
            write!(f, "{}", c.ch)?;
        }
        Ok(())
    }
}
