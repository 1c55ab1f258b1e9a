use rand::Rng;

/// Where a transition is at a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// Still showing the old character
    Pending,
    /// Cycling random glyphs
    Scrambling,
    /// Frozen on the new character
    Settled,
}

/// Progress of one character position from old text to new text
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterTransition {
    /// Old character, `None` past the end of the old text
    pub from: Option<char>,
    /// New character, `None` past the end of the new text
    pub to: Option<char>,
    /// First frame that shows a scramble glyph
    pub reveal_start: u32,
    /// First frame that shows `to`
    pub reveal_end: u32,
    /// Glyph shown on the last scrambling frame
    pub(crate) glyph: Option<char>,
}

impl CharacterTransition {
    /// Build a transition with randomized reveal window.
    ///
    /// `reveal_start` is drawn from `[0, max_start)` and the scramble length
    /// from `[0, max_scramble)`; both bounds must be non-zero.
    pub fn random<R: Rng + ?Sized>(
        from: Option<char>,
        to: Option<char>,
        max_start: u32,
        max_scramble: u32,
        rng: &mut R,
    ) -> Self {
        let reveal_start = rng.gen_range(0..max_start);
        let reveal_end = reveal_start.saturating_add(rng.gen_range(0..max_scramble));
        Self {
            from,
            to,
            reveal_start,
            reveal_end,
            glyph: None,
        }
    }

    #[inline]
    pub fn state_at(&self, frame: u32) -> TransitionState {
        if frame >= self.reveal_end {
            TransitionState::Settled
        } else if frame >= self.reveal_start {
            TransitionState::Scrambling
        } else {
            TransitionState::Pending
        }
    }

    /// Glyph currently assigned, if scrambling has started
    pub fn glyph(&self) -> Option<char> {
        self.glyph
    }
}

/// Non-empty alphabet of scramble glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    glyphs: Vec<char>,
}

impl GlyphSet {
    /// Returns `None` for an empty alphabet
    pub fn new(glyphs: &str) -> Option<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            None
        } else {
            Some(Self { glyphs })
        }
    }

    /// Uniformly random glyph
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.glyphs[rng.gen_range(0..self.glyphs.len())]
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
