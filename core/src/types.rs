use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Opaque identifier handed out by the trivia source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stable identity of a clue on the board: `(category column, clue row)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CluePos {
    pub category: usize,
    pub clue: usize,
}

impl CluePos {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

/// What a clue currently displays. Only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    /// Creates a hidden clue. Text is stored as given, callers sanitize first.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: RevealState) {
        self.state = state;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Full dataset for one game: the sampled categories and their clues.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of clue rows, taken from the first category.
    pub fn clue_rows(&self) -> usize {
        self.categories.first().map_or(0, |cat| cat.clues.len())
    }

    pub fn clue_at(&self, pos: CluePos) -> Option<&Clue> {
        self.categories.get(pos.category)?.clues.get(pos.clue)
    }

    pub(crate) fn clue_at_mut(&mut self, pos: CluePos) -> Option<&mut Clue> {
        self.categories.get_mut(pos.category)?.clues.get_mut(pos.clue)
    }

    pub fn iter_clues(&self) -> impl Iterator<Item = (CluePos, &Clue)> {
        self.categories.iter().enumerate().flat_map(|(x, cat)| {
            cat.clues
                .iter()
                .enumerate()
                .map(move |(y, clue)| (CluePos::new(x, y), clue))
        })
    }

    pub fn revealed_count(&self) -> usize {
        self.iter_clues()
            .filter(|(_, clue)| clue.state() != RevealState::Hidden)
            .count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        !self.is_empty() && self.iter_clues().all(|(_, clue)| clue.state().is_terminal())
    }
}
