//! In-memory trivia source and scripted samplers shared by the unit tests.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::*;

pub(crate) struct AlwaysFirst;

impl Sampler for AlwaysFirst {
    fn index_below(&mut self, _bound: usize) -> usize {
        0
    }
}

pub(crate) struct AlwaysLast;

impl Sampler for AlwaysLast {
    fn index_below(&mut self, bound: usize) -> usize {
        bound - 1
    }
}

/// Replays a fixed sequence of draws, then keeps returning zero.
pub(crate) struct Scripted {
    draws: Vec<usize>,
    next: usize,
}

impl Scripted {
    pub(crate) fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }
}

impl Sampler for Scripted {
    fn index_below(&mut self, _bound: usize) -> usize {
        let draw = self.draws.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        draw
    }
}

const MATH_CLUES: [(&str, &str); 5] = [
    ("2+2", "4"),
    ("1+1", "2"),
    ("3+3", "6"),
    ("2*5", "10"),
    ("9-3", "6"),
];

pub(crate) struct MockSource {
    listing: Vec<CategorySummary>,
    details: BTreeMap<CategoryId, CategoryDetails>,
    fail_listing: bool,
    failing: BTreeSet<CategoryId>,
    list_calls: Cell<usize>,
    fetch_calls: Cell<usize>,
    listed_with: Cell<Option<usize>>,
}

impl MockSource {
    /// Categories `1..=100`; category 1 is "Math" with five arithmetic clues.
    pub(crate) fn classic() -> Self {
        let mut source = Self::with_categories(100);
        let math = source.details.get_mut(&CategoryId(1)).unwrap();
        math.title = "Math".into();
        math.clues = MATH_CLUES
            .iter()
            .map(|&(question, answer)| RawClue {
                question: question.into(),
                answer: answer.into(),
            })
            .collect();
        source.listing[0].title = "Math".into();
        source
    }

    pub(crate) fn with_categories(count: u64) -> Self {
        let ids: Vec<u64> = (1..=count).collect();
        Self::from_listing(&ids)
    }

    pub(crate) fn from_listing(ids: &[u64]) -> Self {
        let listing = ids
            .iter()
            .map(|&id| CategorySummary {
                id: CategoryId(id),
                title: format!("category {}", id),
            })
            .collect();
        let details = ids
            .iter()
            .map(|&id| (CategoryId(id), generated_details(CategoryId(id), 5)))
            .collect();
        Self {
            listing,
            details,
            fail_listing: false,
            failing: BTreeSet::new(),
            list_calls: Cell::new(0),
            fetch_calls: Cell::new(0),
            listed_with: Cell::new(None),
        }
    }

    pub(crate) fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    pub(crate) fn failing_category(mut self, id: CategoryId) -> Self {
        self.failing.insert(id);
        self
    }

    pub(crate) fn with_clue_count(mut self, id: CategoryId, count: usize) -> Self {
        let title = self.details[&id].title.clone();
        let mut details = generated_details(id, count);
        details.title = title;
        self.details.insert(id, details);
        self
    }

    pub(crate) fn with_clue(mut self, id: CategoryId, index: usize, question: &str, answer: &str) -> Self {
        if let Some(details) = self.details.get_mut(&id) {
            details.clues[index] = RawClue {
                question: question.into(),
                answer: answer.into(),
            };
        }
        self
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.get()
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }

    pub(crate) fn listed_with(&self) -> Option<usize> {
        self.listed_with.get()
    }
}

fn generated_details(id: CategoryId, clue_count: usize) -> CategoryDetails {
    CategoryDetails {
        id,
        title: format!("category {}", id),
        clues: (0..clue_count)
            .map(|n| RawClue {
                question: format!("question {}-{}", id, n),
                answer: format!("answer {}-{}", id, n),
            })
            .collect(),
    }
}

impl TriviaSource for MockSource {
    // the whole listing is returned regardless of `count`, like an upstream
    // that ignores paging hints
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, LoadError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.listed_with.set(Some(count));
        if self.fail_listing {
            return Err(LoadError::SourceUnavailable(String::from("listing refused")));
        }
        Ok(self.listing.clone())
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<CategoryDetails, LoadError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if self.failing.contains(&id) {
            return Err(LoadError::SourceUnavailable(format!("category {} refused", id)));
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| LoadError::SourceUnavailable(format!("no category {}", id)))
    }
}
