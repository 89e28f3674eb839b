use alloc::collections::BTreeSet;
use alloc::format;
use alloc::vec::Vec;
use futures_util::future::try_join_all;

use crate::*;

/// Draws boards out of a [`TriviaSource`], using one [`Sampler`] for every
/// random pick.
#[derive(Debug)]
pub struct BoardLoader<S, R> {
    source: S,
    sampler: R,
    config: BoardConfig,
}

impl<S: TriviaSource, R: Sampler> BoardLoader<S, R> {
    pub fn new(source: S, sampler: R, config: BoardConfig) -> Self {
        Self {
            source,
            sampler,
            config,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Picks `count` distinct category ids out of the first `pool_size`
    /// categories the source lists.
    pub async fn load_category_ids(&mut self, count: usize) -> Result<Vec<CategoryId>, LoadError> {
        let listing = self.source.list_categories(self.config.pool_size).await?;
        let pool: Vec<&CategorySummary> = listing.iter().take(self.config.pool_size).collect();

        let distinct = pool.iter().map(|summary| summary.id).collect::<BTreeSet<_>>().len();
        if distinct < count {
            return Err(LoadError::SourceUnavailable(format!(
                "only {} distinct categories listed, {} required",
                distinct, count
            )));
        }

        for attempt in 1..=self.config.sample_attempts {
            let picked: Vec<&CategorySummary> = self
                .sampler
                .sample_indices(pool.len(), count)
                .into_iter()
                .map(|i| pool[i])
                .collect();
            let ids: Vec<CategoryId> = picked.iter().map(|summary| summary.id).collect();

            if ids.iter().collect::<BTreeSet<_>>().len() == ids.len() {
                for summary in &picked {
                    log::debug!("picked category {}: {}", summary.id, summary.title);
                }
                return Ok(ids);
            }

            log::warn!(
                "sampled a repeated category id (attempt {}/{}), drawing again",
                attempt,
                self.config.sample_attempts
            );
        }

        Err(LoadError::DuplicateCategory(count))
    }

    pub async fn load_category(&mut self, id: CategoryId) -> Result<Category, LoadError> {
        let details = self.source.fetch_category(id).await?;
        build_category(&mut self.sampler, &self.config, id, details)
    }

    /// Resolves `categories` ids, then fetches every category at once. Any
    /// failure fails the whole board.
    pub async fn load_board(&mut self, categories: usize) -> Result<Board, LoadError> {
        let ids = self.load_category_ids(categories).await?;

        let source = &self.source;
        let fetched = try_join_all(ids.iter().map(|&id| source.fetch_category(id))).await?;
        log::debug!("fetched {} categories", fetched.len());

        let categories = ids
            .into_iter()
            .zip(fetched)
            .map(|(id, details)| build_category(&mut self.sampler, &self.config, id, details))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Board::new(categories))
    }
}

fn build_category<R: Sampler>(
    sampler: &mut R,
    config: &BoardConfig,
    id: CategoryId,
    details: CategoryDetails,
) -> Result<Category, LoadError> {
    let required = config.clues_per_category;
    let available = details.clues.len();
    if available < required {
        return Err(LoadError::InsufficientClues {
            id,
            available,
            required,
        });
    }

    let clues = sampler
        .sample_indices(available, required)
        .into_iter()
        .map(|i| {
            let raw = &details.clues[i];
            Clue::new(escape_markup(&raw.question), escape_markup(&raw.answer))
        })
        .collect();

    Ok(Category::new(id, escape_markup(&details.title), clues))
}
