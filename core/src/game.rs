use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Text made visible by this step, if any.
    pub fn emitted_text(self, clue: &Clue) -> Option<&str> {
        match self {
            Self::NoChange => None,
            Self::ShowQuestion => Some(clue.question()),
            Self::ShowAnswer => Some(clue.answer()),
        }
    }
}

impl Clue {
    /// Advances the clue one step: hidden to question, question to answer.
    /// Once the answer shows, further calls change nothing.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;

        match self.state() {
            Hidden => {
                self.set_state(Question);
                RevealOutcome::ShowQuestion
            }
            Question => {
                self.set_state(Answer);
                RevealOutcome::ShowAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    Ready,
}

impl Lifecycle {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn can_start(self) -> bool {
        !self.is_loading()
    }
}

/// Handle for one board load. Results carrying a superseded ticket are dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A load was already running, nothing was requested.
    Rejected,
    /// The result belonged to an older load and was thrown away.
    Stale,
    Installed,
}

/// The live game: current board, lifecycle and the last load failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
    board: Board,
    lifecycle: Lifecycle,
    generation: u64,
    last_error: Option<LoadError>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Counts load requests; changes whenever a new board may replace the old.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }

    pub fn clear_error(&mut self) -> bool {
        self.last_error.take().is_some()
    }

    /// Enters `Loading` and hands out a ticket for the result, unless a load
    /// is already in flight.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if !self.lifecycle.can_start() {
            log::debug!("start ignored, generation {} still loading", self.generation);
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.lifecycle = Lifecycle::Loading;
        self.last_error = None;
        log::debug!("loading board, generation {}", self.generation);
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Applies the result of the load identified by `ticket`.
    ///
    /// A new board replaces the old one in a single step. On failure the old
    /// board is kept, the game falls back to `Ready` if there is one to play
    /// and to `Idle` otherwise, and the error is recorded and returned.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Board, LoadError>,
    ) -> Result<LoadOutcome, LoadError> {
        if ticket.generation != self.generation || !self.lifecycle.is_loading() {
            log::debug!(
                "dropping board from generation {}, current is {}",
                ticket.generation,
                self.generation
            );
            return Ok(LoadOutcome::Stale);
        }

        match result {
            Ok(board) => {
                self.board = board;
                self.lifecycle = Lifecycle::Ready;
                log::debug!("board ready, generation {}", self.generation);
                Ok(LoadOutcome::Installed)
            }
            Err(err) => {
                self.lifecycle = if self.board.is_empty() {
                    Lifecycle::Idle
                } else {
                    Lifecycle::Ready
                };
                log::warn!("board load failed: {}", err);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Runs a full load through `loader` and installs the result.
    pub async fn start<S, R>(
        &mut self,
        loader: &mut BoardLoader<S, R>,
    ) -> Result<LoadOutcome, LoadError>
    where
        S: TriviaSource,
        R: Sampler,
    {
        let Some(ticket) = self.begin_load() else {
            return Ok(LoadOutcome::Rejected);
        };
        let categories = loader.config().categories;
        let result = loader.load_board(categories).await;
        self.finish_load(ticket, result)
    }

    pub fn reveal(&mut self, pos: CluePos) -> Result<RevealOutcome> {
        if self.lifecycle != Lifecycle::Ready {
            return Err(GameError::NotReady);
        }

        let clue = self
            .board
            .clue_at_mut(pos)
            .ok_or(GameError::InvalidPosition)?;
        let outcome = clue.reveal();
        log::trace!("reveal {:?}: {:?} -> {:?}", pos, outcome, clue.state());
        Ok(outcome)
    }
}
