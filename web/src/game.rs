use crate::api::{DEFAULT_API_URL, JserviceSource};
use crate::utils::*;
use clap::Args;
use jeopardy_core as game;
use game::{CluePos, Lifecycle, RevealState};
use yew::prelude::*;

const PLACEHOLDER: &str = "?";

/// Markup shown inside a clue cell. Clue text is escaped by the loader, so it
/// can be injected as-is.
fn cell_markup(clue: &game::Clue) -> AttrValue {
    match clue.state() {
        RevealState::Hidden => AttrValue::from(PLACEHOLDER),
        RevealState::Question => AttrValue::from(clue.question().to_string()),
        RevealState::Answer => AttrValue::from(clue.answer().to_string()),
    }
}

fn start_label(lifecycle: Lifecycle) -> &'static str {
    match lifecycle {
        Lifecycle::Idle => "Start!",
        Lifecycle::Loading => "Loading...",
        Lifecycle::Ready => "Restart!",
    }
}

/// What occupies the board area.
#[derive(Copy, Clone, Debug, PartialEq)]
enum BoardView {
    Spinner,
    Empty,
    Grid,
}

/// While loading the old board is never shown, so a restart can't flash stale clues.
fn board_view(lifecycle: Lifecycle, board: &game::Board) -> BoardView {
    match lifecycle {
        Lifecycle::Loading => BoardView::Spinner,
        Lifecycle::Idle | Lifecycle::Ready if board.is_empty() => BoardView::Empty,
        Lifecycle::Idle | Lifecycle::Ready => BoardView::Grid,
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum StartAction {
    Ignore,
    Load,
}

fn start_action(lifecycle: Lifecycle) -> StartAction {
    match lifecycle {
        Lifecycle::Loading => StartAction::Ignore,
        Lifecycle::Idle | Lifecycle::Ready => StartAction::Load,
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::RevealOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome| outcome.has_update())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    Loaded(game::LoadTicket, Result<game::Board, game::LoadError>),
    Reveal(CluePos),
    DismissError,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: CluePos,
    state: RevealState,
    markup: AttrValue,
    callback: Callback<CluePos>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        state,
        markup,
        callback,
    } = props.clone();

    let class = classes!(
        "clue",
        match state {
            RevealState::Hidden => classes!(),
            RevealState::Question => classes!("question"),
            RevealState::Answer => classes!("answer", "locked"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} click", pos);
        callback.emit(pos);
    });

    html! {
        <td {class} {onclick}>{ Html::from_html_unchecked(markup) }</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Categories on the board
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_CATEGORIES)]
    pub categories: usize,

    /// Clues per category
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_CLUES_PER_CATEGORY)]
    pub clues: usize,

    /// How many listed categories to draw from
    #[arg(long, default_value_t = game::BoardConfig::DEFAULT_POOL_SIZE)]
    pub pool_size: usize,
}

impl GameProps {
    pub(crate) fn board_config(&self) -> game::BoardConfig {
        game::BoardConfig::new(
            self.categories,
            self.clues,
            self.pool_size,
            game::BoardConfig::DEFAULT_SAMPLE_ATTEMPTS,
        )
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    state: game::GameState,
    source: JserviceSource,
    config: game::BoardConfig,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&self, ticket: game::LoadTicket) -> u64 {
        match self.forced_seed {
            Some(seed) => seed.wrapping_add(ticket.generation()),
            None => js_random_seed(),
        }
    }

    fn start_load(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.state.begin_load() else {
            return false;
        };

        let sampler = game::SeededSampler::new(self.next_seed(ticket));
        let categories = self.config.categories;
        let mut loader = game::BoardLoader::new(self.source.clone(), sampler, self.config);
        ctx.link().send_future(async move {
            let result = loader.load_board(categories).await;
            Msg::Loaded(ticket, result)
        });
        true
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let board = self.state.board();
        match board_view(self.state.lifecycle(), board) {
            BoardView::Spinner => return html! { <i class="fas fa-spinner fa-pulse"/> },
            BoardView::Empty => return html! {},
            BoardView::Grid => {}
        }

        let rows = board.clue_rows();
        let callback = ctx.link().callback(Msg::Reveal);

        html! {
            <table class="table" key={self.state.generation().to_string()}>
                <thead>
                    <tr>
                        {
                            for board.categories().iter().map(|category| html! {
                                <th>{ Html::from_html_unchecked(AttrValue::from(category.title().to_string())) }</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..rows).map(|y| html! {
                            <tr>
                                {
                                    for board.categories().iter().enumerate().map(|(x, category)| {
                                        let pos = CluePos::new(x, y);
                                        match category.clues().get(y) {
                                            Some(clue) => html! {
                                                <CellView
                                                    {pos}
                                                    state={clue.state()}
                                                    markup={cell_markup(clue)}
                                                    callback={callback.clone()}
                                                />
                                            },
                                            None => html! { <td/> },
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            state: game::GameState::new(),
            source: JserviceSource::new(&props.api_url),
            config: props.board_config(),
            forced_seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => match start_action(self.state.lifecycle()) {
                StartAction::Ignore => {
                    log::debug!("start ignored while loading");
                    false
                }
                StartAction::Load => self.start_load(ctx),
            },
            Loaded(ticket, result) => match self.state.finish_load(ticket, result) {
                Ok(outcome) => {
                    log::debug!("load finished: {:?}", outcome);
                    outcome == game::LoadOutcome::Installed
                }
                Err(err) => {
                    log::error!("could not load board: {}", err);
                    true
                }
            },
            Reveal(pos) => {
                log::debug!("reveal clue: {:?}", pos);
                self.state.reveal(pos).has_update()
            }
            DismissError => self.state.clear_error(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let lifecycle = self.state.lifecycle();
        let is_loading = lifecycle.is_loading();

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });
        let cb_dismiss = ctx.link().callback(|_| Msg::DismissError);

        let error = self.state.last_error().map(|err| {
            html! {
                <aside class="error" onclick={cb_dismiss}>
                    {"Could not load a board: "}{ err.to_string() }
                </aside>
            }
        });

        html! {
            <div class={classes!("jeopardy", is_loading.then_some("loading"))}>
                <nav>
                    <button id="start-btn" disabled={is_loading} onclick={cb_start}>
                        { start_label(lifecycle) }
                    </button>
                </nav>
                { for error }
                if lifecycle == Lifecycle::Ready && self.state.board().is_fully_revealed() {
                    <p class="done">{"Every clue is revealed."}</p>
                }
                <div id="game-board">
                    { self.view_board(ctx) }
                </div>
            </div>
        }
    }
}
