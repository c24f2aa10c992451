use gloo::timers::callback::{Interval, Timeout};
use indizio_core::{
    Difficulty, GuessOutcome, RandomRoundGenerator, RoundEngine, RoundGenerator, RoundPhase,
    TickOutcome, Tile,
};
use yew::prelude::*;

const COUNTDOWN_MS: u32 = 1_000;
const ADVANCE_DELAY_MS: u32 = 1_000;
const WRONG_FLASH_MS: u32 = 900;

const WRONG_NOTICE: &str = "❌ Wrong! Try again.";
const CORRECT_NOTICE: &str = "🎉 Correct!";
const TIMES_UP_NOTICE: &str = "⏰ Time's up! Game Over.";
const OUT_OF_LIVES_NOTICE: &str = "💀 GAME OVER — the correct tile is highlighted.";
const NO_MORE_CLUES_NOTICE: &str = "No more clues!";

/// Helper function to use JavaScript's Math.random for the round seed
fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Columns of a near-square grid, the same layout rule the board CSS uses.
fn grid_columns(tile_count: usize) -> usize {
    (1..=tile_count).find(|cols| cols * cols >= tile_count).unwrap_or(1)
}

fn status_line(engine: &RoundEngine) -> String {
    format!(
        "Lives: {} | Score: {} | Time: {}s | Level: {}",
        engine.lives(),
        engine.score(),
        engine.time_left(),
        engine.difficulty().name()
    )
}

/// The clue box is derived from the round phase; every terminal phase has
/// its own message and play shows the current clue (or its absence).
fn clue_line(engine: &RoundEngine) -> String {
    use RoundPhase::*;
    match engine.phase() {
        Playing => match engine.current_clue() {
            Some(clue) => format!("{} - {}", engine.difficulty().name(), clue.text()),
            None => NO_MORE_CLUES_NOTICE.to_string(),
        },
        LevelCleared => CORRECT_NOTICE.to_string(),
        TimedOut => TIMES_UP_NOTICE.to_string(),
        OutOfLives => OUT_OF_LIVES_NOTICE.to_string(),
        Completed => format!("🏆 You completed all levels! Final Score: {}", engine.score()),
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Start,
    TileClick(usize),
    CountdownTick,
    AdvanceLevel,
    ClearFlash,
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    tile: Tile,
    #[prop_or_default]
    disabled: bool,
    #[prop_or_default]
    revealed: bool,
    callback: Callback<usize>,
}

#[function_component(TileView)]
fn tile_view(props: &TileProps) -> Html {
    let TileProps {
        tile,
        disabled,
        revealed,
        callback,
    } = props.clone();

    let mut class = classes!(
        "item",
        tile.color.name(),
        tile.pattern.name(),
        tile.shape.name(),
    );
    if disabled {
        class.push("disabled");
    }
    if revealed {
        class.push("correct");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("tile {} clicked", tile.index);
        callback.emit(tile.index);
    });

    html! {
        <div {class} {onclick}>
            <div class="shape"/>
        </div>
    }
}

pub(crate) struct GameView {
    engine: Option<RoundEngine>,
    countdown: Option<Interval>,
    pending_advance: Option<Timeout>,
    flash: Option<&'static str>,
    flash_clear: Option<Timeout>,
}

impl GameView {
    fn create_countdown(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(COUNTDOWN_MS, move || link.send_message(Msg::CountdownTick))
    }

    /// Dropping the previous handles cancels any pending callback, so a
    /// stale tick or advance can never fire into the new round.
    fn stop_timers(&mut self) {
        self.countdown = None;
        self.pending_advance = None;
        self.flash = None;
        self.flash_clear = None;
    }

    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        self.stop_timers();
        let seed = js_random_seed();
        self.engine = Some(RoundEngine::first_round(
            RandomRoundGenerator::new(seed).generate(Difficulty::Easy),
        ));
        self.countdown = Some(Self::create_countdown(ctx));
        log::debug!("new game, seed {}", seed);
        true
    }

    fn handle_guess(&mut self, ctx: &Context<Self>, index: usize) -> bool {
        let Some(engine) = self.engine.as_mut() else {
            return false;
        };

        match engine.guess(index) {
            Ok(GuessOutcome::Correct) => {
                let cleared = matches!(engine.phase(), RoundPhase::LevelCleared);
                self.stop_timers();
                if cleared {
                    let link = ctx.link().clone();
                    self.pending_advance = Some(Timeout::new(ADVANCE_DELAY_MS, move || {
                        link.send_message(Msg::AdvanceLevel)
                    }));
                }
                true
            }
            Ok(GuessOutcome::Wrong) => {
                self.flash = Some(WRONG_NOTICE);
                let link = ctx.link().clone();
                self.flash_clear = Some(Timeout::new(WRONG_FLASH_MS, move || {
                    link.send_message(Msg::ClearFlash)
                }));
                true
            }
            Ok(GuessOutcome::OutOfLives) => {
                self.stop_timers();
                true
            }
            Ok(GuessOutcome::NoChange) => false,
            Err(err) => {
                log::debug!("guess {} rejected: {}", index, err);
                false
            }
        }
    }

    fn handle_tick(&mut self) -> bool {
        match self.engine.as_mut().map(RoundEngine::tick) {
            Some(Ok(TickOutcome::TimedOut)) => {
                self.stop_timers();
                true
            }
            Some(Ok(TickOutcome::Counting)) => true,
            // Stale tick after the round already ended
            Some(Err(_)) | None => {
                self.countdown = None;
                false
            }
        }
    }

    fn advance_level(&mut self, ctx: &Context<Self>) -> bool {
        self.pending_advance = None;
        let seed = js_random_seed();
        let advanced = self
            .engine
            .as_ref()
            .and_then(|engine| engine.advance(RandomRoundGenerator::new(seed)).ok());
        match advanced {
            Some(next) => {
                log::debug!("advancing to {:?}, seed {}", next.difficulty(), seed);
                self.engine = Some(next);
                self.countdown = Some(Self::create_countdown(ctx));
                true
            }
            None => false,
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: None,
            countdown: None,
            pending_advance: None,
            flash: None,
            flash_clear: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;
        match msg {
            Start => self.start_game(ctx),
            TileClick(index) => self.handle_guess(ctx, index),
            CountdownTick => self.handle_tick(),
            AdvanceLevel => self.advance_level(ctx),
            ClearFlash => {
                self.flash_clear = None;
                self.flash.take().is_some()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_start = ctx.link().callback(|_: MouseEvent| Msg::Start);

        let board = match self.engine.as_ref() {
            None => html! {},
            Some(engine) => {
                let columns = grid_columns(engine.tiles().len());
                let grid_style = format!("grid-template-columns: repeat({}, 1fr);", columns);
                let over = engine.phase().is_over();
                let clue_text = match self.flash {
                    Some(flash) => flash.to_string(),
                    None => clue_line(engine),
                };

                html! {
                    <>
                        <output class="status">{status_line(engine)}</output>
                        <p class="clue">{clue_text}</p>
                        <div class="board" style={grid_style}>
                            {
                                for engine.tiles().iter().map(|&tile| {
                                    let disabled = over || engine.is_guessed(tile.index);
                                    let revealed = over && tile.index == engine.target();
                                    let callback = ctx.link().callback(Msg::TileClick);
                                    html! {
                                        <TileView {tile} {disabled} {revealed} {callback}/>
                                    }
                                })
                            }
                        </div>
                    </>
                }
            }
        };

        html! {
            <div class="indizio">
                <button class="start" onclick={cb_start}>{"Start Game"}</button>
                {board}
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indizio_core::{Clue, ClueRule, Color, Pattern, RoundSetup, Shape};

    fn fixed_engine() -> RoundEngine {
        let tiles: Vec<Tile> = (0..16)
            .map(|index| Tile {
                color: Color::Red,
                shape: Shape::Circle,
                pattern: Pattern::Solid,
                index,
            })
            .collect();
        let clues = ClueRule::for_target(&tiles[3])
            .into_iter()
            .map(Clue::new)
            .collect();
        RoundEngine::first_round(RoundSetup::new(tiles, 3, clues).unwrap())
    }

    #[test]
    fn grid_columns_are_the_ceiling_square_root() {
        assert_eq!(grid_columns(16), 4);
        assert_eq!(grid_columns(17), 5);
        assert_eq!(grid_columns(36), 6);
        assert_eq!(grid_columns(56), 8);
    }

    #[test]
    fn status_line_shows_all_counters() {
        let engine = fixed_engine();
        assert_eq!(
            status_line(&engine),
            "Lives: 3 | Score: 0 | Time: 45s | Level: Easy"
        );
    }

    #[test]
    fn clue_line_prefixes_the_difficulty_during_play() {
        let engine = fixed_engine();
        assert_eq!(
            clue_line(&engine),
            "Easy - The target is a Red item."
        );
    }

    #[test]
    fn clue_line_reports_terminal_phases() {
        let mut engine = fixed_engine();
        engine.guess(0).unwrap();
        engine.guess(1).unwrap();
        engine.guess(2).unwrap();
        assert_eq!(clue_line(&engine), OUT_OF_LIVES_NOTICE);

        let mut engine = fixed_engine();
        engine.guess(3).unwrap();
        assert_eq!(clue_line(&engine), CORRECT_NOTICE);

        let mut engine = fixed_engine();
        while engine.time_left() > 0 {
            engine.tick().unwrap();
        }
        assert_eq!(clue_line(&engine), TIMES_UP_NOTICE);
    }
}
