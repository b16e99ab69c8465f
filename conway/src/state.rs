// state.rs - Application state and the reducers the UI drives it with

use crate::config::{LifeConfig, Theme};
use crate::coro::RowStepper;
use crate::error::ConfigError;
use crate::grid::{Board, Dimensions};
use crate::history::CycleDetector;
use crate::patterns::{self, PATTERNS};
use crate::rules;
use crate::ticker::Ticker;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Everything the control and render boundaries can ask for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ToggleRunning,
    Reset,
    ToggleIdle,
    ToggleGlow,
    ToggleTheme,
    ToggleCell { row: usize, col: usize },
    Resize(Dimensions),
    Step,
    Stamp,
    ApplyPattern(usize),
    Randomize,
    SetStepInterval(Duration),
}

/// How a generation gets computed.
#[derive(Debug, Default)]
pub enum StepMode {
    #[default]
    Pure,
    Rows(RowStepper),
}

impl StepMode {
    fn step(&self, board: &Board) -> Board {
        match self {
            StepMode::Pure => rules::step(board),
            StepMode::Rows(stepper) => stepper.step(board).unwrap_or_else(|err| {
                warn!(error = %err, "row stepper failed, stepping inline");
                rules::step(board)
            }),
        }
    }
}

/// What a call to [`LifeState::tick`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub stepped: bool,
    pub stamped: bool,
}

/// Central state: the current board snapshot plus the two independent run
/// flags, each backed by its own [`Ticker`].
#[derive(Debug)]
pub struct LifeState {
    config: LifeConfig,
    board: Board,
    running: bool,
    idle_running: bool,
    glow: bool,
    theme: Theme,
    generation: u64,
    step_ticker: Ticker,
    idle_ticker: Ticker,
    rng: SmallRng,
    history: CycleDetector,
    cycle_detected: bool,
    step_mode: StepMode,
}

impl LifeState {
    pub fn new(config: LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dims = config.initial_dimensions()?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Ok(Self {
            board: Board::new(dims),
            running: false,
            idle_running: false,
            glow: config.glow,
            theme: config.theme,
            generation: 0,
            step_ticker: Ticker::new(config.step_interval()),
            idle_ticker: Ticker::new(config.idle_interval()),
            rng,
            history: CycleDetector::new(),
            cycle_detected: false,
            step_mode: StepMode::Pure,
            config,
        })
    }

    pub fn with_step_mode(mut self, step_mode: StepMode) -> Self {
        self.step_mode = step_mode;
        self
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dims(&self) -> Dimensions {
        self.board.dims()
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn idle_running(&self) -> bool {
        self.idle_running
    }

    pub fn glow(&self) -> bool {
        self.glow
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last generation matched a recently seen board.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_detected
    }

    pub fn step_interval(&self) -> Duration {
        self.step_ticker.interval()
    }

    /// Earliest moment either ticker wants to fire.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.step_ticker.next_due(), self.idle_ticker.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        trace!(?action, "apply");
        match action {
            Action::ToggleRunning => self.set_running(!self.running, now),
            Action::Reset => {
                self.replace_board(Board::new(self.dims()));
                debug!("board reset");
            }
            Action::ToggleIdle => {
                self.idle_running = !self.idle_running;
                if self.idle_running {
                    self.idle_ticker.start(now);
                } else {
                    self.idle_ticker.stop();
                }
                // Either idle button turns stepping on
                if !self.running {
                    self.set_running(true, now);
                }
                info!(idle_running = self.idle_running, "idle injection toggled");
            }
            Action::ToggleGlow => self.glow = !self.glow,
            Action::ToggleTheme => self.theme = self.theme.toggled(),
            Action::ToggleCell { row, col } => {
                self.board = self.board.toggled(row as isize, col as isize);
            }
            Action::Resize(dims) => {
                if dims != self.dims() {
                    debug!(from = %self.dims(), to = %dims, "resizing board");
                    self.board = self.board.resized(dims);
                    self.history.clear();
                }
            }
            Action::Step => self.advance(),
            Action::Stamp => self.board = patterns::stamp_random(&self.board, &mut self.rng),
            Action::ApplyPattern(index) => {
                if let Some(pattern) = PATTERNS.get(index) {
                    let dims = self.dims();
                    let anchor = patterns::centered(dims, pattern);
                    self.replace_board(patterns::stamp(&Board::new(dims), pattern, anchor));
                    debug!(pattern = pattern.name, "pattern applied");
                }
            }
            Action::Randomize => {
                let board = Board::random(self.dims(), &mut self.rng, self.config.random_density);
                self.replace_board(board);
            }
            Action::SetStepInterval(interval) => {
                if !interval.is_zero() {
                    self.step_ticker.set_interval(interval);
                }
            }
        }
    }

    /// Runs whichever tickers are due at `now`.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.running && self.step_ticker.poll(now) {
            self.advance();
            outcome.stepped = true;
        }
        if self.idle_running && self.idle_ticker.poll(now) {
            self.apply(Action::Stamp, now);
            outcome.stamped = true;
        }
        outcome
    }

    fn set_running(&mut self, running: bool, now: Instant) {
        self.running = running;
        if running {
            self.step_ticker.start(now);
        } else {
            self.step_ticker.stop();
        }
        info!(running, generation = self.generation, "stepping toggled");
    }

    fn advance(&mut self) {
        self.board = self.step_mode.step(&self.board);
        self.generation += 1;
        self.cycle_detected = self.history.observe(&self.board);
        if self.cycle_detected {
            info!(generation = self.generation, "board repeats a recent state");
            if self.config.stop_on_cycle && self.running {
                self.running = false;
                self.step_ticker.stop();
            }
        }
    }

    fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.generation = 0;
        self.history.clear();
        self.cycle_detected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn seeded() -> LifeState {
        let config = LifeConfig {
            initial_rows: 5,
            initial_cols: 5,
            seed: Some(9),
            ..LifeConfig::default()
        };
        LifeState::new(config).unwrap()
    }

    fn horizontal_blinker(state: &mut LifeState, now: Instant) {
        for col in 1..=3 {
            state.apply(Action::ToggleCell { row: 2, col }, now);
        }
    }

    #[test]
    fn starts_all_dead_and_stopped() {
        let state = seeded();
        assert!(state.board().is_empty());
        assert!(!state.running());
        assert!(!state.idle_running());
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LifeConfig { step_interval_ms: 0, ..LifeConfig::default() };
        assert!(LifeState::new(config).is_err());
    }

    #[test]
    fn running_steps_on_interval() {
        let t0 = Instant::now();
        let mut state = seeded();
        horizontal_blinker(&mut state, t0);
        state.apply(Action::ToggleRunning, t0);

        assert_eq!(state.tick(t0 + 100 * MS), TickOutcome::default());
        let outcome = state.tick(t0 + 500 * MS);
        assert!(outcome.stepped);
        assert_eq!(state.generation(), 1);
        assert!(state.board().is_alive(1, 2) && state.board().is_alive(3, 2));
    }

    #[test]
    fn stopping_cancels_the_pending_step() {
        let t0 = Instant::now();
        let mut state = seeded();
        horizontal_blinker(&mut state, t0);
        state.apply(Action::ToggleRunning, t0);
        state.apply(Action::ToggleRunning, t0 + 499 * MS);
        assert!(!state.tick(t0 + 500 * MS).stepped);
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn idle_toggle_always_turns_running_on() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::ToggleIdle, t0);
        assert!(state.idle_running());
        assert!(state.running());

        state.apply(Action::ToggleIdle, t0);
        assert!(!state.idle_running());
        assert!(state.running());
    }

    #[test]
    fn stopping_idle_restarts_stepping() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::ToggleIdle, t0);
        state.apply(Action::ToggleRunning, t0);
        assert!(!state.running());

        state.apply(Action::ToggleIdle, t0 + 100 * MS);
        assert!(!state.idle_running());
        assert!(state.running());
        assert!(state.tick(t0 + 600 * MS).stepped);
    }

    #[test]
    fn idle_ticker_stamps() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::ToggleIdle, t0);
        let outcome = state.tick(t0 + 1000 * MS);
        assert!(outcome.stepped);
        assert!(outcome.stamped);
        assert!(!state.board().is_empty());
    }

    #[test]
    fn reset_clears_board_but_keeps_flags() {
        let t0 = Instant::now();
        let mut state = seeded();
        horizontal_blinker(&mut state, t0);
        state.apply(Action::ToggleRunning, t0);
        state.apply(Action::Step, t0);
        state.apply(Action::Reset, t0);
        assert!(state.board().is_empty());
        assert_eq!(state.generation(), 0);
        assert!(state.running());
    }

    #[test]
    fn cosmetic_toggles() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::ToggleGlow, t0);
        state.apply(Action::ToggleTheme, t0);
        assert!(state.glow());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn resize_regenerates_board() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::ToggleCell { row: 0, col: 0 }, t0);
        let dims = Dimensions::new(8, 3).unwrap();
        state.apply(Action::Resize(dims), t0);
        assert_eq!(state.dims(), dims);
        assert_eq!(state.board().cells().len(), 24);
        assert!(state.board().is_alive(0, 0));
    }

    #[test]
    fn cycle_stops_when_configured() {
        let t0 = Instant::now();
        let config = LifeConfig {
            initial_rows: 5,
            initial_cols: 5,
            stop_on_cycle: true,
            ..LifeConfig::default()
        };
        let mut state = LifeState::new(config).unwrap();
        horizontal_blinker(&mut state, t0);
        state.apply(Action::ToggleRunning, t0);
        state.tick(t0 + 500 * MS);
        assert!(!state.cycle_detected());
        state.tick(t0 + 1000 * MS);
        state.tick(t0 + 1500 * MS);
        assert!(state.cycle_detected());
        assert!(!state.running());
    }

    #[test]
    fn apply_pattern_centres_and_resets_generation() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::Step, t0);
        state.apply(Action::ApplyPattern(1), t0);
        assert_eq!(state.generation(), 0);
        let live: Vec<_> = state.board().live_cells().collect();
        assert_eq!(live, vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn unknown_pattern_is_ignored() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::ApplyPattern(usize::MAX), t0);
        assert!(state.board().is_empty());
    }

    #[test]
    fn zero_step_interval_is_ignored() {
        let t0 = Instant::now();
        let mut state = seeded();
        state.apply(Action::SetStepInterval(Duration::ZERO), t0);
        assert_eq!(state.step_interval(), 500 * MS);
        state.apply(Action::SetStepInterval(50 * MS), t0);
        assert_eq!(state.step_interval(), 50 * MS);
    }
}
