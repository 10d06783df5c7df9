//! Game session module - one playthrough from deal to win or loss
//!
//! The session ties together the board, the slot, score, the countdown and the
//! single revive. All mutation goes through its methods; front ends read it through
//! accessors or a [`SessionSnapshot`](crate::snapshot::SessionSnapshot).
//!
//! After every successful pick the session evaluates, in order:
//!
//! 1. board cleared: [`SessionState::Won`]
//! 2. slot over capacity: [`SessionState::AwaitingRevive`] if the revive is still
//!    available (consuming it), otherwise [`SessionState::Lost`]
//! 3. otherwise it stays [`SessionState::Playing`]
//!
//! The countdown is advanced separately with [`GameSession::tick`]. It keeps running
//! during the revive offer; a revive granted after it ran out ends the run as a
//! timeout.

use crate::board::{BoardStack, Layout};
use crate::pool::generate;
use crate::rng::SimpleRng;
use crate::slot::{Slot, SlotClear};
use crate::types::{
    CellPos, Difficulty, TileKind, BOARD_COLS, BOARD_ROWS, SCORE_PER_PICK, TIME_BUDGET_MS,
};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Playing,
    /// The slot overflowed and the one revive is on offer; picks are ignored but the clock runs.
    AwaitingRevive,
    Won,
    Lost,
}

impl SessionState {
    /// Won or lost; nothing more can happen.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Won | SessionState::Lost)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Playing => "playing",
            SessionState::AwaitingRevive => "awaiting_revive",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
        }
    }
}

/// Why a session was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossCause {
    /// The slot overflowed with no revive left.
    Overflow,
    /// The slot overflowed and the revive was turned down.
    ReviveDeclined,
    /// The countdown reached zero.
    Timeout,
}

/// Per-session tunables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub time_budget_ms: u32,
    pub score_per_pick: u32,
    /// Kinds dealt onto the board, cycled group by group.
    pub palette: Vec<TileKind>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: TIME_BUDGET_MS,
            score_per_pick: SCORE_PER_PICK,
            palette: TileKind::ALL.to_vec(),
        }
    }
}

/// A tile that was moved into the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub pos: CellPos,
    pub kind: TileKind,
    /// What the slot's auto-clear removed right after the insert.
    pub cleared: SlotClear,
    pub score_delta: u32,
    /// State after termination was evaluated.
    pub state: SessionState,
}

/// Result of a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Missed every tile, hit an empty or covered cell, or the session was not playing.
    Ignored,
    Moved(MoveReport),
}

impl ClickOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, ClickOutcome::Ignored)
    }

    pub fn score_delta(&self) -> u32 {
        match self {
            ClickOutcome::Ignored => 0,
            ClickOutcome::Moved(report) => report.score_delta,
        }
    }

    pub fn matched(&self) -> bool {
        match self {
            ClickOutcome::Ignored => false,
            ClickOutcome::Moved(report) => report.cleared.matched(),
        }
    }
}

/// Source of the revive decision (for example an advertisement that was watched).
pub trait ReviveGate {
    fn grant_revive(&mut self) -> bool;
}

impl<F> ReviveGate for F
where
    F: FnMut() -> bool,
{
    fn grant_revive(&mut self) -> bool {
        self()
    }
}

/// One playthrough
#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    seed: u32,
    board: BoardStack,
    slot: Slot,
    layout: Layout,
    config: SessionConfig,
    score: u32,
    elapsed_ms: u32,
    revive_available: bool,
    state: SessionState,
    loss_cause: Option<LossCause>,
}

impl GameSession {
    /// Deal a fresh 7x7 board for `difficulty` from `seed`.
    pub fn new(difficulty: Difficulty, seed: u32) -> Self {
        Self::with_config(difficulty, seed, SessionConfig::default())
    }

    pub fn with_config(difficulty: Difficulty, seed: u32, config: SessionConfig) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = generate(
            difficulty.layers(),
            BOARD_ROWS,
            BOARD_COLS,
            &config.palette,
            &mut rng,
        );
        log::info!(
            "session start: difficulty={} seed={} tiles={}",
            difficulty.as_str(),
            seed,
            board.occupied_count()
        );
        let mut session = Self::from_board(difficulty, board, config);
        session.seed = seed;
        session
    }

    /// Start a session on a prepared board.
    pub fn from_board(difficulty: Difficulty, board: BoardStack, config: SessionConfig) -> Self {
        Self {
            difficulty,
            seed: 0,
            board,
            slot: Slot::new(),
            layout: Layout::REFERENCE,
            config,
            score: 0,
            elapsed_ms: 0,
            revive_available: true,
            state: SessionState::Playing,
            loss_cause: None,
        }
    }

    /// Replace the slot contents (for prepared scenarios).
    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_revive_available(mut self, available: bool) -> Self {
        self.revive_available = available;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &BoardStack {
        &self.board
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Geometry used to resolve clicks and decide covering.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn loss_cause(&self) -> Option<LossCause> {
        self.loss_cause
    }

    pub fn revive_available(&self) -> bool {
        self.revive_available
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn remaining_ms(&self) -> u32 {
        self.config.time_budget_ms.saturating_sub(self.elapsed_ms)
    }

    /// Whole seconds left, rounded up (60 at the start, 0 once expired).
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms().div_ceil(1000)
    }

    /// Whether the tile at `pos` can be picked right now.
    pub fn is_pickable(&self, pos: CellPos) -> bool {
        self.board.is_pickable(pos, &self.layout)
    }

    /// Resolve a pointer click at `(x, y)` (layout units) and pick the tile under it.
    pub fn handle_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        if self.state != SessionState::Playing {
            return ClickOutcome::Ignored;
        }
        match self.board.resolve_click(x, y, &self.layout) {
            Some(pos) => self.pick(pos),
            None => ClickOutcome::Ignored,
        }
    }

    /// Move the tile at `pos` into the slot, clear triples and evaluate termination.
    pub fn pick(&mut self, pos: CellPos) -> ClickOutcome {
        if self.state != SessionState::Playing {
            return ClickOutcome::Ignored;
        }
        let kind = match self.board.get(pos) {
            Some(Some(kind)) => kind,
            _ => return ClickOutcome::Ignored,
        };
        if self.board.is_covered(pos, &self.layout) {
            return ClickOutcome::Ignored;
        }
        if !self.slot.insert(kind) {
            log::warn!("slot storage exhausted; ignoring pick at {:?}", pos);
            return ClickOutcome::Ignored;
        }
        self.board.remove_tile(pos);

        let cleared = self.slot.auto_clear();
        let score_delta = self.config.score_per_pick;
        self.score = self.score.saturating_add(score_delta);
        log::debug!(
            "picked {} at {:?}; slot={} matched={}",
            kind.as_str(),
            pos,
            self.slot.len(),
            cleared.matched()
        );

        self.evaluate();

        ClickOutcome::Moved(MoveReport {
            pos,
            kind,
            cleared,
            score_delta,
            state: self.state,
        })
    }

    fn evaluate(&mut self) {
        if self.board.is_cleared() {
            self.state = SessionState::Won;
            log::info!("session won: score={}", self.score);
        } else if self.slot.is_overflowing() {
            if self.revive_available {
                self.revive_available = false;
                self.state = SessionState::AwaitingRevive;
                log::info!("slot overflow; revive offered");
            } else {
                self.lose(LossCause::Overflow);
            }
        }
    }

    fn lose(&mut self, cause: LossCause) {
        self.state = SessionState::Lost;
        self.loss_cause = Some(cause);
        log::info!("session lost ({:?}): score={}", cause, self.score);
    }

    /// Advance the countdown. Returns true if this call ran the clock out.
    ///
    /// The clock is wall-clock time and keeps running during the revive offer, but
    /// running out there only takes effect once the offer is settled.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.state {
            SessionState::Playing => {
                self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
                if self.time_is_up() {
                    self.lose(LossCause::Timeout);
                    return true;
                }
                false
            }
            SessionState::AwaitingRevive => {
                self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
                false
            }
            SessionState::Won | SessionState::Lost => false,
        }
    }

    fn time_is_up(&self) -> bool {
        self.elapsed_ms >= self.config.time_budget_ms
    }

    /// Settle a pending revive offer. Returns whether play resumed.
    ///
    /// Outside [`SessionState::AwaitingRevive`] nothing changes and the answer is
    /// always false. A granted revive leaves board and slot untouched; declining ends
    /// the session. A revive granted after the clock ran out ends it as a timeout.
    pub fn resolve_revive(&mut self, granted: bool) -> bool {
        if self.state != SessionState::AwaitingRevive {
            return false;
        }
        if granted && self.time_is_up() {
            self.lose(LossCause::Timeout);
            false
        } else if granted {
            self.state = SessionState::Playing;
            log::info!("revive granted; slot holds {}", self.slot.len());
            true
        } else {
            self.lose(LossCause::ReviveDeclined);
            false
        }
    }

    /// Ask `gate` for the revive if one is pending, then settle it.
    ///
    /// The gate is not consulted unless the session is awaiting a revive.
    pub fn offer_revive<G: ReviveGate + ?Sized>(&mut self, gate: &mut G) -> bool {
        if self.state != SessionState::AwaitingRevive {
            return false;
        }
        let granted = gate.grant_revive();
        self.resolve_revive(granted)
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::SessionSnapshot) {
        out.write_board(&self.board, &self.layout);
        out.slot.clear();
        out.slot.extend(self.slot.tiles().iter().copied());
        out.score = self.score;
        out.remaining_ms = self.remaining_ms();
        out.state = self.state;
        out.loss_cause = self.loss_cause;
        out.revive_available = self.revive_available;
        out.difficulty = self.difficulty;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> crate::snapshot::SessionSnapshot {
        let mut s = crate::snapshot::SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
