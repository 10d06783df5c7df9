//! Screen flow around game sessions.
//!
//! `App` owns the current screen and, while a run is in progress, its
//! [`GameSession`]. It is driven by three inputs: commands, pointer clicks and
//! elapsed time. Rendering is a pure read of the current state into a framebuffer,
//! so the whole flow can be exercised without a terminal.

use crate::config::AppConfig;
use crate::core::{GameSession, LossCause, SessionSnapshot, SessionState, SimpleRng};
use crate::input::InputEvent;
use crate::store::{rank, record_score, ScoreStore};
use crate::term::{
    AdvertView, FrameBuffer, GameView, MenuView, ResultView, RevivePromptView, Viewport,
};
use crate::types::{Command, Difficulty, AD_DURATION_MS, RESULT_SCREEN_MS};

/// Summary of a finished run, shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub difficulty: Difficulty,
    pub headline: &'static str,
    pub score: u32,
    /// Leaderboard after this score was recorded, best first.
    pub leaderboard: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    RevivePrompt,
    /// Advertisement that can be closed once `remaining_ms` reaches zero.
    Advert { remaining_ms: u32 },
    /// Returns to the menu when `remaining_ms` runs out.
    Results {
        summary: RunSummary,
        remaining_ms: u32,
    },
}

/// Results headline for a finished session.
pub fn headline(state: SessionState, cause: Option<LossCause>) -> &'static str {
    match (state, cause) {
        (SessionState::Won, _) => "You win!",
        (_, Some(LossCause::Timeout)) => "Time's up!",
        _ => "Game over!",
    }
}

pub struct App<S: ScoreStore> {
    config: AppConfig,
    store: S,
    screen: Screen,
    session: Option<GameSession>,
    seeds: SimpleRng,
    viewport: Viewport,
    view: GameView,
    snapshot: SessionSnapshot,
    quit: bool,
}

impl<S: ScoreStore> App<S> {
    pub fn new(config: AppConfig, store: S, viewport: Viewport) -> Self {
        let seeds = SimpleRng::new(config.initial_seed());
        Self {
            config,
            store,
            screen: Screen::Menu,
            session: None,
            seeds,
            viewport,
            view: GameView::default(),
            snapshot: SessionSnapshot::default(),
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.sync_layout();
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Command(cmd) => self.handle_command(cmd),
            InputEvent::Click { x, y } => self.handle_click(x, y),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    pub fn handle_command(&mut self, cmd: Command) {
        if cmd == Command::Quit {
            log::info!("quit requested");
            self.quit = true;
            return;
        }

        match (&self.screen, cmd) {
            (Screen::Menu, Command::StartGame(difficulty)) => self.start(difficulty),
            (Screen::Playing, Command::ReturnToMenu) => {
                log::info!("run abandoned");
                self.to_menu();
            }
            (Screen::RevivePrompt, Command::AcceptRevive) => self.open_advert(),
            (Screen::RevivePrompt, Command::DeclineRevive) => {
                if let Some(session) = self.session.as_mut() {
                    session.resolve_revive(false);
                }
                self.sync_state();
            }
            (Screen::Advert { remaining_ms: 0 }, _) => self.close_advert(),
            (Screen::Results { .. }, Command::ReturnToMenu) => self.to_menu(),
            _ => {}
        }
    }

    /// Pointer press at terminal cell `(x, y)`.
    pub fn handle_click(&mut self, x: u16, y: u16) {
        match &self.screen {
            Screen::Menu => {
                let cmd = MenuView.command_at(self.viewport, x, y);
                self.handle_command(cmd);
            }
            Screen::Playing => {
                if let Some(session) = self.session.as_mut() {
                    session.handle_click(i32::from(x), i32::from(y));
                }
                self.sync_state();
            }
            Screen::RevivePrompt => {
                let cmd = RevivePromptView.command_at(self.viewport, x, y);
                self.handle_command(cmd);
            }
            Screen::Advert { remaining_ms: 0 } => self.close_advert(),
            Screen::Advert { .. } => {}
            Screen::Results { .. } => self.to_menu(),
        }
    }

    /// Advance clocks by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match &mut self.screen {
            Screen::Playing => {
                if let Some(session) = self.session.as_mut() {
                    session.tick(elapsed_ms);
                }
                self.sync_state();
            }
            // The run's clock keeps going behind the offer and the advert.
            Screen::RevivePrompt => {
                if let Some(session) = self.session.as_mut() {
                    session.tick(elapsed_ms);
                }
            }
            Screen::Advert { remaining_ms } => {
                *remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if let Some(session) = self.session.as_mut() {
                    session.tick(elapsed_ms);
                }
            }
            Screen::Results { remaining_ms, .. } => {
                *remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if *remaining_ms == 0 {
                    self.to_menu();
                }
            }
            Screen::Menu => {}
        }
    }

    /// Draw the current screen into `fb`.
    pub fn render_into(&mut self, fb: &mut FrameBuffer) {
        let viewport = self.viewport;
        match &self.screen {
            Screen::Menu => MenuView.render_into(viewport, fb),
            Screen::Playing => match self.session.as_ref() {
                Some(session) => {
                    session.snapshot_into(&mut self.snapshot);
                    self.view.render_into(&self.snapshot, viewport, fb);
                }
                None => MenuView.render_into(viewport, fb),
            },
            Screen::RevivePrompt => RevivePromptView.render_into(viewport, fb),
            Screen::Advert { remaining_ms } => AdvertView.render_into(viewport, *remaining_ms, fb),
            Screen::Results { summary, .. } => ResultView.render_into(
                viewport,
                summary.headline,
                summary.score,
                &summary.leaderboard,
                fb,
            ),
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        let seed = self.seeds.next_u32();
        self.session = Some(GameSession::with_config(
            difficulty,
            seed,
            self.config.session_config(),
        ));
        self.sync_layout();
        self.screen = Screen::Playing;
    }

    fn to_menu(&mut self) {
        self.session = None;
        self.screen = Screen::Menu;
    }

    fn open_advert(&mut self) {
        let remaining_ms = if self.config.no_ads { 0 } else { AD_DURATION_MS };
        self.screen = Screen::Advert { remaining_ms };
        if remaining_ms == 0 {
            self.close_advert();
        }
    }

    fn close_advert(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.resolve_revive(true);
        }
        self.sync_state();
    }

    fn sync_layout(&mut self) {
        if let Some(session) = self.session.as_mut() {
            let board = session.board();
            let layout =
                self.view
                    .board_layout(self.viewport, board.layers(), board.rows(), board.cols());
            session.set_layout(layout);
        }
    }

    /// Move to the screen matching the session state.
    fn sync_state(&mut self) {
        let Some(session) = self.session.as_ref() else {
            self.screen = Screen::Menu;
            return;
        };
        match session.state() {
            SessionState::Playing => self.screen = Screen::Playing,
            SessionState::AwaitingRevive => self.screen = Screen::RevivePrompt,
            SessionState::Won | SessionState::Lost => self.finish(),
        }
    }

    fn finish(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        let difficulty = session.difficulty();
        let score = session.score();
        let leaderboard = match record_score(&mut self.store, difficulty, score) {
            Ok(scores) => scores,
            Err(e) => {
                log::warn!("could not record score: {}", e);
                rank(Vec::new(), score)
            }
        };
        self.screen = Screen::Results {
            summary: RunSummary {
                difficulty,
                headline: headline(session.state(), session.loss_cause()),
                score,
                leaderboard,
            },
            remaining_ms: RESULT_SCREEN_MS,
        };
    }
}
