//! Non-board screens: main menu, revive prompt, advertisement and results.
//!
//! Each view lays its buttons out from the viewport alone, so the same call answers
//! both "what do I draw" and "what did the pointer hit".

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::{Command, Difficulty, LEADERBOARD_SHOWN};

const TITLE: CellStyle = CellStyle::new(Rgb::new(245, 222, 179), Rgb::new(0, 0, 0));
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const BUTTON: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(100, 100, 100));
const ACCENT: CellStyle = CellStyle::new(Rgb::new(255, 215, 0), Rgb::new(0, 0, 0));

const BUTTON_W: u16 = 28;
const BUTTON_H: u16 = 3;

/// Clickable rectangle bound to a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub command: Command,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Button {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        fb.fill_rect(self.x, self.y, self.w, self.h, ' ', BUTTON);
        fb.draw_box(self.x, self.y, self.w, self.h, BUTTON.bold());
        fb.put_str_centered(self.x, self.w, self.y + self.h / 2, self.label, BUTTON.bold());
    }
}

fn hit(buttons: &[Button], x: u16, y: u16) -> Command {
    buttons
        .iter()
        .find(|b| b.contains(x, y))
        .map_or(Command::None, |b| b.command)
}

/// Vertical stack of equally sized buttons centered horizontally from row `top`.
fn stack(viewport: Viewport, top: u16, items: &[(&'static str, Command)]) -> Vec<Button> {
    let x = viewport.width.saturating_sub(BUTTON_W) / 2;
    items
        .iter()
        .enumerate()
        .map(|(i, &(label, command))| Button {
            label,
            command,
            x,
            y: top + i as u16 * (BUTTON_H + 1),
            w: BUTTON_W,
            h: BUTTON_H,
        })
        .collect()
}

fn difficulty_button_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "1  Easy (2 layers)",
        Difficulty::Hard => "2  Hard (3 layers)",
        Difficulty::Hell => "3  Hell (4 layers)",
        Difficulty::Purgatory => "4  Purgatory (5 layers)",
    }
}

/// Main menu: one button per difficulty plus Quit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    fn top(viewport: Viewport) -> u16 {
        let count = Difficulty::ALL.len() as u16 + 1;
        let height = 2 + count * (BUTTON_H + 1);
        viewport.height.saturating_sub(height) / 2
    }

    pub fn buttons(&self, viewport: Viewport) -> Vec<Button> {
        let mut items: Vec<(&'static str, Command)> = Difficulty::ALL
            .iter()
            .map(|&d| (difficulty_button_label(d), Command::StartGame(d)))
            .collect();
        items.push(("q  Quit", Command::Quit));
        stack(viewport, Self::top(viewport) + 2, &items)
    }

    /// Command under the pointer, or [`Command::None`].
    pub fn command_at(&self, viewport: Viewport, x: u16, y: u16) -> Command {
        hit(&self.buttons(viewport), x, y)
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        fb.put_str_centered(0, viewport.width, Self::top(viewport), "TRIPLE TILES", TITLE.bold());
        for button in self.buttons(viewport) {
            button.draw(fb);
        }
    }
}

/// Offer shown when the slot overflows for the first time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevivePromptView;

impl RevivePromptView {
    fn top(viewport: Viewport) -> u16 {
        viewport.height.saturating_sub(4 + 2 * (BUTTON_H + 1)) / 2
    }

    pub fn buttons(&self, viewport: Viewport) -> Vec<Button> {
        stack(
            viewport,
            Self::top(viewport) + 4,
            &[
                ("y  Watch ad to revive", Command::AcceptRevive),
                ("n  Give up", Command::DeclineRevive),
            ],
        )
    }

    pub fn command_at(&self, viewport: Viewport, x: u16, y: u16) -> Command {
        hit(&self.buttons(viewport), x, y)
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        let top = Self::top(viewport);
        fb.put_str_centered(0, viewport.width, top, "The slot is full!", ACCENT.bold());
        fb.put_str_centered(
            0,
            viewport.width,
            top + 1,
            "Watch an ad to keep playing?",
            TEXT,
        );
        for button in self.buttons(viewport) {
            button.draw(fb);
        }
    }
}

/// Placeholder advertisement that has to run out before it can be closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvertView;

impl AdvertView {
    /// `remaining_ms` is the time left before the advertisement may be closed.
    pub fn render_into(&self, viewport: Viewport, remaining_ms: u32, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = 36.min(viewport.width);
        let h = 7.min(viewport.height);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        fb.draw_box(x, y, w, h, ACCENT);
        fb.put_str_centered(x, w, y + 2, "ADVERTISEMENT", ACCENT.bold());

        if remaining_ms > 0 {
            let secs = remaining_ms.div_ceil(1000);
            let label = "closes in ";
            let len = label.len() as u16 + digits(secs) + 1;
            let lx = x + w.saturating_sub(len) / 2;
            fb.put_str(lx, y + 4, label, TEXT);
            let nx = lx + label.len() as u16;
            let n = fb.put_u32(nx, y + 4, secs, TEXT.bold());
            fb.put_char(nx + n, y + 4, 's', TEXT);
        } else {
            fb.put_str_centered(x, w, y + 4, "click or press any key", TEXT.bold());
        }
    }
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// End-of-run summary with the top of the leaderboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultView;

impl ResultView {
    pub fn render_into(
        &self,
        viewport: Viewport,
        headline: &str,
        score: u32,
        leaderboard: &[u32],
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let shown = leaderboard.len().min(LEADERBOARD_SHOWN) as u16;
        let top = viewport.height.saturating_sub(6 + shown) / 2;
        fb.put_str_centered(0, viewport.width, top, headline, ACCENT.bold());

        let label = "Score: ";
        let len = label.len() as u16 + digits(score);
        let x = viewport.width.saturating_sub(len) / 2;
        fb.put_str(x, top + 2, label, TEXT);
        fb.put_u32(x + label.len() as u16, top + 2, score, TEXT.bold());

        fb.put_str_centered(0, viewport.width, top + 4, "Leaderboard", TITLE.bold());
        for (i, &entry) in leaderboard.iter().take(LEADERBOARD_SHOWN).enumerate() {
            let row = top + 5 + i as u16;
            let x = viewport.width.saturating_sub(12) / 2;
            fb.put_u32(x, row, i as u32 + 1, TEXT);
            fb.put_char(x + 1, row, '.', TEXT);
            fb.put_u32(x + 3, row, entry, TEXT.bold());
        }
    }
}
