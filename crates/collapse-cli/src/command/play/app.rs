use collapse_engine::{GameSession, catalog};
use crossterm::event::{Event, KeyCode, read};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize as _},
    text::{Line, Text},
};

use crate::{
    leaderboard::Leaderboard,
    schema::{
        profile::Profile,
        record::{DailyRecord, SavedGame},
    },
    store::DataStore,
    ui::widgets::GridDisplay,
    util,
};

const NOTICE_LINES: u16 = 3;

/// Interactive play screen.
///
/// The game has no time element, so the loop simply blocks on terminal
/// events and redraws after each one. All persistence happens here; a
/// failed write surfaces as a notice and never interrupts the game.
#[derive(Debug)]
pub struct PlayApp {
    store: DataStore,
    session: GameSession,
    leaderboard: Leaderboard,
    profile: Profile,
    daily_record: Option<DailyRecord>,
    cursor: (usize, usize),
    notices: Vec<String>,
    is_exiting: bool,
}

impl PlayApp {
    /// Restores the autosaved game if one exists, otherwise starts a new
    /// randomly seeded game.
    pub fn load(store: DataStore) -> anyhow::Result<Self> {
        let profile = store.ensure_profile()?;
        let leaderboard = store.load_leaderboard()?;
        let achievements = store.load_achievements()?;
        let daily_record = store.load_daily_record()?;
        let splits = daily_record
            .as_ref()
            .map(|record| record.splits.clone())
            .unwrap_or_default();

        let mut notices = Vec::new();
        let session = match store.load_autosave()? {
            Some(SavedGame { seed, moves }) => {
                notices.push("Resumed the saved game".to_string());
                GameSession::resume(seed, moves.as_str(), achievements, splits)
            }
            None => {
                let session = GameSession::new(random_seed(), achievements, splits);
                store.save_autosave(&SavedGame {
                    seed: session.grid().seed(),
                    moves: session.grid().moves().clone(),
                })?;
                session
            }
        };

        Ok(Self {
            store,
            session,
            leaderboard,
            profile,
            daily_record,
            cursor: (0, 0),
            notices,
            is_exiting: false,
        })
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        while !self.is_exiting {
            terminal.draw(|frame| self.draw(frame))?;
            let event = read()?;
            self.handle_event(&event);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        let is_active = self.session.state().is_active();

        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left => self.move_cursor(-1, 0),
                KeyCode::Right => self.move_cursor(1, 0),
                // Row 0 is the bottom of a column, so "up" on screen is +1
                KeyCode::Up => self.move_cursor(0, 1),
                KeyCode::Down => self.move_cursor(0, -1),
                KeyCode::Enter | KeyCode::Char(' ') if is_active => self.click_cursor(),
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let grid = self.session.grid();
        let (col, row) = self.cursor;
        let col = col.saturating_add_signed(dx).min(grid.width() - 1);
        let row = row.saturating_add_signed(dy).min(grid.height() - 1);
        self.cursor = (col, row);
    }

    fn click_cursor(&mut self) {
        let (col, row) = self.cursor;
        let report = self.session.click(col, row);

        for id in &report.unlocked {
            let description = catalog()
                .iter()
                .find(|achievement| achievement.id == *id)
                .map_or(*id, |achievement| achievement.description);
            self.notice(format!("Achievement unlocked: {description}"));
        }
        if !report.unlocked.is_empty() {
            let result = self.store.save_achievements(self.session.achievements());
            self.note_err(result);
        }

        if report.game_over {
            self.finish_game();
        } else if report.score_gain > 0 {
            let result = self.store.save_autosave(&SavedGame {
                seed: self.session.grid().seed(),
                moves: self.session.grid().moves().clone(),
            });
            self.note_err(result);
        }
    }

    fn finish_game(&mut self) {
        let grid = self.session.grid();
        let score = grid.score();
        let seed = grid.seed();
        let moves = grid.moves().clone();
        let splits = grid.score_splits().to_vec();
        self.notice(format!("Game over at {score} points. Press n for a new game"));

        let result = self.store.clear_autosave();
        self.note_err(result);

        let result = self
            .leaderboard
            .submit(&self.profile, score, seed, moves.as_str())
            .and_then(|()| self.store.save_leaderboard(&self.leaderboard));
        self.note_err(result);

        let best = self.daily_record.as_ref().map_or(0, |record| record.score);
        if score > best {
            self.notice("New daily best".to_string());
            let record = DailyRecord {
                date: util::today_utc_string(),
                score,
                splits,
            };
            let result = self.store.save_daily_record(&record);
            self.note_err(result);
            self.daily_record = Some(record);
        }
    }

    fn new_game(&mut self) {
        let achievements = self.session.achievements().clone();
        let splits = self
            .daily_record
            .as_ref()
            .map(|record| record.splits.clone())
            .unwrap_or_default();
        self.session = GameSession::new(random_seed(), achievements, splits);
        self.notices.clear();

        let result = self.store.save_autosave(&SavedGame {
            seed: self.session.grid().seed(),
            moves: self.session.grid().moves().clone(),
        });
        self.note_err(result);
    }

    fn notice(&mut self, message: String) {
        self.notices.push(message);
        if self.notices.len() > usize::from(NOTICE_LINES) {
            self.notices.remove(0);
        }
    }

    fn note_err(&mut self, result: anyhow::Result<()>) {
        if let Err(err) = result {
            self.notice(format!("Save failed: {err:#}"));
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let grid = self.session.grid();

        let mut header = vec![Line::from(format!("Score: {}", grid.score()))];
        match &self.daily_record {
            Some(record) => header.push(Line::from(format!("Daily best: {}", record.score))),
            None => header.push(Line::from("Daily best: -")),
        }
        if let Some(delta) = self.session.split_delta() {
            let style = if delta >= 0 {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            header.push(Line::from(format!("Split: {delta:+}")).style(style));
        } else if self.session.state().is_over() {
            header.push(Line::from("Game over").bold());
        }

        let notices = Text::from_iter(self.notices.iter().map(String::as_str));
        let help_text = Text::from(
            "Controls: Arrows (Move) | Enter/Space (Collapse) | n (New Game) | q (Quit)",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();

        let [header_area, board_area, notice_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(GridDisplay::height(grid)),
            Constraint::Length(NOTICE_LINES),
            Constraint::Length(1),
        ])
        .areas::<4>(frame.area());
        let [board_area] =
            Layout::horizontal([Constraint::Length(GridDisplay::width(grid))])
                .areas::<1>(board_area);

        frame.render_widget(Text::from(header), header_area);
        let cursor = self.session.state().is_active().then_some(self.cursor);
        frame.render_widget(GridDisplay::new(grid, cursor), board_area);
        frame.render_widget(notices, notice_area);
        frame.render_widget(help_text, help_area);
    }
}

fn random_seed() -> u64 {
    u64::from(rand::random::<u32>())
}
