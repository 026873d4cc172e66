use crate::app::Screen;
use crate::audio::{AudioCue, AudioPort, Bell};
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::session::{Cell, Direction, Session};
use crate::startup::StartScreen;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::time::{Duration, Instant};

/// A run in progress: the [`Session`] plus the timer and terminal plumbing
/// around it
#[derive(Clone, Debug)]
pub(crate) struct GameScreen<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    config: Config,
    audio: Bell,
    interval: Duration,
    next_tick: Option<Instant>,
}

impl<R: Rng> GameScreen<R> {
    pub(crate) fn new(config: Config, session: Session<R>) -> GameScreen<R> {
        let mut audio = Bell::new(config.options.sound);
        // A still-playing game-over effect from the previous run must not
        // bleed into this one.
        audio.reset_game_over();
        let interval = config.options.difficulty.tick_interval();
        let mut game = GameScreen {
            session,
            config,
            audio,
            interval,
            next_tick: None,
        };
        // Take the first step right away so the snake is moving and the
        // food is on the board before the first timer tick fires.
        game.session.advance(&mut game.audio);
        game
    }
}

impl GameScreen {
    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.next_tick.is_none() {
            self.next_tick = Some(Instant::now() + self.interval);
        }
        let when = self.next_tick.expect("next_tick should be Some");
        let wait = when.saturating_duration_since(Instant::now());
        if wait.is_zero() || !poll(wait)? {
            self.next_tick = None;
            let outcome = self.session.advance(&mut self.audio);
            if outcome.collided {
                return Ok(Some(self.end_game()));
            }
            Ok(None)
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn end_game(&mut self) -> Screen {
        self.audio.play(AudioCue::GameOver);
        let final_score = self.session.score();
        self.session.reset();
        Screen::Start(StartScreen::game_over(
            self.config.clone(),
            self.session.clone(),
            final_score,
        ))
    }
}

impl<R> GameScreen<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Up => self.session.steer(Direction::Up),
            Command::Down => self.session.steer(Direction::Down),
            Command::Left => self.session.steer(Direction::Left),
            Command::Right => self.session.steer(Direction::Right),
            // Everything else is a menu key; during a run it does nothing.
            _ => (),
        }
        None
    }
}

impl<R> Widget for &GameScreen<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, field_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(" Score: {}", self.session.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(
            field_area,
            Size {
                width: consts::GRID_WIDTH.saturating_add(2),
                height: consts::GRID_HEIGHT.saturating_add(2),
            },
        );
        Block::bordered().render(block_area, buf);

        let field = block_area.inner(Margin::new(1, 1));
        buf.set_style(field, self.config.theme.background());
        let mut playfield = Playfield { area: field, buf };
        for cell in self.session.snake().cells() {
            playfield.draw_cell(cell, consts::SNAKE_SYMBOL, self.config.theme.snake());
        }
        if let Some(food) = self.session.food_cell() {
            playfield.draw_cell(food, consts::FOOD_SYMBOL, self.config.theme.food());
        }
    }
}

/// Maps pixel-unit session cells onto one-character buffer cells
#[derive(Debug, Eq, PartialEq)]
struct Playfield<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Playfield<'_> {
    fn draw_cell(&mut self, cell: Cell, symbol: char, style: Style) {
        let Ok(col) = u16::try_from(cell.x / consts::CELL_SIZE) else {
            return;
        };
        let Ok(row) = u16::try_from(cell.y / consts::CELL_SIZE) else {
            return;
        };
        // An out-of-bounds head (the frame drawn after a wall hit) is
        // simply not shown.
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let pos = Position::new(self.area.x + col, self.area.y + row);
        if let Some(cell) = self.buf.cell_mut(pos) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}
