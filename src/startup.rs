use crate::app::Screen;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::game::GameScreen;
use crate::logo::Logo;
use crate::options::{Adjustable, OptKey, OptValue, Options};
use crate::session::Session;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{read, Event};
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

/// The screen shown before a run starts and again after one ends.  It owns
/// the idle [`Session`], which is handed to the [`GameScreen`] when play
/// begins and handed back (reset) when the run is over.
#[derive(Clone, Debug)]
pub(crate) struct StartScreen {
    config: Config,
    session: Session,
    selection: Selection,
    options: OptionsMenu,
    /// Set when this screen was reached by dying rather than by starting
    /// the program
    final_score: Option<u32>,
}

impl StartScreen {
    const HEADING_HEIGHT: u16 = 3;

    pub(crate) fn new(config: Config) -> StartScreen {
        let options = OptionsMenu::new(config.options);
        StartScreen {
            config,
            session: Session::new(),
            selection: Selection::default(),
            options,
            final_score: None,
        }
    }

    pub(crate) fn game_over(config: Config, session: Session, final_score: u32) -> StartScreen {
        let options = OptionsMenu::new(config.options);
        StartScreen {
            config,
            session,
            selection: Selection::default(),
            options,
            final_score: Some(final_score),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit) => return Some(Screen::Quit),
            (Selection::PlayButton, Command::Enter | Command::Space) | (_, Command::S) => {
                return Some(Screen::Game(self.play()))
            }
            (Selection::PlayButton, Command::Prev) => self.select(Selection::QuitButton, None),
            (Selection::PlayButton, Command::Down | Command::Next) => {
                self.select(Selection::Options, Some(true));
            }
            (Selection::Options, Command::Up | Command::Prev) => {
                if let Some(sel) = self.options.move_up() {
                    self.select(sel, None);
                }
            }
            (Selection::Options, Command::Down | Command::Next) => {
                if let Some(sel) = self.options.move_down() {
                    self.select(sel, None);
                }
            }
            (Selection::Options, Command::Left) => self.options.move_left(),
            (Selection::Options, Command::Right) => self.options.move_right(),
            (Selection::Options, Command::Space | Command::Enter) => self.options.toggle(),
            (Selection::QuitButton, Command::Enter | Command::Space) | (_, Command::Q) => {
                return Some(Screen::Quit);
            }
            (Selection::QuitButton, Command::Next) => self.select(Selection::PlayButton, None),
            (Selection::QuitButton, Command::Up | Command::Prev) => {
                self.select(Selection::Options, Some(false));
            }
            _ => (),
        }
        None
    }

    fn play(&mut self) -> GameScreen {
        let mut config = self.config.clone();
        config.options = self.options.to_options();
        // The session moves into the game; leave a fresh one behind in case
        // this screen is ever redrawn.
        let session = std::mem::replace(&mut self.session, Session::new());
        GameScreen::new(config, session)
    }

    fn select(&mut self, selection: Selection, first_option: Option<bool>) {
        self.selection = selection;
        if selection == Selection::Options {
            if let Some(first) = first_option {
                self.options.selection = if first {
                    Some(OptKey::min())
                } else {
                    Some(OptKey::max())
                };
            } else {
                self.options.selection = None;
            }
        }
    }
}

impl Widget for &StartScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, heading_area, play_area, options_area, quit_area] = Layout::vertical([
            Logo::HEIGHT,
            StartScreen::HEADING_HEIGHT,
            1,
            OptionsMenu::HEIGHT,
            1,
        ])
        .flex(Flex::Start)
        .spacing(1)
        .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        let heading = match self.final_score {
            Some(score) => Text::from_iter([
                Line::from(Span::styled("Game Over!", consts::GAME_OVER_STYLE)).centered(),
                Line::raw(format!("Score: {score}")).centered(),
            ]),
            None => Text::from_iter([
                Line::raw("Steer with the arrow keys.").centered(),
                Line::raw("Eat the food and don't hit anything!").centered(),
            ]),
        };
        heading.render(heading_area, buf);

        let play_style = if self.selection == Selection::PlayButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Play (", play_style),
            Span::styled("s", consts::KEY_STYLE.patch(play_style)),
            Span::styled(")]", play_style),
        ])
        .centered()
        .render(play_area, buf);

        let [options_area] = Layout::horizontal([OptionsMenu::WIDTH])
            .flex(Flex::Center)
            .areas(options_area);
        (&self.options).render(options_area, buf);

        let quit_style = if self.selection == Selection::QuitButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Quit (", quit_style),
            Span::styled("q", consts::KEY_STYLE.patch(quit_style)),
            Span::styled(")]", quit_style),
        ])
        .centered()
        .render(quit_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    Options,
    QuitButton,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct OptionsMenu {
    /// If the currently-selected start screen item is an element of this
    /// menu, then `selection` is `Some(key)`, where `key` is the key of the
    /// selected item within the `OptionsMenu`.
    selection: Option<OptKey>,
    settings: EnumMap<OptKey, OptValue>,
}

impl OptionsMenu {
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (OptKey::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const LABEL_VALUE_GUTTER: u16 = 2;
    const WIDTH: u16 = 2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + OptKey::DISPLAY_WIDTH + Self::LABEL_VALUE_GUTTER + OptValue::DISPLAY_WIDTH;

    fn new(options: Options) -> OptionsMenu {
        let settings = EnumMap::from_iter(OptKey::iter().map(|key| (key, options.get(key))));
        OptionsMenu {
            selection: None,
            settings,
        }
    }

    fn to_options(&self) -> Options {
        let mut opts = Options::default();
        for key in OptKey::iter() {
            opts.set(key, self.settings[key]);
        }
        opts
    }

    fn move_up(&mut self) -> Option<Selection> {
        self.selection = self.selection?.prev();
        self.selection.is_none().then_some(Selection::PlayButton)
    }

    fn move_down(&mut self) -> Option<Selection> {
        self.selection = self.selection?.next();
        self.selection.is_none().then_some(Selection::QuitButton)
    }

    fn move_left(&mut self) {
        if let Some(sel) = self.selection {
            self.settings[sel].decrease();
        }
    }

    fn move_right(&mut self) {
        if let Some(sel) = self.selection {
            self.settings[sel].increase();
        }
    }

    fn toggle(&mut self) {
        if let Some(sel) = self.selection {
            self.settings[sel].toggle();
        }
    }
}

impl Widget for &OptionsMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Options: ")
            .padding(Padding::horizontal(OptionsMenu::HORIZONTAL_PADDING));
        let menu_area = block.inner(area);
        block.render(area, buf);
        for ((key, value), row) in OptKey::iter()
            .map(|key| (key, self.settings[key]))
            .zip(menu_area.rows())
        {
            let selected = Some(key) == self.selection;
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let s = format!(
                "{pointer:pwidth$}{key:lwidth$}{space:gutter$}{value}",
                pointer = if selected { "»" } else { "" },
                pwidth = usize::from(OptionsMenu::POINTER_WIDTH),
                lwidth = usize::from(OptKey::DISPLAY_WIDTH),
                space = "",
                gutter = usize::from(OptionsMenu::LABEL_VALUE_GUTTER),
            );
            Span::styled(s, style).render(row, buf);
        }
    }
}
