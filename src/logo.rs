use crate::consts;
use ratatui::{buffer::Buffer, layout::Rect, text::Text, widgets::Widget};

/// The big "SnakeZ" banner on the start screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Logo;

impl Logo {
    pub(crate) const WIDTH: u16 = 36;
    pub(crate) const HEIGHT: u16 = 5;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::HEIGHT as usize] = [
         " ____              _          _____ ",
         "/ ___| _ __   __ _| | _____  |__  / ",
        r"\___ \| '_ \ / _` | |/ / _ \   / /  ",
         " ___) | | | | (_| |   <  __/  / /_  ",
        r"|____/|_| |_|\__,_|_|\_\___| /____| ",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(area, buf);
    }
}
