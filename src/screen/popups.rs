use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect, Size},
    style::Style,
    text::{Line, Span, Text},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// A pop-up shown over the board while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused;

impl Paused {
    const TEXT: &'static str = "Press Space to continue";

    /// The size that should be used for the `Rect` passed to
    /// `Paused::render()`
    #[allow(clippy::cast_possible_truncation)]
    pub(super) const SIZE: Size = Size {
        width: Self::TEXT.len() as u16 + 4,
        height: 3,
    };
}

impl Widget for Paused {
    /*
     * ┌──────── PAUSED ─────────┐
     * │ Press Space to continue │
     * └─────────────────────────┘
     */
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        Line::from_iter([
            Span::raw("Press "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" to continue"),
        ])
        .centered()
        .render(inner, buf);
    }
}

/// A pop-up shown over the board once the snake has crashed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct GameOver {
    pub(super) score: u32,

    /// Whether `score` just became the best score
    pub(super) new_best: bool,

    pub(super) speed_level: u32,
}

impl GameOver {
    const WIDTH: u16 = 30;

    pub(super) fn size(self) -> Size {
        Size {
            width: Self::WIDTH,
            height: if self.new_best { 8 } else { 7 },
        }
    }

    fn text(self) -> Text<'static> {
        let mut lines = vec![Line::from(format!("Final score: {}", self.score))];
        if self.new_best {
            lines.push(Line::styled("NEW HIGH SCORE!", consts::HIGH_SCORE_STYLE));
        }
        lines.push(Line::from(format!("Speed level: {}", self.speed_level)));
        lines.push(Line::default());
        lines.push(Line::from_iter([
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("Enter", consts::KEY_STYLE),
            Span::raw("/"),
            Span::styled("r", consts::KEY_STYLE),
            Span::raw(": restart"),
        ]));
        lines.push(Line::from_iter([
            Span::styled("Esc", consts::KEY_STYLE),
            Span::raw(": menu"),
        ]));
        Text::from(lines).centered()
    }
}

impl Widget for GameOver {
    /*
     * ┌──────── GAME OVER ─────────┐
     * │      Final score: 40       │
     * │      NEW HIGH SCORE!       │
     * │      Speed level: 12       │
     * │                            │
     * │   Space/Enter/r: restart   │
     * │         Esc: menu          │
     * └────────────────────────────┘
     */
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" GAME OVER ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        block.render(area, buf);
        self.text().render(inner, buf);
    }
}
