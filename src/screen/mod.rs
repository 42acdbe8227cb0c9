mod popups;
use self::popups::{GameOver, Paused};
use crate::consts;
use crate::difficulty::speed_level;
use crate::game::{Direction, Session, Status};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
};

/// The in-game screen: status bar, board, and key help.  Pop-ups for the
/// paused & game-over states are drawn on top of the board.
#[derive(Debug)]
pub(crate) struct GameScreen<'a, R> {
    pub(crate) session: &'a Session<R>,
    pub(crate) best_score: u32,
    pub(crate) muted: bool,
    pub(crate) volume: f32,
}

impl<R> GameScreen<'_, R> {
    fn status_line(&self) -> Line<'static> {
        let speed = self.session.speed();
        Line::from(format!(
            " Score: {}  Best: {}  Speed: Lv.{} ({}ms)  {}",
            self.session.score(),
            self.best_score,
            speed_level(speed),
            speed.as_millis(),
            self.session.difficulty(),
        ))
    }

    fn sound_line(&self) -> Line<'static> {
        if self.muted {
            Line::from("Sound: muted ")
        } else {
            let percent = (self.volume * 100.0).round();
            Line::from(format!("Sound: {percent}% "))
        }
        .right_aligned()
    }

    fn help_line(&self) -> Line<'static> {
        let keys: &[(&'static str, &'static str)] = match self.session.status() {
            Status::Playing => &[
                ("←↓↑→", "move"),
                ("Space", "pause"),
                ("r", "restart"),
                ("Esc", "menu"),
                ("m", "mute"),
                ("q", "quit"),
            ],
            Status::Paused => &[
                ("Space", "resume"),
                ("r", "restart"),
                ("Esc", "menu"),
                ("m", "mute"),
                ("q", "quit"),
            ],
            Status::GameOver => &[
                ("Enter", "restart"),
                ("Esc", "menu"),
                ("m", "mute"),
                ("q", "quit"),
            ],
            Status::Menu => &[],
        };
        let mut line = Line::default();
        for (i, &(key, what)) in keys.iter().enumerate() {
            if i > 0 {
                line.push_span("  ");
            }
            line.push_span(Span::styled(key, consts::KEY_STYLE));
            line.push_span(" ");
            line.push_span(what);
        }
        line.centered()
    }
}

impl<R> Widget for GameScreen<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [status_area, middle_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);

        buf.set_style(status_area, consts::STATUS_BAR_STYLE);
        self.status_line().render(status_area, buf);
        self.sound_line().render(status_area, buf);

        let grid = self.session.grid();
        let block_area = center_rect(
            middle_area,
            Size {
                width: grid.size().width.saturating_add(2),
                height: grid.size().height.saturating_add(2),
            },
        );
        let block = Block::bordered();
        let mut board = Canvas {
            area: block.inner(block_area),
            buf,
        };
        let snake = self.session.snake();
        for p in snake.body() {
            board.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        board.draw_cell(self.session.food(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        if self.session.status() == Status::GameOver {
            board.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                snake.head(),
                head_symbol(self.session.direction()),
                consts::SNAKE_STYLE,
            );
        }
        block.render(block_area, buf);

        self.help_line().render(help_area, buf);

        match self.session.status() {
            Status::Paused => {
                let popup_area = center_rect(middle_area, Paused::SIZE);
                Clear.render(popup_area, buf);
                Paused.render(popup_area, buf);
            }
            Status::GameOver => {
                let score = self.session.score();
                let popup = GameOver {
                    score,
                    new_best: score > 0 && score == self.best_score,
                    speed_level: speed_level(self.session.speed()),
                };
                let popup_area = center_rect(middle_area, popup.size());
                Clear.render(popup_area, buf);
                popup.render(popup_area, buf);
            }
            Status::Playing | Status::Menu => (),
        }
    }
}

fn head_symbol(direction: Direction) -> char {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

/// The inside of the board's border, addressed in grid coordinates
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if !self.area.contains(Position::new(x, y)) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }
}
