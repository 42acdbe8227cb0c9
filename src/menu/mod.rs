mod widgets;
use self::widgets::{Instructions, Logo};
use crate::consts;
use crate::difficulty::Difficulty;
use crate::input::Command;
use crate::util::{get_display_area, EnumExt};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
};

/// The difficulty-selection screen shown while the game is in
/// [`Status::Menu`][crate::game::Status::Menu]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
}

impl MainMenu {
    pub(crate) fn new(difficulty: Difficulty) -> MainMenu {
        MainMenu {
            selection: Selection::Difficulty(difficulty),
        }
    }

    /// Handle a command.  Returns `Some` if the user made a choice.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<MenuOutcome> {
        match (self.selection, cmd) {
            (Selection::Difficulty(d), Command::Enter) => return Some(MenuOutcome::Play(d)),
            (Selection::QuitButton, Command::Enter) => return Some(MenuOutcome::Quit),
            (_, Command::Digit(c)) => {
                let d = c
                    .to_digit(10)
                    .and_then(|n| usize::try_from(n).ok())
                    .and_then(|n| n.checked_sub(1))
                    .filter(|&i| i < Difficulty::LENGTH)
                    .map(Difficulty::from_usize)?;
                self.selection = Selection::Difficulty(d);
                return Some(MenuOutcome::Play(d));
            }
            (Selection::Difficulty(d), Command::Up) => {
                if let Some(prev) = d.prev() {
                    self.selection = Selection::Difficulty(prev);
                }
            }
            (Selection::Difficulty(d), Command::Down) => {
                self.selection = d
                    .next()
                    .map_or(Selection::QuitButton, Selection::Difficulty);
            }
            (Selection::QuitButton, Command::Up) => {
                self.selection = Selection::Difficulty(Difficulty::max());
            }
            (_, Command::Home) => self.selection = Selection::Difficulty(Difficulty::min()),
            (_, Command::End) => self.selection = Selection::QuitButton,
            _ => (),
        }
        None
    }

    /// Return a widget for drawing the menu along with the current best
    /// score
    pub(crate) fn view(&self, best_score: u32) -> MenuView<'_> {
        MenuView {
            menu: self,
            best_score,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MenuOutcome {
    Play(Difficulty),
    Quit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Selection {
    Difficulty(Difficulty),
    QuitButton,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MenuView<'a> {
    menu: &'a MainMenu,
    best_score: u32,
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, difficulty_area, best_area, quit_area] =
            Layout::vertical([
                Logo::HEIGHT,
                Instructions::HEIGHT,
                DifficultyList::HEIGHT,
                1,
                1,
            ])
            .flex(Flex::Start)
            .spacing(1)
            .areas(display);

        let [logo_area] = Layout::horizontal([Logo::WIDTH])
            .flex(Flex::Center)
            .areas(logo_area);
        Logo.render(logo_area, buf);

        Instructions.render(instructions_area, buf);

        let [difficulty_area] = Layout::horizontal([DifficultyList::WIDTH])
            .flex(Flex::Center)
            .areas(difficulty_area);
        let selected = match self.menu.selection {
            Selection::Difficulty(d) => Some(d),
            Selection::QuitButton => None,
        };
        DifficultyList { selected }.render(difficulty_area, buf);

        Line::from(format!("Best score: {}", self.best_score))
            .centered()
            .render(best_area, buf);

        let qstyle = if self.menu.selection == Selection::QuitButton {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[Quit (", qstyle),
            Span::styled("q", consts::KEY_STYLE.patch(qstyle)),
            Span::styled(")]", qstyle),
        ])
        .centered()
        .render(quit_area, buf);
    }
}

/// The bordered list of difficulties with their starting speeds
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DifficultyList {
    selected: Option<Difficulty>,
}

impl DifficultyList {
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (Difficulty::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1;
    const POINTER_WIDTH: u16 = 2;
    const KEY_WIDTH: u16 = 4;
    const NAME_GUTTER: u16 = 2;
    const SPEED_WIDTH: u16 = 8;
    const DESCRIPTION_WIDTH: u16 = 35;
    const WIDTH: u16 = 2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + Self::KEY_WIDTH + Difficulty::DISPLAY_WIDTH + Self::NAME_GUTTER + Self::SPEED_WIDTH + Self::DESCRIPTION_WIDTH;
}

impl Widget for DifficultyList {
    /*
     * ┌ Difficulty: ──────────────────────────────────────────────┐
     * │   (1) Easy    200 ms  Slow moves, good for beginners      │
     * │ » (2) Medium  150 ms  Moderate speed, balanced play       │
     * │   (3) Hard    100 ms  Fast moves, a challenge for experts │
     * └───────────────────────────────────────────────────────────┘
     */
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Difficulty: ")
            .padding(Padding::horizontal(Self::HORIZONTAL_PADDING));
        let list_area = block.inner(area);
        block.render(area, buf);
        for ((i, d), row) in Difficulty::iter().enumerate().zip(list_area.rows()) {
            let selected = Some(d) == self.selected;
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let speed = format!("{} ms", d.base_speed().as_millis());
            Line::from_iter([
                Span::styled(if selected { "» " } else { "  " }, style),
                Span::styled("(", style),
                Span::styled((i + 1).to_string(), consts::KEY_STYLE.patch(style)),
                Span::styled(") ", style),
                Span::styled(
                    format!(
                        "{d:dwidth$}{space:gutter$}{speed:swidth$}{desc}",
                        dwidth = usize::from(Difficulty::DISPLAY_WIDTH),
                        space = "",
                        gutter = usize::from(Self::NAME_GUTTER),
                        swidth = usize::from(Self::SPEED_WIDTH),
                        desc = d.description(),
                    ),
                    style,
                ),
            ])
            .render(row, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::buffer_row;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn navigate() {
        let mut menu = MainMenu::new(Difficulty::Medium);
        assert_eq!(menu.handle_command(Command::Up), None);
        assert_eq!(menu.selection, Selection::Difficulty(Difficulty::Easy));
        assert_eq!(menu.handle_command(Command::Up), None);
        assert_eq!(menu.selection, Selection::Difficulty(Difficulty::Easy));
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.selection, Selection::Difficulty(Difficulty::Hard));
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.selection, Selection::QuitButton);
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.selection, Selection::QuitButton);
        assert_eq!(menu.handle_command(Command::Up), None);
        assert_eq!(menu.selection, Selection::Difficulty(Difficulty::Hard));
        assert_eq!(menu.handle_command(Command::Home), None);
        assert_eq!(menu.selection, Selection::Difficulty(Difficulty::Easy));
        assert_eq!(menu.handle_command(Command::End), None);
        assert_eq!(menu.selection, Selection::QuitButton);
    }

    #[test]
    fn enter() {
        let mut menu = MainMenu::new(Difficulty::Hard);
        assert_eq!(
            menu.handle_command(Command::Enter),
            Some(MenuOutcome::Play(Difficulty::Hard))
        );
        let _ = menu.handle_command(Command::End);
        assert_eq!(menu.handle_command(Command::Enter), Some(MenuOutcome::Quit));
    }

    #[rstest]
    #[case('1', Some(MenuOutcome::Play(Difficulty::Easy)))]
    #[case('2', Some(MenuOutcome::Play(Difficulty::Medium)))]
    #[case('3', Some(MenuOutcome::Play(Difficulty::Hard)))]
    #[case('0', None)]
    #[case('4', None)]
    fn digit(#[case] c: char, #[case] outcome: Option<MenuOutcome>) {
        let mut menu = MainMenu::new(Difficulty::Medium);
        assert_eq!(menu.handle_command(Command::Digit(c)), outcome);
    }

    #[test]
    fn ignores_other_commands() {
        let mut menu = MainMenu::new(Difficulty::Medium);
        for cmd in [Command::Left, Command::Right, Command::Space, Command::R] {
            assert_eq!(menu.handle_command(cmd), None);
        }
        assert_eq!(menu.selection, Selection::Difficulty(Difficulty::Medium));
    }

    #[test]
    fn draw_initial() {
        let menu = MainMenu::new(Difficulty::Medium);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.view(120).render(area, &mut buffer);
        assert_eq!(buffer_row(&buffer, 0).trim(), "____              _");
        assert!(buffer_row(&buffer, 6).contains("⚬<  ●"));
        assert!(buffer_row(&buffer, 8).contains("Steer with"));
        assert_eq!(
            buffer_row(&buffer, 12).trim(),
            "┌ Difficulty: ──────────────────────────────────────────────┐"
        );
        assert_eq!(
            buffer_row(&buffer, 13).trim(),
            "│   (1) Easy    200 ms  Slow moves, good for beginners      │"
        );
        assert_eq!(
            buffer_row(&buffer, 14).trim(),
            "│ » (2) Medium  150 ms  Moderate speed, balanced play       │"
        );
        assert_eq!(
            buffer_row(&buffer, 15).trim(),
            "│   (3) Hard    100 ms  Fast moves, a challenge for experts │"
        );
        assert_eq!(buffer_row(&buffer, 18).trim(), "Best score: 120");
        assert_eq!(buffer_row(&buffer, 20).trim(), "[Quit (q)]");
        let x = buffer_row(&buffer, 14).chars().position(|c| c == '»').unwrap();
        let x = u16::try_from(x).unwrap();
        assert_eq!(
            buffer.cell((x, 14)).unwrap().style().add_modifier,
            consts::MENU_SELECTION_STYLE.add_modifier
        );
    }

    #[test]
    fn draw_quit_selected() {
        let mut menu = MainMenu::new(Difficulty::Medium);
        let _ = menu.handle_command(Command::End);
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        menu.view(0).render(area, &mut buffer);
        assert!(!buffer_row(&buffer, 14).contains('»'));
        assert_eq!(buffer_row(&buffer, 18).trim(), "Best score: 0");
        let start = u16::try_from(buffer_row(&buffer, 20).find('[').unwrap()).unwrap();
        assert_eq!(
            buffer.cell((start, 20)).unwrap().style().add_modifier,
            consts::MENU_SELECTION_STYLE.add_modifier
        );
        assert_eq!(
            buffer.cell((start + 7, 20)).unwrap().style().fg,
            consts::KEY_STYLE.fg
        );
    }
}
