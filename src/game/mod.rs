mod direction;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::grid::{Grid, GridError};
pub(crate) use self::snake::Snake;
use crate::consts;
use crate::difficulty::{current_speed, Difficulty};
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use std::time::Duration;

/// The state of one playthrough: everything from the snake's position to
/// whether the game is even running.
///
/// Every transition method either applies completely or leaves the session
/// untouched, and returns the [`Signal`]s that the transition raised for the
/// audio side of the program.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Position,
    direction: Direction,
    score: u32,
    status: Status,
    difficulty: Difficulty,
}

impl<R: Rng> Session<R> {
    /// Create a session sitting at the menu with `difficulty` preselected.
    /// The board is laid out as for a fresh game so that there is always a
    /// valid snake & food to show.
    pub(crate) fn new(grid: Grid, difficulty: Difficulty, rng: R) -> Session<R> {
        let mut session = Session {
            rng,
            grid,
            snake: Snake::new(),
            food: Position::ORIGIN,
            direction: Direction::Right,
            score: 0,
            status: Status::Menu,
            difficulty,
        };
        session.lay_out();
        session
    }

    /// Start a new game at the given difficulty, whatever the current
    /// status.
    pub(crate) fn select_difficulty(&mut self, difficulty: Difficulty) -> &'static [Signal] {
        tracing::info!(%difficulty, "Starting new game");
        self.difficulty = difficulty;
        self.lay_out();
        self.status = Status::Playing;
        &[Signal::StartMusic]
    }

    /// Start a new game at the current difficulty, whatever the current
    /// status.
    pub(crate) fn reset(&mut self) -> &'static [Signal] {
        tracing::info!(difficulty = %self.difficulty, "Restarting game");
        self.lay_out();
        self.status = Status::Playing;
        &[Signal::StartMusic]
    }

    /// Move the snake one cell forwards.  Does nothing unless the game is
    /// being played.
    pub(crate) fn advance(&mut self) -> &'static [Signal] {
        if self.status != Status::Playing {
            return &[];
        }
        let Some(head) = self
            .direction
            .advance(self.snake.head(), self.grid)
            .filter(|&p| !self.snake.contains(p))
        else {
            tracing::info!(score = self.score, "Game over: collision");
            self.status = Status::GameOver;
            return &[Signal::GameOver, Signal::StopMusic];
        };
        self.snake.push_head(head);
        if head != self.food {
            self.snake.pop_tail();
            return &[];
        }
        self.score = self.score.saturating_add(consts::FOOD_SCORE);
        tracing::debug!(score = self.score, "Food eaten");
        if let Some(food) = self.free_cell() {
            self.food = food;
            &[Signal::Eat]
        } else {
            tracing::info!(score = self.score, "Game over: no room left for food");
            self.status = Status::GameOver;
            &[Signal::Eat, Signal::GameOver, Signal::StopMusic]
        }
    }

    /// Put the snake, food, direction & score back to how they are at the
    /// start of a game
    fn lay_out(&mut self) {
        self.snake = Snake::new();
        self.direction = Direction::Right;
        self.score = 0;
        if let Some(food) = self.free_cell() {
            self.food = food;
        }
    }

    /// Pick a random cell not occupied by the snake
    fn free_cell(&mut self) -> Option<Position> {
        let snake = &self.snake;
        self.grid
            .positions()
            .filter(|&p| !snake.contains(p))
            .choose(&mut self.rng)
    }
}

impl<R> Session<R> {
    /// Leave the current game, if any, and go back to the menu
    pub(crate) fn return_to_menu(&mut self) -> &'static [Signal] {
        if self.status != Status::Menu {
            tracing::info!(score = self.score, "Returning to menu");
        }
        self.status = Status::Menu;
        &[Signal::StopMusic]
    }

    /// Pause a running game or resume a paused one.  Does nothing in any
    /// other status.
    pub(crate) fn toggle_pause(&mut self) -> &'static [Signal] {
        match self.status {
            Status::Playing => {
                self.status = Status::Paused;
                &[Signal::StopMusic]
            }
            Status::Paused => {
                self.status = Status::Playing;
                &[Signal::StartMusic]
            }
            Status::Menu | Status::GameOver => &[],
        }
    }

    /// Point the snake in a new direction.  Requests to turn the snake
    /// straight back onto itself are ignored.
    pub(crate) fn change_direction(&mut self, direction: Direction) {
        if direction != self.direction.reverse() && direction != self.direction {
            tracing::debug!(?direction, "Changing direction");
            self.direction = direction;
        }
    }

    /// The interval at which the snake should currently move
    pub(crate) fn speed(&self) -> Duration {
        current_speed(self.score, self.difficulty)
    }

    pub(crate) fn status(&self) -> Status {
        self.status
    }

    pub(crate) fn playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Position {
        self.food
    }

    pub(crate) fn grid(&self) -> Grid {
        self.grid
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    /// Choosing a difficulty
    Menu,
    Playing,
    Paused,
    /// The snake has crashed; the board is left as it was just before the
    /// crash.
    GameOver,
}

/// Something the audio side of the program should react to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Signal {
    StartMusic,
    StopMusic,
    Eat,
    GameOver,
}


#[cfg(test)]
mod tests {
    use super::testing::{playing_session, rng};
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashSet;

    fn assert_valid(session: &Session<impl Rng>) {
        let cells = session.snake().segments().collect::<HashSet<_>>();
        assert_eq!(cells.len(), session.snake().len(), "snake overlaps itself");
        assert!(session.snake().segments().all(|p| session.grid().contains(p)));
        if session.status() != Status::GameOver {
            assert!(!cells.contains(&session.food()), "food is under the snake");
        }
        assert!(session.grid().contains(session.food()));
        assert_eq!(session.score() % consts::FOOD_SCORE, 0);
    }

    #[test]
    fn new_session_at_menu() {
        let session = Session::new(Grid::default(), Difficulty::Hard, rng());
        assert_eq!(session.status(), Status::Menu);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_eq!(session.score(), 0);
        assert_valid(&session);
    }

    #[test]
    fn select_difficulty() {
        let mut session = Session::new(Grid::default(), Difficulty::Medium, rng());
        assert_eq!(
            session.select_difficulty(Difficulty::Easy),
            [Signal::StartMusic]
        );
        assert_eq!(session.status(), Status::Playing);
        assert_eq!(session.difficulty(), Difficulty::Easy);
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.snake(), &Snake::new());
        assert_eq!(session.speed(), Duration::from_millis(200));
        assert_valid(&session);
    }

    #[test]
    fn slither_right() {
        let mut session = playing_session();
        session.set_food(Position::new(20, 3));
        assert!(session.advance().is_empty());
        assert_eq!(
            session.snake().segments().collect::<Vec<_>>(),
            [
                Position::new(11, 10),
                Position::new(10, 10),
                Position::new(9, 10)
            ]
        );
        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), Status::Playing);
    }

    #[test]
    fn eat_food() {
        let mut session = playing_session();
        session.set_snake(Snake::from([
            Position::new(14, 15),
            Position::new(13, 15),
            Position::new(12, 15),
        ]));
        session.set_food(Position::new(15, 15));
        assert_eq!(session.advance(), [Signal::Eat]);
        assert_eq!(session.score(), 10);
        assert_eq!(session.snake().len(), 4);
        assert_eq!(session.snake().head(), Position::new(15, 15));
        assert_ne!(session.food(), Position::new(15, 15));
        assert_eq!(session.status(), Status::Playing);
        assert_valid(&session);
    }

    #[rstest]
    #[case(Position::new(0, 5), Direction::Left)]
    #[case(Position::new(29, 5), Direction::Right)]
    #[case(Position::new(5, 0), Direction::Up)]
    #[case(Position::new(5, 19), Direction::Down)]
    fn wall_collision(#[case] head: Position, #[case] direction: Direction) {
        let mut session = playing_session();
        let snake = Snake::from([head]);
        session.set_snake(snake.clone());
        session.set_direction(direction);
        session.set_score(30);
        let food = session.food();
        assert_eq!(session.advance(), [Signal::GameOver, Signal::StopMusic]);
        assert_eq!(session.status(), Status::GameOver);
        assert_eq!(session.snake(), &snake);
        assert_eq!(session.score(), 30);
        assert_eq!(session.food(), food);
    }

    #[test]
    fn self_collision() {
        let mut session = playing_session();
        let snake = Snake::from([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
            Position::new(4, 6),
        ]);
        session.set_snake(snake.clone());
        session.set_direction(Direction::Down);
        session.set_food(Position::new(20, 3));
        assert_eq!(session.advance(), [Signal::GameOver, Signal::StopMusic]);
        assert_eq!(session.status(), Status::GameOver);
        assert_eq!(session.snake(), &snake);
    }

    #[test]
    fn tail_counts_as_collision() {
        let mut session = playing_session();
        // A 2x2 loop whose tail would move out of the way
        let snake = Snake::from([
            Position::new(5, 5),
            Position::new(6, 5),
            Position::new(6, 6),
            Position::new(5, 6),
        ]);
        session.set_snake(snake);
        session.set_direction(Direction::Down);
        session.set_food(Position::new(20, 3));
        let _ = session.advance();
        assert_eq!(session.status(), Status::GameOver);
    }

    #[test]
    fn advance_ignored_unless_playing() {
        let mut session = playing_session();
        let _ = session.toggle_pause();
        let before = session.clone();
        assert!(session.advance().is_empty());
        assert_eq!(session, before);

        let mut session = Session::new(Grid::default(), Difficulty::Medium, rng());
        let before = session.clone();
        assert!(session.advance().is_empty());
        assert_eq!(session, before);
    }

    #[rstest]
    #[case(Direction::Right, Direction::Left, Direction::Right)]
    #[case(Direction::Left, Direction::Right, Direction::Left)]
    #[case(Direction::Up, Direction::Down, Direction::Up)]
    #[case(Direction::Down, Direction::Up, Direction::Down)]
    #[case(Direction::Right, Direction::Up, Direction::Up)]
    #[case(Direction::Right, Direction::Down, Direction::Down)]
    #[case(Direction::Up, Direction::Left, Direction::Left)]
    #[case(Direction::Right, Direction::Right, Direction::Right)]
    fn test_change_direction(
        #[case] current: Direction,
        #[case] requested: Direction,
        #[case] result: Direction,
    ) {
        let mut session = playing_session();
        session.set_direction(current);
        session.change_direction(requested);
        assert_eq!(session.direction(), result);
    }

    #[test]
    fn pause_and_resume() {
        let mut session = playing_session();
        assert_eq!(session.toggle_pause(), [Signal::StopMusic]);
        assert_eq!(session.status(), Status::Paused);
        assert_eq!(session.toggle_pause(), [Signal::StartMusic]);
        assert_eq!(session.status(), Status::Playing);
    }

    #[test]
    fn pause_ignored_in_menu_and_game_over() {
        let mut session = Session::new(Grid::default(), Difficulty::Medium, rng());
        assert!(session.toggle_pause().is_empty());
        assert_eq!(session.status(), Status::Menu);

        let mut session = playing_session();
        session.set_snake(Snake::from([Position::new(29, 0)]));
        let _ = session.advance();
        assert_eq!(session.status(), Status::GameOver);
        assert!(session.toggle_pause().is_empty());
        assert_eq!(session.status(), Status::GameOver);
    }

    #[test]
    fn reset_after_game_over() {
        let mut session = Session::new(Grid::default(), Difficulty::Medium, rng());
        let _ = session.select_difficulty(Difficulty::Hard);
        session.set_score(70);
        session.set_snake(Snake::from([Position::new(29, 0)]));
        let _ = session.advance();
        assert_eq!(session.status(), Status::GameOver);
        assert_eq!(session.reset(), [Signal::StartMusic]);
        assert_eq!(session.status(), Status::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snake(), &Snake::new());
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert_valid(&session);
    }

    #[test]
    fn return_to_menu() {
        let mut session = playing_session();
        assert_eq!(session.return_to_menu(), [Signal::StopMusic]);
        assert_eq!(session.status(), Status::Menu);
        let _ = session.toggle_pause();
        assert_eq!(session.status(), Status::Menu);
    }

    #[test]
    fn speed_follows_score() {
        let mut session = playing_session();
        assert_eq!(session.speed(), Duration::from_millis(150));
        session.set_score(40);
        assert_eq!(session.speed(), Duration::from_millis(140));
    }

    #[test]
    fn random_walk_keeps_invariants() {
        let mut session = playing_session();
        let mut walker = rng();
        let turns = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        for _ in 0..2000 {
            if session.status() == Status::GameOver {
                let _ = session.reset();
            }
            if walker.random_bool(0.3) {
                session.change_direction(turns[walker.random_range(0..turns.len())]);
            }
            let score = session.score();
            let _ = session.advance();
            assert!(session.score() >= score);
            assert_valid(&session);
        }
    }

    #[test]
    fn full_grid_ends_game() {
        let grid = Grid::from_canvas(12, 11, 1).unwrap();
        let mut session = Session::new(grid, Difficulty::Easy, rng());
        let _ = session.select_difficulty(Difficulty::Easy);
        // Cover every cell but one with the snake, with the head next to
        // the free cell
        let head = Position::new(10, 10);
        let last_free = Position::new(11, 10);
        let snake = std::iter::once(head)
            .chain(grid.positions().filter(|&p| p != head && p != last_free))
            .collect::<Snake>();
        session.set_snake(snake);
        session.set_food(last_free);
        assert_eq!(
            session.advance(),
            [Signal::Eat, Signal::GameOver, Signal::StopMusic]
        );
        assert_eq!(session.status(), Status::GameOver);
        assert_eq!(session.snake().len(), 132);
        assert_eq!(session.score(), 10);
    }
}
