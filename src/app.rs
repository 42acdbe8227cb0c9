use crate::audio::Mixer;
use crate::bestscore::BestScore;
use crate::consts;
use crate::game::{Session, Signal, Status};
use crate::input::{Action, Command};
use crate::menu::{MainMenu, MenuOutcome};
use crate::scheduler::Ticker;
use crate::screen::GameScreen;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// The top-level controller: owns the game session and everything around
/// it, and runs the draw/input loop
#[derive(Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    menu: MainMenu,
    ticker: Ticker,
    mixer: Mixer,
    best: BestScore,
    warning: Option<Warning>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(
        session: Session<R>,
        mixer: Mixer,
        best: BestScore,
        warning: Option<Warning>,
    ) -> App<R> {
        App {
            menu: MainMenu::new(session.difficulty()),
            session,
            ticker: Ticker::new(),
            mixer,
            best,
            warning,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        self.mixer.handle(Signal::StopMusic);
        Ok(())
    }

    /// Wait for either the next input event or the next tick, whichever
    /// comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        match self.next_step(Instant::now()) {
            Step::Tick => self.tick(),
            Step::WaitFor(wait) => {
                if poll(wait)? {
                    self.handle_event(read()?);
                } else {
                    self.tick();
                }
            }
            Step::Block => self.handle_event(read()?),
        }
        Ok(())
    }

    /// Decide what the event loop should do at `now`.  An overdue tick
    /// always goes before any queued input.
    fn next_step(&mut self, now: Instant) -> Step {
        let running = self.session.playing() && self.warning.is_none();
        self.ticker.sync(running, self.session.speed(), now);
        match self.ticker.wait(now) {
            Some(wait) if wait.is_zero() => Step::Tick,
            Some(wait) => Step::WaitFor(wait),
            None => Step::Block,
        }
    }

    fn tick(&mut self) {
        self.ticker.fire();
        let signals = self.session.advance();
        self.dispatch(signals);
        if self.best.update(self.session.score()) {
            tracing::debug!(best_score = self.best.get(), "New best score");
        }
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.session.playing() {
                tracing::debug!("Terminal lost focus; pausing");
                let signals = self.session.toggle_pause();
                self.dispatch(signals);
            }
            return;
        }
        if let Some(cmd) = event
            .as_key_press_event()
            .and_then(Command::from_key_event)
        {
            self.handle_command(cmd);
        }
    }

    fn handle_command(&mut self, cmd: Command) {
        if let Some(ref warning) = self.warning {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.quitting = true,
                None => (),
            }
        } else if let Some(action) = Action::for_command(cmd, self.session.status()) {
            self.perform(action);
        } else if self.session.status() == Status::Menu {
            match self.menu.handle_command(cmd) {
                Some(MenuOutcome::Play(difficulty)) => {
                    self.ticker.cancel();
                    let signals = self.session.select_difficulty(difficulty);
                    self.dispatch(signals);
                }
                Some(MenuOutcome::Quit) => self.quitting = true,
                None => (),
            }
        }
    }

    fn perform(&mut self, action: Action) {
        match action {
            Action::Turn(direction) => self.session.change_direction(direction),
            Action::TogglePause => {
                let signals = self.session.toggle_pause();
                self.dispatch(signals);
            }
            Action::Restart => {
                self.ticker.cancel();
                let signals = self.session.reset();
                self.dispatch(signals);
            }
            Action::Menu => {
                let signals = self.session.return_to_menu();
                self.menu = MainMenu::new(self.session.difficulty());
                self.dispatch(signals);
            }
            Action::ToggleMute => self.mixer.toggle_mute(),
            Action::Louder => self.mixer.adjust_volume(consts::VOLUME_STEP),
            Action::Quieter => self.mixer.adjust_volume(-consts::VOLUME_STEP),
            Action::Quit => self.quitting = true,
        }
    }
}

/// What the event loop does next
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Step {
    /// Advance the game now
    Tick,

    /// Wait up to the given time for input, then tick if none arrived
    WaitFor(Duration),

    /// No tick is pending; block until input arrives
    Block,
}

impl<R> App<R> {
    fn draw(&self, frame: &mut Frame<'_>) {
        let area = frame.area();
        if self.session.status() == Status::Menu {
            frame.render_widget(self.menu.view(self.best.get()), area);
        } else {
            frame.render_widget(
                GameScreen {
                    session: &self.session,
                    best_score: self.best.get(),
                    muted: self.mixer.muted(),
                    volume: self.mixer.volume(),
                },
                area,
            );
        }
        if let Some(ref warning) = self.warning {
            frame.render_widget(warning, area);
        }
    }

    fn dispatch(&mut self, signals: &[Signal]) {
        for &signal in signals {
            self.mixer.handle(signal);
        }
    }
}
