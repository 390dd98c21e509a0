use crate::consts;
use crate::game::Game;
use crossterm::event::{poll, read};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The host loop: draws the game, feeds it input events, and lets time pass
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        let mut last_tick = Instant::now();
        while !self.quitting {
            terminal.draw(|frame| self.game.draw(frame))?;
            self.process_input()?;
            let now = Instant::now();
            self.game.tick(now.saturating_duration_since(last_tick));
            last_tick = now;
        }
        Ok(())
    }

    /// Apply input events until the current frame period is up or the user
    /// quits
    fn process_input(&mut self) -> io::Result<()> {
        let deadline = Instant::now() + consts::FRAME_PERIOD;
        while poll(deadline.saturating_duration_since(Instant::now()))? {
            if self.game.handle_event(read()?).is_break() {
                log::info!("Quitting");
                self.quitting = true;
                break;
            }
        }
        Ok(())
    }
}
