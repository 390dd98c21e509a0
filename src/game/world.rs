use super::board::{Board, Cell, Point};
use super::heading::{Heading, Turn};
use super::input::{InputPolicy, InputState};
use super::snake::Snake;
use crate::config::Settings;
use rand::Rng;
use std::time::Duration;

/// What happened when the snake took a step
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepOutcome {
    /// The snake moved without eating
    Moved,

    /// The snake ate the food and grew
    Ate,

    /// The snake left the board, and the world was reset
    Collided,
}

/// The complete simulation state: snake, food, heading, captured input,
/// score, and speed.  Nothing here knows about terminals or timers.
#[derive(Clone, Debug)]
pub(crate) struct World<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) settings: Settings,
    pub(super) snake: Snake,
    pub(super) food: Cell,
    pub(super) heading: Heading,
    pub(super) input: InputState,
    pub(super) score: u32,

    /// Current time between ticks
    pub(super) speed: Duration,

    /// The score at which the speed was last ramped up, so that a score that
    /// stays at a multiple of the threshold only speeds the game up once
    pub(super) ramped_at: Option<u32>,
}

impl<R: Rng> World<R> {
    pub(crate) fn new(settings: Settings, mut rng: R) -> World<R> {
        let food = settings.board.random_cell(&mut rng);
        World {
            rng,
            settings,
            snake: Snake::new(settings.start.into()),
            food,
            heading: Heading::default(),
            input: InputState::new(settings.input_policy),
            score: 0,
            speed: settings.initial_speed,
            ramped_at: None,
        }
    }

    /// Perform one update step: move the snake, eat the food if it's reached,
    /// reset everything if the snake left the board, and speed up the game
    /// if the score calls for it.
    pub(crate) fn step(&mut self) -> StepOutcome {
        let ate = self.advance();
        let head = self.snake.head();
        if !self.settings.board.contains(head) {
            log::info!(
                "Snake left the board at ({:.1}, {:.1}) with a score of {}; resetting",
                head.x,
                head.y,
                self.score
            );
            self.reset();
            return StepOutcome::Collided;
        }
        self.ramp_speed();
        if ate {
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    /// Move the snake one step along its effective heading.  Returns `true`
    /// if the snake ate the food.
    fn advance(&mut self) -> bool {
        let head = self.snake.head();
        if let Some(target) = self.input.steering_target() {
            self.heading = Heading::toward(head, target);
        }
        let scale = f64::from(self.settings.board.scale());
        let (dx, dy) = self.heading.step(self.settings.movement);
        let new_head = head.offset(dx * scale, dy * scale);
        let ate = self.reaches_food(new_head);
        self.snake.advance(new_head, ate);
        if ate {
            self.score = self.score.saturating_add(self.settings.food_reward);
            self.place_food();
            log::debug!(
                "Food eaten; score is now {}, snake length {}",
                self.score,
                self.snake.len()
            );
        }
        ate
    }

    /// Restore the snake, food, heading, score, and speed to their starting
    /// values.  The input policy and last pointer position are kept.
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::new(self.settings.start.into());
        self.heading = Heading::default();
        self.place_food();
        self.score = 0;
        self.speed = self.settings.initial_speed;
        self.ramped_at = None;
    }

    fn place_food(&mut self) {
        self.food = self.settings.board.random_cell(&mut self.rng);
    }
}

impl<R> World<R> {
    pub(crate) fn board(&self) -> Board {
        self.settings.board
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Cell {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn speed(&self) -> Duration {
        self.speed
    }

    pub(crate) fn input_policy(&self) -> InputPolicy {
        self.input.policy()
    }

    /// Apply a keyboard turn to the stored heading
    pub(crate) fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.turn(turn);
        self.input.record_key();
    }

    /// Record the pointer's position in board pixels
    pub(crate) fn point_at(&mut self, pos: Point) {
        self.input.record_pointer(pos);
    }

    pub(crate) fn cycle_input_policy(&mut self) -> InputPolicy {
        let policy = self.input.policy().next();
        self.input.set_policy(policy);
        policy
    }

    /// A position counts as reaching the food when it's less than one cell
    /// away from the food's cell along both axes
    fn reaches_food(&self, pos: Point) -> bool {
        let scale = f64::from(self.settings.board.scale());
        let food = Point::from(self.food);
        (pos.x - food.x).abs() < scale && (pos.y - food.y).abs() < scale
    }

    fn ramp_speed(&mut self) {
        if self.score == 0
            || self.score.checked_rem(self.settings.speed_threshold) != Some(0)
            || self.ramped_at == Some(self.score)
        {
            return;
        }
        self.ramped_at = Some(self.score);
        let speed = self
            .speed
            .saturating_sub(self.settings.speed_decrement)
            .max(self.settings.min_speed);
        if speed != self.speed {
            log::debug!("Score reached {}; tick interval now {speed:?}", self.score);
            self.speed = speed;
        }
    }
}
