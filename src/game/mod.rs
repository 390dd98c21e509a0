mod board;
mod controls;
mod direction;
mod heading;
mod input;
mod layout;
mod paint;
mod snake;
mod world;
pub(crate) use self::board::{Board, BoardError, Cell};
pub(crate) use self::heading::Movement;
pub(crate) use self::input::InputPolicy;
use self::controls::{Button, ButtonWidget, Controls};
use self::heading::Turn;
use self::layout::ScreenLayout;
use self::paint::Scene;
use self::world::{StepOutcome, World};
use crate::command::Command;
use crate::config::Settings;
use crate::consts;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{canvas::Canvas, Block, Widget},
    Frame,
};
use std::ops::ControlFlow;
use std::time::Duration;

/// Where the game is in its lifecycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Waiting for the player to press Start
    Idle,
    Running,
    Paused,
}

/// What a call to [`Game::tick()`] did
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The game isn't running, so nothing happened
    Inactive,

    /// Not enough time has passed since the last step
    Waiting,

    /// The world took a step.  A step that ended in a collision leaves the
    /// game idle.
    Stepped(StepOutcome),
}

#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    world: World<R>,
    phase: Phase,

    /// Time accumulated since the last step.  `None` means the next tick
    /// steps immediately.
    since_tick: Option<Duration>,

    /// The layout used for the most recent frame, for mapping mouse events
    layout: ScreenLayout,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(settings: Settings) -> Self {
        Game::new_with_rng(settings, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(settings: Settings, rng: R) -> Game<R> {
        Game {
            world: World::new(settings, rng),
            phase: Phase::Idle,
            since_tick: None,
            layout: ScreenLayout::default(),
        }
    }

    /// Let `elapsed` time pass, stepping the world if the game is running and
    /// at least one tick interval has accumulated since the last step
    pub(crate) fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Inactive;
        }
        if let Some(since) = self.since_tick {
            let since = since.saturating_add(elapsed);
            if since < self.world.speed() {
                self.since_tick = Some(since);
                return TickOutcome::Waiting;
            }
        }
        self.since_tick = Some(Duration::ZERO);
        let outcome = self.world.step();
        if outcome == StepOutcome::Collided {
            self.phase = Phase::Idle;
            self.since_tick = None;
        }
        TickOutcome::Stepped(outcome)
    }
}

impl<R> Game<R> {
    pub(crate) fn controls(&self) -> Controls {
        Controls::for_phase(self.phase)
    }

    pub(crate) fn start(&mut self) {
        if self.phase == Phase::Idle {
            log::info!("Starting game");
            self.phase = Phase::Running;
            self.since_tick = None;
        }
    }

    /// Pause a running game or resume a paused one
    pub(crate) fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Idle => (),
            Phase::Running => self.pause(),
            Phase::Paused => {
                log::info!("Resuming game");
                self.phase = Phase::Running;
                self.since_tick = None;
            }
        }
    }

    pub(crate) fn pause(&mut self) {
        if self.phase == Phase::Running {
            log::info!("Pausing game");
            self.phase = Phase::Paused;
        }
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) {
        self.layout = ScreenLayout::new(frame.area(), self.world.board());
        frame.render_widget(&*self, frame.area());
    }

    /// Apply an input event.  Returns `ControlFlow::Break` if the user asked
    /// to quit.
    pub(crate) fn handle_event(&mut self, event: Event) -> ControlFlow<()> {
        match event {
            Event::FocusLost => self.pause(),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {
                if let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) {
                    return self.handle_command(cmd);
                }
            }
        }
        ControlFlow::Continue(())
    }

    fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Quit => return ControlFlow::Break(()),
            Command::Up => self.world.turn(Turn::Up),
            Command::Down => self.world.turn(Turn::Down),
            Command::Left => self.world.turn(Turn::Left),
            Command::Right => self.world.turn(Turn::Right),
            Command::Start => self.start(),
            Command::Pause => self.toggle_pause(),
            Command::Steering => {
                let policy = self.world.cycle_input_policy();
                log::info!("Steering policy is now {policy}");
            }
        }
        ControlFlow::Continue(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some(p) = self.layout.board_point(pos, self.world.board()) {
                    self.world.point_at(p);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => match self.layout.button_at(pos) {
                Some(Button::Start) => self.start(),
                Some(Button::Pause) => self.toggle_pause(),
                None => (),
            },
            _ => (),
        }
    }

    fn status_line(&self) -> Line<'static> {
        Line::styled(
            format!(
                " Score: {}   Speed: {} ms   Steering: {}",
                self.world.score(),
                self.world.speed().as_millis(),
                self.world.input_policy(),
            ),
            consts::SCORE_BAR_STYLE,
        )
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ScreenLayout::new(area, self.world.board());
        self.status_line().render(layout.status, buf);

        Block::bordered().render(layout.frame, buf);
        let scene = Scene::of_world(&self.world);
        Canvas::default()
            .marker(Marker::HalfBlock)
            .background_color(consts::BACKGROUND_COLOR)
            .x_bounds([0.0, scene.width()])
            .y_bounds([0.0, scene.height()])
            .paint(|ctx| ctx.draw(&scene))
            .render(layout.board, buf);

        let controls = self.controls();
        for (button, &rect) in &layout.buttons {
            ButtonWidget { controls, button }.render(rect, buf);
        }

        Line::from_iter([
            Span::raw(" Steer ("),
            Span::styled("←↑↓→", consts::KEY_STYLE),
            Span::raw(") — Steering mode ("),
            Span::styled("i", consts::KEY_STYLE),
            Span::raw(") — Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .render(layout.help, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Point;
    use crate::game::heading::Heading;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::{
        backend::TestBackend,
        style::{Color, Modifier},
        Terminal,
    };
    use std::f64::consts::PI;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_game() -> Game<ChaCha12Rng> {
        let mut game = Game::new_with_rng(
            Settings::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        game.world.food = Cell::new(0, 580);
        game
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[Position::new(x, y)].symbol())
            .collect()
    }

    #[test]
    fn lifecycle() {
        let mut game = new_game();
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.controls(), Controls::for_phase(Phase::Idle));
        game.toggle_pause();
        assert_eq!(game.phase, Phase::Idle);
        game.start();
        assert_eq!(game.phase, Phase::Running);
        assert!(!game.controls().start_enabled);
        assert!(game.controls().pause_enabled);
        game.toggle_pause();
        assert_eq!(game.phase, Phase::Paused);
        assert_eq!(game.controls().pause_label, "Resume");
        game.start();
        assert_eq!(game.phase, Phase::Paused);
        game.toggle_pause();
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.controls().pause_label, "Pause");
    }

    #[test]
    fn idle_game_does_not_tick() {
        let mut game = new_game();
        assert_eq!(game.tick(Duration::from_secs(5)), TickOutcome::Inactive);
        assert_eq!(game.world.snake().head(), Point::new(300.0, 300.0));
    }

    #[test]
    fn tick_waits_for_speed() {
        let mut game = new_game();
        game.start();
        assert_eq!(
            game.tick(Duration::ZERO),
            TickOutcome::Stepped(StepOutcome::Moved)
        );
        assert_eq!(game.world.snake().head(), Point::new(320.0, 300.0));
        assert_eq!(game.tick(Duration::from_millis(100)), TickOutcome::Waiting);
        assert_eq!(game.tick(Duration::from_millis(49)), TickOutcome::Waiting);
        assert_eq!(game.world.snake().head(), Point::new(320.0, 300.0));
        assert_eq!(
            game.tick(Duration::from_millis(1)),
            TickOutcome::Stepped(StepOutcome::Moved)
        );
        assert_eq!(game.world.snake().head(), Point::new(340.0, 300.0));
    }

    #[test]
    fn paused_game_is_frozen() {
        let mut game = new_game();
        game.start();
        assert_eq!(
            game.tick(Duration::ZERO),
            TickOutcome::Stepped(StepOutcome::Moved)
        );
        game.toggle_pause();
        let food = game.world.food();
        assert_eq!(game.tick(Duration::from_secs(10)), TickOutcome::Inactive);
        assert_eq!(game.world.snake().head(), Point::new(320.0, 300.0));
        assert_eq!(game.world.score(), 0);
        assert_eq!(game.world.food(), food);
        game.toggle_pause();
        // Resuming steps on the very next tick
        assert_eq!(
            game.tick(Duration::ZERO),
            TickOutcome::Stepped(StepOutcome::Moved)
        );
        assert_eq!(game.world.snake().head(), Point::new(340.0, 300.0));
    }

    #[test]
    fn collision_returns_to_idle() {
        let mut game = new_game();
        game.start();
        game.world.snake.advance(Point::new(0.0, 300.0), false);
        game.world.heading = Heading::new(PI);
        assert_eq!(
            game.tick(Duration::ZERO),
            TickOutcome::Stepped(StepOutcome::Collided)
        );
        assert_eq!(game.phase, Phase::Idle);
        assert_eq!(game.controls(), Controls::for_phase(Phase::Idle));
        assert_eq!(game.world.snake().head(), Point::new(300.0, 300.0));
        assert_eq!(game.tick(Duration::from_secs(1)), TickOutcome::Inactive);
    }

    #[test]
    fn keys() {
        let mut game = new_game();
        assert_eq!(
            game.handle_event(key(KeyCode::Char('s'))),
            ControlFlow::Continue(())
        );
        assert_eq!(game.phase, Phase::Running);
        let _ = game.handle_event(key(KeyCode::Char('p')));
        assert_eq!(game.phase, Phase::Paused);
        let _ = game.handle_event(key(KeyCode::Char(' ')));
        assert_eq!(game.phase, Phase::Running);
        let _ = game.handle_event(key(KeyCode::Right));
        assert_eq!(game.world.heading, Heading::new(PI / 2.0));
        let _ = game.handle_event(key(KeyCode::Char('i')));
        assert_eq!(game.world.input_policy(), InputPolicy::Latest);
        assert_eq!(
            game.handle_event(key(KeyCode::Char('q'))),
            ControlFlow::Break(())
        );
        assert_eq!(
            game.handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            ControlFlow::Break(())
        );
    }

    #[test]
    fn turning_while_idle() {
        let mut game = new_game();
        let _ = game.handle_event(key(KeyCode::Down));
        assert_eq!(game.world.heading, Heading::new(PI));
        assert_eq!(game.phase, Phase::Idle);
    }

    #[test]
    fn focus_lost_pauses() {
        let mut game = new_game();
        let _ = game.handle_event(Event::FocusLost);
        assert_eq!(game.phase, Phase::Idle);
        game.start();
        let _ = game.handle_event(Event::FocusLost);
        assert_eq!(game.phase, Phase::Paused);
    }

    #[test]
    fn mouse_steers_and_clicks() {
        let mut game = new_game();
        game.layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), game.world.board());
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 40, 5));
        let pointer = game.world.input.pointer;
        assert!(
            pointer.is_some_and(|p| game.world.board().contains(p)),
            "{pointer:?}"
        );

        let _ = game.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 22));
        assert_eq!(game.phase, Phase::Running);
        // Start is disabled now
        let _ = game.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 22));
        assert_eq!(game.phase, Phase::Running);
        let _ = game.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 45, 22));
        assert_eq!(game.phase, Phase::Paused);
        let _ = game.handle_event(mouse(MouseEventKind::Down(MouseButton::Right), 45, 22));
        assert_eq!(game.phase, Phase::Paused);
    }

    #[test]
    fn clicking_start_does_not_steer() {
        let mut game = new_game();
        game.layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), game.world.board());
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 30, 22));
        let _ = game.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 30, 22));
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.world.input.pointer, None);
        for _ in 0..10 {
            assert_eq!(
                game.tick(Duration::from_millis(150)),
                TickOutcome::Stepped(StepOutcome::Moved)
            );
        }
        assert_eq!(game.world.snake().head(), Point::new(500.0, 300.0));
    }

    #[test]
    fn pointer_off_the_board_is_ignored() {
        let mut game = new_game();
        game.layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), game.world.board());
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 40, 0));
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 5, 10));
        assert_eq!(game.world.input.pointer, None);
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 40, 10));
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 45, 23));
        let pointer = game.world.input.pointer;
        assert!(
            pointer.is_some_and(|p| game.world.board().contains(p)),
            "{pointer:?}"
        );
    }

    #[test]
    fn ten_meals_through_ticks() {
        let mut game = new_game();
        game.start();
        for i in 1..=10_i32 {
            game.world.food = Cell::new(i * 20 + 300, 300);
            assert_eq!(
                game.tick(Duration::from_millis(150)),
                TickOutcome::Stepped(StepOutcome::Ate)
            );
        }
        assert_eq!(game.world.score(), 100);
        assert_eq!(game.world.speed(), Duration::from_millis(140));
        game.world.food = Cell::new(0, 580);
        assert_eq!(game.tick(Duration::from_millis(139)), TickOutcome::Waiting);
        assert_eq!(
            game.tick(Duration::from_millis(1)),
            TickOutcome::Stepped(StepOutcome::Moved)
        );
        assert_eq!(game.world.speed(), Duration::from_millis(140));
    }

    #[test]
    fn pointer_steers_after_start() {
        let mut game = new_game();
        game.layout = ScreenLayout::new(Rect::new(0, 0, 80, 24), game.world.board());
        // Directly above the start cell, near the top of the board
        let _ = game.handle_event(mouse(MouseEventKind::Moved, 40, 2));
        game.start();
        assert_eq!(
            game.tick(Duration::ZERO),
            TickOutcome::Stepped(StepOutcome::Moved)
        );
        let head = game.world.snake().head();
        assert!(head.y < 300.0, "{head:?}");
    }

    #[test]
    fn draw_records_layout() {
        let mut game = new_game();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| game.draw(frame)).unwrap();
        assert_eq!(
            game.layout,
            ScreenLayout::new(Rect::new(0, 0, 80, 24), Board::default())
        );
    }

    #[test]
    fn render_new_game() {
        let game = new_game();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&game).render(area, &mut buffer);
        assert_eq!(
            row_text(&buffer, 0).trim_end(),
            " Score: 0   Speed: 150 ms   Steering: pointer"
        );
        assert!(buffer[Position::new(0, 0)]
            .modifier
            .contains(Modifier::REVERSED));
        assert_eq!(buffer[Position::new(20, 1)].symbol(), "┌");
        assert_eq!(buffer[Position::new(59, 21)].symbol(), "┘");
        assert_eq!(
            row_text(&buffer, 22),
            format!("{}[ Start (s) ]   [ Pause (p) ] {}", " ".repeat(25), " ".repeat(25))
        );
        assert!(row_text(&buffer, 23).starts_with(" Steer (←↑↓→)"));
    }

    #[test]
    fn render_paused_game() {
        let mut game = new_game();
        game.start();
        game.toggle_pause();
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        (&game).render(area, &mut buffer);
        assert_eq!(
            row_text(&buffer, 22).trim(),
            "[ Start (s) ]   [ Resume (p) ]"
        );
        assert_eq!(buffer[Position::new(25, 22)].fg, Color::DarkGray);
        assert_eq!(buffer[Position::new(41, 22)].fg, Color::Reset);
        assert!(buffer[Position::new(41, 22)]
            .modifier
            .contains(Modifier::BOLD));
    }
}
