use super::board::{Board, Point};
use super::controls::Button;
use crate::util::center_rect;
use enum_map::{enum_map, EnumMap};
use ratatui::layout::{Constraint, Flex, Layout, Margin, Position, Rect, Size};

/// Where each part of the game screen is drawn within the terminal.  The same
/// layout is used for drawing and for mapping mouse events back onto the
/// board and the controls.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct ScreenLayout {
    pub(crate) status: Rect,

    /// The bordered box around the board
    pub(crate) frame: Rect,

    /// The area in which the board itself is drawn
    pub(crate) board: Rect,

    pub(crate) buttons: EnumMap<Button, Rect>,
    pub(crate) help: Rect,
}

impl ScreenLayout {
    pub(crate) fn new(area: Rect, board: Board) -> ScreenLayout {
        let [status, board_area, controls, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        let inner = board_area.inner(Margin::new(1, 1));
        let size = fit_board(inner.as_size(), board);
        let frame = center_rect(
            board_area,
            Size {
                width: size.width.saturating_add(2),
                height: size.height.saturating_add(2),
            },
        );
        let [start, pause] = Layout::horizontal([Button::WIDTH, Button::WIDTH])
            .flex(Flex::Center)
            .spacing(2)
            .areas(controls);
        ScreenLayout {
            status,
            frame,
            board: frame.inner(Margin::new(1, 1)),
            buttons: enum_map! {
                Button::Start => start,
                Button::Pause => pause,
            },
            help,
        }
    }

    /// Convert a terminal position over the drawn board to a position on the
    /// board in pixels.  Returns `None` for positions outside the board.
    pub(crate) fn board_point(&self, pos: Position, board: Board) -> Option<Point> {
        if !self.board.contains(pos) {
            return None;
        }
        let col = f64::from(pos.x) - f64::from(self.board.x) + 0.5;
        let row = f64::from(pos.y) - f64::from(self.board.y) + 0.5;
        Some(Point::new(
            col * f64::from(board.width()) / f64::from(self.board.width),
            row * f64::from(board.height()) / f64::from(self.board.height),
        ))
    }

    /// Return the button (if any) drawn at `pos`
    pub(crate) fn button_at(&self, pos: Position) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(button, _)| button)
    }
}

/// Return the largest terminal size within `avail` that shows the board at
/// its own aspect ratio.  Each terminal cell is assumed to be twice as tall as
/// it is wide, matching the two pixels per cell of a half-block canvas.
fn fit_board(avail: Size, board: Board) -> Size {
    let bw = i64::from(board.width());
    let bh = i64::from(board.height());
    let aw = i64::from(avail.width);
    let ah = i64::from(avail.height);
    if bw == 0 || bh == 0 {
        Size::default()
    } else if aw * bh <= 2 * ah * bw {
        Size {
            width: avail.width,
            height: u16::try_from(aw * bh / (2 * bw)).unwrap_or(avail.height),
        }
    } else {
        Size {
            width: u16::try_from(2 * ah * bw / bh).unwrap_or(avail.width),
            height: avail.height,
        }
    }
}
