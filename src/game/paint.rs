use super::board::Point;
use super::world::World;
use crate::consts;
use ratatui::{
    style::Color,
    widgets::canvas::{Painter, Shape},
};
use std::f64::consts::{PI, TAU};

/// A 2D drawing target.  Coordinates are board pixels with the origin at the
/// top-left corner and `y` increasing downwards.
pub(crate) trait Surface {
    /// Fill the entire surface with `color`
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke the part of a circle running clockwise (in screen orientation)
    /// from angle `start` to angle `end`
    fn stroke_arc(&mut self, arc: Arc, line_width: f64, color: Color);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Arc {
    pub(crate) center: Point,
    pub(crate) radius: f64,
    pub(crate) start: f64,
    pub(crate) end: f64,
}

/// Draw the food and the snake onto `surface`
pub(crate) fn paint<R, S: Surface>(world: &World<R>, surface: &mut S) {
    let scale = f64::from(world.board().scale());
    surface.clear(consts::BACKGROUND_COLOR);

    let food = Point::from(world.food());
    surface.fill_circle(
        food.offset(scale / 2.0, scale / 2.0),
        scale / 2.0,
        consts::FOOD_COLOR,
    );

    for p in world.snake().segments().skip(1) {
        surface.fill_rect(p.x, p.y, scale, scale, consts::BODY_COLOR);
    }
    // Draw the head last so that it's on top of any body segments it overlaps
    paint_head(world.snake().head(), scale, surface);
}

fn paint_head<S: Surface>(head: Point, scale: f64, surface: &mut S) {
    surface.fill_rect(head.x, head.y, scale, scale, consts::BODY_COLOR);
    let left_eye = head.offset(scale / 4.0, scale / 4.0);
    let right_eye = head.offset(3.0 * scale / 4.0, scale / 4.0);
    surface.fill_circle(left_eye, scale / 6.0, consts::EYE_COLOR);
    surface.fill_circle(right_eye, scale / 6.0, consts::EYE_COLOR);
    surface.fill_circle(left_eye, scale / 12.0, consts::PUPIL_COLOR);
    surface.fill_circle(right_eye, scale / 12.0, consts::PUPIL_COLOR);
    let smile = Arc {
        center: head.offset(scale / 2.0, scale / 2.0),
        radius: scale / 4.0,
        start: 0.0,
        end: PI,
    };
    surface.stroke_arc(smile, consts::SMILE_WIDTH, consts::SMILE_COLOR);
}

/// A single drawing operation recorded by a [`Scene`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    Clear {
        color: Color,
    },
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeArc {
        arc: Arc,
        line_width: f64,
        color: Color,
    },
}

impl DrawCommand {
    fn color(&self) -> Color {
        match *self {
            DrawCommand::Clear { color }
            | DrawCommand::FillRect { color, .. }
            | DrawCommand::FillCircle { color, .. }
            | DrawCommand::StrokeArc { color, .. } => color,
        }
    }

    /// Test whether the command paints the pixel at `p`
    fn covers(&self, p: Point) -> bool {
        match *self {
            DrawCommand::Clear { .. } => true,
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                ..
            } => (x..x + width).contains(&p.x) && (y..y + height).contains(&p.y),
            DrawCommand::FillCircle { center, radius, .. } => {
                let (dx, dy) = (p.x - center.x, p.y - center.y);
                dx.hypot(dy) <= radius
            }
            DrawCommand::StrokeArc {
                arc, line_width, ..
            } => {
                let (dx, dy) = (p.x - arc.center.x, p.y - arc.center.y);
                if (dx.hypot(dy) - arc.radius).abs() > line_width / 2.0 {
                    return false;
                }
                let angle = dy.atan2(dx).rem_euclid(TAU);
                let start = arc.start.rem_euclid(TAU);
                let end = start + (arc.end - arc.start).clamp(0.0, TAU);
                (start..=end).contains(&angle) || (start..=end).contains(&(angle + TAU))
            }
        }
    }
}

/// A recorded frame: the sequence of drawing commands issued against a
/// surface of a given size.  A `Scene` can be rasterized onto a ratatui
/// [`Canvas`][ratatui::widgets::canvas::Canvas] whose bounds are
/// `[0, width]` × `[0, height]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Scene {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub(crate) fn new(width: f64, height: f64) -> Scene {
        Scene {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Record a frame showing the given world
    pub(crate) fn of_world<R>(world: &World<R>) -> Scene {
        let board = world.board();
        let mut scene = Scene::new(f64::from(board.width()), f64::from(board.height()));
        paint(world, &mut scene);
        scene
    }

    pub(crate) fn width(&self) -> f64 {
        self.width
    }

    pub(crate) fn height(&self) -> f64 {
        self.height
    }
}

impl Surface for Scene {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_arc(&mut self, arc: Arc, line_width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeArc {
            arc,
            line_width,
            color,
        });
    }
}

impl Shape for Scene {
    /// Rasterize the scene by sampling the center of each canvas grid point.
    /// Later commands paint over earlier ones.
    #[allow(clippy::cast_precision_loss)]
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        // The bottom-right corner of the bounds maps to the last grid point.
        let Some((max_col, max_row)) = painter.get_point(self.width, 0.0) else {
            return;
        };
        let (cols, rows) = (max_col + 1, max_row + 1);
        let col_width = self.width / cols as f64;
        let row_height = self.height / rows as f64;
        for row in 0..rows {
            let y = (row as f64 + 0.5) * row_height;
            for col in 0..cols {
                let p = Point::new((col as f64 + 0.5) * col_width, y);
                if let Some(cmd) = self.commands.iter().rev().find(|cmd| cmd.covers(p)) {
                    painter.paint(col, row, cmd.color());
                }
            }
        }
    }
}
