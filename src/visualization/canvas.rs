use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Widget};

use crate::domain::tour::{Leg, Tour};
use crate::domain::types::{Bounds, Location, LocationCollection};
use crate::error::{RouteError, RouteResult};

pub const FORWARD_LEG: Color = Color::Rgb(235, 70, 61);
pub const CLOSING_LEG: Color = Color::Rgb(148, 66, 59);
pub const LOCATION: Color = Color::LightBlue;
pub const START_LOCATION: Color = Color::Rgb(67, 34, 181);

pub const LOCATION_MARKER: &str = "o";
pub const START_MARKER: &str = "S";

/// Canvas y grows upward while map y grows downward, so rows are mirrored.
fn canvas_point(location: &Location) -> (f64, f64) {
    (location.x as f64, -(location.y as f64))
}

fn draw_leg(ctx: &mut Context<'_>, locations: &LocationCollection, leg: &Leg, color: Color) {
    if let (Some(from), Some(to)) = (locations.get(leg.from), locations.get(leg.to)) {
        let (x1, y1) = canvas_point(from);
        let (x2, y2) = canvas_point(to);
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

fn cells(value: usize, axis: &str) -> RouteResult<u16> {
    u16::try_from(value)
        .ok()
        .filter(|&cells| cells >= 4)
        .ok_or_else(|| {
            RouteError::invalid_argument(format!(
                "canvas {axis} must be between 4 and {} cells, got {value}",
                u16::MAX
            ))
        })
}

/// Renders the layout, and its tour when there is one, into an off-screen buffer.
///
/// Legs are painted first (forward legs, then the closing leg on its own
/// layer) and location markers are printed over them, the start last.
pub fn plot(
    locations: &LocationCollection,
    tour: Option<&Tour>,
    columns: usize,
    rows: usize,
    bounds: Bounds,
) -> RouteResult<Buffer> {
    let area = Rect::new(0, 0, cells(columns, "width")?, cells(rows, "height")?);
    if bounds.width() <= 0 || bounds.height() <= 0 {
        return Err(RouteError::invalid_argument(
            "canvas bounds must have a positive area",
        ));
    }

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Locations: {}", locations.len())),
        )
        .marker(Marker::Braille)
        .x_bounds([bounds.min_x as f64, bounds.max_x as f64])
        .y_bounds([-(bounds.max_y as f64), -(bounds.min_y as f64)])
        .paint(|ctx| {
            if let Some(tour) = tour {
                for leg in tour.legs() {
                    draw_leg(ctx, locations, leg, FORWARD_LEG);
                }
                ctx.layer();
                if let Some(leg) = tour.closing_leg() {
                    draw_leg(ctx, locations, leg, CLOSING_LEG);
                }
            }

            for location in locations.iter().skip(1) {
                let (x, y) = canvas_point(location);
                ctx.print(x, y, Span::styled(LOCATION_MARKER, Style::default().fg(LOCATION)));
            }
            if let Some(start) = locations.start() {
                let (x, y) = canvas_point(start);
                ctx.print(
                    x,
                    y,
                    Span::styled(
                        START_MARKER,
                        Style::default()
                            .fg(START_LOCATION)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    let mut buffer = Buffer::empty(area);
    canvas.render(area, &mut buffer);
    Ok(buffer)
}
