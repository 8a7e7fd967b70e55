use colored::*;
use ratatui::buffer::{Buffer, Cell};
use ratatui::style::{Color, Modifier};

use crate::session::RouteSession;
use crate::solver::batch::BatchStats;

/// Header lines shown above the map.
pub fn summary_lines(session: &RouteSession) -> Vec<String> {
    let mut lines = vec![
        format!("Number of Locations: {}", session.location_count()),
        format!("Total Distance: {}", session.total_distance()),
        session.method_label(),
    ];

    if let Some(tour) = session.tour() {
        let order: Vec<String> = tour.stops().iter().map(|i| i.to_string()).collect();
        lines.push(format!("Route: {} -> 0", order.join(" -> ")));
        if !tour.is_complete() {
            lines.push(format!(
                "Stalled on coincident locations in {} step(s)",
                tour.stalled_steps()
            ));
        }
    }

    lines
}

pub fn print_summary(session: &RouteSession) {
    let complete = session.tour().map_or(true, |tour| tour.is_complete());

    for line in summary_lines(session) {
        if complete {
            println!("{}", line.green());
        } else {
            println!("{}", line.yellow());
        }
    }
}

/// Cell text with its foreground colour and weight carried over to the terminal.
fn paint_cell(cell: &Cell) -> ColoredString {
    let symbol = cell.symbol();
    let painted = match cell.fg {
        Color::Rgb(r, g, b) => symbol.truecolor(r, g, b),
        Color::LightBlue => symbol.bright_blue(),
        Color::Green => symbol.green(),
        Color::Yellow => symbol.yellow(),
        _ => symbol.normal(),
    };

    if cell.modifier.contains(Modifier::BOLD) {
        painted.bold()
    } else {
        painted
    }
}

pub fn print_canvas(buffer: &Buffer) {
    let area = buffer.area;
    for row in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|column| paint_cell(&buffer[(column, row)]).to_string())
            .collect();
        println!("{line}");
    }
}

pub fn print_batch_stats(stats: &BatchStats) {
    println!(
        "{}",
        format!(
            "Trials: {}, min: {}, max: {}, mean: {:.2}",
            stats.trials, stats.min_distance, stats.max_distance, stats.mean_distance
        )
        .cyan()
    );
    if stats.incomplete > 0 {
        println!(
            "{}",
            format!("{} trial(s) stalled on coincident locations", stats.incomplete).yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::domain::types::{Bounds, LocationCollection};
    use crate::solver::ConstructionStrategy;
    use crate::visualization::canvas::{plot, START_MARKER};

    #[test]
    fn painted_cells_keep_their_symbol() {
        let locations = LocationCollection::from_points([(0, 0), (50, 50)]);
        let buffer = plot(&locations, None, 8, 8, Bounds::new(0, 0, 50, 50)).unwrap();

        assert!(paint_cell(&buffer[(1, 1)]).to_string().contains(START_MARKER));
        assert_eq!(paint_cell(&buffer[(3, 3)]).to_string().trim(), "");
    }

    #[test]
    fn lines_before_and_after_drawing() {
        let settings = Settings {
            location_count: 4,
            seed: Some(3),
            ..Settings::default()
        };
        let mut session = RouteSession::new(&settings).unwrap();

        assert_eq!(
            summary_lines(&session),
            vec![
                "Number of Locations: 4".to_string(),
                "Total Distance: 0".to_string(),
                "Method: none selected".to_string(),
            ]
        );

        session.select_strategy(ConstructionStrategy::NearestNeighbor);
        session.draw().unwrap();
        let lines = summary_lines(&session);

        assert_eq!(lines[1], format!("Total Distance: {}", session.total_distance()));
        assert_eq!(lines[2], "Method: Nearest Neighbor");
        assert!(lines[3].starts_with("Route: 0 -> "));
        assert!(lines[3].ends_with(" -> 0"));
    }
}
