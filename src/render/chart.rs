//! ASCII step chart of a scoring timeline.

use crate::nba::{clock::PERIOD_MINUTES, timeline::TimelineSample};

pub const DEFAULT_WIDTH: usize = 48;
pub const DEFAULT_HEIGHT: usize = 10;

/// Regulation length; the x axis never shows less.
const REGULATION_MINUTES: f64 = 4.0 * PERIOD_MINUTES;

/// Cumulative points at `minute`: the last sample at or before it.
fn points_at(samples: &[TimelineSample], minute: f64) -> u32 {
    samples
        .iter()
        .take_while(|s| s.minute <= minute)
        .last()
        .map(|s| s.cumulative_points)
        .unwrap_or(0)
}

/// Axis end: regulation, or whole periods past it for overtime.
fn axis_minutes(samples: &[TimelineSample]) -> f64 {
    let last = samples.iter().map(|s| s.minute).fold(0.0, f64::max);
    if last <= REGULATION_MINUTES {
        REGULATION_MINUTES
    } else {
        (last / PERIOD_MINUTES).ceil() * PERIOD_MINUTES
    }
}

/// Draw minutes (x) against cumulative points (y).
pub fn render_chart(samples: &[TimelineSample], width: usize, height: usize) -> String {
    let width = width.max(PERIOD_MINUTES as usize);
    let height = height.max(2);
    let max_points = samples
        .iter()
        .map(|s| s.cumulative_points)
        .max()
        .unwrap_or(0)
        .max(1);
    let max_minute = axis_minutes(samples);

    let mut grid = vec![vec![' '; width]; height];
    for col in 0..width {
        let minute = (col as f64 + 0.5) * max_minute / width as f64;
        let points = points_at(samples, minute);
        let level = (f64::from(points) / f64::from(max_points) * (height - 1) as f64).round() as usize;
        grid[height - 1 - level][col] = '*';
    }

    let label_width = max_points.to_string().len().max(3);
    let mut out = String::new();
    out.push_str(&format!("{:>w$}\n", "pts", w = label_width));
    for (row, cells) in grid.iter().enumerate() {
        let level = height - 1 - row;
        let label = if row == 0 || level == 0 || row == height / 2 {
            let value = f64::from(max_points) * level as f64 / (height - 1) as f64;
            format!("{:>w$}", value.round() as u32, w = label_width)
        } else {
            " ".repeat(label_width)
        };
        let axis = if level == 0 { '+' } else { '|' };
        out.push_str(&format!("{} {}{}\n", label, axis, cells.iter().collect::<String>()));
    }

    // Period ticks under the axis.
    let mut ticks = vec![' '; width + 6];
    let mut minute = 0.0;
    while minute <= max_minute {
        let col = ((minute / max_minute) * width as f64).round() as usize;
        let text = format!("{}", minute as u32);
        let start = col.saturating_sub(text.len() / 2);
        for (i, ch) in text.chars().enumerate() {
            if let Some(slot) = ticks.get_mut(start + i) {
                *slot = ch;
            }
        }
        minute += PERIOD_MINUTES;
    }
    out.push_str(&format!(
        "{} {}  min\n",
        " ".repeat(label_width),
        ticks.iter().collect::<String>().trim_end()
    ));

    out
}
