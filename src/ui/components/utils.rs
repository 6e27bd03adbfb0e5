use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = split_vertical(
        r,
        &[
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ],
    );
    let horizontal = split_horizontal(
        vertical[1],
        &[
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ],
    );
    horizontal[1]
}

pub fn split_vertical(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints.iter().copied().collect::<Vec<_>>())
        .split(area)
        .to_vec()
}

pub fn split_horizontal(area: Rect, constraints: &[Constraint]) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints.iter().copied().collect::<Vec<_>>())
        .split(area)
        .to_vec()
}

/// Rows a paragraph of `text` occupies when wrapped to `width` columns.
/// Approximates word wrapping by display width, which is enough for sizing.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    text.lines()
        .map(|line| {
            let columns = UnicodeWidthStr::width(line);
            columns.div_ceil(width).max(1)
        })
        .sum::<usize>()
        .max(1)
        .try_into()
        .unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_height_counts_each_line() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("exactly-ten", 11), 1);
        assert_eq!(wrapped_height("a line that overflows", 10), 3);
        assert_eq!(wrapped_height("one\ntwo", 10), 2);
    }

    #[test]
    fn wide_characters_use_display_width() {
        // Each CJK glyph occupies two columns.
        assert_eq!(wrapped_height("保湿保湿保湿", 6), 2);
    }
}
