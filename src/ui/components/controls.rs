//! Form controls drawn by the step screens.

use ratatui::{prelude::*, widgets::*};

use crate::ui::styles::{focus_border, secondary_span, selection_style, ACCENT};

fn control_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused))
        .title(title)
}

/// Single-choice dropdown rendered as `< value >`; ←/→ cycle the options.
pub fn select<'a>(
    title: &'a str,
    value: Option<&'a str>,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    let content = match value {
        Some(label) => Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        None => secondary_span(placeholder),
    };
    let arrows = if focused { ACCENT } else { Color::DarkGray };
    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(arrows)),
        content,
        Span::styled(" ▶", Style::default().fg(arrows)),
    ]);
    Paragraph::new(line).block(control_block(title, focused))
}

/// Free-text input with a trailing caret while focused.
pub fn text_input<'a>(
    title: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
) -> Paragraph<'a> {
    let line = if value.is_empty() && !focused {
        Line::from(secondary_span(placeholder))
    } else {
        let mut spans = vec![Span::raw(value)];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(ACCENT)));
        }
        Line::from(spans)
    };
    Paragraph::new(line)
        .wrap(Wrap { trim: false })
        .block(control_block(title, focused))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Radio,
    Checkbox,
}

impl Marker {
    fn glyph(self, checked: bool) -> &'static str {
        match (self, checked) {
            (Marker::Radio, true) => "(•)",
            (Marker::Radio, false) => "( )",
            (Marker::Checkbox, true) => "[x]",
            (Marker::Checkbox, false) => "[ ]",
        }
    }
}

/// Radio group or checkbox list. `options` pairs each label with whether it is checked.
pub fn option_list<'a>(
    title: &'a str,
    options: impl IntoIterator<Item = (&'a str, bool)>,
    marker: Marker,
    cursor: usize,
    focused: bool,
) -> List<'a> {
    let items: Vec<ListItem> = options
        .into_iter()
        .enumerate()
        .map(|(i, (label, checked))| {
            let line = Line::from(vec![
                Span::raw(marker.glyph(checked)),
                Span::raw(" "),
                Span::raw(label),
            ]);
            let item = ListItem::new(line);
            if focused && i == cursor {
                item.style(selection_style())
            } else {
                item
            }
        })
        .collect();
    List::new(items).block(control_block(title, focused))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_reflect_checked_state() {
        assert_eq!(Marker::Radio.glyph(true), "(•)");
        assert_eq!(Marker::Checkbox.glyph(false), "[ ]");
    }
}
