use ratatui::{prelude::*, widgets::*};

use crate::ui::components::card::{card_height, details_panel, recommendation_card};
use crate::ui::components::utils::centered_rect;
use crate::ui::flows::WizardView;
use crate::ui::styles::secondary_line;
use crate::wizard::Wizard;

/// Stack cards top to bottom, scrolling so the selected card stays visible.
pub fn render(f: &mut Frame, area: Rect, wizard: &Wizard, view: &WizardView) {
    let items = wizard.recommendations();
    if items.is_empty() {
        f.render_widget(
            Paragraph::new(secondary_line(
                "The service returned no recommendations for these answers.",
            ))
            .block(Block::default().borders(Borders::ALL)),
            area,
        );
        return;
    }

    let selected = view.cursor().min(items.len() - 1);
    let heights: Vec<u16> = items
        .iter()
        .map(|item| card_height(item, area.width))
        .collect();

    let first = first_visible(&heights, selected, area.height);
    let mut y = area.y;
    for (index, item) in items.iter().enumerate().skip(first) {
        let bottom = area.y + area.height;
        if y >= bottom {
            break;
        }
        let height = heights[index].min(bottom - y);
        let rect = Rect::new(area.x, y, area.width, height);
        f.render_widget(recommendation_card(item, index == selected), rect);
        y += height;
    }

    if view.details_open() {
        let overlay = centered_rect(70, 70, area);
        f.render_widget(Clear, overlay);
        f.render_widget(details_panel(&items[selected]), overlay);
    }
}

/// Smallest starting index whose cards up to `selected` fit in `available` rows.
fn first_visible(heights: &[u16], selected: usize, available: u16) -> usize {
    let mut first = selected;
    let mut used = heights[selected];
    while first > 0 && used + heights[first - 1] <= available {
        first -= 1;
        used += heights[first];
    }
    first
}
