use ratatui::prelude::Stylize;
use ratatui::widgets::block::{Position, Title};
use ratatui::{prelude::*, widgets::*};

use crate::fetch::Recommendation;
use crate::ui::components::utils::wrapped_height;
use crate::ui::styles::{secondary_line, selection_style, ACCENT};

fn card_lines(item: &Recommendation) -> Vec<Line<'_>> {
    let mut lines = vec![secondary_line(item.brand.as_str())];
    if !item.description.is_empty() {
        lines.push(Line::from(item.description.as_str()));
    }
    lines.push(Line::from(vec![
        Span::from("Key Ingredients: ").bold(),
        Span::raw(item.ingredients_line()),
    ]));
    lines
}

/// Card body: brand, description, key ingredients, and the details hint.
pub fn recommendation_card(item: &Recommendation, selected: bool) -> Paragraph<'_> {
    let border = if selected {
        selection_style()
    } else {
        Style::default()
    };
    let footer = if selected {
        " Enter: View Details "
    } else {
        ""
    };
    Paragraph::new(card_lines(item))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(
                    item.name.as_str(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .title(Title::from(footer).position(Position::Bottom)),
        )
}

/// Height the card needs at `width` columns, borders included.
pub fn card_height(item: &Recommendation, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let mut rows = wrapped_height(&item.brand, inner);
    if !item.description.is_empty() {
        rows += wrapped_height(&item.description, inner);
    }
    rows += wrapped_height(&format!("Key Ingredients: {}", item.ingredients_line()), inner);
    rows.saturating_add(2)
}

/// Full product view shown by "View Details".
pub fn details_panel(item: &Recommendation) -> Paragraph<'_> {
    let mut lines = vec![
        Line::from(vec![Span::from("Brand: ").bold(), Span::raw(item.brand.as_str())]),
        Line::from(vec![Span::from("Product id: ").bold(), Span::raw(item.id.as_str())]),
    ];
    if let Some(category) = &item.category {
        lines.push(Line::from(vec![
            Span::from("Category: ").bold(),
            Span::raw(category.as_str()),
        ]));
    }
    if let Some(price) = &item.price_category {
        lines.push(Line::from(vec![
            Span::from("Price range: ").bold(),
            Span::raw(price.as_str()),
        ]));
    }
    if let Some(rating) = item.average_rating {
        lines.push(Line::from(vec![
            Span::from("Average rating: ").bold(),
            Span::raw(format!("{rating:.1} / 5")),
        ]));
    }
    lines.push(Line::default());
    if !item.description.is_empty() {
        lines.push(Line::from(item.description.as_str()));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::from("Key Ingredients").bold()));
    if item.key_ingredients.is_empty() {
        lines.push(secondary_line("none listed"));
    }
    for ingredient in &item.key_ingredients {
        lines.push(Line::from(format!("  • {ingredient}")));
    }

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(item.name.as_str())
            .title(Title::from(" Esc/Enter: close ").position(Position::Bottom)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str) -> Recommendation {
        Recommendation {
            id: "1".to_string(),
            name: "Moisturizing Cream".to_string(),
            brand: "CeraVe".to_string(),
            description: description.to_string(),
            key_ingredients: vec!["ceramides".to_string(), "hyaluronic acid".to_string()],
            category: None,
            price_category: None,
            average_rating: None,
        }
    }

    #[test]
    fn card_height_includes_borders() {
        // brand + description + ingredients + two border rows
        assert_eq!(card_height(&item("Rich cream"), 80), 5);
        assert_eq!(card_height(&item(""), 80), 4);
    }

    #[test]
    fn narrow_cards_grow() {
        assert!(card_height(&item("Rich cream"), 20) > card_height(&item("Rich cream"), 80));
    }
}
