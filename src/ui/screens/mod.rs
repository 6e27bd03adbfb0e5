//! Frame layout shared by every step: header, step body, buttons, key help.

pub mod basics;
pub mod choices;
pub mod preferences;
pub mod results;

use ratatui::{prelude::*, widgets::*};

use crate::ui::components::utils::split_vertical;
use crate::ui::flows::WizardView;
use crate::ui::styles::{header_text, secondary_line, ACCENT};
use crate::wizard::{Step, Wizard};

pub const APP_TITLE: &str = "AI Skincare Recommendation Bot";

pub fn draw_wizard(f: &mut Frame, wizard: &Wizard, view: &WizardView) {
    let chunks = split_vertical(
        f.size(),
        &[
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    f.render_widget(header(wizard.step()), chunks[0]);

    match wizard.step() {
        Step::Basics => basics::render(f, chunks[1], wizard, view),
        Step::SkinType | Step::Concerns | Step::Routine => {
            choices::render(f, chunks[1], wizard, view)
        }
        Step::Preferences => preferences::render(f, chunks[1], wizard, view),
        Step::Results => results::render(f, chunks[1], wizard, view),
    }

    f.render_widget(buttons(wizard, view), chunks[2]);
    f.render_widget(Paragraph::new(secondary_line(help_text(wizard.step()))), chunks[3]);
}

fn header(step: Step) -> Paragraph<'static> {
    let mut text = header_text(APP_TITLE);
    let subtitle = if step == Step::Results {
        step.title().to_string()
    } else {
        format!(
            "Step {} of {}: {}",
            step.number(),
            Step::DATA_ENTRY_STEPS,
            step.title()
        )
    };
    text.lines.push(Line::from(vec![
        Span::from(subtitle).bold(),
        Span::raw("  "),
        Span::styled(progress_dots(step), Style::default().fg(ACCENT)),
    ]));
    Paragraph::new(text)
}

fn progress_dots(step: Step) -> String {
    (1..=Step::DATA_ENTRY_STEPS)
        .map(|n| if n <= step.number() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Previous / Next / Get Recommendations, mirroring which moves are legal.
fn buttons(wizard: &Wizard, view: &WizardView) -> Paragraph<'static> {
    let step = wizard.step();
    let mut spans = Vec::new();

    if step > Step::Basics && step < Step::Results {
        spans.push(Span::raw("[ Previous ]"));
        spans.push(Span::raw("   "));
    }
    if step < Step::Preferences {
        spans.push(Span::styled("[ Next ]", Style::default().fg(ACCENT).bold()));
    }
    if step == Step::Preferences {
        if wizard.is_submitting() {
            spans.push(Span::styled(
                format!("[ {} Loading... ]", view.spinner_frame()),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(
                "[ Get Recommendations ]",
                Style::default().fg(ACCENT).bold(),
            ));
        }
    }

    Paragraph::new(Line::from(spans))
}

fn help_text(step: Step) -> &'static str {
    match step {
        Step::Basics => "Tab focus • ←/→ choose • digits type age • Enter/PgDn next • Esc quit",
        Step::SkinType => {
            "↑/↓ move • Space select • Enter/PgDn next • PgUp previous • Esc quit"
        }
        Step::Concerns | Step::Routine => {
            "↑/↓ move • Space toggle • Enter/PgDn next • PgUp previous • Esc quit"
        }
        Step::Preferences => {
            "Tab focus • ←/→ budget • Space toggle brand • Enter submit • PgUp previous • Esc quit"
        }
        Step::Results => "↑/↓ select • Enter view details • q/Esc quit",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    pub(crate) fn rendered(wizard: &Wizard, view: &WizardView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("test terminal");
        terminal
            .draw(|f| draw_wizard(f, wizard, view))
            .expect("draw frame");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn progress_marks_completed_steps() {
        assert_eq!(progress_dots(Step::Basics), "● ○ ○ ○ ○");
        assert_eq!(progress_dots(Step::Routine), "● ● ● ● ○");
        assert_eq!(progress_dots(Step::Results), "● ● ● ● ●");
    }

    #[test]
    fn first_step_has_no_previous_button() {
        let screen = rendered(&Wizard::new(), &WizardView::default());
        assert!(screen.contains("Step 1 of 5: Basic Information"));
        assert!(screen.contains("[ Next ]"));
        assert!(!screen.contains("[ Previous ]"));
    }

    #[test]
    fn submit_button_shows_loading_while_pending() {
        let mut wizard = Wizard::new();
        while wizard.advance() {}
        let view = WizardView::default();

        let idle = rendered(&wizard, &view);
        assert!(idle.contains("[ Get Recommendations ]"));
        assert!(idle.contains("[ Previous ]"));
        assert!(!idle.contains("[ Next ]"));

        wizard.begin_submission().expect("starts");
        let busy = rendered(&wizard, &view);
        assert!(busy.contains("Loading..."));
        assert!(!busy.contains("Get Recommendations"));
    }
}
