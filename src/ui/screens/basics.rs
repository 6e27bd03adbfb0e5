use ratatui::prelude::*;

use crate::ui::components::controls::{select, text_input};
use crate::ui::components::utils::split_vertical;
use crate::ui::flows::{Control, WizardView};
use crate::wizard::{Step, Wizard};

pub fn render(f: &mut Frame, area: Rect, wizard: &Wizard, view: &WizardView) {
    let chunks = split_vertical(
        area,
        &[Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)],
    );
    let focused = view.focused(Step::Basics);
    let answers = wizard.answers();

    f.render_widget(
        select(
            "Gender",
            answers.gender.map(|gender| gender.label()),
            "Select gender",
            focused == Control::GenderSelect,
        ),
        chunks[0],
    );
    f.render_widget(
        text_input(
            "Age",
            &answers.age,
            "Enter your age",
            focused == Control::AgeInput,
        ),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use crate::ui::flows::WizardView;
    use crate::ui::screens::tests::rendered;
    use crate::wizard::{FieldUpdate, Gender, Wizard};

    #[test]
    fn shows_placeholders_then_values() {
        let mut wizard = Wizard::new();
        let view = WizardView::default();
        let empty = rendered(&wizard, &view);
        assert!(empty.contains("Select gender"));
        assert!(empty.contains("Enter your age"));

        wizard.set_field(FieldUpdate::Gender(Gender::Female));
        wizard.set_field(FieldUpdate::Age("27".to_string()));
        let filled = rendered(&wizard, &view);
        assert!(filled.contains("Female"));
        assert!(filled.contains("27"));
    }
}
