use ratatui::prelude::*;

use crate::ui::components::controls::{select, text_input};
use crate::ui::components::utils::split_vertical;
use crate::ui::flows::{Control, WizardView};
use crate::ui::screens::choices::checklist_with_focus;
use crate::wizard::{MultiField, Step, Wizard};

pub fn render(f: &mut Frame, area: Rect, wizard: &Wizard, view: &WizardView) {
    let chunks = split_vertical(
        area,
        &[Constraint::Length(4), Constraint::Length(3), Constraint::Min(3)],
    );
    let focused = view.focused(Step::Preferences);
    let answers = wizard.answers();

    f.render_widget(
        text_input(
            "Allergies or Sensitivities",
            &answers.allergies,
            "Enter any allergies or sensitivities",
            focused == Control::AllergiesInput,
        ),
        chunks[0],
    );
    f.render_widget(
        select(
            "Budget Range",
            answers.budget.map(|budget| budget.label()),
            "Select budget range",
            focused == Control::BudgetSelect,
        ),
        chunks[1],
    );

    let brands_focused = focused == Control::Checklist(MultiField::PreferredBrands);
    f.render_widget(
        checklist_with_focus(
            "Preferred Brands",
            MultiField::PreferredBrands,
            wizard,
            view.cursor(),
            brands_focused,
        ),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use crate::ui::flows::WizardView;
    use crate::ui::screens::tests::rendered;
    use crate::wizard::{Budget, FieldUpdate, MultiField, Wizard};

    #[test]
    fn lists_all_three_controls() {
        let mut wizard = Wizard::new();
        while wizard.advance() {}
        wizard.set_field(FieldUpdate::Budget(Budget::Luxury));
        wizard.toggle(MultiField::PreferredBrands, "Paula's Choice");

        let screen = rendered(&wizard, &WizardView::default());
        assert!(screen.contains("Allergies or Sensitivities"));
        assert!(screen.contains("Luxury"));
        assert!(screen.contains("[x] Paula's Choice"));
        assert!(screen.contains("[ ] CeraVe"));
    }
}
