use ratatui::prelude::*;
use ratatui::widgets::List;

use crate::ui::components::controls::{option_list, Marker};
use crate::ui::flows::WizardView;
use crate::wizard::{catalog, MultiField, SkinType, Step, Wizard};

/// Steps made of a single radio group or checkbox list.
pub fn render(f: &mut Frame, area: Rect, wizard: &Wizard, view: &WizardView) {
    let answers = wizard.answers();
    let list = match wizard.step() {
        Step::SkinType => option_list(
            "What is your skin type?",
            SkinType::ALL
                .iter()
                .map(|kind| (kind.label(), answers.skin_type == Some(*kind))),
            Marker::Radio,
            view.cursor(),
            true,
        ),
        Step::Concerns => checklist_with_focus(
            "Select all that apply",
            MultiField::SkinConcerns,
            wizard,
            view.cursor(),
            true,
        ),
        Step::Routine => checklist_with_focus(
            "Products you already use",
            MultiField::CurrentRoutine,
            wizard,
            view.cursor(),
            true,
        ),
        _ => return,
    };
    f.render_widget(list, area);
}

pub(crate) fn checklist_with_focus<'a>(
    title: &'a str,
    field: MultiField,
    wizard: &'a Wizard,
    cursor: usize,
    focused: bool,
) -> List<'a> {
    let answers = wizard.answers();
    option_list(
        title,
        catalog::choices_for(field)
            .iter()
            .map(|choice| (choice.label, answers.is_selected(field, choice.value))),
        Marker::Checkbox,
        cursor,
        focused,
    )
}

#[cfg(test)]
mod tests {
    use crate::ui::flows::WizardView;
    use crate::ui::screens::tests::rendered;
    use crate::wizard::{FieldUpdate, MultiField, SkinType, Wizard};

    #[test]
    fn radio_marks_chosen_skin_type() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.set_field(FieldUpdate::SkinType(SkinType::Oily));
        let screen = rendered(&wizard, &WizardView::default());
        assert!(screen.contains("(•) Oily"));
        assert!(screen.contains("( ) Dry"));
    }

    #[test]
    fn checklist_marks_selected_concerns() {
        let mut wizard = Wizard::new();
        wizard.advance();
        wizard.advance();
        wizard.toggle(MultiField::SkinConcerns, "redness");
        let screen = rendered(&wizard, &WizardView::default());
        assert!(screen.contains("[x] Redness"));
        assert!(screen.contains("[ ] Hyperpigmentation"));
    }
}
