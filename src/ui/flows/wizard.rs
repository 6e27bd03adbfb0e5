use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::task::JoinHandle;

use crate::error::{AppError, Result};
use crate::fetch::{Recommendation, RecommendationClient};
use crate::ui::screens::draw_wizard;
use crate::ui::TerminalGuard;
use crate::wizard::{catalog, Budget, FieldUpdate, Gender, MultiField, SkinType, Step, Wizard};

type PendingSubmission = JoinHandle<Result<Vec<Recommendation>>>;

/// A form control that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    GenderSelect,
    AgeInput,
    SkinTypeRadio,
    Checklist(MultiField),
    AllergiesInput,
    BudgetSelect,
    Cards,
}

impl Control {
    pub fn for_step(step: Step) -> &'static [Control] {
        match step {
            Step::Basics => &[Control::GenderSelect, Control::AgeInput],
            Step::SkinType => &[Control::SkinTypeRadio],
            Step::Concerns => &[Control::Checklist(MultiField::SkinConcerns)],
            Step::Routine => &[Control::Checklist(MultiField::CurrentRoutine)],
            Step::Preferences => &[
                Control::AllergiesInput,
                Control::BudgetSelect,
                Control::Checklist(MultiField::PreferredBrands),
            ],
            Step::Results => &[Control::Cards],
        }
    }

    /// Rows a list control offers to the cursor.
    fn rows(self, wizard: &Wizard) -> usize {
        match self {
            Control::SkinTypeRadio => SkinType::ALL.len(),
            Control::Checklist(field) => catalog::choices_for(field).len(),
            Control::Cards => wizard.recommendations().len(),
            _ => 0,
        }
    }
}

/// What the event loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Continue,
    Submit,
    Quit,
}

/// Presentation state that lives next to the controller: focus, list cursor,
/// the details overlay, and the spinner frame.
#[derive(Debug, Default)]
pub struct WizardView {
    focus: usize,
    cursor: usize,
    details_open: bool,
    spinner: usize,
}

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

impl WizardView {
    pub fn focused(&self, step: Step) -> Control {
        let controls = Control::for_step(step);
        controls[self.focus.min(controls.len() - 1)]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER[self.spinner % SPINNER.len()]
    }

    pub fn tick(&mut self) {
        self.spinner = self.spinner.wrapping_add(1);
    }

    /// Reset focus when the visible step changes underneath the view.
    pub fn reset(&mut self) {
        self.focus = 0;
        self.cursor = 0;
        self.details_open = false;
    }

    pub fn handle_key(&mut self, wizard: &mut Wizard, key: KeyEvent) -> Intent {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Intent::Quit;
        }

        if wizard.step() == Step::Results {
            return self.handle_results_key(wizard, key);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return Intent::Quit,
            KeyCode::PageDown => {
                self.go_forward(wizard);
                return Intent::Continue;
            }
            KeyCode::Char('n') if ctrl => {
                self.go_forward(wizard);
                return Intent::Continue;
            }
            KeyCode::PageUp => {
                self.go_back(wizard);
                return Intent::Continue;
            }
            KeyCode::Char('p') if ctrl => {
                self.go_back(wizard);
                return Intent::Continue;
            }
            KeyCode::Enter => {
                if wizard.step() == Step::Preferences {
                    return if wizard.can_submit() {
                        Intent::Submit
                    } else {
                        Intent::Continue
                    };
                }
                self.go_forward(wizard);
                return Intent::Continue;
            }
            KeyCode::Tab => {
                self.move_focus(wizard.step(), 1);
                return Intent::Continue;
            }
            KeyCode::BackTab => {
                self.move_focus(wizard.step(), -1);
                return Intent::Continue;
            }
            _ => {}
        }

        let control = self.focused(wizard.step());
        self.handle_control_key(wizard, control, key);
        Intent::Continue
    }

    fn handle_results_key(&mut self, wizard: &Wizard, key: KeyEvent) -> Intent {
        if self.details_open {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                self.details_open = false;
            }
            return Intent::Continue;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Intent::Quit,
            KeyCode::Up => {
                self.move_cursor(Control::Cards.rows(wizard), -1);
                Intent::Continue
            }
            KeyCode::Down => {
                self.move_cursor(Control::Cards.rows(wizard), 1);
                Intent::Continue
            }
            KeyCode::Enter => {
                if !wizard.recommendations().is_empty() {
                    self.details_open = true;
                }
                Intent::Continue
            }
            _ => Intent::Continue,
        }
    }

    fn handle_control_key(&mut self, wizard: &mut Wizard, control: Control, key: KeyEvent) {
        match control {
            Control::GenderSelect => match key.code {
                KeyCode::Left => {
                    let next = cycle(&Gender::ALL, wizard.answers().gender, -1);
                    wizard.set_field(FieldUpdate::Gender(next));
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    let next = cycle(&Gender::ALL, wizard.answers().gender, 1);
                    wizard.set_field(FieldUpdate::Gender(next));
                }
                KeyCode::Up => self.move_focus(wizard.step(), -1),
                KeyCode::Down => self.move_focus(wizard.step(), 1),
                _ => {}
            },
            Control::BudgetSelect => match key.code {
                KeyCode::Left => {
                    let next = cycle(&Budget::ALL, wizard.answers().budget, -1);
                    wizard.set_field(FieldUpdate::Budget(next));
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    let next = cycle(&Budget::ALL, wizard.answers().budget, 1);
                    wizard.set_field(FieldUpdate::Budget(next));
                }
                KeyCode::Up => self.move_focus(wizard.step(), -1),
                KeyCode::Down => self.move_focus(wizard.step(), 1),
                _ => {}
            },
            Control::AgeInput => match key.code {
                KeyCode::Char(ch) if ch.is_ascii_digit() => {
                    let mut age = wizard.answers().age.clone();
                    age.push(ch);
                    wizard.set_field(FieldUpdate::Age(age));
                }
                KeyCode::Backspace => {
                    let mut age = wizard.answers().age.clone();
                    age.pop();
                    wizard.set_field(FieldUpdate::Age(age));
                }
                KeyCode::Up => self.move_focus(wizard.step(), -1),
                KeyCode::Down => self.move_focus(wizard.step(), 1),
                _ => {}
            },
            Control::AllergiesInput => match key.code {
                KeyCode::Char(ch) => {
                    let mut text = wizard.answers().allergies.clone();
                    text.push(ch);
                    wizard.set_field(FieldUpdate::Allergies(text));
                }
                KeyCode::Backspace => {
                    let mut text = wizard.answers().allergies.clone();
                    text.pop();
                    wizard.set_field(FieldUpdate::Allergies(text));
                }
                KeyCode::Up => self.move_focus(wizard.step(), -1),
                KeyCode::Down => self.move_focus(wizard.step(), 1),
                _ => {}
            },
            Control::SkinTypeRadio => match key.code {
                KeyCode::Up => self.move_cursor(control.rows(wizard), -1),
                KeyCode::Down => self.move_cursor(control.rows(wizard), 1),
                KeyCode::Char(' ') => {
                    if let Some(choice) = SkinType::ALL.get(self.cursor) {
                        wizard.set_field(FieldUpdate::SkinType(*choice));
                    }
                }
                _ => {}
            },
            Control::Checklist(field) => match key.code {
                KeyCode::Up => self.move_cursor(control.rows(wizard), -1),
                KeyCode::Down => self.move_cursor(control.rows(wizard), 1),
                KeyCode::Char(' ') => {
                    if let Some(choice) = catalog::choices_for(field).get(self.cursor) {
                        wizard.toggle(field, choice.value);
                    }
                }
                _ => {}
            },
            Control::Cards => {}
        }
    }

    fn go_forward(&mut self, wizard: &mut Wizard) {
        if wizard.advance() {
            self.reset();
        }
    }

    fn go_back(&mut self, wizard: &mut Wizard) {
        if wizard.retreat() {
            self.reset();
        }
    }

    fn move_focus(&mut self, step: Step, delta: isize) {
        let count = Control::for_step(step).len();
        let next = wrap_index(self.focus, count, delta);
        if next != self.focus {
            self.focus = next;
            self.cursor = 0;
        }
    }

    fn move_cursor(&mut self, rows: usize, delta: isize) {
        if rows == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = wrap_index(self.cursor, rows, delta);
    }
}

/// Wrap-around index arithmetic for focus and list cursors.
fn wrap_index(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let current = (current as isize).min(len - 1);
    (current + delta).rem_euclid(len) as usize
}

/// Step to the neighbouring option of a select; unset starts at either end.
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>, delta: isize) -> T {
    let index = match current.and_then(|value| options.iter().position(|o| *o == value)) {
        Some(index) => wrap_index(index, options.len(), delta),
        None if delta < 0 => options.len() - 1,
        None => 0,
    };
    options[index]
}

/// Drive the questionnaire until the user quits.
///
/// The request runs on its own task so the screen keeps redrawing; its
/// completion is the only way onto the results step.
pub async fn run_wizard(wizard: &mut Wizard, client: &RecommendationClient) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let mut view = WizardView::default();
    let mut pending: Option<PendingSubmission> = None;

    loop {
        if pending.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = pending.take() {
                let outcome = handle.await.unwrap_or_else(|err| Err(AppError::from(err)));
                if wizard.finish_submission(outcome) {
                    view.reset();
                }
            }
        }

        view.tick();
        guard.draw(|f| draw_wizard(f, wizard, &view))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match view.handle_key(wizard, key) {
            Intent::Continue => {}
            Intent::Submit => {
                if let Some(answers) = wizard.begin_submission() {
                    let client = client.clone();
                    pending = Some(tokio::spawn(async move { client.fetch(&answers).await }));
                }
            }
            Intent::Quit => {
                if let Some(handle) = pending.take() {
                    warn!("quitting with a submission still in flight");
                    handle.abort();
                }
                debug!("wizard closed on step {}", wizard.step().number());
                break;
            }
        }
    }

    guard.restore()?;
    Ok(())
}
