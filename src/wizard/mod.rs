pub mod answers;
pub mod catalog;

use log::{debug, error, info};

use crate::error::Result;
use crate::fetch::{Recommendation, RecommendationClient};

pub use answers::{AnswerRecord, Budget, FieldUpdate, Gender, MultiField, SkinType};
pub use catalog::Choice;

/// Pages of the questionnaire. Steps 1-5 collect answers, step 6 shows results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Basics,
    SkinType,
    Concerns,
    Routine,
    Preferences,
    Results,
}

impl Step {
    /// Number of data-entry steps preceding the results page.
    pub const DATA_ENTRY_STEPS: u8 = 5;

    pub fn number(self) -> u8 {
        match self {
            Step::Basics => 1,
            Step::SkinType => 2,
            Step::Concerns => 3,
            Step::Routine => 4,
            Step::Preferences => 5,
            Step::Results => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Basics => "Basic Information",
            Step::SkinType => "Skin Type",
            Step::Concerns => "Skin Concerns",
            Step::Routine => "Current Routine",
            Step::Preferences => "Additional Information",
            Step::Results => "Your Personalized Recommendations",
        }
    }

    /// Following data-entry step. `Preferences` has none: submission replaces it.
    fn next(self) -> Option<Self> {
        match self {
            Step::Basics => Some(Step::SkinType),
            Step::SkinType => Some(Step::Concerns),
            Step::Concerns => Some(Step::Routine),
            Step::Routine => Some(Step::Preferences),
            Step::Preferences | Step::Results => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Step::SkinType => Some(Step::Basics),
            Step::Concerns => Some(Step::SkinType),
            Step::Routine => Some(Step::Concerns),
            Step::Preferences => Some(Step::Routine),
            Step::Basics | Step::Results => None,
        }
    }
}

/// Owns the current step, the answers, and the received recommendations.
#[derive(Debug)]
pub struct Wizard {
    step: Step,
    answers: AnswerRecord,
    recommendations: Vec<Recommendation>,
    submitting: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::Basics,
            answers: AnswerRecord::default(),
            recommendations: Vec::new(),
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The submit control is live only on the last data-entry step and
    /// while no request is in flight.
    pub fn can_submit(&self) -> bool {
        self.step == Step::Preferences && !self.submitting
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        self.answers.set(update);
    }

    pub fn toggle(&mut self, field: MultiField, value: &str) -> bool {
        self.answers.toggle(field, value)
    }

    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                debug!("step {} -> {}", self.step.number(), next.number());
                self.step = next;
                true
            }
            None => false,
        }
    }

    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                debug!("step {} -> {}", self.step.number(), previous.number());
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Mark a submission as pending and hand out the answers to send.
    /// Returns `None` when the submit control is disabled.
    pub fn begin_submission(&mut self) -> Option<AnswerRecord> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        info!("submitting answers for recommendations");
        Some(self.answers.clone())
    }

    /// Apply the outcome of a pending submission. Returns whether the wizard
    /// moved on to the results step.
    pub fn finish_submission(&mut self, outcome: Result<Vec<Recommendation>>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(recommendations) => {
                info!("received {} recommendations", recommendations.len());
                self.recommendations = recommendations;
                self.step = Step::Results;
                true
            }
            Err(err) => {
                error!("Error fetching recommendations: {err}");
                false
            }
        }
    }

    pub async fn submit(&mut self, client: &RecommendationClient) -> bool {
        let Some(answers) = self.begin_submission() else {
            return false;
        };
        let outcome = client.fetch(&answers).await;
        self.finish_submission(outcome)
    }
}
