use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Normal,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Normal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Normal => "normal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Budget,
    MidRange,
    Luxury,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Budget, Budget::MidRange, Budget::Luxury];

    pub fn as_str(self) -> &'static str {
        match self {
            Budget::Budget => "budget",
            Budget::MidRange => "mid-range",
            Budget::Luxury => "luxury",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Budget::Budget => "Budget-friendly",
            Budget::MidRange => "Mid-range",
            Budget::Luxury => "Luxury",
        }
    }
}

/// Scalar overwrite of a single answer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Gender(Gender),
    Age(String),
    SkinType(SkinType),
    Allergies(String),
    Budget(Budget),
}

/// Multi-select fields; each is a set where presence is the only semantic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiField {
    SkinConcerns,
    CurrentRoutine,
    PreferredBrands,
}

/// Answers accumulated across the data-entry steps.
///
/// Serializes to the body the recommendation endpoint expects: every key is
/// always present, unset scalars become `""`, sets become arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    #[serde(serialize_with = "serialize_choice")]
    pub gender: Option<Gender>,
    pub age: String,
    #[serde(serialize_with = "serialize_choice")]
    pub skin_type: Option<SkinType>,
    pub skin_concerns: BTreeSet<String>,
    pub current_routine: BTreeSet<String>,
    pub allergies: String,
    #[serde(serialize_with = "serialize_choice")]
    pub budget: Option<Budget>,
    pub preferred_brands: BTreeSet<String>,
}

impl AnswerRecord {
    pub fn set(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Gender(value) => self.gender = Some(value),
            FieldUpdate::Age(value) => self.age = value,
            FieldUpdate::SkinType(value) => self.skin_type = Some(value),
            FieldUpdate::Allergies(value) => self.allergies = value,
            FieldUpdate::Budget(value) => self.budget = Some(value),
        }
    }

    /// Add `value` to the set if absent, remove it if present.
    /// Returns whether the value is selected afterwards.
    pub fn toggle(&mut self, field: MultiField, value: &str) -> bool {
        let set = self.multi_mut(field);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    pub fn multi(&self, field: MultiField) -> &BTreeSet<String> {
        match field {
            MultiField::SkinConcerns => &self.skin_concerns,
            MultiField::CurrentRoutine => &self.current_routine,
            MultiField::PreferredBrands => &self.preferred_brands,
        }
    }

    pub fn is_selected(&self, field: MultiField, value: &str) -> bool {
        self.multi(field).contains(value)
    }

    fn multi_mut(&mut self, field: MultiField) -> &mut BTreeSet<String> {
        match field {
            MultiField::SkinConcerns => &mut self.skin_concerns,
            MultiField::CurrentRoutine => &mut self.current_routine,
            MultiField::PreferredBrands => &mut self.preferred_brands,
        }
    }
}

trait WireValue {
    fn wire(&self) -> &'static str;
}

impl WireValue for Gender {
    fn wire(&self) -> &'static str {
        self.as_str()
    }
}

impl WireValue for SkinType {
    fn wire(&self) -> &'static str {
        self.as_str()
    }
}

impl WireValue for Budget {
    fn wire(&self) -> &'static str {
        self.as_str()
    }
}

fn serialize_choice<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireValue,
    S: Serializer,
{
    serializer.serialize_str(value.as_ref().map(|v| v.wire()).unwrap_or(""))
}
