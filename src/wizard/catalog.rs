//! Fixed option lists offered by the questionnaire.

use super::answers::MultiField;

/// A checkbox entry: what the user sees and what gets submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub label: &'static str,
    pub value: &'static str,
}

const fn choice(label: &'static str, value: &'static str) -> Choice {
    Choice { label, value }
}

pub const SKIN_CONCERNS: [Choice; 7] = [
    choice("Acne", "acne"),
    choice("Aging", "aging"),
    choice("Dryness", "dryness"),
    choice("Dullness", "dullness"),
    choice("Hyperpigmentation", "hyperpigmentation"),
    choice("Redness", "redness"),
    choice("Sensitivity", "sensitivity"),
];

pub const ROUTINE_PRODUCTS: [Choice; 7] = [
    choice("Cleanser", "cleanser"),
    choice("Toner", "toner"),
    choice("Serum", "serum"),
    choice("Moisturizer", "moisturizer"),
    choice("Sunscreen", "sunscreen"),
    choice("Exfoliant", "exfoliant"),
    choice("Mask", "mask"),
];

// Brand values keep their display casing.
pub const BRANDS: [Choice; 5] = [
    choice("CeraVe", "CeraVe"),
    choice("The Ordinary", "The Ordinary"),
    choice("Paula's Choice", "Paula's Choice"),
    choice("Drunk Elephant", "Drunk Elephant"),
    choice("La Roche-Posay", "La Roche-Posay"),
];

pub fn choices_for(field: MultiField) -> &'static [Choice] {
    match field {
        MultiField::SkinConcerns => &SKIN_CONCERNS,
        MultiField::CurrentRoutine => &ROUTINE_PRODUCTS,
        MultiField::PreferredBrands => &BRANDS,
    }
}
