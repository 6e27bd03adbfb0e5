pub mod wizard;

pub use wizard::{run_wizard, Control, Intent, WizardView};
