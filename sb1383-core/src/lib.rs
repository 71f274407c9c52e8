pub mod calculations;
pub mod currency;
pub mod form;
pub mod models;
pub mod review;
pub mod validation;

pub use calculations::RowpRequirement;
pub use form::{FormController, WizardStep};
pub use models::*;
pub use review::{ReviewRow, review_rows};
pub use validation::validate_population;
