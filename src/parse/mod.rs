mod clean;
mod error;
mod mensa_page;
mod model;
mod mri_page;
pub(crate) mod static_selector;

pub use clean::clean_mensa;
pub use error::Error;
pub use mensa_page::parse_mensa_page;
pub use model::{Diet, Line, Meal};
pub use mri_page::parse_mri_page;
