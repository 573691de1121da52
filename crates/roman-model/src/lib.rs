mod error;
pub use error::ModelError;

pub mod numeral;
pub use numeral::{RomanNumeral, to_roman};

mod input;
pub use input::{BoundedInput, RomanInput};
