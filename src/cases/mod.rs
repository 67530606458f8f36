//! Enumerations with plain, iterable, raw-valued and data-carrying cases

mod barcode;
mod errors;
mod kinds;
mod traits;

pub use barcode::Barcode;
pub use errors::CaseError;
pub use kinds::{Beverage, ControlCharacter, Direction, Planet};
pub use traits::{CaseIterable, RawRepresentable};

#[cfg(test)]
mod tests;
