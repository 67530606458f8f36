use std::fmt;

use log::debug;

use crate::cases::errors::CaseError;

/// A closed enumeration whose cases can be listed in declaration order.
pub trait CaseIterable: Sized + 'static {
    const ALL_CASES: &'static [Self];

    fn all_cases() -> std::slice::Iter<'static, Self> {
        Self::ALL_CASES.iter()
    }

    fn case_count() -> usize {
        Self::ALL_CASES.len()
    }
}

/// A fixed value of one type attached to every case, usable for lookup in
/// both directions.
pub trait RawRepresentable: CaseIterable + Copy {
    type Raw: PartialEq;

    fn raw_value(&self) -> Self::Raw;

    /// Returns `None` when no case carries `raw`.
    fn from_raw_value(raw: Self::Raw) -> Option<Self> {
        let found = Self::all_cases().copied().find(|case| case.raw_value() == raw);
        if found.is_none() {
            debug!("No case matches the requested raw value");
        }
        found
    }
}

/// Case-insensitive lookup by display name, shared by the `FromStr` impls.
pub(crate) fn parse_case<T>(input: &str, kind: &'static str) -> Result<T, CaseError>
where
    T: CaseIterable + Copy + fmt::Display,
{
    let wanted = input.trim();
    T::all_cases()
        .copied()
        .find(|case| case.to_string().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CaseError::UnknownCase {
            kind,
            input: input.to_string(),
        })
}
