//! Localization seam.
//!
//! The registry carries no locale state. Callers hand in a `Localize` implementation whenever
//! they render text, so one table serves every connection's language.

/// Turns a raw message into display text for one audience.
pub trait Localize {
    /// Returns the localized form of `raw`.
    fn localize(&self, raw: &str) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Localizer that returns every message unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Untranslated;

impl Localize for Untranslated {
    fn localize(&self, raw: &str) -> String {
        raw.to_owned()
    }
}
