//! Canonical identifier and threshold types used across registry, gate and console.

use std::fmt;

/// Server-assigned identifier of one client connection.
pub type ConnectionId = u32;

/// Position of a command inside the registry table.
pub type CommandIndex = usize;

/// Percentage of non-abstaining votes needed for a vote to pass.
///
/// Strongly typed so a raw `0..=100` integer is validated once instead of at every use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VotePercent(u8);

impl VotePercent {
    /// Upper bound of the percent range.
    pub const MAX: u8 = 100;

    /// Creates a validated percent value.
    ///
    /// Returns `None` above 100.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value > Self::MAX { None } else { Some(Self(value)) }
    }

    /// Returns the inner percent.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for VotePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::VotePercent;
    use googletest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(101)]
    #[case(u8::MAX)]
    fn vote_percent_rejects_values_above_hundred(#[case] input: u8) {
        assert_that!(VotePercent::new(input), eq(None));
    }

    #[rstest]
    #[case(0)]
    #[case(50)]
    #[case(100)]
    fn vote_percent_accepts_valid_range(#[case] input: u8) {
        let percent = VotePercent::new(input).expect("percent in range must be valid");
        assert_that!(percent.get(), eq(input));
    }

    #[rstest]
    fn vote_percent_displays_with_sign() {
        let percent = VotePercent::new(66).expect("valid percent");
        assert_that!(percent.to_string(), eq("66%"));
    }
}
