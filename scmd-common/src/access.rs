//! Command access levels.
//!
//! Every connection holds exactly one level and every command requires one. Authorization is a
//! plain comparison: a connection may run a command when its level is at least the required
//! level.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Ordered privilege tier, lowest first.
///
/// The derived `Ord` follows declaration order, so `None < Info < Basic < Ctrl < Admin < Hack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AccessLevel {
    /// No commands at all.
    #[default]
    None,
    /// Informational or observer commands only.
    Info,
    /// Commands available to players in the game.
    Basic,
    /// Commands that affect the game and users.
    Ctrl,
    /// Commands that affect server operation.
    Admin,
    /// All commands.
    Hack,
}

impl AccessLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Info,
        Self::Basic,
        Self::Ctrl,
        Self::Admin,
        Self::Hack,
    ];

    /// Returns `true` when a connection holding `self` may run a command requiring `required`.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        self >= required
    }

    /// Canonical lowercase name as typed on the console (`cmdlevel ctrl`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Info => "info",
            Self::Basic => "basic",
            Self::Ctrl => "ctrl",
            Self::Admin => "admin",
            Self::Hack => "hack",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Level name did not match any known access level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown access level '{0}'")]
pub struct UnknownAccessLevel(pub String);

impl FromStr for AccessLevel {
    type Err = UnknownAccessLevel;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(input))
            .ok_or_else(|| UnknownAccessLevel(input.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessLevel, UnknownAccessLevel};
    use googletest::prelude::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    fn any_level() -> impl Strategy<Value = AccessLevel> {
        proptest::sample::select(AccessLevel::ALL.to_vec())
    }

    #[rstest]
    fn levels_are_declared_in_ascending_order() {
        let sorted = {
            let mut levels = AccessLevel::ALL;
            levels.sort();
            levels
        };
        assert_that!(sorted, eq(AccessLevel::ALL));
        assert_that!(AccessLevel::None < AccessLevel::Hack, eq(true));
        assert_that!(AccessLevel::Basic < AccessLevel::Ctrl, eq(true));
    }

    #[rstest]
    #[case(AccessLevel::Hack, AccessLevel::Ctrl, true)]
    #[case(AccessLevel::Basic, AccessLevel::Ctrl, false)]
    #[case(AccessLevel::Info, AccessLevel::Info, true)]
    #[case(AccessLevel::None, AccessLevel::Info, false)]
    fn satisfies_compares_held_against_required(
        #[case] held: AccessLevel,
        #[case] required: AccessLevel,
        #[case] expected: bool,
    ) {
        assert_that!(held.satisfies(required), eq(expected));
    }

    #[rstest]
    #[case("ctrl", AccessLevel::Ctrl)]
    #[case("HACK", AccessLevel::Hack)]
    #[case("Basic", AccessLevel::Basic)]
    fn level_names_parse_case_insensitively(#[case] input: &str, #[case] expected: AccessLevel) {
        assert_that!(&input.parse::<AccessLevel>(), eq(&Ok(expected)));
    }

    #[rstest]
    fn unknown_level_name_is_rejected() {
        assert_that!(
            &"root".parse::<AccessLevel>(),
            eq(&Err(UnknownAccessLevel("root".to_owned())))
        );
    }

    #[rstest]
    fn display_round_trips_through_from_str() {
        for level in AccessLevel::ALL {
            assert_that!(&level.to_string().parse::<AccessLevel>(), eq(&Ok(level)));
        }
    }

    proptest! {
        #[test]
        fn satisfies_is_reflexive(level in any_level()) {
            prop_assert!(level.satisfies(level));
        }

        #[test]
        fn order_is_antisymmetric(a in any_level(), b in any_level()) {
            if a.satisfies(b) && b.satisfies(a) {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn order_is_transitive(a in any_level(), b in any_level(), c in any_level()) {
            if a >= b && b >= c {
                prop_assert!(a.satisfies(c));
            }
        }

        #[test]
        fn order_is_total(a in any_level(), b in any_level()) {
            let forward = a.cmp(&b);
            prop_assert_eq!(forward.reverse(), b.cmp(&a));
            prop_assert_eq!(forward == Ordering::Equal, a == b);
        }
    }
}
