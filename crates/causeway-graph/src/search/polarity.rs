//! Variant-specific path acceptance: the one place polarity composition
//! meets test expectations.

use causeway_core::models::{GraphVariant, Polarity};

/// Decide whether a candidate path with net polarity `net` satisfies a test
/// under the given graph semantics.
///
/// Unsigned search ignores polarity entirely. Signed search requires the
/// composed sign to match the test's expected direction when one is given;
/// with no expectation, any signed path is acceptable.
pub fn accepts(variant: GraphVariant, net: Polarity, expected: Option<Polarity>) -> bool {
    match variant {
        GraphVariant::Unsigned => true,
        GraphVariant::Signed => match expected {
            None => net != Polarity::Unsigned,
            Some(want) => net == want,
        },
    }
}
