use std::fmt::{Debug, Display, Formatter};

use crate::quantity::proportions::StateOfCharge;

/// Proportion rendered as a percentage with one fractional digit.
pub struct FormattedPercentage(pub f64);

impl From<StateOfCharge> for FormattedPercentage {
    fn from(state_of_charge: StateOfCharge) -> Self {
        Self(state_of_charge.0)
    }
}

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
