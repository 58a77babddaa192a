use std::fmt::{Debug, Formatter};

use derive_more::From;
use serde::{Deserialize, Serialize};

/// Fraction of the battery capacity that is currently available.
#[derive(Copy, Clone, From, Serialize, Deserialize)]
pub struct StateOfCharge(pub f64);

impl StateOfCharge {
    pub const fn to_percent(self) -> f64 {
        100.0 * self.0
    }
}

impl Debug for StateOfCharge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.to_percent())
    }
}

ordered_float!(StateOfCharge);
