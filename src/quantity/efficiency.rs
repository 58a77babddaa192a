use std::ops::Mul;

use crate::quantity::{distance::Miles, energy::KilowattHours, proportions::StateOfCharge};

quantity!(MilesPerKilowattHour, "mi/kWh");

impl Mul<f64> for MilesPerKilowattHour {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

/// Derate the efficiency to the fraction of the battery that is available.
impl Mul<StateOfCharge> for MilesPerKilowattHour {
    type Output = Self;

    fn mul(self, rhs: StateOfCharge) -> Self::Output {
        self * rhs.0
    }
}

impl Mul<KilowattHours> for MilesPerKilowattHour {
    type Output = Miles;

    fn mul(self, rhs: KilowattHours) -> Self::Output {
        Miles(self.0 * rhs.0)
    }
}
