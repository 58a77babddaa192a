use std::fmt::{Display, Formatter};

use bon::bon;
use tracing::debug;

use crate::{
    fmt::FormattedPercentage,
    ops::RangeInclusive,
    quantity::{
        distance::Miles,
        efficiency::MilesPerKilowattHour,
        energy::KilowattHours,
        proportions::StateOfCharge,
        temperature::Fahrenheit,
    },
};

/// Name used when the vehicle is constructed without a usable one.
const FALLBACK_NAME: &str = "unknown EV";

const BATTERY_SIZE_LIMITS: RangeInclusive<KilowattHours> =
    RangeInclusive { min: KilowattHours(10.0), max: KilowattHours(150.0) };

const STATE_OF_CHARGE_LIMITS: RangeInclusive<StateOfCharge> =
    RangeInclusive { min: StateOfCharge(0.15), max: StateOfCharge(1.0) };

const EFFICIENCY_LIMITS: RangeInclusive<MilesPerKilowattHour> =
    RangeInclusive { min: MilesPerKilowattHour(0.5), max: MilesPerKilowattHour(4.5) };

/// Ambient temperatures at which the battery performs at its baseline efficiency.
const OPTIMAL_TEMPERATURES: RangeInclusive<Fahrenheit> =
    RangeInclusive { min: Fahrenheit(65.0), max: Fahrenheit(77.0) };

/// Efficiency multiplier above the optimal temperature band, flat no matter the heat.
const HOT_DERATING: f64 = 0.85;

/// Efficiency loss per degree below the optimal temperature band.
const COLD_LOSS_PER_DEGREE: f64 = 0.01;

/// The cold-weather loss never exceeds half of the baseline.
const MAX_COLD_LOSS: f64 = 0.5;

/// A single electric vehicle's energy state.
///
/// Construction never fails: out-of-range parameters are clamped to the
/// nearest bound and a missing or empty name falls back to a sentinel, so the
/// instance is valid from the start. The battery size and the baseline
/// efficiency are fixed afterwards; only the state of charge and the
/// temperature-derived current efficiency change over the lifetime.
#[derive(Clone)]
#[must_use]
pub struct Vehicle {
    name: String,
    battery_size: KilowattHours,
    state_of_charge: StateOfCharge,
    default_efficiency: MilesPerKilowattHour,
    current_efficiency: MilesPerKilowattHour,
}

#[bon]
impl Vehicle {
    #[builder]
    pub fn new(
        #[builder(into)] name: Option<String>,
        battery_size: KilowattHours,
        state_of_charge: StateOfCharge,
        default_efficiency: MilesPerKilowattHour,
    ) -> Self {
        let default_efficiency = EFFICIENCY_LIMITS.clamp(default_efficiency);
        Self {
            name: name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| FALLBACK_NAME.to_string()),
            battery_size: BATTERY_SIZE_LIMITS.clamp(battery_size),
            state_of_charge: STATE_OF_CHARGE_LIMITS.clamp(state_of_charge),
            default_efficiency,
            current_efficiency: default_efficiency,
        }
    }
}

impl Vehicle {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn battery_size(&self) -> KilowattHours {
        self.battery_size
    }

    pub const fn state_of_charge(&self) -> StateOfCharge {
        self.state_of_charge
    }

    /// Current temperature-adjusted efficiency.
    pub const fn efficiency(&self) -> MilesPerKilowattHour {
        self.current_efficiency
    }

    /// Estimated distance on the remaining charge at the current efficiency.
    pub fn range(&self) -> Miles {
        self.current_efficiency * self.state_of_charge * self.battery_size
    }

    /// Re-derive the current efficiency from the ambient temperature.
    ///
    /// Within the optimal band, bounds included, the baseline applies as-is.
    /// Above it, the flat hot-weather penalty. Below it, the loss grows with
    /// every degree until the cap kicks in.
    pub fn update_efficiency(&mut self, temperature: Fahrenheit) {
        self.current_efficiency = if OPTIMAL_TEMPERATURES.contains(temperature) {
            self.default_efficiency
        } else if temperature > OPTIMAL_TEMPERATURES.max {
            self.default_efficiency * HOT_DERATING
        } else {
            let degrees_below = OPTIMAL_TEMPERATURES.min - temperature;
            let loss = (degrees_below.0 * COLD_LOSS_PER_DEGREE).min(MAX_COLD_LOSS);
            self.default_efficiency * (1.0 - loss)
        };
        debug!(?temperature, efficiency = ?self.current_efficiency, "efficiency updated");
    }

    /// Clamp and assign the new state of charge.
    pub fn set_state_of_charge(&mut self, state_of_charge: StateOfCharge) {
        self.state_of_charge = STATE_OF_CHARGE_LIMITS.clamp(state_of_charge);
        debug!(state_of_charge = ?self.state_of_charge, "state of charge set");
    }
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} SOC: {} Range (miles): {:.1}",
            self.name,
            FormattedPercentage::from(self.state_of_charge),
            self.range().0,
        )
    }
}
