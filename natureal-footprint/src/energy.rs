#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::numeric::lenient;
use crate::options::{Choice, EnergyEfficiency, EnergySource, RenewableUsage};
use crate::{Calculator, DomainKind, Footprint};

/// Monthly household energy use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyInputs {
    /// Collected with the form, not part of the formula.
    pub energy_source: Choice<EnergySource>,
    /// kWh per month.
    #[serde(deserialize_with = "lenient")]
    pub electricity_usage: f64,
    /// Cubic meters per month.
    #[serde(deserialize_with = "lenient")]
    pub gas_usage: f64,
    pub renewable_usage: Choice<RenewableUsage>,
    pub energy_efficiency: Choice<EnergyEfficiency>,
}

pub fn electricity_impact(kwh: f64) -> f64 {
    kwh * 0.4
}

pub fn gas_impact(cubic_meters: f64) -> f64 {
    cubic_meters * 2.3
}

pub fn renewable_impact(renewable: &Choice<RenewableUsage>) -> f64 {
    renewable.weight(|r| match r {
        RenewableUsage::Fully => -0.5,
        RenewableUsage::Partially => -0.2,
        RenewableUsage::No => 0.0,
    })
}

pub fn efficiency_impact(efficiency: &Choice<EnergyEfficiency>) -> f64 {
    efficiency.weight(|e| match e {
        EnergyEfficiency::Excellent => -0.3,
        EnergyEfficiency::Good => -0.2,
        EnergyEfficiency::Poor => 0.3,
        EnergyEfficiency::Average => 0.0,
    })
}

pub struct Energy;

impl Calculator for Energy {
    const DOMAIN: DomainKind = DomainKind::Energy;
    type Inputs = EnergyInputs;

    /// Not clamped: renewable and efficiency credits can take the total
    /// below zero.
    fn footprint(inputs: &EnergyInputs) -> Footprint {
        Footprint::from_total(
            electricity_impact(inputs.electricity_usage)
                + gas_impact(inputs.gas_usage)
                + renewable_impact(&inputs.renewable_usage)
                + efficiency_impact(&inputs.energy_efficiency),
        )
    }
}
