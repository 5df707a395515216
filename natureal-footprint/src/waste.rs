#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::numeric::lenient;
use crate::options::{Choice, CompostHabit, PlasticConsumption, RecyclingHabit};
use crate::{Calculator, DomainKind, Footprint};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteInputs {
    pub recycling: Choice<RecyclingHabit>,
    pub compost: Choice<CompostHabit>,
    /// Gallons per week.
    #[serde(deserialize_with = "lenient")]
    pub waste_production: f64,
    pub plastic_consumption: Choice<PlasticConsumption>,
    /// Pounds per week.
    #[serde(deserialize_with = "lenient")]
    pub food_waste: f64,
}

pub fn recycling_impact(recycling: &Choice<RecyclingHabit>) -> f64 {
    recycling.weight(|r| match r {
        RecyclingHabit::Always => -5.0,
        RecyclingHabit::Sometimes => -2.0,
        RecyclingHabit::Never => 0.0,
    })
}

pub fn compost_impact(compost: &Choice<CompostHabit>) -> f64 {
    compost.weight(|c| match c {
        CompostHabit::Yes => -4.0,
        CompostHabit::Sometimes => -2.0,
        CompostHabit::No => 0.0,
    })
}

pub fn plastic_impact(plastic: &Choice<PlasticConsumption>) -> f64 {
    plastic.weight(|p| match p {
        PlasticConsumption::High => 10.0,
        PlasticConsumption::Moderate => 5.0,
        PlasticConsumption::Minimal => 2.0,
    })
}

pub fn waste_production_impact(gallons_per_week: f64) -> f64 {
    gallons_per_week * 2.0
}

pub fn food_waste_impact(pounds_per_week: f64) -> f64 {
    pounds_per_week * 3.0
}

pub struct Waste;

impl Calculator for Waste {
    const DOMAIN: DomainKind = DomainKind::Waste;
    type Inputs = WasteInputs;

    /// The only calculator with a floor at 0.
    fn footprint(inputs: &WasteInputs) -> Footprint {
        let total = waste_production_impact(inputs.waste_production)
            + plastic_impact(&inputs.plastic_consumption)
            + food_waste_impact(inputs.food_waste)
            + recycling_impact(&inputs.recycling)
            + compost_impact(&inputs.compost);
        Footprint::from_total(total.max(0.0))
    }
}
