#![forbid(unsafe_code)]

//! Footprint estimator core: typed inputs and the four per-domain
//! calculators, plus the dashboard aggregate.

use core::fmt;
use core::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod dashboard;
pub mod energy;
pub mod numeric;
pub mod options;
pub mod personal;
pub mod travel;
pub mod waste;

pub use dashboard::{CategorySource, CategoryValues, Dashboard, LiveCategories, SampleCategories};
pub use energy::{Energy, EnergyInputs};
pub use numeric::{coerce_number, round_to_cents};
pub use options::{
    CarType, Choice, CompostHabit, DietType, EnergyEfficiency, EnergySource, HomeType,
    OptionSet, PlasticConsumption, RecyclingHabit, RenewableUsage, ShoppingHabits, UnknownOption,
};
pub use personal::{Personal, PersonalInputs};
pub use travel::{FlightsPerYear, Travel, TravelInputs};
pub use waste::{Waste, WasteInputs};

/// Emissions estimate for one domain, already rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Footprint(f64);

impl Footprint {
    pub const ZERO: Footprint = Footprint(0.0);

    /// Rounds a raw formula total.
    pub fn from_total(total: f64) -> Self {
        Footprint(round_to_cents(total))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// The four independent calculation groups, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    Personal,
    Travel,
    Energy,
    Waste,
}

impl DomainKind {
    pub const ALL: [DomainKind; 4] = [
        DomainKind::Personal,
        DomainKind::Travel,
        DomainKind::Energy,
        DomainKind::Waste,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DomainKind::Personal => "personal",
            DomainKind::Travel => "travel",
            DomainKind::Energy => "energy",
            DomainKind::Waste => "waste",
        }
    }

    /// Capitalised label used by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            DomainKind::Personal => "Personal",
            DomainKind::Travel => "Travel",
            DomainKind::Energy => "Energy",
            DomainKind::Waste => "Waste",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DomainKind {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainKind::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| UnknownOption {
                field: "domain",
                value: s.to_string(),
            })
    }
}

/// A footprint formula over one domain's input record.
///
/// Sealed: only the four domains in this crate implement it.
pub trait Calculator: private::Sealed {
    const DOMAIN: DomainKind;
    type Inputs: Clone + Default + fmt::Debug + Serialize + DeserializeOwned;

    /// Pure and deterministic; never fails.
    fn footprint(inputs: &Self::Inputs) -> Footprint;
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Personal {}
    impl Sealed for super::Travel {}
    impl Sealed for super::Energy {}
    impl Sealed for super::Waste {}
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
