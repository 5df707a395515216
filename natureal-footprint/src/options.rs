#![forbid(unsafe_code)]

use core::fmt;
use core::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Raised only by strict parsing; calculators never see it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} option: {value:?}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

/// A closed set of form options. The first entry of `ALL` is the default.
pub trait OptionSet: Copy + Eq + fmt::Debug + 'static {
    /// Form field name the options belong to.
    const FIELD: &'static str;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn lookup(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.as_str() == raw)
    }
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl OptionSet for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as OptionSet>::ALL[0]
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as OptionSet>::lookup(s).ok_or_else(|| UnknownOption {
                    field: $field,
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_set! {
    HomeType, "homeType" {
        Apartment => "apartment",
        House => "house",
        Townhouse => "townhouse",
    }
}

option_set! {
    DietType, "dietType" {
        Omnivore => "omnivore",
        Vegetarian => "vegetarian",
        Vegan => "vegan",
    }
}

option_set! {
    ShoppingHabits, "shoppingHabits" {
        Minimal => "minimal",
        Moderate => "moderate",
        Frequent => "frequent",
    }
}

option_set! {
    CarType, "carType" {
        Gasoline => "gasoline",
        Diesel => "diesel",
        Hybrid => "hybrid",
        Electric => "electric",
        NoCar => "none",
    }
}

option_set! {
    /// Recorded on the energy form but not weighted.
    EnergySource, "energySource" {
        Electricity => "electricity",
        NaturalGas => "naturalGas",
        Coal => "coal",
        Renewables => "renewables",
    }
}

option_set! {
    RenewableUsage, "renewableUsage" {
        No => "no",
        Partially => "partially",
        Fully => "fully",
    }
}

option_set! {
    EnergyEfficiency, "energyEfficiency" {
        Poor => "poor",
        Average => "average",
        Good => "good",
        Excellent => "excellent",
    }
}

option_set! {
    RecyclingHabit, "recycling" {
        Never => "never",
        Sometimes => "sometimes",
        Always => "always",
    }
}

option_set! {
    CompostHabit, "compost" {
        No => "no",
        Sometimes => "sometimes",
        Yes => "yes",
    }
}

option_set! {
    PlasticConsumption, "plasticConsumption" {
        Minimal => "minimal",
        Moderate => "moderate",
        High => "high",
    }
}

/// Value of an option field as the form submitted it.
///
/// Anything outside the option set is kept verbatim as `Unrecognized`
/// and weighs 0 in every formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: OptionSet> Choice<T> {
    pub fn parse(raw: &str) -> Self {
        match T::lookup(raw) {
            Some(option) => Choice::Known(option),
            None => Choice::Unrecognized(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(option) => Some(*option),
            Choice::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::Known(option) => option.as_str(),
            Choice::Unrecognized(raw) => raw,
        }
    }

    /// Coefficient of a known option, 0 for anything else.
    pub fn weight(&self, coefficient: impl FnOnce(T) -> f64) -> f64 {
        self.known().map_or(0.0, coefficient)
    }
}

impl<T: OptionSet + Default> Default for Choice<T> {
    fn default() -> Self {
        Choice::Known(T::default())
    }
}

impl<T> From<T> for Choice<T> {
    fn from(option: T) -> Self {
        Choice::Known(option)
    }
}

impl<T: OptionSet> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: OptionSet> Serialize for Choice<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChoice {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

/// Strings are matched against the option set. Numbers, nulls and
/// anything else land in `Unrecognized` instead of failing the input.
impl<'de, T: OptionSet> Deserialize<'de> for Choice<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawChoice::deserialize(deserializer)? {
            RawChoice::Text(raw) => Choice::parse(&raw),
            RawChoice::Number(n) => Choice::Unrecognized(n.to_string()),
            RawChoice::Other(_) => Choice::Unrecognized(String::new()),
        })
    }
}
