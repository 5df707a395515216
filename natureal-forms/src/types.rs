#![forbid(unsafe_code)]

use core::fmt::Debug;

use natureal_footprint::{
    Calculator, CarType, Choice, CompostHabit, DietType, DomainKind, Energy, EnergyEfficiency,
    EnergyInputs, EnergySource, FlightsPerYear, HomeType, Personal, PersonalInputs,
    PlasticConsumption, RecyclingHabit, RenewableUsage, ShoppingHabits, Travel, TravelInputs,
    Waste, WasteInputs,
};
use serde::{Deserialize, Serialize};

use crate::guards::InputGuard;
use crate::FormError;

/// Addressable field of one domain's form.
pub trait FormField: Copy + Eq + Debug + 'static {
    const DOMAIN: DomainKind;
    const ALL: &'static [Self];

    /// Form name, e.g. `homeSize` or `flightsPerYear.short`.
    fn name(self) -> &'static str;

    /// Whole-name lookup.
    fn resolve(name: &str) -> Result<Self, FormError> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == name)
            .ok_or_else(|| FormError::UnknownField {
                domain: Self::DOMAIN,
                name: name.to_string(),
            })
    }
}

/// A single input change: which leaf to set and the raw text to put there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate<F> {
    pub field: F,
    pub value: String,
}

impl<F: FormField> FieldUpdate<F> {
    pub fn new(field: F, value: impl Into<String>) -> Self {
        FieldUpdate {
            field,
            value: value.into(),
        }
    }
}

/// Raw state of one domain's form, exactly as typed.
pub trait Form: Clone + Default + Debug {
    type Calc: Calculator;
    type Field: FormField;

    /// Writes one leaf; every other field keeps its value.
    fn set(&mut self, field: Self::Field, value: &str);

    fn get(&self, field: Self::Field) -> &str;

    fn to_inputs(&self) -> <Self::Calc as Calculator>::Inputs;
}

// ---- Personal --------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    HouseholdSize,
    HomeType,
    HomeSize,
    DietType,
    ShoppingHabits,
}

impl FormField for PersonalField {
    const DOMAIN: DomainKind = DomainKind::Personal;
    const ALL: &'static [Self] = &[
        PersonalField::HouseholdSize,
        PersonalField::HomeType,
        PersonalField::HomeSize,
        PersonalField::DietType,
        PersonalField::ShoppingHabits,
    ];

    fn name(self) -> &'static str {
        match self {
            PersonalField::HouseholdSize => "householdSize",
            PersonalField::HomeType => "homeType",
            PersonalField::HomeSize => "homeSize",
            PersonalField::DietType => "dietType",
            PersonalField::ShoppingHabits => "shoppingHabits",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalForm {
    pub household_size: String,
    pub home_type: Choice<HomeType>,
    pub home_size: String,
    pub diet_type: Choice<DietType>,
    pub shopping_habits: Choice<ShoppingHabits>,
}

impl Form for PersonalForm {
    type Calc = Personal;
    type Field = PersonalField;

    fn set(&mut self, field: PersonalField, value: &str) {
        match field {
            PersonalField::HouseholdSize => self.household_size = value.to_string(),
            PersonalField::HomeType => self.home_type = Choice::parse(value),
            PersonalField::HomeSize => self.home_size = value.to_string(),
            PersonalField::DietType => self.diet_type = Choice::parse(value),
            PersonalField::ShoppingHabits => self.shopping_habits = Choice::parse(value),
        }
    }

    fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::HouseholdSize => &self.household_size,
            PersonalField::HomeType => self.home_type.as_str(),
            PersonalField::HomeSize => &self.home_size,
            PersonalField::DietType => self.diet_type.as_str(),
            PersonalField::ShoppingHabits => self.shopping_habits.as_str(),
        }
    }

    fn to_inputs(&self) -> PersonalInputs {
        PersonalInputs {
            household_size: InputGuard::number(&self.household_size),
            home_type: self.home_type.clone(),
            home_size: InputGuard::number(&self.home_size),
            diet_type: self.diet_type.clone(),
            shopping_habits: self.shopping_habits.clone(),
        }
    }
}

// ---- Travel ----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightLeg {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelField {
    CarType,
    MileagePerYear,
    PublicTransport,
    /// One key of the nested `flightsPerYear` record.
    Flights(FlightLeg),
}

impl FormField for TravelField {
    const DOMAIN: DomainKind = DomainKind::Travel;
    const ALL: &'static [Self] = &[
        TravelField::CarType,
        TravelField::MileagePerYear,
        TravelField::PublicTransport,
        TravelField::Flights(FlightLeg::Short),
        TravelField::Flights(FlightLeg::Medium),
        TravelField::Flights(FlightLeg::Long),
    ];

    fn name(self) -> &'static str {
        match self {
            TravelField::CarType => "carType",
            TravelField::MileagePerYear => "mileagePerYear",
            TravelField::PublicTransport => "publicTransport",
            TravelField::Flights(FlightLeg::Short) => "flightsPerYear.short",
            TravelField::Flights(FlightLeg::Medium) => "flightsPerYear.medium",
            TravelField::Flights(FlightLeg::Long) => "flightsPerYear.long",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightsForm {
    pub short: String,
    pub medium: String,
    pub long: String,
}

impl FlightsForm {
    fn leg(&self, leg: FlightLeg) -> &str {
        match leg {
            FlightLeg::Short => &self.short,
            FlightLeg::Medium => &self.medium,
            FlightLeg::Long => &self.long,
        }
    }

    fn leg_mut(&mut self, leg: FlightLeg) -> &mut String {
        match leg {
            FlightLeg::Short => &mut self.short,
            FlightLeg::Medium => &mut self.medium,
            FlightLeg::Long => &mut self.long,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TravelForm {
    pub car_type: Choice<CarType>,
    pub mileage_per_year: String,
    pub public_transport: String,
    pub flights_per_year: FlightsForm,
}

impl Form for TravelForm {
    type Calc = Travel;
    type Field = TravelField;

    fn set(&mut self, field: TravelField, value: &str) {
        match field {
            TravelField::CarType => self.car_type = Choice::parse(value),
            TravelField::MileagePerYear => self.mileage_per_year = value.to_string(),
            TravelField::PublicTransport => self.public_transport = value.to_string(),
            TravelField::Flights(leg) => *self.flights_per_year.leg_mut(leg) = value.to_string(),
        }
    }

    fn get(&self, field: TravelField) -> &str {
        match field {
            TravelField::CarType => self.car_type.as_str(),
            TravelField::MileagePerYear => &self.mileage_per_year,
            TravelField::PublicTransport => &self.public_transport,
            TravelField::Flights(leg) => self.flights_per_year.leg(leg),
        }
    }

    fn to_inputs(&self) -> TravelInputs {
        let flights = &self.flights_per_year;
        TravelInputs {
            car_type: self.car_type.clone(),
            mileage_per_year: InputGuard::number(&self.mileage_per_year),
            public_transport: InputGuard::number(&self.public_transport),
            flights_per_year: FlightsPerYear {
                short: InputGuard::number(&flights.short),
                medium: InputGuard::number(&flights.medium),
                long: InputGuard::number(&flights.long),
            },
        }
    }
}

// ---- Energy ----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyField {
    EnergySource,
    ElectricityUsage,
    GasUsage,
    RenewableUsage,
    EnergyEfficiency,
}

impl FormField for EnergyField {
    const DOMAIN: DomainKind = DomainKind::Energy;
    const ALL: &'static [Self] = &[
        EnergyField::EnergySource,
        EnergyField::ElectricityUsage,
        EnergyField::GasUsage,
        EnergyField::RenewableUsage,
        EnergyField::EnergyEfficiency,
    ];

    fn name(self) -> &'static str {
        match self {
            EnergyField::EnergySource => "energySource",
            EnergyField::ElectricityUsage => "electricityUsage",
            EnergyField::GasUsage => "gasUsage",
            EnergyField::RenewableUsage => "renewableUsage",
            EnergyField::EnergyEfficiency => "energyEfficiency",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnergyForm {
    pub energy_source: Choice<EnergySource>,
    pub electricity_usage: String,
    pub gas_usage: String,
    pub renewable_usage: Choice<RenewableUsage>,
    pub energy_efficiency: Choice<EnergyEfficiency>,
}

impl Form for EnergyForm {
    type Calc = Energy;
    type Field = EnergyField;

    fn set(&mut self, field: EnergyField, value: &str) {
        match field {
            EnergyField::EnergySource => self.energy_source = Choice::parse(value),
            EnergyField::ElectricityUsage => self.electricity_usage = value.to_string(),
            EnergyField::GasUsage => self.gas_usage = value.to_string(),
            EnergyField::RenewableUsage => self.renewable_usage = Choice::parse(value),
            EnergyField::EnergyEfficiency => self.energy_efficiency = Choice::parse(value),
        }
    }

    fn get(&self, field: EnergyField) -> &str {
        match field {
            EnergyField::EnergySource => self.energy_source.as_str(),
            EnergyField::ElectricityUsage => &self.electricity_usage,
            EnergyField::GasUsage => &self.gas_usage,
            EnergyField::RenewableUsage => self.renewable_usage.as_str(),
            EnergyField::EnergyEfficiency => self.energy_efficiency.as_str(),
        }
    }

    fn to_inputs(&self) -> EnergyInputs {
        EnergyInputs {
            energy_source: self.energy_source.clone(),
            electricity_usage: InputGuard::number(&self.electricity_usage),
            gas_usage: InputGuard::number(&self.gas_usage),
            renewable_usage: self.renewable_usage.clone(),
            energy_efficiency: self.energy_efficiency.clone(),
        }
    }
}

// ---- Waste -----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WasteField {
    Recycling,
    Compost,
    WasteProduction,
    PlasticConsumption,
    FoodWaste,
}

impl FormField for WasteField {
    const DOMAIN: DomainKind = DomainKind::Waste;
    const ALL: &'static [Self] = &[
        WasteField::Recycling,
        WasteField::Compost,
        WasteField::WasteProduction,
        WasteField::PlasticConsumption,
        WasteField::FoodWaste,
    ];

    fn name(self) -> &'static str {
        match self {
            WasteField::Recycling => "recycling",
            WasteField::Compost => "compost",
            WasteField::WasteProduction => "wasteProduction",
            WasteField::PlasticConsumption => "plasticConsumption",
            WasteField::FoodWaste => "foodWaste",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasteForm {
    pub recycling: Choice<RecyclingHabit>,
    pub compost: Choice<CompostHabit>,
    pub waste_production: String,
    pub plastic_consumption: Choice<PlasticConsumption>,
    pub food_waste: String,
}

impl Form for WasteForm {
    type Calc = Waste;
    type Field = WasteField;

    fn set(&mut self, field: WasteField, value: &str) {
        match field {
            WasteField::Recycling => self.recycling = Choice::parse(value),
            WasteField::Compost => self.compost = Choice::parse(value),
            WasteField::WasteProduction => self.waste_production = value.to_string(),
            WasteField::PlasticConsumption => self.plastic_consumption = Choice::parse(value),
            WasteField::FoodWaste => self.food_waste = value.to_string(),
        }
    }

    fn get(&self, field: WasteField) -> &str {
        match field {
            WasteField::Recycling => self.recycling.as_str(),
            WasteField::Compost => self.compost.as_str(),
            WasteField::WasteProduction => &self.waste_production,
            WasteField::PlasticConsumption => self.plastic_consumption.as_str(),
            WasteField::FoodWaste => &self.food_waste,
        }
    }

    fn to_inputs(&self) -> WasteInputs {
        WasteInputs {
            recycling: self.recycling.clone(),
            compost: self.compost.clone(),
            waste_production: InputGuard::number(&self.waste_production),
            plastic_consumption: self.plastic_consumption.clone(),
            food_waste: InputGuard::number(&self.food_waste),
        }
    }
}
