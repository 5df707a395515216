#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::numeric::lenient;
use crate::options::{Choice, DietType, HomeType, ShoppingHabits};
use crate::{Calculator, DomainKind, Footprint};

/// Household and lifestyle answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInputs {
    #[serde(deserialize_with = "lenient")]
    pub household_size: f64,
    pub home_type: Choice<HomeType>,
    /// Square feet.
    #[serde(deserialize_with = "lenient")]
    pub home_size: f64,
    pub diet_type: Choice<DietType>,
    pub shopping_habits: Choice<ShoppingHabits>,
}

pub fn household_impact(household_size: f64) -> f64 {
    household_size * 1.5
}

pub fn home_impact(home_type: &Choice<HomeType>) -> f64 {
    home_type.weight(|t| match t {
        HomeType::House => 2.0,
        HomeType::Apartment => 1.0,
        HomeType::Townhouse => 1.5,
    })
}

pub fn home_size_impact(home_size_sq_ft: f64) -> f64 {
    home_size_sq_ft / 1000.0
}

pub fn diet_impact(diet: &Choice<DietType>) -> f64 {
    diet.weight(|d| match d {
        DietType::Omnivore => 2.0,
        DietType::Vegetarian => 1.5,
        DietType::Vegan => 1.0,
    })
}

pub fn shopping_impact(shopping: &Choice<ShoppingHabits>) -> f64 {
    shopping.weight(|s| match s {
        ShoppingHabits::Frequent => 2.0,
        ShoppingHabits::Moderate => 1.5,
        ShoppingHabits::Minimal => 1.0,
    })
}

pub struct Personal;

impl Calculator for Personal {
    const DOMAIN: DomainKind = DomainKind::Personal;
    type Inputs = PersonalInputs;

    fn footprint(inputs: &PersonalInputs) -> Footprint {
        Footprint::from_total(
            household_impact(inputs.household_size)
                + home_impact(&inputs.home_type)
                + home_size_impact(inputs.home_size)
                + diet_impact(&inputs.diet_type)
                + shopping_impact(&inputs.shopping_habits),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersonalInputs {
        PersonalInputs {
            household_size: 4.0,
            home_type: HomeType::House.into(),
            home_size: 2000.0,
            diet_type: DietType::Vegan.into(),
            shopping_habits: ShoppingHabits::Minimal.into(),
        }
    }

    #[test]
    fn test_family_house_vegan_minimal() {
        // 4*1.5 + 2 + 2000/1000 + 1 + 1
        let fp = Personal::footprint(&sample());
        assert_eq!(fp.value(), 12.0);
        assert_eq!(fp.to_string(), "12.00");
    }

    #[test]
    fn test_defaults_only_count_option_weights() {
        // apartment 1 + omnivore 2 + minimal 1
        assert_eq!(Personal::footprint(&PersonalInputs::default()).value(), 4.0);
    }

    #[test]
    fn test_each_option_weight() {
        assert_eq!(home_impact(&HomeType::Townhouse.into()), 1.5);
        assert_eq!(diet_impact(&DietType::Vegetarian.into()), 1.5);
        assert_eq!(shopping_impact(&ShoppingHabits::Frequent.into()), 2.0);
        assert_eq!(shopping_impact(&ShoppingHabits::Moderate.into()), 1.5);
    }

    #[test]
    fn test_unrecognized_options_fall_back_to_zero() {
        let inputs = PersonalInputs {
            home_type: Choice::parse("castle"),
            diet_type: Choice::parse("breatharian"),
            shopping_habits: Choice::parse("compulsive"),
            ..sample()
        };
        // Only household (6) and home size (2) remain.
        assert_eq!(Personal::footprint(&inputs).value(), 8.0);
    }

    #[test]
    fn test_deterministic() {
        let inputs = sample();
        assert_eq!(Personal::footprint(&inputs), Personal::footprint(&inputs.clone()));
    }

    #[test]
    fn test_deserialize_form_json() {
        let inputs: PersonalInputs = serde_json::from_str(
            r#"{"householdSize": "4", "homeType": "house", "homeSize": 2000,
                "dietType": "vegan", "shoppingHabits": "minimal"}"#,
        )
        .unwrap();
        assert_eq!(inputs, sample());

        let blank: PersonalInputs =
            serde_json::from_str(r#"{"householdSize": "", "homeSize": "big"}"#).unwrap();
        assert_eq!(blank, PersonalInputs::default());
    }

    #[test]
    fn test_non_string_options_weigh_zero() {
        let numeric_home: PersonalInputs =
            serde_json::from_str(r#"{"householdSize": 2, "homeType": 3}"#).unwrap();
        // 2*1.5 + 0 + 0 + omnivore 2 + minimal 1
        assert_eq!(Personal::footprint(&numeric_home).value(), 6.0);

        let null_diet: PersonalInputs =
            serde_json::from_str(r#"{"householdSize": 2, "dietType": null}"#).unwrap();
        assert_eq!(Personal::footprint(&null_diet).value(), 5.0);
    }
}
