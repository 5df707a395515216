#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::numeric::lenient;
use crate::options::{CarType, Choice};
use crate::{Calculator, DomainKind, Footprint};

/// Flight counts per year, by haul length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightsPerYear {
    /// Under 3 hours.
    #[serde(deserialize_with = "lenient")]
    pub short: f64,
    /// 3 to 6 hours.
    #[serde(deserialize_with = "lenient")]
    pub medium: f64,
    /// Over 6 hours.
    #[serde(deserialize_with = "lenient")]
    pub long: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TravelInputs {
    pub car_type: Choice<CarType>,
    #[serde(deserialize_with = "lenient")]
    pub mileage_per_year: f64,
    /// Hours per week.
    #[serde(deserialize_with = "lenient")]
    pub public_transport: f64,
    pub flights_per_year: FlightsPerYear,
}

pub fn car_coefficient(car: &Choice<CarType>) -> f64 {
    car.weight(|c| match c {
        CarType::Gasoline => 2.0,
        CarType::Diesel => 2.2,
        CarType::Hybrid => 1.2,
        CarType::Electric => 0.5,
        CarType::NoCar => 0.0,
    })
}

pub fn mileage_impact(mileage_per_year: f64, car: &Choice<CarType>) -> f64 {
    mileage_per_year * car_coefficient(car) * 0.2
}

pub fn public_transport_impact(hours_per_week: f64) -> f64 {
    hours_per_week * 0.3
}

pub fn flight_impact(flights: &FlightsPerYear) -> f64 {
    flights.short * 0.5 + flights.medium * 1.5 + flights.long * 3.0
}

pub struct Travel;

impl Calculator for Travel {
    const DOMAIN: DomainKind = DomainKind::Travel;
    type Inputs = TravelInputs;

    fn footprint(inputs: &TravelInputs) -> Footprint {
        Footprint::from_total(
            mileage_impact(inputs.mileage_per_year, &inputs.car_type)
                + public_transport_impact(inputs.public_transport)
                + flight_impact(&inputs.flights_per_year),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;

    #[test]
    fn test_electric_commuter() {
        let inputs = TravelInputs {
            car_type: CarType::Electric.into(),
            mileage_per_year: 10_000.0,
            ..Default::default()
        };
        // 10000 * 0.5 * 0.2
        let fp = Travel::footprint(&inputs);
        assert_eq!(fp.value(), 1000.0);
        assert_eq!(fp.to_string(), "1000.00");
    }

    #[test]
    fn test_no_car_ignores_mileage() {
        let inputs = TravelInputs {
            car_type: CarType::NoCar.into(),
            mileage_per_year: 25_000.0,
            public_transport: 10.0,
            ..Default::default()
        };
        assert_eq!(Travel::footprint(&inputs).value(), 3.0);
    }

    #[test]
    fn test_flight_mix() {
        let flights = FlightsPerYear {
            short: 2.0,
            medium: 1.0,
            long: 1.0,
        };
        assert!(approx_eq(flight_impact(&flights), 5.5));

        let inputs = TravelInputs {
            car_type: CarType::Diesel.into(),
            mileage_per_year: 100.0,
            public_transport: 1.0,
            flights_per_year: flights,
        };
        // 100*2.2*0.2 = 44, + 0.3 + 5.5
        assert_eq!(Travel::footprint(&inputs).value(), 49.8);
    }

    #[test]
    fn test_unrecognized_car_contributes_nothing() {
        let inputs = TravelInputs {
            car_type: Choice::parse("hovercraft"),
            mileage_per_year: 8_000.0,
            ..Default::default()
        };
        assert_eq!(Travel::footprint(&inputs), Footprint::ZERO);
    }

    #[test]
    fn test_deserialize_nested_flights() {
        let inputs: TravelInputs = serde_json::from_str(
            r#"{"carType": "hybrid", "mileagePerYear": "", "flightsPerYear": {"long": "2"}}"#,
        )
        .unwrap();
        assert_eq!(inputs.car_type, Choice::Known(CarType::Hybrid));
        assert_eq!(inputs.mileage_per_year, 0.0);
        assert_eq!(inputs.flights_per_year.short, 0.0);
        assert_eq!(inputs.flights_per_year.long, 2.0);
        assert_eq!(Travel::footprint(&inputs).value(), 6.0);
    }

    #[test]
    fn test_overflowing_inputs_total_zero() {
        let inputs = TravelInputs {
            mileage_per_year: 1e308,
            flights_per_year: FlightsPerYear {
                long: -1e308,
                ..Default::default()
            },
            ..Default::default()
        };
        let fp = Travel::footprint(&inputs);
        assert_eq!(fp, Footprint::ZERO);
        assert_eq!(fp.to_string(), "0.00");
    }
}
