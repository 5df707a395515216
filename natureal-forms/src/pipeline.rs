#![forbid(unsafe_code)]

use natureal_footprint::{Calculator, Footprint};
use tracing::debug;

use crate::guards::InputGuard;
use crate::types::{FieldUpdate, Form, FormField};
use crate::FormError;

/// One domain's form plus the footprint derived from its latest snapshot.
///
/// Every accepted update is followed by a synchronous recompute, so
/// `footprint()` never lags behind `form()`.
#[derive(Debug, Clone)]
pub struct FormSession<F: Form> {
    form: F,
    footprint: Footprint,
    revision: u64,
}

impl<F: Form> Default for FormSession<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: Form> FormSession<F> {
    pub fn new(form: F) -> Self {
        let footprint = recompute(&form);
        FormSession {
            form,
            footprint,
            revision: 0,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Number of updates applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn apply(&mut self, update: &FieldUpdate<F::Field>) -> Footprint {
        self.form.set(update.field, &update.value);
        self.revision += 1;
        self.footprint = recompute(&self.form);
        debug!(
            domain = %<F::Field as FormField>::DOMAIN,
            field = update.field.name(),
            value = %update.value,
            revision = self.revision,
            footprint = %self.footprint,
            "recomputed footprint"
        );
        self.footprint
    }

    /// Parses and applies a `field=value` line. A rejected line leaves the
    /// session untouched.
    pub fn apply_line(&mut self, line: &str) -> Result<Footprint, FormError> {
        let update = InputGuard::parse_update::<F::Field>(line)?;
        Ok(self.apply(&update))
    }
}

fn recompute<F: Form>(form: &F) -> Footprint {
    <F::Calc as Calculator>::footprint(&form.to_inputs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EnergyField, EnergyForm, FlightLeg, PersonalField, PersonalForm, TravelField, TravelForm,
        WasteForm,
    };

    #[test]
    fn test_initial_footprint_reflects_defaults() {
        assert_eq!(FormSession::<PersonalForm>::default().footprint().value(), 4.0);
        assert_eq!(FormSession::<TravelForm>::default().footprint().value(), 0.0);
        assert_eq!(FormSession::<EnergyForm>::default().footprint().value(), 0.3);
        assert_eq!(FormSession::<WasteForm>::default().footprint().value(), 2.0);
    }

    #[test]
    fn test_each_update_recomputes() {
        let mut session = FormSession::<PersonalForm>::default();
        let steps = [
            (PersonalField::HouseholdSize, "4", 10.0),
            (PersonalField::HomeType, "house", 11.0),
            (PersonalField::HomeSize, "2000", 13.0),
            (PersonalField::DietType, "vegan", 12.0),
            (PersonalField::ShoppingHabits, "minimal", 12.0),
        ];
        for (field, value, expected) in steps {
            let fp = session.apply(&FieldUpdate::new(field, value));
            assert_eq!(fp.value(), expected, "after {}", field.name());
            assert_eq!(session.footprint(), fp);
        }
        assert_eq!(session.revision(), 5);
        assert_eq!(session.footprint().to_string(), "12.00");
    }

    #[test]
    fn test_flight_leg_updates_route_to_nested_record() {
        let mut session = FormSession::<TravelForm>::default();
        session.apply_line("carType=none").unwrap();
        session.apply_line("flightsPerYear.short=2").unwrap();
        session.apply_line("flightsPerYear.long=1").unwrap();
        let fp = session.apply_line("flightsPerYear.medium=2").unwrap();

        // 2*0.5 + 2*1.5 + 1*3
        assert_eq!(fp.value(), 7.0);
        let flights = &session.form().flights_per_year;
        assert_eq!((flights.short.as_str(), flights.long.as_str()), ("2", "1"));

        let fp = session
            .apply(&FieldUpdate::new(TravelField::Flights(FlightLeg::Short), ""))
            .value();
        assert_eq!(fp, 6.0);
    }

    #[test]
    fn test_garbage_numbers_match_zero() {
        let mut junk = FormSession::<EnergyForm>::default();
        junk.apply(&FieldUpdate::new(EnergyField::ElectricityUsage, "lots"));
        junk.apply(&FieldUpdate::new(EnergyField::GasUsage, ""));

        let mut zero = FormSession::<EnergyForm>::default();
        zero.apply(&FieldUpdate::new(EnergyField::ElectricityUsage, "0"));
        zero.apply(&FieldUpdate::new(EnergyField::GasUsage, "0"));

        assert_eq!(junk.footprint(), zero.footprint());
    }

    #[test]
    fn test_rejected_line_leaves_session_untouched() {
        let mut session = FormSession::<PersonalForm>::default();
        session.apply_line("householdSize=2").unwrap();
        let before = session.footprint();

        assert!(session.apply_line("pets=3").is_err());
        assert!(session.apply_line("no equals sign").is_err());
        assert_eq!(session.footprint(), before);
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut a = FormSession::<WasteForm>::default();
        let b = FormSession::<WasteForm>::default();
        a.apply_line("foodWaste=10").unwrap();
        assert_eq!(a.footprint().value(), 32.0);
        assert_eq!(b.footprint().value(), 2.0);
    }
}
