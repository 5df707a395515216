#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::{
    Calculator, DomainKind, Energy, EnergyInputs, Footprint, Personal, PersonalInputs, Travel,
    TravelInputs, Waste, WasteInputs,
};

/// Pie colours, cycled in category order.
pub const PALETTE: [&str; 4] = ["#34D399", "#60A5FA", "#FBBF24", "#F87171"];

/// One value per domain, as the dashboard receives them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryValues {
    pub personal: f64,
    pub travel: f64,
    pub energy: f64,
    pub waste: f64,
}

impl CategoryValues {
    pub fn get(&self, domain: DomainKind) -> f64 {
        match domain {
            DomainKind::Personal => self.personal,
            DomainKind::Travel => self.travel,
            DomainKind::Energy => self.energy,
            DomainKind::Waste => self.waste,
        }
    }

    pub fn total(&self) -> f64 {
        DomainKind::ALL.iter().map(|d| self.get(*d)).sum()
    }
}

impl Default for CategoryValues {
    /// Sample figures shown before any live data source is wired in.
    fn default() -> Self {
        CategoryValues {
            personal: 2.5,
            travel: 4.2,
            energy: 3.1,
            waste: 1.8,
        }
    }
}

/// Where the dashboard gets its numbers from.
pub trait CategorySource {
    fn category_values(&self) -> CategoryValues;
}

/// Fixed values, the sample set unless configured otherwise.
#[derive(Debug, Clone, Default)]
pub struct SampleCategories(pub CategoryValues);

impl CategorySource for SampleCategories {
    fn category_values(&self) -> CategoryValues {
        self.0
    }
}

/// Values computed from the four calculators.
#[derive(Debug, Clone, Default)]
pub struct LiveCategories {
    pub personal: PersonalInputs,
    pub travel: TravelInputs,
    pub energy: EnergyInputs,
    pub waste: WasteInputs,
}

impl LiveCategories {
    pub fn footprints(&self) -> [(DomainKind, Footprint); 4] {
        [
            (DomainKind::Personal, Personal::footprint(&self.personal)),
            (DomainKind::Travel, Travel::footprint(&self.travel)),
            (DomainKind::Energy, Energy::footprint(&self.energy)),
            (DomainKind::Waste, Waste::footprint(&self.waste)),
        ]
    }
}

impl CategorySource for LiveCategories {
    fn category_values(&self) -> CategoryValues {
        CategoryValues {
            personal: Personal::footprint(&self.personal).value(),
            travel: Travel::footprint(&self.travel).value(),
            energy: Energy::footprint(&self.energy).value(),
            waste: Waste::footprint(&self.waste).value(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// Fraction of the total in [0,1] for non-negative inputs; 0 when the
    /// total is 0.
    pub share: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub total: f64,
    pub bars: Vec<Bar>,
    pub pie: Vec<PieSlice>,
}

impl Dashboard {
    pub fn build(source: &impl CategorySource) -> Self {
        Self::from_values(&source.category_values())
    }

    pub fn from_values(values: &CategoryValues) -> Self {
        let total = values.total();
        let bars = DomainKind::ALL
            .iter()
            .map(|d| Bar {
                category: d.label().to_string(),
                value: values.get(*d),
            })
            .collect();
        let pie = DomainKind::ALL
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let value = values.get(*d);
                PieSlice {
                    name: d.label().to_string(),
                    value,
                    share: if total == 0.0 { 0.0 } else { value / total },
                    color: PALETTE[i % PALETTE.len()].to_string(),
                }
            })
            .collect();
        Dashboard { total, bars, pie }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx_eq;
    use crate::options::CarType;

    #[test]
    fn test_sample_dashboard_total_and_order() {
        let dash = Dashboard::build(&SampleCategories::default());
        assert!(approx_eq(dash.total, 11.6));

        let labels: Vec<_> = dash.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(labels, ["Personal", "Travel", "Energy", "Waste"]);
        assert_eq!(dash.bars[1].value, 4.2);
    }

    #[test]
    fn test_pie_shares_and_colors() {
        let dash = Dashboard::build(&SampleCategories::default());
        let share_sum: f64 = dash.pie.iter().map(|s| s.share).sum();
        assert!(approx_eq(share_sum, 1.0));
        assert_eq!(dash.pie[0].color, "#34D399");
        assert_eq!(dash.pie[3].color, "#F87171");
        assert!(approx_eq(dash.pie[3].share, 1.8 / 11.6));
    }

    #[test]
    fn test_zero_total_has_zero_shares() {
        let zeros = CategoryValues {
            personal: 0.0,
            travel: 0.0,
            energy: 0.0,
            waste: 0.0,
        };
        let dash = Dashboard::from_values(&zeros);
        assert_eq!(dash.total, 0.0);
        assert!(dash.pie.iter().all(|s| s.share == 0.0));
    }

    #[test]
    fn test_live_categories_follow_calculators() {
        let live = LiveCategories {
            travel: TravelInputs {
                car_type: CarType::Electric.into(),
                mileage_per_year: 10_000.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let values = live.category_values();
        // default personal: apartment 1 + omnivore 2 + minimal 1
        assert_eq!(values.personal, 4.0);
        assert_eq!(values.travel, 1000.0);
        // default energy: poor efficiency
        assert_eq!(values.energy, 0.3);
        // default waste: minimal plastic
        assert_eq!(values.waste, 2.0);

        let dash = Dashboard::build(&live);
        assert!(approx_eq(dash.total, 1006.3));
        assert_eq!(live.footprints()[1].1.value(), 1000.0);
    }
}
