#![forbid(unsafe_code)]

use natureal_footprint::{DomainKind, Footprint};
use serde::{Deserialize, Serialize};

pub const HIGH_PERSONAL_SUGGESTION: &str =
    "Consider using energy-efficient appliances and reducing shopping frequency.";
pub const LOW_PERSONAL_SUGGESTION: &str = "Great job! Keep maintaining sustainable habits.";

/// How a footprint maps onto the page's progress bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeScale {
    /// Percent of bar width per footprint unit.
    pub percent_per_unit: f64,
    pub cap: Option<f64>,
}

impl GaugeScale {
    /// Only the waste bar is capped at 100%.
    pub fn for_domain(domain: DomainKind) -> Self {
        match domain {
            DomainKind::Personal => GaugeScale {
                percent_per_unit: 10.0,
                cap: None,
            },
            DomainKind::Travel | DomainKind::Energy => GaugeScale {
                percent_per_unit: 5.0,
                cap: None,
            },
            DomainKind::Waste => GaugeScale {
                percent_per_unit: 5.0,
                cap: Some(100.0),
            },
        }
    }

    pub fn percent(&self, footprint: Footprint) -> f64 {
        let raw = footprint.value() * self.percent_per_unit;
        match self.cap {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}

/// Thresholds for the textual hints under each form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackPolicy {
    pub suggestion_threshold: f64,
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        FeedbackPolicy {
            suggestion_threshold: 10.0,
        }
    }
}

impl FeedbackPolicy {
    /// Only the personal page carries a suggestion.
    pub fn suggestion(&self, domain: DomainKind, footprint: Footprint) -> Option<&'static str> {
        match domain {
            DomainKind::Personal if footprint.value() > self.suggestion_threshold => {
                Some(HIGH_PERSONAL_SUGGESTION)
            }
            DomainKind::Personal => Some(LOW_PERSONAL_SUGGESTION),
            _ => None,
        }
    }
}

/// Everything a page shows next to its footprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFeedback {
    pub domain: DomainKind,
    pub footprint: Footprint,
    pub gauge_percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'static str>,
}

impl PageFeedback {
    pub fn new(domain: DomainKind, footprint: Footprint, policy: &FeedbackPolicy) -> Self {
        PageFeedback {
            domain,
            footprint,
            gauge_percent: GaugeScale::for_domain(domain).percent(footprint),
            suggestion: policy.suggestion(domain, footprint),
        }
    }
}
