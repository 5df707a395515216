#![forbid(unsafe_code)]

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use natureal_footprint::{
    Dashboard, DomainKind, EnergyInputs, LiveCategories, PersonalInputs, TravelInputs,
    WasteInputs,
};
use natureal_forms::{FeedbackPolicy, PageFeedback};
use serde::{Deserialize, Serialize};

/// Contents of an `estimate` input file. Missing sections keep their form
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    pub personal: PersonalInputs,
    pub travel: TravelInputs,
    pub energy: EnergyInputs,
    pub waste: WasteInputs,
}

impl From<EstimateRequest> for LiveCategories {
    fn from(req: EstimateRequest) -> Self {
        LiveCategories {
            personal: req.personal,
            travel: req.travel,
            energy: req.energy,
            waste: req.waste,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<PageFeedback>,
    pub dashboard: Dashboard,
}

impl EstimateReport {
    pub fn build(request: EstimateRequest, policy: &FeedbackPolicy) -> Self {
        let live = LiveCategories::from(request);
        let pages = live
            .footprints()
            .into_iter()
            .map(|(domain, footprint)| PageFeedback::new(domain, footprint, policy))
            .collect();
        EstimateReport {
            generated_at: Utc::now(),
            pages,
            dashboard: Dashboard::build(&live),
        }
    }

    pub fn page(&self, domain: DomainKind) -> Option<&PageFeedback> {
        self.pages.iter().find(|p| p.domain == domain)
    }
}

pub fn render_estimate(report: &EstimateReport) -> String {
    let mut out = String::new();
    for page in &report.pages {
        let _ = writeln!(
            out,
            "{:<9} {:>10}  gauge {:.0}%",
            page.domain.label(),
            page.footprint.to_string(),
            page.gauge_percent
        );
        if let Some(hint) = page.suggestion {
            let _ = writeln!(out, "          {hint}");
        }
    }
    out.push('\n');
    out.push_str(&render_dashboard(&report.dashboard));
    out
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total footprint: {:.2}", dashboard.total);
    for slice in &dashboard.pie {
        let _ = writeln!(
            out,
            "  {:<9} {:>10.2}  {:>5.1}%  {}",
            slice.name,
            slice.value,
            slice.share * 100.0,
            slice.color
        );
    }
    out
}
