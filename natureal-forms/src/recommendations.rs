#![forbid(unsafe_code)]

use natureal_footprint::DomainKind;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTips {
    pub category: DomainKind,
    pub tips: [&'static str; 4],
}

pub const CATEGORY_TIPS: [CategoryTips; 4] = [
    CategoryTips {
        category: DomainKind::Personal,
        tips: [
            "Switch to a plant-based diet for some meals",
            "Buy local and seasonal produce",
            "Reduce meat consumption, especially beef",
            "Use reusable shopping bags and containers",
        ],
    },
    CategoryTips {
        category: DomainKind::Travel,
        tips: [
            "Use public transportation when possible",
            "Consider carpooling or bike-sharing",
            "Combine multiple errands into one trip",
            "Consider an electric or hybrid vehicle",
        ],
    },
    CategoryTips {
        category: DomainKind::Energy,
        tips: [
            "Switch to LED light bulbs",
            "Install a programmable thermostat",
            "Use energy-efficient appliances",
            "Consider solar panel installation",
        ],
    },
    CategoryTips {
        category: DomainKind::Waste,
        tips: [
            "Start composting food waste",
            "Recycle properly and consistently",
            "Reduce single-use plastics",
            "Donate or repair items instead of disposing",
        ],
    },
];

pub const ECO_FRIENDLY_TIPS: [&str; 8] = [
    "Turn off lights when leaving a room.",
    "Use a reusable water bottle.",
    "Opt for paperless billing.",
    "Plant a tree in your community.",
    "Unplug devices when not in use.",
    "Take shorter showers to save water.",
    "Choose public transport over driving.",
    "Repurpose old clothes instead of discarding.",
];

pub fn tips_for(domain: DomainKind) -> &'static [&'static str; 4] {
    // CATEGORY_TIPS is in DomainKind::ALL order
    let idx = DomainKind::ALL
        .iter()
        .position(|d| *d == domain)
        .unwrap_or_default();
    &CATEGORY_TIPS[idx].tips
}

/// Uniform draw from the eco tip pool.
pub fn random_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ECO_FRIENDLY_TIPS
        .choose(rng)
        .copied()
        .unwrap_or(ECO_FRIENDLY_TIPS[0])
}

/// Personalised line shown with a drawn tip; a blank name is anonymous.
pub fn greeting(name: Option<&str>, tip: &str) -> String {
    match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Hey {name}, {tip}"),
        None => format!("Hey, {tip}"),
    }
}
