#![forbid(unsafe_code)]

//! Form state for the four footprint pages: raw field values, typed
//! updates, recompute-on-change sessions and the hints shown alongside.

use natureal_footprint::{DomainKind, UnknownOption};
use thiserror::Error;

pub mod feedback;
pub mod guards;
pub mod pipeline;
pub mod recommendations;
pub mod types;

pub use feedback::{FeedbackPolicy, GaugeScale, PageFeedback};
pub use guards::InputGuard;
pub use pipeline::FormSession;
pub use types::{
    EnergyField, EnergyForm, FieldUpdate, FlightLeg, FlightsForm, Form, FormField, PersonalField,
    PersonalForm, TravelField, TravelForm, WasteField, WasteForm,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{domain} form has no field named {name:?}")]
    UnknownField { domain: DomainKind, name: String },
    #[error("expected `field=value`, got {0:?}")]
    MalformedLine(String),
    #[error(transparent)]
    UnknownDomain(#[from] UnknownOption),
}

/// Parses a domain name as typed on the command line.
pub fn parse_domain(raw: &str) -> Result<DomainKind, FormError> {
    Ok(raw.trim().to_ascii_lowercase().parse::<DomainKind>()?)
}
