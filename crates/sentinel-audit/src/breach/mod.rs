mod breach_record;
mod directory_client;
mod simulation;

pub use breach_record::{BreachRecord, NormalizationDefaults};
pub use directory_client::BreachLookup;
pub use simulation::sample_breaches;

pub(crate) use directory_client::fetch_breaches;
