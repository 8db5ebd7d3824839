// Crisis module
// Crisis phrase detection and localized emergency contacts

mod contacts;
mod detector;
mod table;

pub use contacts::{
    all_profiles, default_profile, known_codes, lookup, resolve_crisis_contacts, ChannelType,
    CountryCrisisProfile, CrisisContact, DEFAULT_COUNTRY,
};
pub use detector::{CrisisDetector, CrisisKeywords, DEFAULT_CRISIS_PHRASES};
