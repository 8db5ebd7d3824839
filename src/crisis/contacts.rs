// Crisis contact resolver
//
// Country code -> emergency number and ordered crisis contacts. Backed by a
// single static table shared by the chatbot and the contacts view.

use serde::Serialize;
use std::fmt;

use super::table::COUNTRY_TABLE;

/// Country used when the user has none set or the code is unknown
pub const DEFAULT_COUNTRY: &str = "US";

/// How a contact is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Phone,
    Text,
    Chat,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Phone => "phone",
            ChannelType::Text => "text",
            ChannelType::Chat => "chat",
        }
    }

    /// Call-to-action label shown next to the contact
    pub fn action_label(&self) -> &'static str {
        match self {
            ChannelType::Phone => "Call Now",
            ChannelType::Text => "Text Now",
            ChannelType::Chat => "Chat Now",
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrisisContact {
    pub id: &'static str,
    pub name: &'static str,
    /// Dial string, SMS short code or chat address; formatting is kept as authored
    pub number: &'static str,
    pub channel_type: ChannelType,
    pub description: &'static str,
    /// Free-text hours, e.g. "24/7" or "Mon-Sat 2-8 PM"
    pub availability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<&'static str>,
}

impl CrisisContact {
    /// URI that opens this contact on a device (`tel:`, `sms:` or `https://`)
    pub fn link(&self) -> String {
        match self.channel_type {
            ChannelType::Phone => format!("tel:{}", self.number),
            ChannelType::Text => format!("sms:{}", self.number),
            ChannelType::Chat => {
                if self.number.starts_with("http") {
                    self.number.to_string()
                } else {
                    format!("https://{}", self.number)
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCrisisProfile {
    pub code: &'static str,
    pub country_name: &'static str,
    pub emergency_number: &'static str,
    /// Authoring order; the first entry is the primary contact
    pub contacts: &'static [CrisisContact],
}

impl CountryCrisisProfile {
    /// First contact in authoring order.
    ///
    /// Every table row has at least one contact (checked by tests), so the
    /// index is always in bounds.
    pub fn primary_contact(&self) -> &CrisisContact {
        &self.contacts[0]
    }
}

/// Exact, case-sensitive lookup. `None` for unknown codes.
pub fn lookup(country_code: &str) -> Option<&'static CountryCrisisProfile> {
    COUNTRY_TABLE.iter().find(|p| p.code == country_code)
}

/// Resolve a country code, falling back to the `US` profile
pub fn resolve_crisis_contacts(country_code: &str) -> &'static CountryCrisisProfile {
    if let Some(profile) = lookup(country_code) {
        return profile;
    }

    tracing::debug!(
        "Unknown country code '{}', falling back to {}",
        country_code,
        DEFAULT_COUNTRY
    );
    default_profile()
}

/// The `US` profile
pub fn default_profile() -> &'static CountryCrisisProfile {
    // DEFAULT_COUNTRY is the first row of the table
    &COUNTRY_TABLE[0]
}

/// Known country codes in authoring order
pub fn known_codes() -> Vec<&'static str> {
    COUNTRY_TABLE.iter().map(|p| p.code).collect()
}

/// All profiles in authoring order
pub fn all_profiles() -> &'static [CountryCrisisProfile] {
    COUNTRY_TABLE
}
