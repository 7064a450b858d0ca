//! User profile record and the store it is read from.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProfileError;

/// Profile the recommendations are personalised against.
///
/// Read once at the start of a cycle and never mutated by this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    /// Street address. Accepts either a plain string or `{"address": "..."}`.
    #[serde(default, deserialize_with = "deserialize_location")]
    pub location: String,
}

impl UserProfile {
    /// Parse a profile from its JSON form and check the fields the rules rely on.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::Invalid("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Allergies with blank entries dropped.
    pub fn allergy_terms(&self) -> impl Iterator<Item = &str> {
        self.allergies
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
    }

    #[must_use]
    pub fn has_allergies(&self) -> bool {
        self.allergy_terms().next().is_some()
    }

    #[must_use]
    pub fn has_medications(&self) -> bool {
        self.medications.iter().any(|m| !m.trim().is_empty())
    }

    /// Medications whose name contains any of `needles`, case-insensitively.
    #[must_use]
    pub fn medications_matching(&self, needles: &[&str]) -> Vec<&str> {
        self.medications
            .iter()
            .filter(|med| {
                let lower = med.to_lowercase();
                needles.iter().any(|needle| lower.contains(needle))
            })
            .map(String::as_str)
            .collect()
    }
}

/// Source of the profile for a cycle.
pub trait ProfileStore: Send + Sync {
    fn load(&self) -> Result<UserProfile, ProfileError>;
}

impl ProfileStore for UserProfile {
    fn load(&self) -> Result<UserProfile, ProfileError> {
        self.validate()?;
        Ok(self.clone())
    }
}

fn deserialize_location<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Location {
        Plain(String),
        Structured { address: String },
    }

    Ok(match Location::deserialize(deserializer)? {
        Location::Plain(address) | Location::Structured { address } => address,
    })
}
