use super::descriptor::FACILITY;
use crate::shared::metadata::MetadataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FacilityStatus {
    #[default]
    Draft,
    Deprecated,
    Active,
}

impl FacilityStatus {
    pub const ALL: [FacilityStatus; 3] = [Self::Draft, Self::Deprecated, Self::Active];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Deprecated => "Deprecated",
            Self::Active => "Active",
        }
    }
}

impl FromStr for FacilityStatus {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| MetadataError::UnknownStatus {
                model: FACILITY.model_name,
                value: s.to_string(),
            })
    }
}

impl fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
