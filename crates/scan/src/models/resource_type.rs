use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::error::{Error, ErrorKind};

/// Category of a document within a policy manual.
///
/// Only folders named exactly after one of these variants are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResourceType {
    Policy,
    Procedures,
    Tools,
    Education,
}
impl ResourceType {
    /// Every recognized resource type, in declaration order.
    pub const ALL: [ResourceType; 4] =
        [ResourceType::Policy, ResourceType::Procedures, ResourceType::Tools, ResourceType::Education];

    /// Returns the folder label for the resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Policy => "Policy",
            ResourceType::Procedures => "Procedures",
            ResourceType::Tools => "Tools",
            ResourceType::Education => "Education",
        }
    }
}
impl FromStr for ResourceType {
    type Err = Error;
    // No sanitizing: folder labels are a strict contract, "policy" and
    // "Policies" are not resource types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::ALL.into_iter().find(|kind| kind.as_str() == s) {
            Some(kind) => Ok(kind),
            None => exn::bail!(ErrorKind::UnrecognizedResourceType(s.to_string())),
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
