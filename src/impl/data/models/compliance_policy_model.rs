use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::CompliancePolicy, errors::InvalidRon};

/// RON representation of a `CompliancePolicy`, e.g.
/// `(weekly_target: 3, top_locations: 3)`. Omitted fields keep their default.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CompliancePolicyModel {
    weekly_target: u32,
    top_locations: usize,
}

impl Default for CompliancePolicyModel {
    fn default() -> Self {
        let policy = CompliancePolicy::default();
        Self {
            weekly_target: policy.weekly_target,
            top_locations: policy.top_locations,
        }
    }
}

impl FromStr for CompliancePolicyModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("CompliancePolicy", &e))
    }
}

impl Into<CompliancePolicy> for CompliancePolicyModel {
    fn into(self) -> CompliancePolicy {
        CompliancePolicy {
            weekly_target: self.weekly_target,
            top_locations: self.top_locations,
        }
    }
}
