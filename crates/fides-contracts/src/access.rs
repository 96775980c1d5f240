//! Data access types: the closed data-type enumeration, the audit payload
//! written for every authorized access, and the success payload returned to
//! the requesting provider.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{PatientId, ProviderId};

/// The closed set of shareable data categories.
///
/// Represented as a tagged enumeration rather than a free-form string so the
/// access policy's permitted-under-access-type check is exhaustive at compile
/// time: adding a variant forces a decision in the policy matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    MedicalHistory,
    LabResults,
    Prescriptions,
    Imaging,
    VitalSigns,
    Demographics,
    Immunizations,
    Allergies,
    MentalHealth,
    GeneticData,
}

impl DataType {
    /// Every variant, in declaration order. Used by demos and policy tests
    /// that walk the full matrix.
    pub const ALL: [DataType; 10] = [
        DataType::MedicalHistory,
        DataType::LabResults,
        DataType::Prescriptions,
        DataType::Imaging,
        DataType::VitalSigns,
        DataType::Demographics,
        DataType::Immunizations,
        DataType::Allergies,
        DataType::MentalHealth,
        DataType::GeneticData,
    ];

    /// The wire name of this data type (snake_case, matching serde).
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::MedicalHistory => "medical_history",
            DataType::LabResults => "lab_results",
            DataType::Prescriptions => "prescriptions",
            DataType::Imaging => "imaging",
            DataType::VitalSigns => "vital_signs",
            DataType::Demographics => "demographics",
            DataType::Immunizations => "immunizations",
            DataType::Allergies => "allergies",
            DataType::MentalHealth => "mental_health",
            DataType::GeneticData => "genetic_data",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    /// Parse a snake_case wire name back into a `DataType`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown data type '{}'", s))
    }
}

/// The immutable payload recorded for one authorized access.
///
/// Exactly one `AccessRecord` is written per successful
/// `request_data_access`; denied requests write nothing. The audit sink
/// wraps this in an `AuditEvent` that fixes its global sequence position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// The patient whose data was accessed.
    pub patient: PatientId,
    /// The provider the access is attributed to.
    pub provider: ProviderId,
    /// Which data category was accessed.
    pub data_type: DataType,
    /// Wall-clock time (UTC) of the authorized access.
    pub timestamp: DateTime<Utc>,
}

/// The success payload of `request_data_access`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessApproval {
    /// The patient's stored encryption-key material.
    pub encryption_key: Vec<u8>,
    /// The global audit-log index assigned to this access.
    pub log_index: u64,
}
