//! The standard data-type permission matrix.
//!
//! The matrix is a compile-time exhaustive match: adding a `DataType`
//! variant fails to compile until a row is decided for it here. `Read`
//! covers the fixed non-sensitive subset; everything a clinician would treat
//! as sensitive narrative or protected-category data requires `Full`.

use tracing::debug;

use fides_contracts::{access::DataType, consent::AccessType};
use fides_core::traits::AccessPolicy;

/// The built-in permission matrix.
///
/// | data type        | none | read | full |
/// |------------------|------|------|------|
/// | demographics     |  ✗   |  ✓   |  ✓   |
/// | vital_signs      |  ✗   |  ✓   |  ✓   |
/// | immunizations    |  ✗   |  ✓   |  ✓   |
/// | allergies        |  ✗   |  ✓   |  ✓   |
/// | lab_results      |  ✗   |  ✓   |  ✓   |
/// | medical_history  |  ✗   |  ✗   |  ✓   |
/// | prescriptions    |  ✗   |  ✗   |  ✓   |
/// | imaging          |  ✗   |  ✗   |  ✓   |
/// | mental_health    |  ✗   |  ✗   |  ✓   |
/// | genetic_data     |  ✗   |  ✗   |  ✓   |
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAccessPolicy;

impl AccessPolicy for StandardAccessPolicy {
    fn permits(&self, access_type: AccessType, data_type: DataType) -> bool {
        let permitted = match access_type {
            AccessType::None => false,
            AccessType::Full => true,
            AccessType::Read => match data_type {
                DataType::Demographics
                | DataType::VitalSigns
                | DataType::Immunizations
                | DataType::Allergies
                | DataType::LabResults => true,
                DataType::MedicalHistory
                | DataType::Prescriptions
                | DataType::Imaging
                | DataType::MentalHealth
                | DataType::GeneticData => false,
            },
        };

        debug!(
            access_type = ?access_type,
            data_type = %data_type,
            permitted,
            "permission matrix consulted"
        );
        permitted
    }
}
