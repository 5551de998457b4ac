use super::contact::{ContactModel, ContactSurfaceRepresentation, DiscreteContactApproximation};
use super::PlantError;

/// Plant construction parameters, kept as text where they name an option so
/// that configurations can be written and compared before they are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MultibodyPlantConfig {
    pub time_step: f64,
    pub penetration_allowance: f64,
    pub stiction_tolerance: f64,
    pub contact_model: String,
    /// Empty selects the default approximation for the contact model.
    pub discrete_contact_approximation: String,
    pub contact_surface_representation: String,
    pub adjacent_bodies_collision_filters: bool,
}

impl Default for MultibodyPlantConfig {
    fn default() -> Self {
        Self {
            time_step: 0.001,
            penetration_allowance: 0.001,
            stiction_tolerance: 0.001,
            contact_model: ContactModel::default().to_string(),
            discrete_contact_approximation: String::new(),
            contact_surface_representation: ContactSurfaceRepresentation::default().to_string(),
            adjacent_bodies_collision_filters: true,
        }
    }
}

impl MultibodyPlantConfig {
    pub fn is_discrete(&self) -> bool {
        self.time_step > 0.0
    }

    pub fn contact_model(&self) -> Result<ContactModel, PlantError> {
        self.contact_model.parse()
    }

    pub fn discrete_contact_approximation(
        &self,
    ) -> Result<Option<DiscreteContactApproximation>, PlantError> {
        if self.discrete_contact_approximation.is_empty() {
            return Ok(None);
        }
        self.discrete_contact_approximation.parse().map(Some)
    }

    pub fn contact_surface_representation(&self) -> Result<ContactSurfaceRepresentation, PlantError> {
        self.contact_surface_representation.parse()
    }

    pub fn validate(&self) -> Result<(), PlantError> {
        if !self.time_step.is_finite() || self.time_step < 0.0 {
            return Err(PlantError::InvalidParameter {
                name: "time_step",
                value: self.time_step,
            });
        }
        for (name, value) in [
            ("penetration_allowance", self.penetration_allowance),
            ("stiction_tolerance", self.stiction_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlantError::InvalidParameter { name, value });
            }
        }

        self.contact_model()?;
        self.contact_surface_representation()?;
        if self.discrete_contact_approximation()?.is_some() && !self.is_discrete() {
            return Err(PlantError::ContinuousApproximation);
        }
        Ok(())
    }
}
