use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FemError {
    #[error("Young's modulus must be positive, got {0}")]
    YoungsModulus(f64),

    #[error("Poisson's ratio must lie in (-1, 0.5), got {0}")]
    PoissonsRatio(f64),

    #[error("mass density must be positive, got {0}")]
    MassDensity(f64),

    #[error("damping coefficient must be non-negative, got {0}")]
    Damping(f64),

    #[error("unknown material model `{0}`")]
    UnknownMaterial(String),
}

pub type Result<T> = std::result::Result<T, FemError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MaterialModel {
    #[default]
    Corotated,
    NeoHookean,
    Linear,
    LinearCorotated,
}

impl MaterialModel {
    pub const ALL: [MaterialModel; 4] = [
        MaterialModel::Corotated,
        MaterialModel::NeoHookean,
        MaterialModel::Linear,
        MaterialModel::LinearCorotated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialModel::Corotated => "corotated",
            MaterialModel::NeoHookean => "neo_hookean",
            MaterialModel::Linear => "linear",
            MaterialModel::LinearCorotated => "linear_corotated",
        }
    }
}

impl fmt::Display for MaterialModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialModel {
    type Err = FemError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| FemError::UnknownMaterial(s.to_string()))
    }
}

/// Physical parameters of a deformable body.
#[derive(Debug, Clone, PartialEq)]
pub struct DeformableBodyConfig {
    youngs_modulus: f64,
    poissons_ratio: f64,
    mass_density: f64,
    stiffness_damping_coefficient: f64,
    mass_damping_coefficient: f64,
    material_model: MaterialModel,
}

impl Default for DeformableBodyConfig {
    fn default() -> Self {
        Self {
            youngs_modulus: 1e8,
            poissons_ratio: 0.49,
            mass_density: 1.5e3,
            stiffness_damping_coefficient: 0.0,
            mass_damping_coefficient: 0.0,
            material_model: MaterialModel::Corotated,
        }
    }
}

impl DeformableBodyConfig {
    pub fn youngs_modulus(&self) -> f64 {
        self.youngs_modulus
    }

    pub fn poissons_ratio(&self) -> f64 {
        self.poissons_ratio
    }

    pub fn mass_density(&self) -> f64 {
        self.mass_density
    }

    pub fn stiffness_damping_coefficient(&self) -> f64 {
        self.stiffness_damping_coefficient
    }

    pub fn mass_damping_coefficient(&self) -> f64 {
        self.mass_damping_coefficient
    }

    pub fn material_model(&self) -> MaterialModel {
        self.material_model
    }

    pub fn set_youngs_modulus(&mut self, value: f64) -> Result<()> {
        if value <= 0.0 || !value.is_finite() {
            return Err(FemError::YoungsModulus(value));
        }
        self.youngs_modulus = value;
        Ok(())
    }

    pub fn set_poissons_ratio(&mut self, value: f64) -> Result<()> {
        if value.is_nan() || value <= -1.0 || value >= 0.5 {
            return Err(FemError::PoissonsRatio(value));
        }
        self.poissons_ratio = value;
        Ok(())
    }

    pub fn set_mass_density(&mut self, value: f64) -> Result<()> {
        if value <= 0.0 || !value.is_finite() {
            return Err(FemError::MassDensity(value));
        }
        self.mass_density = value;
        Ok(())
    }

    pub fn set_stiffness_damping_coefficient(&mut self, value: f64) -> Result<()> {
        self.stiffness_damping_coefficient = checked_damping(value)?;
        Ok(())
    }

    pub fn set_mass_damping_coefficient(&mut self, value: f64) -> Result<()> {
        self.mass_damping_coefficient = checked_damping(value)?;
        Ok(())
    }

    pub fn set_material_model(&mut self, model: MaterialModel) {
        self.material_model = model;
    }

    /// Lamé parameters `(lambda, mu)` for the current modulus and ratio.
    pub fn lame_parameters(&self) -> (f64, f64) {
        let e = self.youngs_modulus;
        let nu = self.poissons_ratio;
        let lambda = e * nu / ((1.0 + nu) * (1.0 - 2.0 * nu));
        let mu = e / (2.0 * (1.0 + nu));
        (lambda, mu)
    }
}

fn checked_damping(value: f64) -> Result<f64> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(FemError::Damping(value))
    }
}
