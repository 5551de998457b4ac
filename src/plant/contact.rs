use std::fmt;
use std::str::FromStr;

use super::PlantError;

macro_rules! named_variants {
    ($name:ident, $what:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = PlantError;

            fn from_str(s: &str) -> Result<Self, PlantError> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| PlantError::UnknownOption {
                        option: $what,
                        value: s.to_string(),
                    })
            }
        }
    };
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactModel {
    Hydroelastic,
    Point,
    #[default]
    HydroelasticWithFallback,
}

named_variants!(ContactModel, "contact_model", {
    Hydroelastic => "hydroelastic",
    Point => "point",
    HydroelasticWithFallback => "hydroelastic_with_fallback",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscreteContactApproximation {
    Tamsi,
    Sap,
    Similar,
    Lagged,
}

named_variants!(DiscreteContactApproximation, "discrete_contact_approximation", {
    Tamsi => "tamsi",
    Sap => "sap",
    Similar => "similar",
    Lagged => "lagged",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactSurfaceRepresentation {
    Triangle,
    #[default]
    Polygon,
}

named_variants!(ContactSurfaceRepresentation, "contact_surface_representation", {
    Triangle => "triangle",
    Polygon => "polygon",
});

/// Static and dynamic Coulomb friction coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombFriction {
    static_friction: f64,
    dynamic_friction: f64,
}

impl CoulombFriction {
    pub fn new(static_friction: f64, dynamic_friction: f64) -> Result<Self, PlantError> {
        let valid = static_friction.is_finite()
            && dynamic_friction.is_finite()
            && dynamic_friction >= 0.0
            && static_friction >= dynamic_friction;
        if !valid {
            return Err(PlantError::InvalidFriction {
                static_friction,
                dynamic_friction,
            });
        }
        Ok(Self {
            static_friction,
            dynamic_friction,
        })
    }

    pub fn frictionless() -> Self {
        Self {
            static_friction: 0.0,
            dynamic_friction: 0.0,
        }
    }

    pub fn static_friction(&self) -> f64 {
        self.static_friction
    }

    pub fn dynamic_friction(&self) -> f64 {
        self.dynamic_friction
    }

    /// Coefficients for a contact between two surfaces: the harmonic mean
    /// `2ab / (a + b)` of each pair, zero when both are zero.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            static_friction: harmonic_mean(self.static_friction, other.static_friction),
            dynamic_friction: harmonic_mean(self.dynamic_friction, other.dynamic_friction),
        }
    }
}

fn harmonic_mean(a: f64, b: f64) -> f64 {
    if a + b == 0.0 {
        0.0
    } else {
        2.0 * a * b / (a + b)
    }
}
