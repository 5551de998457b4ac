//! Optimization module
//!
//! Problem data shared by trajectory and contact optimization.

mod grid;
mod wrench;

pub use grid::{uniform_grid_points, CalcGridPointsOptions, ToppraDiscretization};
pub use wrench::ContactWrench;

use crate::namespace::{capability_exports, StaticModule};

capability_exports! {
    type CalcGridPointsOptions;
    type ToppraDiscretization;
    fn uniform_grid_points;
    type ContactWrench;
}

pub fn module() -> StaticModule {
    StaticModule::new("optimization", exports)
}
