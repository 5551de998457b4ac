//! Benchmark models
//!
//! Reference systems with known answers, aggregated by [`all`] the same way
//! the crate root aggregates its capability modules.

pub mod acrobot;
pub mod all;
pub mod mass_damper_spring;

use crate::namespace::StaticModule;

mod acrobot_exports {
    use super::acrobot::*;
    use crate::namespace::capability_exports;

    capability_exports! {
        type AcrobotParameters;
        fn make_acrobot_tree;
    }
}

mod mass_damper_spring_exports {
    use super::mass_damper_spring::*;
    use crate::namespace::capability_exports;

    capability_exports! {
        type MassDamperSpringAnalyticalSolution;
        type BenchmarkError;
    }
}

pub fn acrobot_module() -> StaticModule {
    StaticModule::new("acrobot", acrobot_exports::exports)
}

pub fn mass_damper_spring_module() -> StaticModule {
    StaticModule::new("mass_damper_spring", mass_damper_spring_exports::exports)
}
