//! Visualization module
//!
//! Scene content for a browser-based viewer: contact force arrows packed as
//! instance data, and joint sliders driven by a kinematic tree.

mod color;
mod contact_visualizer;
mod joint_sliders;

pub use color::Rgba;
pub use contact_visualizer::{
    segment_transform, ArrowInstance, ContactVisualizer, ContactVisualizerParams, PointContact,
};
pub use joint_sliders::{JointSliders, Slider, SliderError};

use crate::namespace::{capability_exports, StaticModule};

capability_exports! {
    type Rgba;
    type ArrowInstance;
    type ContactVisualizer;
    type ContactVisualizerParams;
    type PointContact;
    fn segment_transform;
    type JointSliders;
    type Slider;
    type SliderError;
}

pub fn module() -> StaticModule {
    StaticModule::new("meshcat", exports)
}
