use super::index::{BodyIndex, ModelInstanceIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub name: String,
    pub index: BodyIndex,
    pub model_instance: ModelInstanceIndex,
    pub mass: f32,
}

impl RigidBody {
    pub fn new(name: impl Into<String>, index: BodyIndex, model_instance: ModelInstanceIndex) -> Self {
        Self {
            name: name.into(),
            index,
            model_instance,
            mass: 0.0,
        }
    }

    pub fn is_world(&self) -> bool {
        self.index == super::index::world_index()
    }
}

#[deprecated(note = "use RigidBody")]
pub type Body = RigidBody;
