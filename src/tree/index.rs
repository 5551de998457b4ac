use std::fmt;

macro_rules! typed_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> usize {
                index.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_index!(
    /// Index of a rigid body in a [`KinematicTree`](super::KinematicTree).
    BodyIndex
);
typed_index!(JointIndex);
typed_index!(ModelInstanceIndex);

/// The world body always has index zero.
pub fn world_index() -> BodyIndex {
    BodyIndex::new(0)
}

pub fn world_model_instance() -> ModelInstanceIndex {
    ModelInstanceIndex::new(0)
}

/// Instance that bodies belong to unless another one is named.
pub fn default_model_instance() -> ModelInstanceIndex {
    ModelInstanceIndex::new(1)
}
