pub use self::{generator::*, grid::*, move_code::*, shape::*};

pub(crate) mod generator;
pub(crate) mod grid;
pub(crate) mod move_code;
pub(crate) mod shape;
