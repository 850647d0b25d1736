pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("{width}x{height} grid has more cells than the move alphabet can encode")]
pub struct GridSizeError {
    pub width: usize,
    pub height: usize,
}
