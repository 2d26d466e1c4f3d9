pub mod gaussian;
pub mod normalize;
