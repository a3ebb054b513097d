//! Domain data: directions and collision rules

pub mod direction;
pub mod rules;
