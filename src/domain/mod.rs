//! Domain modules (vertical slices): types, wire types, conversions, state.

pub mod cart;
pub mod food;
pub mod order;
