//! Game implementations built on the engine.

pub mod square_dash;
