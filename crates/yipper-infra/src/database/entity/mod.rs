//! SeaORM entities.

pub mod yip;
