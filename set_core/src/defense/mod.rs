//! Defense system - skill-driven defense bonuses

mod refine;

pub use refine::{refine_defense, refined_defense};
