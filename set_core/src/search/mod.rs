//! Search pipeline
//!
//! candidate filter -> best-per-slot fillers -> cross-product -> cap
//! validity -> (defense refinement) -> ranking

mod combine;
mod filter;
mod rank;
mod slots;
mod validity;

pub use combine::{Combinations, SlotPools, LOADOUT_SLOTS};
pub use filter::{filter_candidates, Candidates};
pub use rank::{select_best, RankKey};
pub use slots::best_per_slot;
pub use validity::is_within_caps;
