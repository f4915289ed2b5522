pub mod change_maker;
pub mod coin_change;

// Re-export dynamic programming algorithms with descriptive names
pub use change_maker::{count_combinations, ChangeMaker, CombinationGraph, ReachabilityTable};
pub use coin_change::count_change_ways;
