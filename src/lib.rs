pub mod cs;
pub mod error;

pub use cs::dynamic::change_maker::{
    benchmark_count_change, count_combinations, ChangeMaker, ChangeMakerConfig, Combination,
    CombinationGraph, Denominations, Node, NodeId, ReachabilityTable, Sample, ZeroAmountPolicy,
};
pub use cs::dynamic::coin_change::count_change_ways;
pub use error::{ChangeError, Result};
