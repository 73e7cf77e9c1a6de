//! 图算法模块
//!
//! 包含 Edmonds-Karp 最大流算法

mod max_flow;

pub use max_flow::{
    Augmentation, AugmentingPath, EdmondsKarp, MaxFlow, MaxFlowConfig, MaxFlowStats, PathArc,
    ResidualModel,
};
