//! NetFlow - 有向带容量网络的最大流计算
//!
//! 基于 Ford-Fulkerson 方法和 Edmonds-Karp 改进（BFS 选择最短增广路径）：
//! - 以边集合 + 邻接索引表示的流网络
//! - 可选残余模型的最大流算法，附带执行日志和最小割
//! - 文本格式的网络导入
//! - 表格 / 纯文本 / JSON 报告

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use algorithm::{EdmondsKarp, MaxFlow, MaxFlowConfig, ResidualModel};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, FlowNetwork, Node, NodeId};
pub use import::{ImportStats, NetworkParser, ParsedNetwork};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
