//! 流网络核心模块
//!
//! 定义节点、边、邻接索引和流网络

mod edge;
mod index;
mod network;
mod node;

pub use edge::{Edge, EdgeId};
pub use index::AdjacencyIndex;
pub use network::FlowNetwork;
pub use node::{Node, NodeId};
