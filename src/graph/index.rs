//! 邻接索引
//!
//! 节点 ID 到出边/入边 ID 列表的映射。列表只保存边 ID，
//! 边本身只存在于网络的边集合中。

use crate::graph::edge::EdgeId;
use crate::graph::node::NodeId;
use std::collections::HashMap;

/// 邻接索引
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// 节点到出边的映射
    outgoing: HashMap<NodeId, Vec<EdgeId>>,
    /// 节点到入边的映射
    incoming: HashMap<NodeId, Vec<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为节点登记空的出边、入边列表
    pub fn register_node(&mut self, node: NodeId) {
        self.outgoing.entry(node).or_default();
        self.incoming.entry(node).or_default();
    }

    /// 添加边：同时写入起点的出边列表和终点的入边列表
    pub fn add_edge(&mut self, edge_id: EdgeId, from: NodeId, to: NodeId) {
        self.outgoing.entry(from).or_default().push(edge_id);
        self.incoming.entry(to).or_default().push(edge_id);
    }

    /// 获取出边（按插入顺序）
    pub fn outgoing(&self, node: NodeId) -> &[EdgeId] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 获取入边（按插入顺序）
    pub fn incoming(&self, node: NodeId) -> &[EdgeId] {
        self.incoming.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.outgoing(node).len()
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.incoming(node).len()
    }
}
