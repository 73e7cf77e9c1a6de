//! 流网络
//!
//! 持有全部节点、边集合和邻接索引。边按插入顺序存放在一个集合中，
//! 邻接表只保存边 ID，流量的修改只会发生在这一份边数据上。

use super::edge::{Edge, EdgeId};
use super::index::AdjacencyIndex;
use super::node::{Node, NodeId};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fmt;

/// 流网络
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    /// 节点（按插入顺序，同时作为 ID 映射）
    nodes: IndexMap<NodeId, Node>,
    /// 边集合（插入顺序即路径搜索的先后顺序）
    edges: Vec<Edge>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
    /// 源点
    source: Option<NodeId>,
    /// 汇点
    target: Option<NodeId>,
}

impl FlowNetwork {
    /// 创建空网络
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 构建 ====================

    /// 添加节点，ID 重复时返回 `DuplicateNode`
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> Result<NodeId> {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return Err(Error::DuplicateNode(id));
        }

        self.nodes.insert(id, Node::new(id));
        self.adjacency.register_node(id);

        Ok(id)
    }

    /// 设置源点和汇点
    ///
    /// 两个 ID 都存在时才会修改网络。再次调用会替换之前的指定，
    /// 但不会清除之前节点上的标记。
    pub fn set_source_and_target(
        &mut self,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
    ) -> Result<()> {
        let source_id = source_id.into();
        let target_id = target_id.into();

        if !self.nodes.contains_key(&source_id) {
            return Err(Error::UnknownNode(source_id));
        }
        if !self.nodes.contains_key(&target_id) {
            return Err(Error::UnknownNode(target_id));
        }

        if let Some(node) = self.nodes.get_mut(&source_id) {
            node.mark_source();
        }
        if let Some(node) = self.nodes.get_mut(&target_id) {
            node.mark_target();
        }

        self.source = Some(source_id);
        self.target = Some(target_id);

        Ok(())
    }

    /// 添加有向边
    ///
    /// 端点不存在返回 `UnknownNode`，容量为负返回 `InvalidCapacity`；
    /// 失败时网络保持不变。平行边各自独立保存。
    pub fn add_edge(
        &mut self,
        from_id: impl Into<NodeId>,
        to_id: impl Into<NodeId>,
        capacity: i64,
    ) -> Result<EdgeId> {
        let from = from_id.into();
        let to = to_id.into();

        if !self.nodes.contains_key(&from) {
            return Err(Error::UnknownNode(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(Error::UnknownNode(to));
        }
        if capacity < 0 {
            return Err(Error::InvalidCapacity { from, to, capacity });
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(id, from, to, capacity));
        self.adjacency.add_edge(id, from, to);

        Ok(id)
    }

    // ==================== 查询 ====================

    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(&id.into())
    }

    pub fn contains_node(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(&id.into())
    }

    /// 所有节点（插入顺序）
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// 所有边（插入顺序）
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// 获取节点的出边 ID（插入顺序）；未知节点返回空切片
    pub fn outgoing_edge_ids(&self, id: impl Into<NodeId>) -> &[EdgeId] {
        self.adjacency.outgoing(id.into())
    }

    /// 获取节点的入边 ID（插入顺序）；未知节点返回空切片
    pub fn incoming_edge_ids(&self, id: impl Into<NodeId>) -> &[EdgeId] {
        self.adjacency.incoming(id.into())
    }

    /// 获取节点的所有出边
    pub fn outgoing_edges(&self, id: impl Into<NodeId>) -> Vec<&Edge> {
        self.resolve(self.outgoing_edge_ids(id))
    }

    /// 获取节点的所有入边
    pub fn incoming_edges(&self, id: impl Into<NodeId>) -> Vec<&Edge> {
        self.resolve(self.incoming_edge_ids(id))
    }

    fn resolve(&self, ids: &[EdgeId]) -> Vec<&Edge> {
        ids.iter().map(|id| &self.edges[id.index()]).collect()
    }

    // ==================== 流量 ====================

    /// 源点流出的总流量
    pub fn calculate_flow_value(&self) -> Result<i64> {
        let source = self.source.ok_or(Error::MissingEndpoint)?;
        self.total_flow(self.outgoing_edge_ids(source))
    }

    /// 流入汇点的总流量
    pub fn calculate_target_inflow(&self) -> Result<i64> {
        let target = self.target.ok_or(Error::MissingEndpoint)?;
        self.total_flow(self.incoming_edge_ids(target))
    }

    /// 节点的净流量（流入 - 流出）
    pub fn net_flow(&self, id: impl Into<NodeId>) -> Result<i64> {
        let id = id.into();
        let inflow = self.total_flow(self.incoming_edge_ids(id))?;
        let outflow = self.total_flow(self.outgoing_edge_ids(id))?;
        inflow.checked_sub(outflow).ok_or(Error::FlowOverflow)
    }

    fn total_flow(&self, ids: &[EdgeId]) -> Result<i64> {
        ids.iter().try_fold(0i64, |acc, id| {
            acc.checked_add(self.edges[id.index()].flow())
                .ok_or(Error::FlowOverflow)
        })
    }

    /// 将所有边的流量重置为 0
    pub fn reset_flows(&mut self) {
        for edge in &mut self.edges {
            edge.reset_flow();
        }
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id.index()]
    }
}

impl fmt::Display for FlowNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow Network:")?;

        write!(f, "Nodes:")?;
        for id in self.nodes.keys() {
            write!(f, " {}", id)?;
        }
        writeln!(f)?;

        writeln!(f, "Edges:")?;
        for edge in &self.edges {
            writeln!(f, "  {}", edge)?;
        }
        Ok(())
    }
}
