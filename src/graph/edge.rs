//! 边定义
//!
//! 有向带容量的弧，携带可变的流量

use crate::graph::node::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（即边在网络边集合中的下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// 边
///
/// 端点和容量在创建后固定；只有 `flow` 会变化，
/// 且只能由最大流算法的增广步骤或显式重置修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 起点
    from: NodeId,
    /// 终点
    to: NodeId,
    /// 容量（非负）
    capacity: i64,
    /// 当前流量
    flow: i64,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: NodeId, to: NodeId, capacity: i64) -> Self {
        Self {
            id,
            from,
            to,
            capacity,
            flow: 0,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn flow(&self) -> i64 {
        self.flow
    }

    /// 残余容量 = 容量 - 流量
    pub fn residual_capacity(&self) -> i64 {
        self.capacity - self.flow
    }

    pub fn has_residual_capacity(&self) -> bool {
        self.residual_capacity() > 0
    }

    /// 是否已饱和（流量等于容量）
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    /// 增加流量；`amount` 为负时表示撤销流量（反向弧增广）
    pub(crate) fn add_flow(&mut self, amount: i64) {
        self.flow += amount;
        debug_assert!(
            self.flow >= 0 && self.flow <= self.capacity,
            "edge {} -> {} flow {} out of [0, {}]",
            self.from,
            self.to,
            self.flow,
            self.capacity
        );
    }

    pub(crate) fn reset_flow(&mut self) {
        self.flow = 0;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Edge from {} to {} (flow: {}/{})",
            self.from, self.to, self.flow, self.capacity
        )
    }
}
