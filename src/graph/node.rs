//! 节点定义
//!
//! 流网络中的顶点，带源点/汇点角色标记

use serde::{Deserialize, Serialize};
use std::fmt;

/// 节点 ID（网络内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub i64);

impl NodeId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        Self(i64::from(id))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// 节点 ID
    id: NodeId,
    /// 是否为源点
    is_source: bool,
    /// 是否为汇点
    is_target: bool,
}

impl Node {
    /// 创建新节点（无角色）
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            is_source: false,
            is_target: false,
        }
    }

    /// 获取节点 ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn is_source(&self) -> bool {
        self.is_source
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    /// 标记为源点。标记只会被设置，不会被清除
    pub(crate) fn mark_source(&mut self) {
        self.is_source = true;
    }

    /// 标记为汇点
    pub(crate) fn mark_target(&mut self) {
        self.is_target = true;
    }
}
