//! 错误类型定义

use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    UnknownNode(NodeId),

    #[error("节点已存在: {0}")]
    DuplicateNode(NodeId),

    #[error("无效的容量: 边 {from} -> {to} 的容量为 {capacity}，容量不能为负")]
    InvalidCapacity {
        from: NodeId,
        to: NodeId,
        capacity: i64,
    },

    #[error("未设置源点或汇点")]
    MissingEndpoint,

    #[error("流量溢出: 累加结果超出 i64 范围")]
    FlowOverflow,

    #[error("输入格式错误 (第 {line} 行): {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
