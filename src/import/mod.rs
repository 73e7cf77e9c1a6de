//! 网络导入模块
//!
//! 从文本文件读取流网络。格式：
//!
//! ```text
//! N
//! from to capacity
//! from to capacity
//! ...
//! ```
//!
//! 第一行为节点数 `N`，节点 `0..N-1` 依次创建，`0` 为源点，`N-1` 为汇点。
//! 之后每个非空行是一条有向边，三个整数以空白分隔；空行被跳过。
//! 节点数不能超过 [`MAX_NODE_COUNT`]。

use crate::error::{Error, Result};
use crate::graph::FlowNetwork;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// 单个文件允许的最大节点数
pub const MAX_NODE_COUNT: i64 = 10_000_000;

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub nodes_created: usize,
    pub edges_imported: usize,
    pub blank_lines_skipped: usize,
    pub duration_ms: u64,
}

/// 解析结果
#[derive(Debug, Clone)]
pub struct ParsedNetwork {
    pub network: FlowNetwork,
    pub stats: ImportStats,
}

/// 文本格式解析器
pub struct NetworkParser;

impl NetworkParser {
    /// 从文件解析
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedNetwork> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let parsed = Self::parse_reader(BufReader::new(file))?;

        info!(
            path = %path.display(),
            nodes = parsed.stats.nodes_created,
            edges = parsed.stats.edges_imported,
            duration_ms = parsed.stats.duration_ms,
            "network imported"
        );

        Ok(parsed)
    }

    /// 从字符串解析
    pub fn parse_str(text: &str) -> Result<ParsedNetwork> {
        Self::parse_reader(text.as_bytes())
    }

    /// 从任意 `BufRead` 解析。出错时不返回任何网络
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParsedNetwork> {
        let start = Instant::now();
        let mut lines = reader.lines();
        let mut stats = ImportStats::default();

        // 第一行：节点数
        let header = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(Error::MalformedInput {
                    line: 1,
                    reason: "缺少节点数".to_string(),
                })
            }
        };
        let node_count = parse_int(header.trim(), 1)?;
        if node_count <= 0 {
            return Err(Error::MalformedInput {
                line: 1,
                reason: format!("节点数必须为正整数, 实际为 {}", node_count),
            });
        }
        if node_count > MAX_NODE_COUNT {
            return Err(Error::MalformedInput {
                line: 1,
                reason: format!("节点数过大: {} (上限 {})", node_count, MAX_NODE_COUNT),
            });
        }

        let mut network = FlowNetwork::new();
        for id in 0..node_count {
            network.add_node(id)?;
        }
        network.set_source_and_target(0, node_count - 1)?;
        stats.nodes_created = network.node_count();

        // 其余行：边
        for (index, line) in lines.enumerate() {
            let line_no = index + 2;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                stats.blank_lines_skipped += 1;
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 3 {
                return Err(Error::MalformedInput {
                    line: line_no,
                    reason: format!(
                        "边格式错误, 期望 3 个字段 (from to capacity), 实际 {} 个: {}",
                        parts.len(),
                        line
                    ),
                });
            }

            let from = parse_int(parts[0], line_no)?;
            let to = parse_int(parts[1], line_no)?;
            let capacity = parse_int(parts[2], line_no)?;

            if let Err(err) = network.add_edge(from, to, capacity) {
                warn!(line = line_no, %err, "rejected edge");
                return Err(err);
            }
            stats.edges_imported += 1;
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok(ParsedNetwork { network, stats })
    }
}

fn parse_int(token: &str, line: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::MalformedInput {
        line,
        reason: format!("无法解析整数: {:?}", token),
    })
}
