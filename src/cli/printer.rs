//! 结果打印器
//!
//! 提供表格、纯文本和 JSON 三种格式的报告输出

use crate::algorithm::MaxFlow;
use crate::error::Result;
use crate::graph::{Edge, FlowNetwork};
use prettytable::{format, row, Table};
use serde::Serialize;
use std::str::FromStr;

/// 报告格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// 表格模式
    Table,
    /// 纯文本模式（逐行输出）
    Plain,
    /// JSON
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "plain" | "text" => Ok(ReportFormat::Plain),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("不支持的格式: {} (可选: table, plain, json)", other)),
        }
    }
}

/// JSON 报告
#[derive(Debug, Serialize)]
struct Report<'a> {
    node_count: usize,
    edge_count: usize,
    edges: &'a [Edge],
    result: &'a MaxFlow,
}

/// 结果打印器
pub struct Printer {
    format: ReportFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(ReportFormat::Table)
    }
}

impl Printer {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// 网络概况：节点数、边数、源点、汇点以及所有边的容量
    pub fn network_info(&self, network: &FlowNetwork) -> String {
        let endpoint = |id: Option<crate::graph::NodeId>| {
            id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
        };

        match self.format {
            ReportFormat::Table | ReportFormat::Json => {
                let mut summary = Table::new();
                summary.set_format(*format::consts::FORMAT_BOX_CHARS);
                summary.set_titles(row!["Property", "Value"]);
                summary.add_row(row!["Node Count", network.node_count()]);
                summary.add_row(row!["Edge Count", network.edge_count()]);
                summary.add_row(row!["Source", endpoint(network.source())]);
                summary.add_row(row!["Target", endpoint(network.target())]);

                let mut edges = Table::new();
                edges.set_format(*format::consts::FORMAT_BOX_CHARS);
                edges.set_titles(row!["#", "From", "To", "Capacity"]);
                for edge in network.edges() {
                    edges.add_row(row![
                        edge.id().index(),
                        edge.from(),
                        edge.to(),
                        edge.capacity()
                    ]);
                }

                format!("{}\n{}", summary, edges)
            }
            ReportFormat::Plain => {
                let mut out = String::new();
                out.push_str("Network Information:\n");
                out.push_str(&format!("Number of nodes: {}\n", network.node_count()));
                out.push_str(&format!("Number of edges: {}\n", network.edge_count()));
                out.push_str(&format!("Source node: {}\n", endpoint(network.source())));
                out.push_str(&format!("Target node: {}\n", endpoint(network.target())));
                out.push_str("\nEdges:\n");
                for edge in network.edges() {
                    out.push_str(&format!(
                        "  From {} to {} (capacity: {})\n",
                        edge.from(),
                        edge.to(),
                        edge.capacity()
                    ));
                }
                out
            }
        }
    }

    /// 运行后的边状态
    pub fn edge_states(&self, network: &FlowNetwork) -> String {
        match self.format {
            ReportFormat::Table | ReportFormat::Json => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["#", "From", "To", "Flow", "Capacity", "Saturated"]);
                for edge in network.edges() {
                    table.add_row(row![
                        edge.id().index(),
                        edge.from(),
                        edge.to(),
                        edge.flow(),
                        edge.capacity(),
                        if edge.is_saturated() { "yes" } else { "" }
                    ]);
                }
                table.to_string()
            }
            ReportFormat::Plain => {
                let mut out = String::from("Final network state:\n");
                for edge in network.edges() {
                    out.push_str(&format!("  {}\n", edge));
                }
                out
            }
        }
    }

    /// 结果摘要
    pub fn summary(&self, result: &MaxFlow) -> String {
        let cut = result
            .cut_edges
            .iter()
            .map(|id| id.index().to_string())
            .collect::<Vec<_>>()
            .join(", ");

        match self.format {
            ReportFormat::Table | ReportFormat::Json => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Metric", "Value"]);
                table.add_row(row!["Maximum Flow", result.value]);
                table.add_row(row!["Residual Model", result.residual]);
                table.add_row(row!["Iterations", result.stats.iterations]);
                table.add_row(row!["BFS Runs", result.stats.bfs_runs]);
                table.add_row(row!["Edges Scanned", result.stats.edges_scanned]);
                table.add_row(row!["Cut Edges", cut]);
                table.add_row(row!["Cut Capacity", result.cut_capacity]);
                table.add_row(row!["Elapsed", format!("{} us", result.stats.elapsed_us)]);
                table.to_string()
            }
            ReportFormat::Plain => format!(
                "Results:\nMaximum flow: {}\nMinimum cut edges: [{}] (capacity {})\n",
                result.value, cut, result.cut_capacity
            ),
        }
    }

    /// 执行日志
    pub fn trace(&self, result: &MaxFlow) -> String {
        format!("Detailed execution log:\n{}", result.trace_text())
    }

    /// 完整 JSON 报告
    pub fn json_report(&self, network: &FlowNetwork, result: &MaxFlow) -> Result<String> {
        let report = Report {
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            edges: network.edges(),
            result,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
