//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//!
//! 默认的残余模型只沿正向边推流（[`ResidualModel::ForwardOnly`]）：
//! 边可通过当且仅当 `容量 - 流量 > 0`，不会生成用于撤销流量的反向弧。
//! 对于需要重新分配已推流量的图，这种模型得到的结果可能小于真正的最大流。
//! [`ResidualModel::WithReverseArcs`] 使用教科书式的残余图：
//! 有流量的边可以被反向穿过，从而撤销之前的流量，结果总是真正的最大流。

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, FlowNetwork, NodeId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// 增广路径（大多数路径都很短）
pub type AugmentingPath = SmallVec<[PathArc; 8]>;

/// 残余图模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidualModel {
    /// 只沿正向边推流
    #[default]
    ForwardOnly,
    /// 包含反向弧（容量等于当前流量），允许撤销已推的流量
    WithReverseArcs,
}

impl fmt::Display for ResidualModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResidualModel::ForwardOnly => write!(f, "forward"),
            ResidualModel::WithReverseArcs => write!(f, "reverse"),
        }
    }
}

impl FromStr for ResidualModel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "forward-only" | "forward_only" => Ok(ResidualModel::ForwardOnly),
            "reverse" | "with-reverse-arcs" | "with_reverse_arcs" => {
                Ok(ResidualModel::WithReverseArcs)
            }
            other => Err(format!(
                "未知的残余模型: {} (可选: forward, reverse)",
                other
            )),
        }
    }
}

/// 最大流算法配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowConfig {
    /// 残余图模型
    pub residual: ResidualModel,
}

impl MaxFlowConfig {
    pub fn with_residual(mut self, residual: ResidualModel) -> Self {
        self.residual = residual;
        self
    }
}

/// 残余图中被穿过的一条弧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathArc {
    /// 底层边
    pub edge: EdgeId,
    /// 穿过方向上的起点
    pub from: NodeId,
    /// 穿过方向上的终点
    pub to: NodeId,
    /// 是否为反向弧
    pub reverse: bool,
    /// 增广前的边流量
    pub flow_before: i64,
    /// 边容量
    pub capacity: i64,
}

impl PathArc {
    fn forward(edge: &Edge) -> Self {
        Self {
            edge: edge.id(),
            from: edge.from(),
            to: edge.to(),
            reverse: false,
            flow_before: edge.flow(),
            capacity: edge.capacity(),
        }
    }

    fn backward(edge: &Edge) -> Self {
        Self {
            edge: edge.id(),
            from: edge.to(),
            to: edge.from(),
            reverse: true,
            flow_before: edge.flow(),
            capacity: edge.capacity(),
        }
    }

    /// 弧的残余容量：正向为 `容量 - 流量`，反向为当前流量
    pub fn residual(&self) -> i64 {
        if self.reverse {
            self.flow_before
        } else {
            self.capacity - self.flow_before
        }
    }

    fn describe(&self) -> String {
        if self.reverse {
            format!(
                "Edge from {} to {} (reverse, flow: {}/{})",
                self.to, self.from, self.flow_before, self.capacity
            )
        } else {
            format!(
                "Edge from {} to {} (flow: {}/{})",
                self.from, self.to, self.flow_before, self.capacity
            )
        }
    }
}

/// 一次增广
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Augmentation {
    /// 迭代序号（从 1 开始）
    pub iteration: usize,
    /// 从源点到汇点的路径
    pub path: AugmentingPath,
    /// 瓶颈容量
    pub bottleneck: i64,
    /// 本次增广后的总流量
    pub total_flow: i64,
}

/// 运行统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxFlowStats {
    /// 增广次数
    pub iterations: usize,
    /// BFS 次数（源点与汇点相同时为 0）
    pub bfs_runs: usize,
    /// BFS 中检查过的弧数
    pub edges_scanned: usize,
    /// 耗时（微秒）
    pub elapsed_us: u64,
}

/// 最大流结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: i64,
    pub source: NodeId,
    pub target: NodeId,
    /// 使用的残余模型
    pub residual: ResidualModel,
    /// 每次增广的结构化记录
    pub augmentations: Vec<Augmentation>,
    /// 可读的执行日志（仅用于诊断）
    pub trace: Vec<String>,
    /// 最终残余图中从源点可达的节点（BFS 顺序）
    pub source_side: Vec<NodeId>,
    /// 割边：从源侧指向汇侧的边
    pub cut_edges: Vec<EdgeId>,
    /// 割容量
    pub cut_capacity: i64,
    pub stats: MaxFlowStats,
}

impl MaxFlow {
    pub fn iterations(&self) -> usize {
        self.augmentations.len()
    }

    /// 执行日志拼接成一段文本
    pub fn trace_text(&self) -> String {
        let mut text = self.trace.join("\n");
        text.push('\n');
        text
    }
}

/// Edmonds-Karp 最大流算法
#[derive(Debug, Clone, Default)]
pub struct EdmondsKarp {
    config: MaxFlowConfig,
}

impl EdmondsKarp {
    /// 使用默认配置（只沿正向边推流）
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MaxFlowConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaxFlowConfig {
        &self.config
    }

    /// 计算从源点到汇点的最大流
    ///
    /// 开始前会把所有边的流量重置为 0，因此对同一网络重复调用结果相同。
    /// 运行结束后网络中每条边的流量即为最终的流量分配。
    ///
    /// 总流量或割容量超出 `i64` 时返回 `FlowOverflow`，此时所有边的流量被重置为 0。
    pub fn find_max_flow(&self, network: &mut FlowNetwork) -> Result<MaxFlow> {
        let start = Instant::now();

        let (source, target) = match (network.source(), network.target()) {
            (Some(source), Some(target)) => (source, target),
            _ => return Err(Error::MissingEndpoint),
        };

        network.reset_flows();

        info!(
            %source,
            %target,
            residual = %self.config.residual,
            nodes = network.node_count(),
            edges = network.edge_count(),
            "starting max flow"
        );

        let mut trace = vec![
            "Starting Ford-Fulkerson algorithm with Edmonds-Karp improvement".to_string(),
            format!("Source node: {}", source),
            format!("Target node: {}", target),
            String::new(),
        ];
        let mut augmentations = Vec::new();
        let mut stats = MaxFlowStats::default();
        let mut total_flow = 0i64;

        if source == target {
            trace.push("Source and target are the same node, no augmenting path exists.".to_string());
        } else {
            while let Some(path) = self.find_augmenting_path(network, source, target, &mut stats) {
                let Some(bottleneck) = path.iter().map(PathArc::residual).min() else {
                    break;
                };
                let iteration = augmentations.len() + 1;

                trace.push(format!("Iteration {}:", iteration));
                trace.push(format!(
                    "  Found augmenting path with bottleneck capacity {}:",
                    bottleneck
                ));
                for arc in &path {
                    trace.push(format!("    {}", arc.describe()));
                }

                total_flow = match total_flow.checked_add(bottleneck) {
                    Some(total) => total,
                    None => {
                        warn!(iteration, bottleneck, total_flow, "total flow overflows i64");
                        network.reset_flows();
                        return Err(Error::FlowOverflow);
                    }
                };
                Self::augment(network, &path, bottleneck);

                trace.push(format!(
                    "  Augmented flow by {}, total flow is now {}",
                    bottleneck, total_flow
                ));
                trace.push(String::new());

                debug!(
                    iteration,
                    bottleneck,
                    total_flow,
                    path_len = path.len(),
                    "augmented flow along path"
                );

                augmentations.push(Augmentation {
                    iteration,
                    path,
                    bottleneck,
                    total_flow,
                });
            }
            trace.push("No more augmenting paths found.".to_string());
        }
        trace.push(format!("Maximum flow: {}", total_flow));

        let (source_side, cut_edges, cut_capacity) = match self.min_cut(network, source) {
            Ok(cut) => cut,
            Err(err) => {
                network.reset_flows();
                return Err(err);
            }
        };

        stats.iterations = augmentations.len();
        stats.elapsed_us = start.elapsed().as_micros() as u64;

        info!(
            max_flow = total_flow,
            iterations = stats.iterations,
            bfs_runs = stats.bfs_runs,
            cut_capacity,
            elapsed_us = stats.elapsed_us,
            "max flow finished"
        );

        Ok(MaxFlow {
            value: total_flow,
            source,
            target,
            residual: self.config.residual,
            augmentations,
            trace,
            source_side,
            cut_edges,
            cut_capacity,
            stats,
        })
    }

    /// 节点在残余图中的所有出弧：先按插入顺序列出出边，
    /// 反向模型下再列出入边对应的反向弧。残余容量为 0 的弧也会返回。
    fn arcs_from<'a>(
        &self,
        network: &'a FlowNetwork,
        node: NodeId,
    ) -> impl Iterator<Item = PathArc> + 'a {
        let edges = network.edges();

        let forward = network
            .outgoing_edge_ids(node)
            .iter()
            .map(move |id| PathArc::forward(&edges[id.index()]));

        let incoming: &[EdgeId] = if self.config.residual == ResidualModel::WithReverseArcs {
            network.incoming_edge_ids(node)
        } else {
            &[]
        };
        let backward = incoming
            .iter()
            .map(move |id| PathArc::backward(&edges[id.index()]));

        forward.chain(backward)
    }

    /// BFS 找最短增广路径，首次到达汇点时立即停止
    fn find_augmenting_path(
        &self,
        network: &FlowNetwork,
        source: NodeId,
        target: NodeId,
        stats: &mut MaxFlowStats,
    ) -> Option<AugmentingPath> {
        stats.bfs_runs += 1;

        let mut parent: HashMap<NodeId, PathArc> = HashMap::new();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(source);
        queue.push_back(source);

        'search: while let Some(u) = queue.pop_front() {
            for arc in self.arcs_from(network, u) {
                stats.edges_scanned += 1;

                if arc.residual() > 0 && visited.insert(arc.to) {
                    parent.insert(arc.to, arc);
                    if arc.to == target {
                        break 'search;
                    }
                    queue.push_back(arc.to);
                }
            }
        }

        trace!(visited = visited.len(), "bfs finished");

        if !parent.contains_key(&target) {
            return None;
        }

        // 从汇点沿父弧回溯到源点
        let mut path = AugmentingPath::new();
        let mut current = target;
        while current != source {
            let arc = *parent.get(&current)?;
            path.push(arc);
            current = arc.from;
        }
        path.reverse();

        Some(path)
    }

    /// 沿路径增广：正向弧增加流量，反向弧撤销流量
    fn augment(network: &mut FlowNetwork, path: &[PathArc], bottleneck: i64) {
        for arc in path {
            let delta = if arc.reverse { -bottleneck } else { bottleneck };
            network.edge_mut(arc.edge).add_flow(delta);
        }
    }

    /// 找最小割（从源点出发在残余图中可达的顶点属于源侧）
    fn min_cut(
        &self,
        network: &FlowNetwork,
        source: NodeId,
    ) -> Result<(Vec<NodeId>, Vec<EdgeId>, i64)> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(source);
        order.push(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            for arc in self.arcs_from(network, u) {
                if arc.residual() > 0 && visited.insert(arc.to) {
                    order.push(arc.to);
                    queue.push_back(arc.to);
                }
            }
        }

        let cut: Vec<&Edge> = network
            .edges()
            .iter()
            .filter(|e| visited.contains(&e.from()) && !visited.contains(&e.to()))
            .collect();
        let capacity = cut.iter().try_fold(0i64, |acc, e| {
            acc.checked_add(e.capacity()).ok_or(Error::FlowOverflow)
        })?;

        Ok((order, cut.iter().map(|e| e.id()).collect(), capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn build(n: i64, source: i64, target: i64, edges: &[(i64, i64, i64)]) -> FlowNetwork {
        let mut network = FlowNetwork::new();
        for id in 0..n {
            network.add_node(id).unwrap();
        }
        network.set_source_and_target(source, target).unwrap();
        for &(from, to, capacity) in edges {
            network.add_edge(from, to, capacity).unwrap();
        }
        network
    }

    fn flows(network: &FlowNetwork) -> Vec<i64> {
        network.edges().iter().map(|e| e.flow()).collect()
    }

    fn reverse_engine() -> EdmondsKarp {
        EdmondsKarp::with_config(
            MaxFlowConfig::default().with_residual(ResidualModel::WithReverseArcs),
        )
    }

    /// 流量约束、守恒和流量值一致性
    fn assert_valid_flow(network: &FlowNetwork, result: &MaxFlow) {
        for edge in network.edges() {
            assert!(
                edge.flow() >= 0 && edge.flow() <= edge.capacity(),
                "{} violates capacity",
                edge
            );
        }
        for node in network.nodes() {
            if node.id() != result.source && node.id() != result.target {
                assert_eq!(
                    network.net_flow(node.id()).unwrap(),
                    0,
                    "node {} leaks flow",
                    node.id()
                );
            }
        }
        assert_eq!(network.calculate_flow_value().unwrap(), result.value);
        assert_eq!(network.calculate_target_inflow().unwrap(), result.value);
    }

    fn scenario_a() -> FlowNetwork {
        build(
            4,
            0,
            3,
            &[(0, 1, 3), (0, 2, 2), (1, 2, 5), (1, 3, 2), (2, 3, 3)],
        )
    }

    /// 需要撤销流量才能达到最大流的图：
    /// 最短路径 0-1-3-5 会占用 1->3 和 3->5
    fn redirect_network() -> FlowNetwork {
        build(
            6,
            0,
            5,
            &[
                (0, 1, 1),
                (0, 2, 1),
                (1, 3, 1),
                (1, 4, 1),
                (2, 3, 1),
                (3, 5, 1),
                (4, 5, 1),
            ],
        )
    }

    #[test]
    fn test_dag_max_flow() {
        let mut network = scenario_a();
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 5);
        assert_eq!(result.iterations(), 3);
        assert_eq!(result.stats.bfs_runs, 4);
        assert_eq!(flows(&network), vec![3, 2, 1, 2, 3]);
        assert_valid_flow(&network, &result);
    }

    #[test]
    fn test_shortest_paths_first() {
        let mut network = scenario_a();
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        let lens: Vec<usize> = result.augmentations.iter().map(|a| a.path.len()).collect();
        assert_eq!(lens, vec![2, 2, 3]);

        let bottlenecks: Vec<i64> = result.augmentations.iter().map(|a| a.bottleneck).collect();
        assert_eq!(bottlenecks, vec![2, 2, 1]);

        let first: Vec<(i64, i64)> = result.augmentations[0]
            .path
            .iter()
            .map(|arc| (arc.from.as_i64(), arc.to.as_i64()))
            .collect();
        assert_eq!(first, vec![(0, 1), (1, 3)]);
    }

    #[test]
    fn test_no_edges() {
        let mut network = build(2, 0, 1, &[]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 0);
        assert_eq!(result.iterations(), 0);
        assert!(!result.trace.iter().any(|line| line.starts_with("Iteration")));
        assert_eq!(result.trace.last().unwrap(), "Maximum flow: 0");
    }

    #[test]
    fn test_disconnected_target() {
        let mut network = build(3, 0, 2, &[(0, 1, 4)]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 0);
        assert_eq!(flows(&network), vec![0]);
        assert_eq!(result.source_side, vec![NodeId::new(0), NodeId::new(1)]);
        assert!(result.cut_edges.is_empty());
    }

    #[test]
    fn test_parallel_edges() {
        let mut network = build(2, 0, 1, &[(0, 1, 3), (0, 1, 5)]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 8);
        assert_eq!(flows(&network), vec![3, 5]);
        assert_eq!(result.cut_capacity, 8);
        assert_valid_flow(&network, &result);
    }

    #[test]
    fn test_total_flow_overflow() {
        let mut network = build(2, 0, 1, &[(0, 1, i64::MAX), (0, 1, 1)]);
        let err = EdmondsKarp::new().find_max_flow(&mut network).unwrap_err();

        assert!(matches!(err, Error::FlowOverflow));
        assert_eq!(flows(&network), vec![0, 0]);
    }

    #[test]
    fn test_cut_capacity_overflow() {
        // 正向模型下割为 {0->1, 3->5}，流量为 c 但割容量为 2c
        let c = i64::MAX / 2 + 1;
        let mut network = build(
            6,
            0,
            5,
            &[
                (0, 1, c),
                (0, 2, c),
                (1, 3, c),
                (1, 4, c),
                (2, 3, c),
                (3, 5, c),
                (4, 5, c),
            ],
        );
        let err = EdmondsKarp::new().find_max_flow(&mut network).unwrap_err();

        assert!(matches!(err, Error::FlowOverflow));
        assert_eq!(flows(&network), vec![0; 7]);
    }

    #[test]
    fn test_max_capacity_edge() {
        let mut network = build(2, 0, 1, &[(0, 1, i64::MAX)]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, i64::MAX);
        assert_eq!(result.cut_capacity, i64::MAX);
    }

    #[test]
    fn test_zero_capacity_edge_is_not_traversable() {
        let mut network = build(3, 0, 2, &[(0, 1, 10), (1, 2, 0)]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_missing_endpoint() {
        let mut network = FlowNetwork::new();
        network.add_node(0).unwrap();
        network.add_node(1).unwrap();
        network.add_edge(0, 1, 5).unwrap();

        let err = EdmondsKarp::new().find_max_flow(&mut network).unwrap_err();
        assert!(matches!(err, Error::MissingEndpoint));
        assert_eq!(flows(&network), vec![0]);
    }

    #[test]
    fn test_source_equals_target() {
        let mut network = build(2, 0, 0, &[(0, 1, 5), (1, 0, 5)]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 0);
        assert_eq!(result.iterations(), 0);
        assert_eq!(result.stats.bfs_runs, 0);
        assert_eq!(flows(&network), vec![0, 0]);
    }

    #[test]
    fn test_idempotent_restart() {
        let mut network = scenario_a();
        let engine = EdmondsKarp::new();

        let first = engine.find_max_flow(&mut network).unwrap();
        let first_flows = flows(&network);
        let second = engine.find_max_flow(&mut network).unwrap();

        assert_eq!(first.value, second.value);
        assert_eq!(first.trace, second.trace);
        assert_eq!(first_flows, flows(&network));
    }

    #[test]
    fn test_trace_format() {
        let mut network = build(3, 0, 2, &[(0, 1, 4), (1, 2, 3)]);
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(
            result.trace,
            vec![
                "Starting Ford-Fulkerson algorithm with Edmonds-Karp improvement",
                "Source node: 0",
                "Target node: 2",
                "",
                "Iteration 1:",
                "  Found augmenting path with bottleneck capacity 3:",
                "    Edge from 0 to 1 (flow: 0/4)",
                "    Edge from 1 to 2 (flow: 0/3)",
                "  Augmented flow by 3, total flow is now 3",
                "",
                "No more augmenting paths found.",
                "Maximum flow: 3",
            ]
        );
        assert!(result.trace_text().ends_with("Maximum flow: 3\n"));
    }

    #[test]
    fn test_forward_only_cannot_redirect() {
        let mut network = redirect_network();
        let result = EdmondsKarp::new().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 1);
        assert_valid_flow(&network, &result);
        // 正向模型下割容量只是上界
        assert!(result.cut_capacity >= result.value);
    }

    #[test]
    fn test_reverse_arcs_redirect_flow() {
        let mut network = redirect_network();
        let result = reverse_engine().find_max_flow(&mut network).unwrap();

        assert_eq!(result.value, 2);
        assert_eq!(flows(&network), vec![1, 1, 0, 1, 1, 1, 1]);
        assert_eq!(result.cut_capacity, 2);
        assert!(result.augmentations[1].path.iter().any(|arc| arc.reverse));
        assert!(result
            .trace
            .iter()
            .any(|line| line == "    Edge from 1 to 3 (reverse, flow: 1/1)"));
        assert_valid_flow(&network, &result);
    }

    #[test]
    fn test_classic_graph_with_cross_edge() {
        //     10       10
        // S -----> A -----> T
        // |        ^        ^
        // |5       |5       |
        // v        |        |
        // B -----> C ------>|
        //     10       10
        let mut network = build(
            5,
            0,
            4,
            &[
                (0, 1, 10),
                (0, 2, 5),
                (1, 4, 10),
                (2, 3, 10),
                (3, 1, 5),
                (3, 4, 10),
            ],
        );
        let result = reverse_engine().find_max_flow(&mut network).unwrap();
        assert_eq!(result.value, 15);
        assert_valid_flow(&network, &result);
    }

    #[test]
    fn test_residual_model_parse() {
        assert_eq!(
            "forward".parse::<ResidualModel>().unwrap(),
            ResidualModel::ForwardOnly
        );
        assert_eq!(
            "Reverse".parse::<ResidualModel>().unwrap(),
            ResidualModel::WithReverseArcs
        );
        assert!("sideways".parse::<ResidualModel>().is_err());
        assert_eq!(ResidualModel::WithReverseArcs.to_string(), "reverse");
    }

    #[test]
    fn test_random_networks_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let n: i64 = rng.gen_range(2..9);
            let m = rng.gen_range(0..20);
            let edges: Vec<(i64, i64, i64)> = (0..m)
                .map(|_| {
                    (
                        rng.gen_range(0..n),
                        rng.gen_range(0..n),
                        rng.gen_range(0..12),
                    )
                })
                .collect();

            let mut forward_net = build(n, 0, n - 1, &edges);
            let forward = EdmondsKarp::new().find_max_flow(&mut forward_net).unwrap();
            assert_valid_flow(&forward_net, &forward);
            assert!(forward.iterations() <= forward_net.edge_count());
            assert!(forward.cut_capacity >= forward.value);

            let mut reverse_net = build(n, 0, n - 1, &edges);
            let reverse = reverse_engine().find_max_flow(&mut reverse_net).unwrap();
            assert_valid_flow(&reverse_net, &reverse);
            assert!(
                reverse.iterations() <= (n as usize) * reverse_net.edge_count().max(1)
            );

            // 最大流最小割定理
            assert_eq!(reverse.value, reverse.cut_capacity);
            assert!(forward.value <= reverse.value);
        }
    }
}
