//! NetFlow 命令行工具
//!
//! 从文本文件读取网络，计算最大流并输出报告

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use netflow::cli::{Printer, ReportFormat};
use netflow::{EdmondsKarp, MaxFlowConfig, NetworkParser, ResidualModel};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "netflow")]
#[command(version)]
#[command(about = "NetFlow 最大流计算工具 (Ford-Fulkerson / Edmonds-Karp)")]
struct Args {
    /// 网络文件路径
    #[arg(default_value = "data/network.txt")]
    input: PathBuf,

    /// 输出格式: table, plain, json
    #[arg(short, long, default_value = "table")]
    format: ReportFormat,

    /// 残余模型: forward（只沿正向边推流）, reverse（允许反向弧撤销流量）
    #[arg(short, long, default_value = "forward")]
    residual: ResidualModel,

    /// 不输出执行日志
    #[arg(long)]
    no_trace: bool,

    /// 日志级别（未设置 RUST_LOG 时生效）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("无效的日志级别")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let parsed = NetworkParser::parse_file(&args.input)
        .with_context(|| format!("读取网络文件失败: {}", args.input.display()))?;
    let mut network = parsed.network;

    let engine = EdmondsKarp::with_config(MaxFlowConfig::default().with_residual(args.residual));
    let result = engine
        .find_max_flow(&mut network)
        .context("最大流计算失败")?;

    let printer = Printer::new(args.format);
    if args.format == ReportFormat::Json {
        println!("{}", printer.json_report(&network, &result)?);
        return Ok(());
    }

    println!("{}", "NetFlow - 最大流计算".bold());
    println!("=====================");
    println!("网络文件: {}", args.input.display());
    println!("残余模型: {}\n", result.residual);

    println!("{}", printer.network_info(&network));
    println!("{}", printer.summary(&result));
    if !args.no_trace {
        println!("{}", printer.trace(&result));
    }
    println!("{}", printer.edge_states(&network));

    println!(
        "{} {}",
        "最大流:".green().bold(),
        result.value.to_string().green().bold()
    );

    Ok(())
}
