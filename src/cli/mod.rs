//! 命令行报告模块

mod printer;

pub use printer::{Printer, ReportFormat};
