mod commands;
mod config;

use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

use anyhow::Result;
use catalog::{FileBackend, LOW_STOCK_THRESHOLD, ProductStore};
use clap::{Parser, Subcommand};
use telemetry::{LogConfig, LogFormat, LogTarget};
use tracing::error;

use crate::commands::{Commands, Output};
use crate::config::StoreLocation;

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "CLI 工具用于管理商品数据文件", long_about = None)]
struct Cli {
    /// 数据目录，覆盖配置中的 store.data_dir
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// 以 JSON 格式输出
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 初始化数据文件
    Seed {
        /// 覆盖现有数据
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },

    /// 列出商品
    List {
        /// 按分类过滤
        #[arg(short, long)]
        category: Option<String>,
    },

    /// 查看单个商品
    Show {
        /// 商品 slug
        slug: String,
    },

    /// 汇总统计
    Stats,

    /// 低库存商品
    LowStock {
        #[arg(short, long, default_value_t = LOW_STOCK_THRESHOLD)]
        threshold: u32,
    },
}

/// **商品数据管理工具**
///
/// ***usage：***
/// ```shell
/// # 初始化数据文件
/// storefront seed
///
/// # 按分类查看商品
/// storefront list --category Electronics
///
/// # 查看统计信息 (JSON)
/// storefront --json stats
///
/// # 指定数据目录
/// storefront --data-dir /srv/storefront/data low-stock --threshold 5
/// ```
#[tokio::main]
async fn main() {
    // 日志写到 stderr，stdout 只输出命令结果
    if let Err(e) = telemetry::init(&LogConfig::new("warn", LogFormat::Compact, LogTarget::Stderr)) {
        eprintln!("{}", e);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("操作失败: {:#}", e);
            exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String> {
    let location = StoreLocation::load(&StoreLocation::config_dir(), cli.data_dir)?;
    let store = ProductStore::new(Arc::new(FileBackend::new(location.path())));
    let output = if cli.json { Output::Json } else { Output::Table };
    let commands = Commands::new(store, output);

    match cli.command {
        Command::Seed { force } => commands.seed(force).await,
        Command::List { category } => commands.list(category.as_deref()).await,
        Command::Show { slug } => commands.show(&slug).await,
        Command::Stats => commands.stats().await,
        Command::LowStock { threshold } => commands.low_stock(threshold).await,
    }
}
