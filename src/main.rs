//! 程序入口：初始化日志、解析命令行，并把核心操作接到终端展示
//!
//! 展示层契约：负责把原始文本解码为JSON值（失败时展示错误消息与
//! 原始文本），再把已解码的值交给渲染器或对比器；核心算法不会失败

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use json_chakanqi::model::data_core::{AppError, ViewerState};
use json_chakanqi::model::diff::diff_values;
use json_chakanqi::utils::{clipboard, format, fs};
use json_chakanqi::vm::bridge::{
    render_diff_table, render_tree_lines, LABEL_RAW_INPUT, STATUS_COPIED, STATUS_ERROR_PREFIX,
};

/// JSON查看器：树形展示、美化/压缩与结构对比
#[derive(Parser, Debug)]
#[command(name = "json_chakanqi")]
#[command(about = "JSON查看器：树形展示、美化/压缩与结构对比")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 以可折叠树形结构展示JSON
    Tree(TreeArgs),
    /// 美化输出JSON（2空格缩进）
    Beautify(FormatArgs),
    /// 压缩输出JSON
    Minify(FormatArgs),
    /// 对比两个JSON文件的结构差异
    Compare(CompareArgs),
}

#[derive(clap::Args, Debug)]
struct TreeArgs {
    /// JSON文件路径；缺省时从标准输入读取
    file: Option<PathBuf>,

    /// 使用内置示例文档
    #[arg(long, conflicts_with = "file")]
    sample: bool,

    /// 只展开到指定深度；缺省全部展开
    #[arg(long)]
    depth: Option<u32>,

    /// 按JSONPath提取并美化子树，而非展示整树
    #[arg(long)]
    select: Option<String>,

    /// 将结果复制到系统剪贴板
    #[arg(long)]
    copy: bool,
}

#[derive(clap::Args, Debug)]
struct FormatArgs {
    /// JSON文件路径；缺省时从标准输入读取
    file: Option<PathBuf>,

    /// 输出文件；缺省打印到标准输出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 将结果复制到系统剪贴板
    #[arg(long)]
    copy: bool,
}

#[derive(clap::Args, Debug)]
struct CompareArgs {
    /// 左侧JSON文件
    left: PathBuf,

    /// 右侧JSON文件
    right: PathBuf,

    /// 以JSON格式输出差异清单（value/oldValue/newValue字段）
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::WARN)
        .try_init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Tree(args) => run_tree(args),
        Commands::Beautify(args) => run_format(args, format::beautify),
        Commands::Minify(args) => run_format(args, format::minify),
        Commands::Compare(args) => run_compare(args),
    }
}

fn run_tree(args: TreeArgs) -> anyhow::Result<()> {
    let mut state = ViewerState::default();
    if args.sample {
        state.set_document(ViewerState::sample_document());
    } else {
        let text = read_input(args.file.as_deref())?;
        if let Err(e) = state.load_text(&text) {
            return Err(report_parse_failure(e, &text));
        }
    }

    match args.depth {
        Some(depth) => state.expand_to_depth(depth),
        None => state.expand_all(),
    }

    let output = match &args.select {
        Some(json_path) => state
            .extract_subtree_pretty(json_path)
            .with_context(|| format!("子树提取失败: {}", json_path))?,
        None => render_tree_lines(state.tree_flat.iter()),
    };
    println!("{}", output);

    if args.copy {
        copy_with_status(&output);
    }
    Ok(())
}

fn run_format(args: FormatArgs, op: fn(&str) -> Result<String, AppError>) -> anyhow::Result<()> {
    let text = read_input(args.file.as_deref())?;
    let output = match op(&text) {
        Ok(formatted) => formatted,
        Err(e) => return Err(report_parse_failure(e, &text)),
    };

    match args.output.as_deref() {
        Some(path) => {
            fs::write_text_file(path, &output)?;
            tracing::info!("输出已写入: {}", path.display());
        }
        None => println!("{}", output),
    }

    if args.copy {
        copy_with_status(&output);
    }
    Ok(())
}

fn run_compare(args: CompareArgs) -> anyhow::Result<()> {
    let left = fs::read_json_file(&args.left)
        .with_context(|| format!("读取左侧文件失败: {}", args.left.display()))?;
    let right = fs::read_json_file(&args.right)
        .with_context(|| format!("读取右侧文件失败: {}", args.right.display()))?;

    let records = diff_values(&left, &right, "");
    let output = if args.json {
        serde_json::to_string_pretty(&records)?
    } else {
        render_diff_table(&records)
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// 从文件或标准输入读取原始文本
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("读取文件失败: {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("读取标准输入失败")?;
            Ok(buf)
        }
    }
}

/// 解码失败：展示原始文本，解析错误本身交给调用方报告
fn report_parse_failure(err: AppError, raw: &str) -> anyhow::Error {
    eprintln!("{}{}", LABEL_RAW_INPUT, raw.trim());
    tracing::error!("解码失败: {}", err);
    anyhow::Error::new(err)
}

/// 剪贴板复制：成功提示，失败报告但不影响本次输出
fn copy_with_status(text: &str) {
    match clipboard::copy_to_clipboard(text) {
        Ok(()) => {
            eprintln!("{}", STATUS_COPIED);
            tracing::info!("内容已复制到剪贴板，长度: {} 字符", text.len());
        }
        Err(e) => {
            eprintln!("{}{}", STATUS_ERROR_PREFIX, e);
            tracing::error!("复制失败: {}", e);
        }
    }
}
