// mgraphs CLI - mグラフの生成・全列挙・彩色

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mgraphs::application::coloring::color_graph_file;
use mgraphs::application::enumerate::enumerate_all_m_graphs;
use mgraphs::application::random_gen::generate_random_m_graph;
use mgraphs::constants::{ALL_OUTPUT_DIR, MAX_COLORING_NODES, RANDOM_OUTPUT_DIR};
use mgraphs::domain::coloring::chromatic_number;
use mgraphs::domain::search::{EnumerateConfig, NodeCount};
use mgraphs::infrastructure::render::save_svg;
use mgraphs::infrastructure::storage::save_adjlist;
use mgraphs::logging;

#[derive(Parser, Debug)]
#[command(name = "mgraphs", version, about = "mグラフの生成と厳密彩色")]
struct Args {
    /// ランダムな極大mグラフを1つ生成して保存・彩色する
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// n ノードの極大mグラフをすべて列挙する
    #[arg(long, value_name = "N")]
    all: Option<usize>,

    /// 隣接リスト形式のグラフを読み込んで彩色する
    #[arg(long, value_name = "PATH")]
    color: Option<PathBuf>,

    /// 乱数シード（省略時はエントロピーから初期化）
    #[arg(long)]
    seed: Option<u64>,

    /// 出力ディレクトリ（省略時はモードごとの既定値）
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// 詳細ログをファイルに出力する
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        logging::enable_verbose_logging();
        logging::init_log_file(Path::new("mgraphs.log"))
            .context("ログファイルを初期化できません")?;
    }

    if args.random.is_none() && args.all.is_none() && args.color.is_none() {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    if let Some(n) = args.random {
        run_random(n, &args)?;
    }
    if let Some(n) = args.all {
        run_all(n, &args)?;
    }
    if let Some(path) = &args.color {
        run_color(path)?;
    }
    Ok(())
}

/// ランダムな極大mグラフを1つ作り、保存して彩色数を表示する
fn run_random(n: usize, args: &Args) -> Result<()> {
    let nodes = NodeCount::new(n)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let m = generate_random_m_graph(nodes, &mut rng)?;

    let out_dir = output_dir(args, RANDOM_OUTPUT_DIR)?;
    let name = format!("m_graph_{}_1", n);
    save_adjlist(&m.graph, &out_dir.join(format!("{}.adjlist", name)))?;
    save_svg(
        &m.graph,
        &format!("MGraph n:{}", n),
        &out_dir.join(format!("{}.svg", name)),
    )?;

    println!(
        "ランダムmグラフ: n={} コード={} 辺={} -> {}",
        n,
        m.long_edges.len(),
        m.graph.edge_count(),
        out_dir.join(&name).display()
    );

    if n <= MAX_COLORING_NODES {
        let chi = chromatic_number(&m.graph)?;
        println!("彩色数: {}", chi);
    } else {
        println!("彩色はスキップ（n > {}）", MAX_COLORING_NODES);
    }
    Ok(())
}

/// n ノードの極大mグラフをすべて列挙して書き出す
fn run_all(n: usize, args: &Args) -> Result<()> {
    let config = EnumerateConfig::new(NodeCount::new(n)?);
    let out_dir = output_dir(args, ALL_OUTPUT_DIR)?;

    let summary = enumerate_all_m_graphs(&config, &out_dir)?;
    println!(
        "全列挙完了: n={} 発見={} 探索ノード={} 葉={} {:.2}秒 ({:.0} node/s) -> {}",
        n,
        summary.emitted,
        summary.nodes_visited,
        summary.leaves,
        summary.elapsed_seconds,
        summary.nodes_per_second,
        out_dir.display()
    );
    Ok(())
}

/// グラフファイルを読み込んで彩色数を表示する
fn run_color(path: &Path) -> Result<()> {
    let (graph, chi) = color_graph_file(path)?;
    println!(
        "彩色数: {} (n={} 辺={} from {})",
        chi,
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(())
}

/// 出力ディレクトリを決めて作成する
fn output_dir(args: &Args, default_dir: &str) -> Result<PathBuf> {
    let dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_dir));
    fs::create_dir_all(&dir)
        .with_context(|| format!("出力ディレクトリを作成できません: {}", dir.display()))?;
    Ok(dir)
}
