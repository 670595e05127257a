//! labelgraph 演示脚本
//!
//! 在选定的表示上执行一组操作并打印结果
//!
//! ```text
//! RUST_LOG=labelgraph=trace cargo run --example demo -- --kind vertices
//! ```

use clap::Parser;
use labelgraph::{Graph, GraphKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "labelgraph-demo")]
#[command(about = "labelgraph 演示")]
struct Args {
    /// 图表示: edges 或 vertices
    #[arg(short, long, default_value = "edges")]
    kind: GraphKind,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("labelgraph 演示 ({})", args.kind);
    println!("================\n");

    let mut graph: Box<dyn Graph<String>> = args.kind.build();

    println!("1. 添加顶点");
    for label in ["X", "Y", "Z"] {
        println!("   add({}) -> {}", label, graph.add(label.to_string()));
    }
    println!("   add(X) -> {}", graph.add("X".to_string()));

    println!("\n2. 设置边");
    for (source, target, weight) in [("X", "Y", 8), ("X", "Y", 15), ("Y", "Z", 3), ("Z", "X", 1)] {
        let previous = graph.set(source.to_string(), target.to_string(), weight)?;
        println!("   set({}, {}, {}) -> {}", source, target, weight, previous);
    }

    match graph.set("X".to_string(), "Z".to_string(), -1) {
        Ok(previous) => println!("   set(X, Z, -1) -> {}", previous),
        Err(e) => println!("   set(X, Z, -1) 失败: {}", e),
    }

    println!("\n当前图:\n{}", graph);

    println!("3. 查询");
    println!("   targets(X) = {:?}", graph.targets(&"X".to_string()));
    println!("   sources(X) = {:?}", graph.sources(&"X".to_string()));

    println!("\n4. 删除顶点");
    println!("   remove(Y) -> {}", graph.remove(&"Y".to_string()));
    println!("   remove(Y) -> {}", graph.remove(&"Y".to_string()));
    println!("   vertices() = {:?}", graph.vertices());

    println!("\n当前图:\n{}", graph);
    println!("演示完成!");
    Ok(())
}
