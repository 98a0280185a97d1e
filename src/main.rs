//! wavefront_topo - OBJ 检查工具
//!
//! 加载一个 OBJ 文件，按配置执行拓扑处理，导出顶点缓冲区并输出统计信息。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件 wavefront_topo.toml
//! cargo run
//!
//! # 指定模型，使用面法线，只导出第 0 组
//! cargo run -- assets/cube.obj --flat --group 0
//! ```
//!
//! # 命令行参数
//!
//! - `<path>`: 模型路径
//! - `--flat` / `--smooth`: 法线来源
//! - `--group <index>`: 只导出指定组
//! - `--no-tessellate`: 跳过四边形拆分
//! - `--no-face-normals`: 跳过面法线计算
//! - `--verbose`: debug 级别日志

use std::path::Path;

use anyhow::Context;
use wavefront_topo::core::config::Config;
use wavefront_topo::core::log;
use wavefront_topo::geometry::export::{ExportOptions, MeshBuffer};
use wavefront_topo::geometry::loaders::load_mesh;
use wavefront_topo::{app_error, app_info, app_warn};

fn main() {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("wavefront_topo.toml");

    // 2. 应用命令行参数
    config.apply_args(std::env::args().skip(1));

    // 3. 验证配置
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // 4. 初始化日志系统
    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    app_info!(version = env!("CARGO_PKG_VERSION"), "wavefront_topo starting");

    if let Err(e) = run(&config) {
        app_error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let path = Path::new(&config.load.path);

    let mut mesh = load_mesh(path)
        .with_context(|| format!("failed to load '{}'", path.display()))?;

    if config.load.tessellate_quads {
        let split = mesh.tessellate_quads();
        app_info!(quads = split, "Quads tessellated");
    }
    if config.load.compute_face_normals {
        mesh.compute_face_normals();
    }
    mesh.log_summary();

    let options = ExportOptions {
        normal_source: config.export.normal_source,
    };

    let buffers = match config.export.group {
        Some(index) => vec![mesh
            .export_group(index, &options)
            .with_context(|| format!("failed to export group {}", index))?],
        None => mesh.export_all(&options).context("failed to export groups")?,
    };

    if buffers.is_empty() {
        app_warn!("Mesh has no groups, nothing exported");
    }
    for buffer in &buffers {
        report(buffer);
    }

    Ok(())
}

fn report(buffer: &MeshBuffer) {
    let bytes: usize = buffer.attributes().iter().map(|a| a.as_bytes().len()).sum();
    app_info!(
        group = %buffer.name,
        arities = ?buffer.layout.arities(),
        vertices = buffer.vertex_count,
        triangles = buffer.triangle_count(),
        bytes,
        "Buffer exported"
    );
}
