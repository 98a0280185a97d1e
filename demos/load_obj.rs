/// OBJ 模型加载示例
///
/// 演示如何加载 OBJ 文件、拆分四边形、计算面法线并导出顶点缓冲区。
///
/// 运行方式：
/// ```
/// cargo run --example load_obj -- tests/data/cube.obj
/// ```

use wavefront_topo::geometry::export::ExportOptions;
use wavefront_topo::geometry::loaders::{MeshLoader, ObjLoader};
use std::path::Path;

fn main() {
    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== wavefront_topo OBJ 加载示例 ===\n");

    let arg = std::env::args().nth(1).unwrap_or_else(|| "tests/data/cube.obj".to_string());
    let obj_path = Path::new(&arg);

    println!("正在加载: {}", obj_path.display());

    let mut mesh = match ObjLoader::load_from_file(obj_path) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("\n✗ 加载失败: {}", e);
            std::process::exit(1);
        }
    };

    println!("\n✓ 加载成功！\n");
    println!("网格信息:");
    println!("  顶点数: {}", mesh.positions().len());
    println!("  法线数: {}", mesh.normals().len());
    println!("  UV 数: {}", mesh.uvs().len());
    println!("  面数: {}", mesh.face_count());
    println!("  组数: {}", mesh.groups().len());

    let split = mesh.tessellate_quads();
    let normals = mesh.compute_face_normals();
    println!("\n拆分了 {} 个四边形，计算了 {} 个面法线", split, normals);

    for (i, group) in mesh.groups().iter().enumerate() {
        println!("\n组 {} '{}': {} 个面", i, group.name, group.face_count());

        for (f, face) in group.faces.iter().take(2).enumerate() {
            if let Some(n) = face.normal {
                println!("  面 {} 法线: [{:.3}, {:.3}, {:.3}]", f, n.x, n.y, n.z);
            }
        }
    }

    for (label, options) in [("平滑", ExportOptions::smooth()), ("平面", ExportOptions::flat())] {
        match mesh.export_all(&options) {
            Ok(buffers) => {
                println!("\n{}光照导出:", label);
                for buffer in &buffers {
                    println!(
                        "  {}: {} 个顶点, 属性 {:?}, 交错数据 {} 个浮点数",
                        buffer.name,
                        buffer.vertex_count,
                        buffer.layout.arities(),
                        buffer.interleaved().len()
                    );
                }
            }
            Err(e) => {
                eprintln!("\n✗ 导出失败: {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("\n=== 示例完成 ===");
}
