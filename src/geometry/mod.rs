/// 几何体加载和处理模块
///
/// 解析 Wavefront OBJ 文本，建立索引拓扑，并导出可直接上传的扁平顶点缓冲区。
///
/// # 模块结构
///
/// - `parser`: 行预处理、分词、属性和面记录解析
/// - `topology`: 顶点引用、面、组
/// - `mesh`: 拓扑存储 `ObjMesh`
/// - `loaders`: 文档加载器
/// - `processing`: 四边形拆分、面法线
/// - `export`: 非索引缓冲区导出
///
/// # 架构设计
///
/// ```text
/// 文件 (OBJ)
///     ↓
/// ObjLoader（preprocess → tokenize → parse_vec* / parse_face）
///     ↓
/// ObjMesh（属性池 + 组）
///     ↓ tessellate_quads / compute_face_normals（可选）
/// MeshBuffer（CPU 侧扁平数组）
///     ↓
/// Renderer（外部）
/// ```
///
/// # 使用示例
///
/// ```rust,no_run
/// use wavefront_topo::geometry::loaders::{MeshLoader, ObjLoader};
/// use wavefront_topo::geometry::export::ExportOptions;
/// use std::path::Path;
///
/// let mut mesh = ObjLoader::load_from_file(Path::new("model.obj"))?;
/// mesh.tessellate_quads();
/// mesh.compute_face_normals();
///
/// let buffer = mesh.export_group(0, &ExportOptions::default())?;
/// println!("顶点数: {}", buffer.vertex_count);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```

pub mod parser;
pub mod topology;
pub mod mesh;
pub mod loaders;
pub mod processing;
pub mod export;

// 重新导出常用类型
pub use topology::{Face, Group, VertexRef};
pub use mesh::{LoadState, ObjMesh};
pub use export::{AttributeLayout, ExportOptions, MeshBuffer, NormalSource};
