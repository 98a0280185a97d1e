//! wavefront_topo - OBJ 网格拓扑库
//!
//! 把 Wavefront OBJ 文本解析为索引拓扑（属性池 + 命名组 + 多边形面），
//! 提供四边形拆分与面法线计算，并把单个组导出为非索引的扁平顶点缓冲区，
//! 交给外部渲染层上传。本库不涉及任何图形 API。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（数学、日志、配置、错误处理）
//! - `geometry`: 解析、拓扑、处理与导出
//!
//! # 使用示例
//!
//! ```
//! use wavefront_topo::geometry::loaders::ObjLoader;
//! use wavefront_topo::geometry::ExportOptions;
//!
//! let mut mesh = ObjLoader::load_from_str(
//!     "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\ng plane\nf 1 2 3 4\n",
//! )?;
//! mesh.tessellate_quads();
//!
//! let buffer = mesh.export_group(0, &ExportOptions::default())?;
//! assert_eq!(buffer.vertex_count, 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod geometry;
