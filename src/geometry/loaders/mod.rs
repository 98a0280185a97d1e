/// 模型加载器模块
///
/// 提供统一的加载接口和 OBJ 格式的具体实现。
///
/// # 使用示例
///
/// ```rust,no_run
/// use wavefront_topo::geometry::loaders::{MeshLoader, ObjLoader};
/// use std::path::Path;
///
/// let mesh = ObjLoader::load_from_file(Path::new("model.obj"))?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
use crate::core::error::MeshLoadError;
use crate::geometry::mesh::ObjMesh;
use std::path::Path;

pub mod obj_loader;

pub use obj_loader::ObjLoader;

/// 加载器的 Result 类型
pub type LoadResult<T> = std::result::Result<T, MeshLoadError>;

/// 网格加载器 trait
///
/// 加载器是无状态的（使用关联函数），只产生 CPU 侧的拓扑数据。
pub trait MeshLoader {
    /// 从文件路径加载网格
    ///
    /// # 错误
    ///
    /// - 文件无法打开：[`MeshLoadError::SourceUnavailable`]
    /// - 内容错误：[`MeshLoadError::MalformedDocument`]，带行号和原始行
    fn load_from_file(path: &Path) -> LoadResult<ObjMesh>;

    /// 从内存数据加载网格
    fn load_from_memory(data: &[u8]) -> LoadResult<ObjMesh>;

    /// 支持的文件扩展名列表（小写，不含点号）
    fn supported_extensions() -> &'static [&'static str];
}

/// 根据文件扩展名选择合适的加载器
pub fn load_mesh(path: &Path) -> LoadResult<ObjMesh> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| MeshLoadError::UnsupportedFormat("无法确定文件扩展名".to_string()))?;

    if ObjLoader::supported_extensions().contains(&extension.as_str()) {
        ObjLoader::load_from_file(path)
    } else {
        Err(MeshLoadError::UnsupportedFormat(format!(
            "不支持的文件格式: .{}",
            extension
        )))
    }
}
