//! 错误处理模块
//!
//! 定义了库中使用的统一错误类型，使用 `thiserror` 提供友好的错误消息。
//!
//! # 错误分类
//!
//! - [`RecordError`]：单条记录（`v`/`vt`/`vn`/`f`）的词法或结构错误
//! - [`MeshLoadError`]：整个文档加载过程中的错误，附带行号上下文
//! - [`ExportError`]：从拓扑导出顶点缓冲区时的错误
//! - [`ConfigError`]：配置文件相关错误
//!
//! 解析器各层只返回错误而不记录日志，行号上下文由加载器统一附加一次。

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// 库统一的 Result 类型
pub type Result<T> = std::result::Result<T, Error>;

/// 库的顶层错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// 网格加载错误
    #[error("Mesh loading error: {0}")]
    MeshLoading(#[from] MeshLoadError),

    /// 缓冲区导出错误
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 顶点引用中的属性槽位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Position => "position",
            AttributeKind::TexCoord => "uv",
            AttributeKind::Normal => "normal",
        };
        f.write_str(name)
    }
}

/// 单条记录的解析或拓扑错误
///
/// 不包含行号，行号由 [`MeshLoadError::MalformedDocument`] 附加。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// 无法解析为浮点数的分量（包括空分量）
    #[error("malformed number '{token}'")]
    MalformedNumber { token: String },

    /// 分量个数不符合记录类型
    #[error("'{keyword}' record expects {min}..={max} components, found {found}")]
    InvalidArity {
        keyword: &'static str,
        found: usize,
        min: usize,
        max: usize,
    },

    /// 面顶点索引格式错误
    #[error("invalid vertex index format '{token}'")]
    InvalidIndexFormat { token: String },

    /// 面的顶点引用少于 3 个
    #[error("a face needs at least 3 vertices, found {found}")]
    TooFewVertices { found: usize },

    /// 面顶点缺少位置索引
    #[error("face corner {corner} has no position index")]
    MissingPositionIndex { corner: usize },

    /// 引用了尚未声明的属性
    #[error("{attribute} index {index} out of range (declared: {len})")]
    IndexOutOfRange {
        attribute: AttributeKind,
        index: usize,
        len: usize,
    },
}

/// 网格加载相关的错误
#[derive(Debug, Error)]
pub enum MeshLoadError {
    /// 输入流无法打开
    #[error("cannot open '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 文档内容错误，`line` 从 1 开始
    #[error("line {line}: {source} ('{text}')")]
    MalformedDocument {
        line: usize,
        text: String,
        #[source]
        source: RecordError,
    },

    /// 打开成功后读取失败（例如非 UTF-8 内容）
    #[error("read failed at line {line}: {source}")]
    ReadFailed {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// 不支持的文件格式
    #[error("unsupported mesh format: {0}")]
    UnsupportedFormat(String),
}

impl MeshLoadError {
    /// 出错的行号（仅内容错误和读取错误有行号）
    pub fn line(&self) -> Option<usize> {
        match self {
            MeshLoadError::MalformedDocument { line, .. } | MeshLoadError::ReadFailed { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}

/// 缓冲区导出相关的错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// 组索引越界
    #[error("group index {index} out of range ({group_count} groups)")]
    InvalidGroupIndex { index: usize, group_count: usize },

    /// 网格处于加载中或加载失败状态
    #[error("mesh is not ready for export (load incomplete or failed)")]
    NotReady,

    /// 导出要求所有面都是三角形
    #[error("face {face} has {vertex_count} vertices; tessellate before export")]
    NonTriangularFace { face: usize, vertex_count: usize },

    /// 属性池非空但面顶点没有引用该属性
    #[error("face {face} corner {corner} has no {attribute} index")]
    MissingAttributeIndex {
        face: usize,
        corner: usize,
        attribute: AttributeKind,
    },
}

/// 配置相关的错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件未找到
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    /// 配置文件解析失败
    #[error("Failed to parse config: {0}")]
    ParseError(String),

    /// 配置值无效
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_document_message() {
        let err = MeshLoadError::MalformedDocument {
            line: 7,
            text: "v 1 x 3".to_string(),
            source: RecordError::MalformedNumber { token: "x".to_string() },
        };
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("'x'"));
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = ExportError::NotReady.into();
        assert!(matches!(err, Error::Export(ExportError::NotReady)));

        let err: Error = MeshLoadError::UnsupportedFormat("fbx".to_string()).into();
        assert!(err.to_string().starts_with("Mesh loading error"));
    }
}
