/// OBJ 记录解析模块
///
/// 加载器逐行调用这里的纯函数：
///
/// ```text
/// 原始行 → preprocess_line → split_by_str → {parse_vec3 | parse_vec2 | parse_face}
/// ```
///
/// 所有函数都只返回 [`RecordError`](crate::core::error::RecordError)，不记录日志，
/// 行号上下文由加载器附加。

pub mod line;
pub mod attribute;
pub mod face;

pub use line::{preprocess_line, split_by_str, Tokenizer};
pub use attribute::{parse_vec2, parse_vec3};
pub use face::parse_face;

/// 记录关键字
pub mod keyword {
    /// 顶点位置
    pub const VERTEX: &str = "v";
    /// 纹理坐标
    pub const TEXCOORD: &str = "vt";
    /// 顶点法线
    pub const NORMAL: &str = "vn";
    /// 面
    pub const FACE: &str = "f";
    /// 组
    pub const GROUP: &str = "g";
}
