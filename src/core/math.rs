//! 数学类型与辅助函数
//!
//! 基于 `nalgebra`，只保留拓扑处理需要的部分：属性池使用的向量类型，
//! 以及面法线计算用到的叉乘和归一化。

pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

// 类型别名，使用更简洁的名称
pub type Vector2 = Vec2<f32>;
pub type Vector3 = Vec3<f32>;

/// 浮点数比较的 epsilon
pub const EPSILON: f32 = 1e-6;

/// 两条边的叉乘
#[inline]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// 归一化3D向量
///
/// 长度小于 [`EPSILON`] 的向量返回零向量，而不是 NaN。
#[inline]
pub fn normalize(v: &Vector3) -> Vector3 {
    v.try_normalize(EPSILON).unwrap_or_else(Vector3::zeros)
}

/// 三角形 `(p0, p1, p2)` 的单位法线，方向为 `(p1 - p0) × (p2 - p0)`
///
/// 退化三角形返回零向量。
#[inline]
pub fn triangle_normal(p0: &Vector3, p1: &Vector3, p2: &Vector3) -> Vector3 {
    let edge1 = p1 - p0;
    let edge2 = p2 - p0;
    normalize(&cross(&edge1, &edge2))
}
