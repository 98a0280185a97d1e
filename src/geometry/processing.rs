//! 拓扑处理模块
//!
//! 就地修改已加载的拓扑：
//! - 四边形拆分（以第一个顶点为扇心）
//! - 面法线计算
//!
//! 两个操作对已经是三角形的数据重复执行都不会产生变化。

use crate::core::math::{triangle_normal, Vector3};
use crate::geometry::topology::{Face, Group};

/// 将所有四边形拆分为两个三角形
///
/// 四边形 `[v0, v1, v2, v3]` 被截断为 `[v0, v1, v2]`，
/// 新三角形 `[v0, v2, v3]` 追加到所在组面列表的末尾。
/// 三角形和多于 4 个顶点的多边形保持不变。
///
/// 原来四边形上已经计算过的面法线会被清除，因为两个三角形不一定共面。
///
/// # 返回
///
/// 被拆分的四边形数量
pub fn tessellate_quads(groups: &mut [Group]) -> usize {
    let mut split = 0;

    for group in groups.iter_mut() {
        if group.is_triangulated() {
            continue;
        }
        let original_count = group.faces.len();

        for i in 0..original_count {
            let face = &mut group.faces[i];
            if !face.is_quad() {
                continue;
            }

            let v0 = face.vertices[0];
            let v2 = face.vertices[2];
            let v3 = face.vertices[3];
            face.vertices.truncate(3);
            face.normal = None;

            group.faces.push(Face::new(vec![v0, v2, v3]));
            split += 1;
        }
    }

    tracing::debug!(quads = split, "四边形拆分完成");
    split
}

/// 计算所有三角形面的法线
///
/// 法线为 `normalize((p1 - p0) × (p2 - p0))`，使用面自身的位置索引，
/// 结果存回 [`Face::normal`]。非三角形面被静默跳过，需要的话先调用
/// [`tessellate_quads`]。退化三角形得到零向量。
///
/// # 返回
///
/// 计算了法线的面数量
pub fn compute_face_normals(positions: &[Vector3], groups: &mut [Group]) -> usize {
    let mut computed = 0;
    let mut skipped = 0;

    for face in groups.iter_mut().flat_map(|g| g.faces.iter_mut()) {
        match face_normal(positions, face) {
            Some(normal) => {
                face.normal = Some(normal);
                computed += 1;
            }
            None => skipped += 1,
        }
    }

    tracing::debug!(computed, skipped, "面法线计算完成");
    computed
}

/// 计算单个三角形面的法线，不修改面
///
/// 面不是三角形或缺少位置索引时返回 `None`。
pub fn face_normal(positions: &[Vector3], face: &Face) -> Option<Vector3> {
    if !face.is_triangle() {
        return None;
    }

    let p = |corner: usize| -> Option<&Vector3> {
        let index = face.vertices[corner].position? as usize;
        positions.get(index)
    };

    Some(triangle_normal(p(0)?, p(1)?, p(2)?))
}
