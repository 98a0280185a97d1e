/// 拓扑实体模块
///
/// 定义面、顶点引用和组。所有引用都是指向 [`ObjMesh`](super::mesh::ObjMesh)
/// 属性池的零基索引，从不持有属性数据本身。

use crate::core::math::Vector3;

/// 多边形一个角的顶点引用
///
/// 三个槽位总是存在，缺失的分量用 `None` 表示（例如 `f 1//3` 没有 UV）。
/// 索引在解析边界已经从 OBJ 的一基索引转换为零基索引。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VertexRef {
    /// 位置索引
    pub position: Option<u32>,

    /// 纹理坐标索引
    pub uv: Option<u32>,

    /// 法线索引
    pub normal: Option<u32>,
}

impl VertexRef {
    /// 创建一个顶点引用
    #[inline]
    pub fn new(position: Option<u32>, uv: Option<u32>, normal: Option<u32>) -> Self {
        Self { position, uv, normal }
    }

    /// 只有位置索引的引用
    #[inline]
    pub fn position_only(position: u32) -> Self {
        Self::new(Some(position), None, None)
    }
}

/// 多边形面
///
/// 顶点顺序即环绕方向。存入网格的面至少有 3 个顶点引用，
/// 这一点由 [`ObjMesh::add_face`](super::mesh::ObjMesh::add_face) 保证。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Face {
    /// 顶点引用列表
    pub vertices: Vec<VertexRef>,

    /// 面法线，调用 `compute_face_normals` 之前为 `None`
    pub normal: Option<Vector3>,
}

impl Face {
    /// 从顶点引用列表创建面
    pub fn new(vertices: Vec<VertexRef>) -> Self {
        Self { vertices, normal: None }
    }

    /// 顶点引用数量
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.vertices.len() == 3
    }

    #[inline]
    pub fn is_quad(&self) -> bool {
        self.vertices.len() == 4
    }
}

impl From<Vec<VertexRef>> for Face {
    fn from(vertices: Vec<VertexRef>) -> Self {
        Face::new(vertices)
    }
}

/// 命名的面分组
///
/// 面的顺序即声明顺序，只影响导出顺序。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// 组名
    pub name: String,

    /// 面列表
    pub faces: Vec<Face>,
}

impl Group {
    /// 创建空组
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }

    /// 面数量
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// 是否所有面都是三角形
    pub fn is_triangulated(&self) -> bool {
        self.faces.iter().all(Face::is_triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_shape_queries() {
        let tri = Face::new(vec![VertexRef::position_only(0); 3]);
        let quad = Face::new(vec![VertexRef::position_only(0); 4]);

        assert!(tri.is_triangle());
        assert!(!tri.is_quad());
        assert!(quad.is_quad());
        assert_eq!(quad.len(), 4);
        assert!(tri.normal.is_none());
    }

    #[test]
    fn test_group_triangulated() {
        let mut group = Group::new("body");
        assert!(group.is_triangulated());

        group.faces.push(Face::new(vec![VertexRef::position_only(0); 3]));
        assert!(group.is_triangulated());

        group.faces.push(Face::new(vec![VertexRef::position_only(0); 4]));
        assert!(!group.is_triangulated());
        assert_eq!(group.face_count(), 2);
    }
}
