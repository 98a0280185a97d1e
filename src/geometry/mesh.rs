/// 网格拓扑存储模块
///
/// [`ObjMesh`] 持有三个属性池（位置、法线、UV）和有序的组列表，
/// 是加载过程中唯一可变的聚合。面只通过索引引用属性池。

use crate::core::error::{AttributeKind, RecordError};
use crate::core::math::{Vector2, Vector3};
use crate::geometry::export::{self, ExportOptions, MeshBuffer};
use crate::geometry::processing;
use crate::geometry::topology::{Face, Group, VertexRef};
use crate::core::error::ExportError;

/// 隐式默认组的名称
pub const DEFAULT_GROUP_NAME: &str = "default";

/// 网格的加载状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// 可以使用（手工构建或加载成功）
    #[default]
    Ready,
    /// 加载器正在填充
    Loading,
    /// 加载中途失败，数据不完整，调用方应丢弃
    Failed,
}

/// OBJ 网格拓扑
///
/// # 示例
///
/// ```rust
/// use wavefront_topo::geometry::mesh::ObjMesh;
/// use wavefront_topo::geometry::topology::{Face, VertexRef};
/// use wavefront_topo::core::Vector3;
///
/// let mut mesh = ObjMesh::new();
/// mesh.add_position(Vector3::new(0.0, 0.0, 0.0));
/// mesh.add_position(Vector3::new(1.0, 0.0, 0.0));
/// mesh.add_position(Vector3::new(0.0, 1.0, 0.0));
/// mesh.add_face(Face::new((0..3).map(VertexRef::position_only).collect()))?;
///
/// assert_eq!(mesh.groups()[0].name, "default");
/// # Ok::<(), wavefront_topo::core::error::RecordError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjMesh {
    positions: Vec<Vector3>,
    normals: Vec<Vector3>,
    uvs: Vec<Vector2>,
    groups: Vec<Group>,
    current_group: Option<usize>,
    state: LoadState,
}

impl ObjMesh {
    /// 创建一个空网格
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // 属性池
    // ------------------------------------------------------------------

    /// 追加顶点位置，返回其索引
    pub fn add_position(&mut self, position: Vector3) -> usize {
        self.positions.push(position);
        self.positions.len() - 1
    }

    /// 追加法线，返回其索引
    pub fn add_normal(&mut self, normal: Vector3) -> usize {
        self.normals.push(normal);
        self.normals.len() - 1
    }

    /// 追加纹理坐标，返回其索引
    pub fn add_uv(&mut self, uv: Vector2) -> usize {
        self.uvs.push(uv);
        self.uvs.len() - 1
    }

    #[inline]
    pub fn positions(&self) -> &[Vector3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    #[inline]
    pub fn uvs(&self) -> &[Vector2] {
        &self.uvs
    }

    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    #[inline]
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    // ------------------------------------------------------------------
    // 组与面
    // ------------------------------------------------------------------

    /// 声明组并设为当前组
    ///
    /// 同名组已存在时切换到该组，不会重复创建。空名称视为 `"default"`。
    /// 返回当前组的索引。
    pub fn add_group(&mut self, name: &str) -> usize {
        let name = if name.trim().is_empty() { DEFAULT_GROUP_NAME } else { name };

        let index = match self.group_index(name) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(name));
                self.groups.len() - 1
            }
        };
        self.current_group = Some(index);
        index
    }

    /// 向当前组追加一个面
    ///
    /// 没有声明过任何组时，先惰性创建 `"default"` 组。
    /// 面必须至少有 3 个顶点引用，每个角都要有位置索引，
    /// 且所有索引都必须落在当前属性池范围内；否则拒绝并保持网格不变。
    pub fn add_face(&mut self, face: Face) -> Result<(), RecordError> {
        self.validate_face(&face)?;

        let index = match self.current_group {
            Some(index) => index,
            None => self.add_group(DEFAULT_GROUP_NAME),
        };
        self.groups[index].faces.push(face);
        Ok(())
    }

    fn validate_face(&self, face: &Face) -> Result<(), RecordError> {
        if face.len() < 3 {
            return Err(RecordError::TooFewVertices { found: face.len() });
        }

        for (corner, vertex) in face.vertices.iter().enumerate() {
            let VertexRef { position, uv, normal } = *vertex;
            let position = position.ok_or(RecordError::MissingPositionIndex { corner })?;

            check_index(AttributeKind::Position, position, self.positions.len())?;
            if let Some(uv) = uv {
                check_index(AttributeKind::TexCoord, uv, self.uvs.len())?;
            }
            if let Some(normal) = normal {
                check_index(AttributeKind::Normal, normal, self.normals.len())?;
            }
        }

        Ok(())
    }

    #[inline]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// 按索引获取组
    #[inline]
    pub fn group(&self, index: usize) -> Option<&Group> {
        self.groups.get(index)
    }

    /// 按名称查找组索引
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    /// 当前组索引
    #[inline]
    pub fn current_group(&self) -> Option<usize> {
        self.current_group
    }

    /// 所有组的面总数
    pub fn face_count(&self) -> usize {
        self.groups.iter().map(Group::face_count).sum()
    }

    /// 指定组的面数量
    pub fn face_count_in_group(&self, index: usize) -> Option<usize> {
        self.groups.get(index).map(Group::face_count)
    }

    /// 没有任何属性和面
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.normals.is_empty()
            && self.uvs.is_empty()
            && self.face_count() == 0
    }

    /// 清空属性池和所有组的面，保留组本身
    ///
    /// 加载状态重置为 `Ready`，之前失败的网格可以重新手工填充并导出。
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.uvs.clear();

        for group in &mut self.groups {
            group.faces.clear();
        }
        self.state = LoadState::Ready;
    }

    // ------------------------------------------------------------------
    // 加载状态
    // ------------------------------------------------------------------

    #[inline]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    pub(crate) fn set_state(&mut self, state: LoadState) {
        self.state = state;
    }

    // ------------------------------------------------------------------
    // 拓扑处理与导出
    // ------------------------------------------------------------------

    /// 将所有四边形拆分为两个三角形，返回拆分的四边形数量
    ///
    /// 见 [`processing::tessellate_quads`]。
    pub fn tessellate_quads(&mut self) -> usize {
        processing::tessellate_quads(&mut self.groups)
    }

    /// 计算所有三角形面的法线，返回计算的面数量
    ///
    /// 见 [`processing::compute_face_normals`]。
    pub fn compute_face_normals(&mut self) -> usize {
        processing::compute_face_normals(&self.positions, &mut self.groups)
    }

    /// 导出指定组为非索引顶点缓冲区
    pub fn export_group(&self, index: usize, options: &ExportOptions) -> Result<MeshBuffer, ExportError> {
        export::export_group(self, index, options)
    }

    /// 按声明顺序导出所有组
    pub fn export_all(&self, options: &ExportOptions) -> Result<Vec<MeshBuffer>, ExportError> {
        if !self.is_ready() {
            return Err(ExportError::NotReady);
        }
        (0..self.groups.len())
            .map(|index| self.export_group(index, options))
            .collect()
    }

    /// 记录网格统计信息
    pub fn log_summary(&self) {
        tracing::info!(
            vertices = self.positions.len(),
            normals = self.normals.len(),
            uvs = self.uvs.len(),
            faces = self.face_count(),
            groups = self.groups.len(),
            "OBJ 网格统计"
        );
        for (index, group) in self.groups.iter().enumerate() {
            tracing::info!(index, name = %group.name, faces = group.face_count(), "  组");
        }
    }
}

fn check_index(attribute: AttributeKind, index: u32, len: usize) -> Result<(), RecordError> {
    let index = index as usize;
    if index < len {
        Ok(())
    } else {
        Err(RecordError::IndexOutOfRange { attribute, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> ObjMesh {
        let mut mesh = ObjMesh::new();
        mesh.add_position(Vector3::new(0.0, 0.0, 0.0));
        mesh.add_position(Vector3::new(1.0, 0.0, 0.0));
        mesh.add_position(Vector3::new(0.0, 1.0, 0.0));
        mesh
    }

    fn tri(a: u32, b: u32, c: u32) -> Face {
        Face::new(vec![
            VertexRef::position_only(a),
            VertexRef::position_only(b),
            VertexRef::position_only(c),
        ])
    }

    #[test]
    fn test_new_mesh_is_empty_and_ready() {
        let mesh = ObjMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.is_ready());
        assert!(mesh.groups().is_empty());
        assert_eq!(mesh.current_group(), None);
    }

    #[test]
    fn test_default_group_created_lazily() {
        let mut mesh = triangle_mesh();
        assert!(mesh.groups().is_empty());

        mesh.add_face(tri(0, 1, 2)).unwrap();

        assert_eq!(mesh.groups().len(), 1);
        assert_eq!(mesh.groups()[0].name, DEFAULT_GROUP_NAME);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_faces_go_to_current_group() {
        let mut mesh = triangle_mesh();
        mesh.add_group("left");
        mesh.add_face(tri(0, 1, 2)).unwrap();
        mesh.add_group("right");
        mesh.add_face(tri(2, 1, 0)).unwrap();
        mesh.add_face(tri(0, 2, 1)).unwrap();

        assert_eq!(mesh.face_count_in_group(0), Some(1));
        assert_eq!(mesh.face_count_in_group(1), Some(2));
        assert_eq!(mesh.face_count_in_group(2), None);
        assert_eq!(mesh.face_count(), 3);
    }

    #[test]
    fn test_redeclared_group_is_reused() {
        let mut mesh = triangle_mesh();
        assert_eq!(mesh.add_group("a"), 0);
        assert_eq!(mesh.add_group("b"), 1);
        assert_eq!(mesh.add_group("a"), 0);
        mesh.add_face(tri(0, 1, 2)).unwrap();

        assert_eq!(mesh.groups().len(), 2);
        assert_eq!(mesh.face_count_in_group(0), Some(1));
        assert_eq!(mesh.group_index("b"), Some(1));
    }

    #[test]
    fn test_empty_group_name_maps_to_default() {
        let mut mesh = ObjMesh::new();
        mesh.add_group("");
        assert_eq!(mesh.groups()[0].name, DEFAULT_GROUP_NAME);
    }

    #[test]
    fn test_too_few_vertices_rejected() {
        let mut mesh = triangle_mesh();
        let face = Face::new(vec![VertexRef::position_only(0); 2]);

        assert_eq!(mesh.add_face(face), Err(RecordError::TooFewVertices { found: 2 }));
        assert!(mesh.groups().is_empty());
    }

    #[test]
    fn test_duplicate_references_are_legal() {
        let mut mesh = triangle_mesh();
        assert!(mesh.add_face(tri(0, 0, 0)).is_ok());
    }

    #[test]
    fn test_out_of_range_references_rejected() {
        let mut mesh = triangle_mesh();

        let err = mesh.add_face(tri(0, 1, 5)).unwrap_err();
        assert_eq!(
            err,
            RecordError::IndexOutOfRange { attribute: AttributeKind::Position, index: 5, len: 3 }
        );

        let face = Face::new(vec![VertexRef::new(Some(0), None, Some(0)); 3]);
        let err = mesh.add_face(face).unwrap_err();
        assert_eq!(
            err,
            RecordError::IndexOutOfRange { attribute: AttributeKind::Normal, index: 0, len: 0 }
        );
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_missing_position_rejected() {
        let mut mesh = triangle_mesh();
        mesh.add_uv(Vector2::new(0.0, 0.0));
        let face = Face::new(vec![
            VertexRef::position_only(0),
            VertexRef::new(None, Some(0), None),
            VertexRef::position_only(2),
        ]);

        assert_eq!(mesh.add_face(face), Err(RecordError::MissingPositionIndex { corner: 1 }));
    }

    #[test]
    fn test_clear_keeps_groups() {
        let mut mesh = triangle_mesh();
        mesh.add_normal(Vector3::new(0.0, 0.0, 1.0));
        mesh.add_group("g");
        mesh.add_face(tri(0, 1, 2)).unwrap();

        mesh.clear();

        assert!(mesh.is_empty());
        assert_eq!(mesh.groups().len(), 1);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_clear_resets_failed_state() {
        let mut mesh = triangle_mesh();
        mesh.set_state(LoadState::Failed);
        assert!(mesh.export_all(&ExportOptions::default()).is_err());

        mesh.clear();
        assert_eq!(mesh.state(), LoadState::Ready);

        mesh.add_position(Vector3::new(0.0, 0.0, 0.0));
        mesh.add_position(Vector3::new(1.0, 0.0, 0.0));
        mesh.add_position(Vector3::new(0.0, 1.0, 0.0));
        mesh.add_face(tri(0, 1, 2)).unwrap();

        let buffers = mesh.export_all(&ExportOptions::default()).unwrap();
        assert_eq!(buffers.len(), 1);
        assert_eq!(buffers[0].vertex_count, 3);
    }
}
