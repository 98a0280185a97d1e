/// 顶点缓冲区导出模块
///
/// 把一个组的索引拓扑展开为非索引的扁平属性数组，交给外部渲染层上传。
/// 共享顶点在每个面中都会复制一份，不生成索引缓冲区。
///
/// # 数据流
///
/// ```text
/// ObjMesh (组 i，全部为三角形)
///     ↓ export_group
/// MeshBuffer { positions, normals?, uvs? }
///     ↓ attributes() / interleaved()
/// 渲染层（不在本库范围内）
/// ```

use serde::{Deserialize, Serialize};

use crate::core::error::{AttributeKind, ExportError};
use crate::core::math::Vector3;
use crate::geometry::mesh::ObjMesh;
use crate::geometry::processing::face_normal;

/// 导出法线的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalSource {
    /// 使用面顶点引用的法线（平滑光照）
    #[default]
    Vertex,
    /// 三个角都使用面法线（平面光照）
    ///
    /// 面上已有计算好的法线时直接使用，否则在导出时临时计算，网格本身不被修改。
    Face,
}

/// 导出选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub normal_source: NormalSource,
}

impl ExportOptions {
    /// 平滑光照：使用顶点法线
    pub fn smooth() -> Self {
        Self { normal_source: NormalSource::Vertex }
    }

    /// 平面光照：使用面法线
    pub fn flat() -> Self {
        Self { normal_source: NormalSource::Face }
    }
}

/// 属性布局，由属性池是否为空决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeLayout {
    Position,
    PositionNormal,
    PositionUv,
    PositionNormalUv,
}

impl AttributeLayout {
    pub fn from_presence(has_normals: bool, has_uvs: bool) -> Self {
        match (has_normals, has_uvs) {
            (false, false) => AttributeLayout::Position,
            (true, false) => AttributeLayout::PositionNormal,
            (false, true) => AttributeLayout::PositionUv,
            (true, true) => AttributeLayout::PositionNormalUv,
        }
    }

    /// 每个属性的分量数，按 位置、法线、UV 的顺序
    pub fn arities(&self) -> &'static [u32] {
        match self {
            AttributeLayout::Position => &[3],
            AttributeLayout::PositionNormal => &[3, 3],
            AttributeLayout::PositionUv => &[3, 2],
            AttributeLayout::PositionNormalUv => &[3, 3, 2],
        }
    }

    #[inline]
    pub fn has_normals(&self) -> bool {
        matches!(self, AttributeLayout::PositionNormal | AttributeLayout::PositionNormalUv)
    }

    #[inline]
    pub fn has_uvs(&self) -> bool {
        matches!(self, AttributeLayout::PositionUv | AttributeLayout::PositionNormalUv)
    }

    /// 交错布局下每个顶点的浮点数个数
    pub fn stride(&self) -> usize {
        self.arities().iter().map(|&a| a as usize).sum()
    }
}

/// 一个顶点属性的视图：分量数 + 扁平数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexAttribute<'a> {
    pub arity: u32,
    pub data: &'a [f32],
}

impl<'a> VertexAttribute<'a> {
    /// 原始字节，用于上传到 GPU 缓冲区
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.data)
    }
}

/// 非索引的顶点属性缓冲区
///
/// 拥有自己的存储，与产生它的 [`ObjMesh`] 无生命周期关联。
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    /// 来源组名
    pub name: String,

    /// 属性布局
    pub layout: AttributeLayout,

    /// 位置，每顶点 3 个分量
    pub positions: Vec<f32>,

    /// 法线，每顶点 3 个分量；法线池为空时为 `None`
    pub normals: Option<Vec<f32>>,

    /// 纹理坐标，每顶点 2 个分量；UV 池为空时为 `None`
    pub uvs: Option<Vec<f32>>,

    /// 顶点数（三角形数 * 3）
    pub vertex_count: usize,

    /// 绘制元素数，非索引绘制时等于顶点数
    pub element_count: usize,
}

impl MeshBuffer {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count / 3
    }

    /// 按布局顺序列出所有属性
    pub fn attributes(&self) -> Vec<VertexAttribute<'_>> {
        let mut attributes = vec![VertexAttribute { arity: 3, data: &self.positions }];
        if let Some(normals) = &self.normals {
            attributes.push(VertexAttribute { arity: 3, data: normals });
        }
        if let Some(uvs) = &self.uvs {
            attributes.push(VertexAttribute { arity: 2, data: uvs });
        }
        attributes
    }

    /// 交错为单个数组：每个顶点依次写入 位置、法线、UV
    pub fn interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertex_count * self.layout.stride());

        for i in 0..self.vertex_count {
            out.extend_from_slice(&self.positions[i * 3..i * 3 + 3]);
            if let Some(normals) = &self.normals {
                out.extend_from_slice(&normals[i * 3..i * 3 + 3]);
            }
            if let Some(uvs) = &self.uvs {
                out.extend_from_slice(&uvs[i * 2..i * 2 + 2]);
            }
        }

        out
    }
}

/// 导出指定组
///
/// 要求组内所有面都是三角形（先调用 `tessellate_quads`），否则返回
/// [`ExportError::NonTriangularFace`]。输出按 面、面内顶点 的顺序排列。
pub fn export_group(mesh: &ObjMesh, index: usize, options: &ExportOptions) -> Result<MeshBuffer, ExportError> {
    if !mesh.is_ready() {
        return Err(ExportError::NotReady);
    }

    let group = mesh.group(index).ok_or(ExportError::InvalidGroupIndex {
        index,
        group_count: mesh.groups().len(),
    })?;

    let layout = AttributeLayout::from_presence(mesh.has_normals(), mesh.has_uvs());
    let vertex_count = 3 * group.face_count();

    let mut positions = Vec::with_capacity(3 * vertex_count);
    let mut normals = layout.has_normals().then(|| Vec::with_capacity(3 * vertex_count));
    let mut uvs = layout.has_uvs().then(|| Vec::with_capacity(2 * vertex_count));

    for (face_index, face) in group.faces.iter().enumerate() {
        if !face.is_triangle() {
            return Err(ExportError::NonTriangularFace {
                face: face_index,
                vertex_count: face.len(),
            });
        }

        let flat_normal = match (&normals, options.normal_source) {
            (Some(_), NormalSource::Face) => Some(
                face.normal
                    .or_else(|| face_normal(mesh.positions(), face))
                    .unwrap_or_else(Vector3::zeros),
            ),
            _ => None,
        };

        for (corner, vertex) in face.vertices.iter().enumerate() {
            let missing = |attribute| ExportError::MissingAttributeIndex {
                face: face_index,
                corner,
                attribute,
            };

            let p = vertex.position.ok_or_else(|| missing(AttributeKind::Position))?;
            positions.extend_from_slice(mesh.positions()[p as usize].as_slice());

            if let Some(normals) = normals.as_mut() {
                let n = match flat_normal {
                    Some(n) => n,
                    None => {
                        let i = vertex.normal.ok_or_else(|| missing(AttributeKind::Normal))?;
                        mesh.normals()[i as usize]
                    }
                };
                normals.extend_from_slice(n.as_slice());
            }

            if let Some(uvs) = uvs.as_mut() {
                let i = vertex.uv.ok_or_else(|| missing(AttributeKind::TexCoord))?;
                uvs.extend_from_slice(mesh.uvs()[i as usize].as_slice());
            }
        }
    }

    tracing::debug!(
        group = %group.name,
        vertices = vertex_count,
        layout = ?layout,
        "组导出完成"
    );

    Ok(MeshBuffer {
        name: group.name.clone(),
        layout,
        positions,
        normals,
        uvs,
        vertex_count,
        element_count: vertex_count,
    })
}
