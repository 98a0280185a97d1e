/// 面记录解析（`f`）

use crate::core::error::RecordError;
use crate::geometry::parser::line::Tokenizer;
use crate::geometry::topology::{Face, VertexRef};

/// 解析 `f` 记录的字段（已去掉关键字），每个字段对应多边形的一个角
///
/// 字段按 `/` 切分为 1 到 3 个分量，依次为位置、UV、法线索引。
/// 空分量表示该槽位缺失。文件中的一基索引在这里转换为零基索引。
///
/// 不支持相对（负数）索引，`0` 也不是合法索引，两者都报 `InvalidIndexFormat`。
/// 索引是否落在属性池范围内由 [`ObjMesh::add_face`](crate::geometry::mesh::ObjMesh::add_face) 检查。
pub fn parse_face(tokens: &[&str]) -> Result<Face, RecordError> {
    let splitter = Tokenizer::face_components();
    let mut vertices = Vec::with_capacity(tokens.len());

    for token in tokens {
        let components = splitter.split(token);
        if components.is_empty() || components.len() > 3 {
            return Err(invalid(token));
        }

        let mut slots = [None; 3];
        for (slot, component) in slots.iter_mut().zip(&components) {
            if !component.is_empty() {
                *slot = Some(parse_index(component).ok_or_else(|| invalid(component))?);
            }
        }

        vertices.push(VertexRef::new(slots[0], slots[1], slots[2]));
    }

    if vertices.len() < 3 {
        return Err(RecordError::TooFewVertices { found: vertices.len() });
    }

    Ok(Face::from(vertices))
}

/// 一基索引 → 零基索引
fn parse_index(component: &str) -> Option<u32> {
    let one_based: u32 = component.parse().ok()?;
    one_based.checked_sub(1)
}

fn invalid(token: &str) -> RecordError {
    RecordError::InvalidIndexFormat { token: token.to_string() }
}
