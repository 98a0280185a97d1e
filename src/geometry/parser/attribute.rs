/// 属性记录解析（`v` / `vn` / `vt`）

use crate::core::error::RecordError;
use crate::core::math::{Vector2, Vector3};

/// 解析 `v` 或 `vn` 记录的字段（已去掉关键字）
///
/// 接受 3 或 4 个分量。第 4 个分量（齐次坐标 w）会被校验为合法数字，
/// 但不会保存：属性池只存储 xyz。
pub fn parse_vec3(keyword: &'static str, tokens: &[&str]) -> Result<Vector3, RecordError> {
    let c = parse_components(keyword, tokens, 3, 4)?;
    Ok(Vector3::new(c[0], c[1], c[2]))
}

/// 解析 `vt` 记录的字段（已去掉关键字）
///
/// 接受 2 或 3 个分量，第 3 个分量（w）同样只校验不保存。
pub fn parse_vec2(keyword: &'static str, tokens: &[&str]) -> Result<Vector2, RecordError> {
    let c = parse_components(keyword, tokens, 2, 3)?;
    Ok(Vector2::new(c[0], c[1]))
}

fn parse_components(
    keyword: &'static str,
    tokens: &[&str],
    min: usize,
    max: usize,
) -> Result<Vec<f32>, RecordError> {
    if tokens.len() < min || tokens.len() > max {
        return Err(RecordError::InvalidArity {
            keyword,
            found: tokens.len(),
            min,
            max,
        });
    }

    tokens
        .iter()
        .map(|token| {
            token.parse::<f32>().map_err(|_| RecordError::MalformedNumber {
                token: token.to_string(),
            })
        })
        .collect()
}
