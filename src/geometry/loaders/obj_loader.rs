/// OBJ 文件加载器
///
/// 逐行读取 Wavefront OBJ 文档并填充 [`ObjMesh`]。识别的记录：
/// `v`、`vt`、`vn`、`f`、`g`；其余关键字（注释、`o`、`s`、`usemtl`、`mtllib` 等）被忽略。
use super::{LoadResult, MeshLoader};
use crate::core::error::{MeshLoadError, RecordError};
use crate::geometry::mesh::{LoadState, ObjMesh};
use crate::geometry::parser::{keyword, parse_face, parse_vec2, parse_vec3, preprocess_line, Tokenizer};
use crate::{loader_debug, loader_info, loader_warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// OBJ 格式加载器
///
/// # 失败语义
///
/// - 文件无法打开时立即返回 [`MeshLoadError::SourceUnavailable`]，网格不被触碰。
/// - 任意一行解析失败时中止整个加载，返回带行号（从 1 开始）和原始行的
///   [`MeshLoadError::MalformedDocument`]；此时网格处于 [`LoadState::Failed`]，
///   其中的部分数据不应被使用。
///
/// # 使用示例
///
/// ```rust
/// use wavefront_topo::geometry::loaders::ObjLoader;
///
/// let mesh = ObjLoader::load_from_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")?;
/// assert_eq!(mesh.face_count(), 1);
/// # Ok::<(), wavefront_topo::core::error::MeshLoadError>(())
/// ```
pub struct ObjLoader;

impl ObjLoader {
    /// 打开文件并加载到已有网格中
    ///
    /// 文件句柄在返回前（无论成功失败）被释放。
    pub fn load_into(path: &Path, mesh: &mut ObjMesh) -> LoadResult<()> {
        let file = File::open(path).map_err(|source| {
            loader_warn!(path = %path.display(), error = %source, "无法打开 OBJ 文件");
            MeshLoadError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        Self::read_into(BufReader::new(file), mesh)
    }

    /// 从任意带缓冲的输入流加载
    pub fn load_from_reader<R: BufRead>(reader: R) -> LoadResult<ObjMesh> {
        let mut mesh = ObjMesh::new();
        Self::read_into(reader, &mut mesh)?;
        Ok(mesh)
    }

    /// 从字符串加载
    pub fn load_from_str(source: &str) -> LoadResult<ObjMesh> {
        Self::load_from_reader(source.as_bytes())
    }

    /// 逐行读取输入流并填充网格，维护网格的加载状态
    pub fn read_into<R: BufRead>(reader: R, mesh: &mut ObjMesh) -> LoadResult<()> {
        mesh.set_state(LoadState::Loading);

        match parse_document(reader, mesh) {
            Ok(()) => {
                mesh.set_state(LoadState::Ready);
                loader_info!(
                    vertices = mesh.positions().len(),
                    normals = mesh.normals().len(),
                    uvs = mesh.uvs().len(),
                    faces = mesh.face_count(),
                    groups = mesh.groups().len(),
                    "成功加载 OBJ 文档"
                );
                Ok(())
            }
            Err(err) => {
                mesh.set_state(LoadState::Failed);
                loader_warn!(line = ?err.line(), error = %err, "OBJ 文档加载失败");
                Err(err)
            }
        }
    }
}

impl MeshLoader for ObjLoader {
    fn load_from_file(path: &Path) -> LoadResult<ObjMesh> {
        let mut mesh = ObjMesh::new();
        Self::load_into(path, &mut mesh)?;
        Ok(mesh)
    }

    fn load_from_memory(data: &[u8]) -> LoadResult<ObjMesh> {
        Self::load_from_reader(data)
    }

    fn supported_extensions() -> &'static [&'static str] {
        &["obj"]
    }
}

fn parse_document<R: BufRead>(reader: R, mesh: &mut ObjMesh) -> LoadResult<()> {
    let fields = Tokenizer::fields();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| MeshLoadError::ReadFailed {
            line: line_number,
            source,
        })?;

        apply_line(&line, mesh, &fields).map_err(|source| MeshLoadError::MalformedDocument {
            line: line_number,
            text: line.clone(),
            source,
        })?;
    }

    Ok(())
}

/// 处理一行：预处理、分词、按关键字分发
fn apply_line(raw: &str, mesh: &mut ObjMesh, fields: &Tokenizer<'_>) -> Result<(), RecordError> {
    let filtered = preprocess_line(raw);
    let tokens = fields.split(&filtered);

    let Some((&record, rest)) = tokens.split_first() else {
        return Ok(());
    };

    match record {
        keyword::VERTEX => {
            mesh.add_position(parse_vec3(keyword::VERTEX, rest)?);
        }
        keyword::TEXCOORD => {
            mesh.add_uv(parse_vec2(keyword::TEXCOORD, rest)?);
        }
        keyword::NORMAL => {
            mesh.add_normal(parse_vec3(keyword::NORMAL, rest)?);
        }
        keyword::FACE => {
            mesh.add_face(parse_face(rest)?)?;
        }
        keyword::GROUP => {
            let name = rest.join(" ");
            let index = mesh.add_group(&name);
            loader_debug!(group = %mesh.groups()[index].name, index, "切换到组");
        }
        // 注释、o、s、mtllib、usemtl 以及未知关键字
        _ => {}
    }

    Ok(())
}
