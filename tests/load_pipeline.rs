use approx::assert_relative_eq;
use std::path::PathBuf;
use wavefront_topo::core::config::{Config, LogLevel};
use wavefront_topo::core::error::{AttributeKind, ExportError, MeshLoadError, RecordError};
use wavefront_topo::geometry::export::{AttributeLayout, ExportOptions, NormalSource};
use wavefront_topo::geometry::loaders::{load_mesh, MeshLoader, ObjLoader};
use wavefront_topo::geometry::mesh::{LoadState, ObjMesh};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn load_cube() -> ObjMesh {
    ObjLoader::load_from_file(&data_path("cube.obj")).expect("cube.obj should load")
}

#[test]
fn cube_topology_counts() {
    let mesh = load_cube();

    assert!(mesh.is_ready());
    assert_eq!(mesh.positions().len(), 8);
    assert_eq!(mesh.uvs().len(), 4);
    assert_eq!(mesh.normals().len(), 6);
    assert_eq!(mesh.groups().len(), 2);
    assert_eq!(mesh.groups()[0].name, "sides");
    assert_eq!(mesh.groups()[1].name, "caps");
    assert_eq!(mesh.face_count_in_group(0), Some(4));
    assert_eq!(mesh.face_count_in_group(1), Some(2));
    assert!(mesh.groups().iter().flat_map(|g| &g.faces).all(|f| f.is_quad()));
}

#[test]
fn cube_tessellation_is_idempotent() {
    let mut mesh = load_cube();

    assert_eq!(mesh.tessellate_quads(), 6);
    assert_eq!(mesh.face_count(), 12);
    let snapshot: Vec<_> = mesh.groups().to_vec();

    assert_eq!(mesh.tessellate_quads(), 0);
    assert_eq!(mesh.groups(), snapshot.as_slice());
}

#[test]
fn cube_face_normals_match_declared_normals() {
    let mut mesh = load_cube();
    mesh.tessellate_quads();
    assert_eq!(mesh.compute_face_normals(), 12);

    for group in mesh.groups() {
        for face in &group.faces {
            let computed = face.normal.expect("triangle normal");
            let declared = mesh.normals()[face.vertices[0].normal.unwrap() as usize];
            assert_relative_eq!(computed, declared, epsilon = 1e-6);
        }
    }
}

#[test]
fn cube_export_smooth_and_flat_agree() {
    let mut mesh = load_cube();
    mesh.tessellate_quads();

    for index in 0..mesh.groups().len() {
        let smooth = mesh.export_group(index, &ExportOptions::smooth()).unwrap();
        let flat = mesh.export_group(index, &ExportOptions::flat()).unwrap();

        assert_eq!(smooth.positions, flat.positions);
        assert_eq!(smooth.uvs, flat.uvs);
        for (a, b) in smooth.normals.unwrap().iter().zip(flat.normals.unwrap().iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-6);
        }
    }
}

#[test]
fn cube_export_has_three_entries_per_triangle() {
    let mut mesh = load_cube();
    mesh.tessellate_quads();

    let buffer = mesh.export_group(0, &ExportOptions::default()).unwrap();
    let triangles = mesh.face_count_in_group(0).unwrap();

    assert_eq!(triangles, 8);
    assert_eq!(buffer.vertex_count, 3 * triangles);
    assert_eq!(buffer.positions.len(), 3 * buffer.vertex_count);
    assert_eq!(buffer.normals.as_ref().unwrap().len(), 3 * buffer.vertex_count);
    assert_eq!(buffer.uvs.as_ref().unwrap().len(), 2 * buffer.vertex_count);
    assert_eq!(buffer.layout, AttributeLayout::PositionNormalUv);
    assert_eq!(buffer.layout.arities(), &[3, 3, 2]);

    // 第一个三角形是前面 [5, 6, 7]
    assert_eq!(&buffer.positions[..9], &[-1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0]);
    // 拆分出的三角形 [5, 7, 8] 追加在组末尾，使用 UV 1, 3, 4
    let uvs = buffer.uvs.as_ref().unwrap();
    assert_eq!(&uvs[4 * 6..4 * 6 + 6], &[0.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
}

#[test]
fn export_rejects_out_of_range_group() {
    let mesh = load_cube();
    assert_eq!(
        mesh.export_group(2, &ExportOptions::default()),
        Err(ExportError::InvalidGroupIndex { index: 2, group_count: 2 })
    );
}

#[test]
fn export_requires_tessellation() {
    let mesh = load_cube();
    assert!(matches!(
        mesh.export_group(0, &ExportOptions::default()),
        Err(ExportError::NonTriangularFace { face: 0, vertex_count: 4 })
    ));
}

#[test]
fn malformed_file_reports_line_and_leaves_mesh_unusable() {
    let mut mesh = ObjMesh::new();
    let err = ObjLoader::load_into(&data_path("broken.obj"), &mut mesh).unwrap_err();

    match err {
        MeshLoadError::MalformedDocument { line, text, source } => {
            assert_eq!(line, 3);
            assert_eq!(text, "v 1.0 zero 0.0");
            assert_eq!(source, RecordError::MalformedNumber { token: "zero".to_string() });
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert_eq!(mesh.state(), LoadState::Failed);
    assert_eq!(mesh.export_all(&ExportOptions::default()), Err(ExportError::NotReady));
}

#[test]
fn forward_reference_is_structural_failure() {
    let err = load_mesh(&data_path("forward_ref.obj")).unwrap_err();

    assert_eq!(err.line(), Some(3));
    assert!(matches!(
        err,
        MeshLoadError::MalformedDocument {
            source: RecordError::IndexOutOfRange { attribute: AttributeKind::Position, index: 4, len: 2 },
            ..
        }
    ));
}

#[test]
fn missing_file_is_source_unavailable() {
    let mut mesh = ObjMesh::new();
    let err = ObjLoader::load_into(&data_path("does_not_exist.obj"), &mut mesh).unwrap_err();

    assert!(matches!(err, MeshLoadError::SourceUnavailable { .. }));
    assert!(mesh.is_empty());
    assert_eq!(mesh.face_count(), 0);
}

#[test]
fn config_round_trip_through_file() {
    let mut config = Config::default();
    config.load.path = data_path("cube.obj").to_string_lossy().to_string();
    config.export.group = Some(1);
    config.export.normal_source = NormalSource::Face;
    config.logging.level = LogLevel::Warn;

    let path = std::env::temp_dir().join(format!("wavefront_topo_{}.toml", std::process::id()));
    config.save_to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}
