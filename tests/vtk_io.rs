use std::path::PathBuf;

use approx::assert_relative_eq;
use vtk_oxide::prelude::*;

fn output_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vtk-oxide-{}-{}.vtk", name, std::process::id()))
}

fn assert_points_eq(actual: &[Point], expected: &[Point]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        for i in 0..3 {
            assert_relative_eq!(a[i], e[i], epsilon = 1e-12);
        }
    }
}

#[test]
fn icosphere_counts() {
    let mesh = read_vtk_mesh("tests/data/icosphere.vtk").unwrap();
    assert_eq!(mesh.get_version(), "# vtk DataFile Version 3.0");
    assert_eq!(mesh.get_encoding(), "ASCII");
    assert_eq!(mesh.num_points(), 42);
    assert_eq!(mesh.num_polygons(), 80);
    assert!(mesh.check_connectivity().is_ok());
    assert_eq!(mesh.max_point_index(), Some(41));
}

#[test]
fn icosphere_points_lie_on_the_unit_sphere() {
    let mesh = read_vtk_mesh("tests/data/icosphere.vtk").unwrap();
    for [x, y, z] in mesh.get_points() {
        let r = (x * x + y * y + z * z).sqrt();
        assert_relative_eq!(r, 1.0, epsilon = 1e-5);
    }
}

#[test]
fn mixed_faces() {
    let mesh = read_vtk_mesh("tests/data/mixed_faces.vtk").unwrap();
    assert_eq!(mesh.get_version(), "# vtk DataFile Version 2.0");
    assert_eq!(mesh.get_title(), "square pyramid");
    assert_points_eq(
        mesh.get_points(),
        &[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.5, 0.5, 1.0],
        ],
    );
    // the 4-vertex entry is dropped but still takes up one 4-integer run
    assert_eq!(mesh.get_polygons(), &[[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4]]);
}

#[test]
fn round_trip() {
    let mesh = read_vtk_mesh("tests/data/icosphere.vtk").unwrap();
    let path = output_path("round-trip");
    write_vtk_mesh(mesh.get_points(), mesh.get_polygons(), &path).unwrap();
    assert!(path.is_file());

    let read_back = read_vtk_mesh(&path).unwrap();
    assert_points_eq(read_back.get_points(), mesh.get_points());
    assert_eq!(read_back.get_polygons(), mesh.get_polygons());
    assert_eq!(read_back.get_title(), "vtk output");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn round_trip_keeps_title() {
    let mesh = read_vtk_mesh("tests/data/mixed_faces.vtk").unwrap();
    let path = output_path("keeps-title");
    write_mesh(&mesh, &path).unwrap();

    let read_back = read_vtk_mesh(&path).unwrap();
    assert_eq!(read_back.get_title(), "square pyramid");
    assert_eq!(read_back.get_version(), "# vtk DataFile Version 3.0");
    assert_eq!(read_back.num_polygons(), 4);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn round_trip_f32() {
    let points: Vec<[f32; 3]> = vec![
        [0.1, -0.2, 0.3],
        [1.0e-7, 3.5e8, -0.0],
        [123.456, 0.0, 1.0],
    ];
    let triangles = vec![[0, 1, 2]];
    let path = output_path("f32");
    write_vtk_mesh(&points, &triangles, &path).unwrap();

    let read_back = read_vtk_mesh(&path).unwrap();
    assert_eq!(read_back.num_points(), 3);
    for (a, e) in read_back.get_points().iter().zip(&points) {
        for i in 0..3 {
            assert_eq!(a[i] as f32, e[i]);
        }
    }
    assert_eq!(read_back.get_polygons(), &[[0, 1, 2]]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn rebuild_filtered_mesh() {
    let mesh = read_vtk_mesh("tests/data/icosphere.vtk").unwrap();
    let (points, triangles) = mesh.into_parts();
    // keep the northern hemisphere faces only
    let kept = triangles.into_iter()
        .filter(|face| face.iter().all(|&i| points[i][1] >= 0.0))
        .collect::<Vec<_>>();
    assert!(!kept.is_empty());

    let path = output_path("filtered");
    write_vtk_mesh(&points, &kept, &path).unwrap();
    let read_back = read_vtk_mesh(&path).unwrap();
    assert_eq!(read_back.num_points(), 42);
    assert_eq!(read_back.get_polygons(), kept.as_slice());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn writer_overwrites() {
    let path = output_path("overwrite");
    std::fs::write(&path, "not a mesh at all\n".repeat(100)).unwrap();
    write_vtk_mesh(&[[1.0, 2.0, 3.0]], &[], &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("# vtk DataFile Version 3.0\n"));
    assert!(!text.contains("not a mesh"));
    let mesh = read_vtk_mesh(&path).unwrap();
    assert_eq!(mesh.get_points(), &[[1.0, 2.0, 3.0]]);
    assert!(mesh.get_polygons().is_empty());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn obj_to_vtk() {
    let mesh = vtk_oxide::io::obj::load_obj("tests/data/cube.obj").unwrap();
    let path = output_path("cube");
    write_mesh(&mesh, &path).unwrap();

    let read_back = read_vtk_mesh(&path).unwrap();
    assert_eq!(read_back.num_points(), 8);
    assert_eq!(read_back.num_polygons(), 12);
    assert_eq!(read_back.get_polygons(), mesh.get_polygons());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn strict_reading() {
    let cfg = decode::Config::from_json(
        r#"{ "encoding": "reject", "duplicate_sections": "reject", "short_blocks": "reject" }"#
    ).unwrap();
    let mesh = read_vtk_mesh_with_config("tests/data/icosphere.vtk", &cfg).unwrap();
    assert_eq!(mesh.num_points(), 42);
}
