use plyreader_mesh::{Face, Vector3};
use plyreader_ply::{parse_lines, parse_ply, read_ply, PlyError};
use plyreader_test_data::{PLY_CUBE, PLY_TRIANGLE};

const HEADER: &str = "ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
element face 1
property list uchar int vertex_indices
end_header
";

fn parse_str(s: &str) -> Result<plyreader_mesh::Mesh, PlyError> {
    parse_ply(s.as_bytes())
}

#[test]
fn parse_triangle() {
    let mesh = parse_ply(PLY_TRIANGLE.bytes).unwrap();
    assert_eq!(PLY_TRIANGLE.vertex_count, mesh.vertices().len());
    assert_eq!(PLY_TRIANGLE.face_count, mesh.faces().len());
    assert_eq!(
        &[
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ],
        mesh.vertices()
    );
    assert_eq!(&[Face::new(0, 1, 2)], mesh.faces());
}

#[test]
fn parse_cube() {
    let mesh = parse_ply(PLY_CUBE.bytes).unwrap();
    assert_eq!(PLY_CUBE.vertex_count, mesh.vertex_count());
    assert_eq!(PLY_CUBE.face_count, mesh.face_count());
}

#[test]
fn read_from_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("res/cube/cube.ply");
    let mesh = read_ply(path).expect("failed to read PLY file");
    assert_eq!(PLY_CUBE.face_count, mesh.face_count());
}

#[test]
fn read_missing_file() {
    assert!(matches!(
        read_ply("does/not/exist.ply"),
        Err(PlyError::Io(_))
    ));
}

#[test]
fn parse_twice() {
    let a = parse_ply(PLY_CUBE.bytes).unwrap();
    let b = parse_ply(PLY_CUBE.bytes).unwrap();
    assert_eq!(a, b);
}

#[test]
fn parse_crlf() {
    let data = PLY_TRIANGLE.bytes.iter().fold(Vec::new(), |mut out, b| {
        if *b == b'\n' {
            out.push(b'\r');
        }
        out.push(*b);
        out
    });
    assert_eq!(
        parse_ply(PLY_TRIANGLE.bytes).unwrap(),
        parse_ply(&data).unwrap()
    );
}

#[test]
fn parse_from_line_iterator() {
    let lines = HEADER
        .lines()
        .chain(["0 0 0", "1 0 0", "0 1 0", "3 2 1 0"])
        .map(|l| Ok::<_, std::io::Error>(l.to_string()));
    let mesh = parse_lines(lines).unwrap();
    assert_eq!(&[Face::new(2, 1, 0)], mesh.faces());
}

#[test]
fn empty_elements() {
    let mesh = parse_str(
        "ply\nformat ascii 1.0\nelement vertex 0\nproperty float x\nelement face 0\nend_header\n",
    )
    .unwrap();
    assert!(mesh.vertices().is_empty());
    assert!(mesh.faces().is_empty());

    let mesh = parse_str(
        "ply\nelement vertex 2\nelement face 0\nend_header\n1 2 3\n4 5 6\n",
    )
    .unwrap();
    assert_eq!(2, mesh.vertex_count());
    assert!(mesh.faces().is_empty());

    // Faces without vertices are stored as-is; the indices only fail when resolved.
    let mesh = parse_str("ply\nelement vertex 0\nelement face 1\nend_header\n3 0 1 2\n").unwrap();
    assert_eq!(&[Face::new(0, 1, 2)], mesh.faces());
    assert!(mesh.triangle(0).is_err());
}

#[test]
fn trailing_lines_are_not_read() {
    let data = format!("{HEADER}0 0 0\n1 0 0\n0 1 0\n3 0 1 2\nnot a record\n");
    assert_eq!(1, parse_str(&data).unwrap().face_count());
}

#[test]
fn missing_ply_magic() {
    assert!(matches!(
        parse_str("format ascii 1.0\nelement vertex 0\n"),
        Err(PlyError::InvalidSequence)
    ));
}

#[test]
fn repeated_ply_magic() {
    assert!(matches!(
        parse_str("ply\nply\n"),
        Err(PlyError::InvalidHeader)
    ));
}

#[test]
fn element_without_count() {
    assert!(matches!(
        parse_str("ply\nformat ascii 1.0\nelement vertex\n"),
        Err(PlyError::InvalidElement)
    ));
}

#[test]
fn element_with_bad_count() {
    assert!(matches!(
        parse_str("ply\nformat ascii 1.0\nelement vertex abc\n"),
        Err(PlyError::InvalidElementCount)
    ));
}

#[test]
fn comment_after_element() {
    assert!(matches!(
        parse_str("ply\nelement vertex 3\ncomment too late\n"),
        Err(PlyError::InvalidSequence)
    ));
}

#[test]
fn bad_vertex_record() {
    let data = format!("{HEADER}0 0 0\n1 0\n");
    assert!(matches!(parse_str(&data), Err(PlyError::InvalidSequence)));

    let data = format!("{HEADER}0 0 0\n1 x 0\n");
    assert!(matches!(parse_str(&data), Err(PlyError::InvalidSequence)));
}

#[test]
fn bad_face_record() {
    let data = format!("{HEADER}0 0 0\n1 0 0\n0 1 0\n3 0 1\n");
    assert!(matches!(parse_str(&data), Err(PlyError::InvalidSequence)));
}

#[test]
fn empty_input() {
    assert!(matches!(parse_str(""), Err(PlyError::IncompleteHeader)));
}

#[test]
fn header_without_face_element() {
    assert!(matches!(
        parse_str("ply\nformat ascii 1.0\nelement vertex 3\nproperty float x\n"),
        Err(PlyError::IncompleteHeader)
    ));
}

#[test]
fn truncated_vertices() {
    let data = format!("{HEADER}0 0 0\n1 0 0\n");
    assert!(matches!(
        parse_str(&data),
        Err(PlyError::UnexpectedEof {
            expected: 4,
            found: 2
        })
    ));
}

#[test]
fn truncated_faces() {
    let data = HEADER.replace("element face 1", "element face 2") + "0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n";
    assert!(matches!(
        parse_str(&data),
        Err(PlyError::UnexpectedEof {
            expected: 5,
            found: 4
        })
    ));
}

#[test]
fn large_count_without_records() {
    // 100M vertices is 1.2GB once written. Only the reservation is made, so the parse
    // ends at the missing records instead of touching that memory.
    let started = std::time::Instant::now();
    assert!(matches!(
        parse_str("ply\nelement vertex 100000000\nelement face 0\nend_header\n"),
        Err(PlyError::UnexpectedEof {
            expected: 100_000_000,
            found: 0
        })
    ));
    assert!(started.elapsed() < std::time::Duration::from_secs(1));
}

#[test]
fn oversized_count_fails_to_allocate() {
    let data = format!(
        "ply\nformat ascii 1.0\nelement vertex {}\nelement face 1\nend_header\n",
        usize::MAX
    );
    assert!(matches!(parse_str(&data), Err(PlyError::Mesh(_))));
}

// Lines that start with no known keyword are data records even inside the header. A
// numeric line between the face declaration and `end_header` is silently taken as the
// first vertex.
#[test]
fn record_inside_header_is_accepted() {
    let data = "ply
format ascii 1.0
element vertex 1
property float x
element face 1
7 8 9
property list uchar int vertex_indices
end_header
3 0 0 0
";
    // The stray line moves the machine out of the header, so the `property` line that
    // follows it is rejected.
    assert!(matches!(parse_str(data), Err(PlyError::InvalidSequence)));

    let data = "ply
element vertex 1
element face 1
7 8 9
end_header
3 0 0 0
";
    let mesh = parse_str(data).unwrap();
    assert_eq!(&[Vector3::new(7.0, 8.0, 9.0)], mesh.vertices());
}

#[test]
fn unknown_keyword_inside_header() {
    let data = "ply
format ascii 1.0
element vertex 1
obj_info scanner
element face 0
end_header
";
    assert!(matches!(parse_str(data), Err(PlyError::InvalidSequence)));
}
