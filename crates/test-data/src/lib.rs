pub struct TestModel {
    pub bytes: &'static [u8],
    pub vertex_count: usize,
    pub face_count: usize,
}

pub const PLY_TRIANGLE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/triangle/triangle.ply"),
    vertex_count: 3,
    face_count: 1,
};

pub const PLY_CUBE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube.ply"),
    vertex_count: 8,
    face_count: 12,
};
