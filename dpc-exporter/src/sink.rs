use dpc_core::pointcloud::{mesh::FrameMesh, point::PointCloud};

/// Stream carrying each frame's raw point set.
pub const POINTS_STREAM: &str = "/points";
/// Stream carrying each frame's triangulated compatibility mesh.
pub const MESH_STREAM: &str = "/mesh";

/// Call contract of the animated-geometry container writer. The
/// container's byte layout is the implementation's business; the export
/// engine only promises the call order: one successful `open`, then for
/// every frame one point record and one mesh record (same frame data on
/// both streams), then exactly one `close` — which is also issued after
/// a refused `open` so implementations can release partial state.
pub trait AnimatedGeometrySink {
    fn open(&mut self, path: &str, frame_rate: u32) -> bool;
    fn write_point_record(&mut self, stream: &str, points: &PointCloud);
    fn write_mesh_record(&mut self, stream: &str, mesh: &FrameMesh);
    fn close(&mut self);
}
