use crate::pointcloud::point::{PointCloud, TexCoord};

/// Stitches consecutive retained points into overlapping index triples.
/// This exists only so sinks that refuse bare point sets accept the
/// data; it is not a surface reconstruction.
pub fn consecutive_triangles(point_count: usize) -> Vec<[u32; 3]> {
    if point_count < 3 {
        return Vec::new();
    }
    (0..point_count - 2)
        .map(|k| [k as u32, k as u32 + 1, k as u32 + 2])
        .collect()
}

/// One frame's fully assembled geometry: the retained points, the
/// compatibility triangulation, and one placeholder texture coordinate
/// per point.
#[derive(Debug, Clone, Default)]
pub struct FrameMesh {
    pub cloud: PointCloud,
    pub triangles: Vec<[u32; 3]>,
    pub tex_coords: Vec<TexCoord>,
}

impl FrameMesh {
    pub fn from_cloud(cloud: PointCloud) -> Self {
        let triangles = consecutive_triangles(cloud.len());
        let tex_coords = vec![TexCoord::zero(); cloud.len()];
        FrameMesh {
            cloud,
            triangles,
            tex_coords,
        }
    }
}
