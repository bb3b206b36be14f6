use dpc_core::pointcloud::{
    bounds::BoundingRegion,
    mesh::FrameMesh,
    point::{Point3, PointCloud},
};

use crate::codec::unpack_channels;
use crate::raster::RasterImage;

/// Horizontal distance between candidate groups. Each group is four
/// pixels wide but only the first three carry coordinates; the fourth
/// is padding from the encoder and must stay untouched.
pub const GROUP_STRIDE: u32 = 4;

/// Scans the raster in encoder order (column groups outer, rows inner),
/// decodes each group into a candidate point and keeps the ones inside
/// the region. Never fails: an image too narrow for a single group
/// yields an empty cloud.
pub fn extract_points(image: &RasterImage, region: &BoundingRegion) -> PointCloud {
    let mut points = Vec::new();

    let mut i = 0;
    // The x/y/z pixels at i, i+1, i+2 must all be in range.
    while i + 2 < image.width() {
        for j in 0..image.height() {
            let x = unpack_channels(image.pixel(i, j));
            let y = unpack_channels(image.pixel(i + 1, j));
            let z = unpack_channels(image.pixel(i + 2, j));

            let point = Point3::new(x, y, z);
            if region.contains(&point) {
                points.push(point);
            }
        }
        i += GROUP_STRIDE;
    }

    PointCloud::new(points)
}

/// Extraction plus the sink-compatibility attributes: placeholder
/// texture coordinates and the consecutive-triple triangulation.
pub fn extract_mesh(image: &RasterImage, region: &BoundingRegion) -> FrameMesh {
    FrameMesh::from_cloud(extract_points(image, region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pack_channels;
    use dpc_core::pointcloud::bounds::AxisInterval;

    fn region() -> BoundingRegion {
        BoundingRegion::new(
            AxisInterval::new(-0.75, 0.75),
            AxisInterval::new(-0.9, 0.75),
            AxisInterval::new(1.0, 2.25),
        )
    }

    /// One row, `groups.len()` four-pixel groups, each group encoding
    /// one (x, y, z) with an opaque padding pixel.
    fn encode_row(groups: &[(f32, f32, f32)]) -> RasterImage {
        let mut pixels = Vec::new();
        for &(x, y, z) in groups {
            pixels.extend_from_slice(&pack_channels(x));
            pixels.extend_from_slice(&pack_channels(y));
            pixels.extend_from_slice(&pack_channels(z));
            pixels.extend_from_slice(&[0xff; 4]);
        }
        RasterImage::from_rgba8(groups.len() as u32 * 4, 1, pixels).unwrap()
    }

    #[test]
    fn in_bounds_group_is_kept_and_out_of_bounds_dropped() {
        let image = encode_row(&[(0.0, 0.0, 1.5), (10.0, 10.0, 10.0)]);
        let cloud = extract_points(&image, &region());
        assert_eq!(cloud.points, vec![Point3::new(0.0, 0.0, 1.5)]);
    }

    #[test]
    fn padding_pixel_is_never_decoded() {
        // Garbage in the fourth pixel must not affect the result.
        let mut image = encode_row(&[(0.5, 0.5, 2.0)]);
        let clean = extract_points(&image, &region());
        image = {
            let mut pixels = Vec::new();
            pixels.extend_from_slice(&pack_channels(0.5));
            pixels.extend_from_slice(&pack_channels(0.5));
            pixels.extend_from_slice(&pack_channels(2.0));
            pixels.extend_from_slice(&pack_channels(f32::NAN));
            RasterImage::from_rgba8(4, 1, pixels).unwrap()
        };
        assert_eq!(extract_points(&image, &region()).points, clean.points);
    }

    #[test]
    fn scan_order_is_column_group_then_row() {
        // Two rows, two groups. Encoder order visits group 0 rows 0..h
        // before group 1.
        let g = |x: f32| (x, 0.0, 1.5f32);
        let row0 = [g(0.1), g(0.3)];
        let row1 = [g(0.2), g(0.4)];
        let mut pixels = Vec::new();
        for row in [row0, row1] {
            for (x, y, z) in row {
                pixels.extend_from_slice(&pack_channels(x));
                pixels.extend_from_slice(&pack_channels(y));
                pixels.extend_from_slice(&pack_channels(z));
                pixels.extend_from_slice(&[0; 4]);
            }
        }
        let image = RasterImage::from_rgba8(8, 2, pixels).unwrap();
        let xs: Vec<f32> = extract_points(&image, &region())
            .iter()
            .map(|p| p.x)
            .collect();
        assert_eq!(xs, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let image = encode_row(&[(0.0, 0.0, 1.5), (0.1, 0.1, 2.0), (9.0, 9.0, 9.0)]);
        let first = extract_points(&image, &region());
        let second = extract_points(&image, &region());
        assert_eq!(first.points, second.points);
    }

    #[test]
    fn images_too_narrow_for_a_group_yield_empty_cloud() {
        for width in 0..3u32 {
            let image =
                RasterImage::from_rgba8(width, 2, vec![0; width as usize * 8]).unwrap();
            assert!(extract_points(&image, &region()).is_empty());
        }
    }

    #[test]
    fn trailing_partial_group_is_skipped() {
        // Width 6: one full group at i=0, then i=4 would need column 6.
        let mut pixels = Vec::new();
        pixels.extend_from_slice(&pack_channels(0.0));
        pixels.extend_from_slice(&pack_channels(0.0));
        pixels.extend_from_slice(&pack_channels(1.5));
        pixels.extend_from_slice(&[0; 4]);
        pixels.extend_from_slice(&pack_channels(0.0));
        pixels.extend_from_slice(&pack_channels(0.0));
        let image = RasterImage::from_rgba8(6, 1, pixels).unwrap();
        let cloud = extract_points(&image, &region());
        assert_eq!(cloud.len(), 1);
    }

    #[test]
    fn nan_candidates_are_filtered_not_propagated() {
        let image = encode_row(&[(f32::NAN, 0.0, 1.5)]);
        assert!(extract_points(&image, &region()).is_empty());
    }

    #[test]
    fn mesh_variant_carries_parallel_attributes() {
        let image = encode_row(&[
            (0.0, 0.0, 1.5),
            (0.1, 0.0, 1.5),
            (0.2, 0.0, 1.5),
            (0.3, 0.0, 1.5),
        ]);
        let mesh = extract_mesh(&image, &region());
        assert_eq!(mesh.cloud.len(), 4);
        assert_eq!(mesh.tex_coords.len(), 4);
        assert_eq!(mesh.triangles.len(), 2);
    }
}
