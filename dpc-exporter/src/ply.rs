use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dpc_core::pointcloud::point::PointCloud;

/// Writes a point cloud as an ASCII PLY file, vertices only. Used as a
/// single-frame debug artifact next to the animated export.
pub fn write_ascii_ply(path: &Path, cloud: &PointCloud) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", cloud.len())?;
    writeln!(writer, "property float x")?;
    writeln!(writer, "property float y")?;
    writeln!(writer, "property float z")?;
    writeln!(writer, "end_header")?;

    for point in cloud.iter() {
        writeln!(writer, "{} {} {}", point.x, point.y, point.z)?;
    }

    writer.flush()
}
