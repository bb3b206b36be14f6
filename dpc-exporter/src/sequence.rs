use std::path::Path;

use dpc_core::pointcloud::bounds::BoundingRegion;
use dpc_decoder::extract::extract_mesh;
use dpc_decoder::source::ImageSource;

use crate::error::ExportError;
use crate::ply::write_ascii_ply;
use crate::sink::{AnimatedGeometrySink, MESH_STREAM, POINTS_STREAM};

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub frames_written: usize,
    pub total_points: usize,
}

/// Drives the whole sequence through the sink: open once, one fully
/// assembled frame per source identifier in order, close exactly once
/// on every exit path. A frame that fails to load aborts the rest of
/// the sequence rather than leaving a silent gap in the animation;
/// frames already handed to the sink stay written.
pub fn export_sequence(
    sources: &[String],
    region: &BoundingRegion,
    frame_rate: u32,
    loader: &dyn ImageSource,
    sink: &mut dyn AnimatedGeometrySink,
    out_path: &str,
    debug_ply: Option<&Path>,
) -> Result<ExportSummary, ExportError> {
    if !sink.open(out_path, frame_rate) {
        sink.close();
        return Err(ExportError::SinkOpenFailed);
    }

    let mut summary = ExportSummary::default();

    for (frame, source) in sources.iter().enumerate() {
        let image = match loader.load(source) {
            Ok(image) => image,
            Err(e) => {
                sink.close();
                return Err(ExportError::FrameLoadFailed { frame, source: e });
            }
        };

        let mesh = extract_mesh(&image, region);
        log::info!(
            "frame {}: {} points retained from {}x{}",
            frame,
            mesh.cloud.len(),
            image.width(),
            image.height()
        );

        if frame == 0 {
            if let Some(ply_path) = debug_ply {
                // Side artifact only; a write failure must not abort the
                // animated export.
                if let Err(e) = write_ascii_ply(ply_path, &mesh.cloud) {
                    log::warn!("failed to write debug PLY {:?}: {}", ply_path, e);
                }
            }
        }

        sink.write_point_record(POINTS_STREAM, &mesh.cloud);
        sink.write_mesh_record(MESH_STREAM, &mesh);

        summary.frames_written += 1;
        summary.total_points += mesh.cloud.len();
    }

    sink.close();
    Ok(summary)
}
