use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use glob::glob;
use log::LevelFilter;
use serde::Serialize;

use dpc_core::pointcloud::{
    bounds::BoundingRegion,
    mesh::FrameMesh,
    point::{Point3, PointCloud, TexCoord},
};
use dpc_decoder::source::FileImageSource;
use dpc_exporter::sequence::export_sequence;
use dpc_exporter::sink::AnimatedGeometrySink;

#[derive(Parser, Debug)]
#[command(
    name = "Depth Sequence Exporter",
    about = "A tool for converting float-packed RGBA image sequences into animated point cloud geometry",
    version = "0.0.1"
)]
struct Cli {
    /// Frame images or glob patterns, in playback order.
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    input: Vec<String>,

    /// Animated geometry output file.
    #[arg(short, long, required = true, value_name = "FILE")]
    output: String,

    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// JSON file with per-axis {"min","max"} intervals; defaults to the
    /// capture-rig region when omitted.
    #[arg(long, value_name = "FILE")]
    bounds: Option<String>,

    /// Optional ASCII PLY dump of the first frame's point cloud.
    #[arg(long, value_name = "FILE")]
    ply: Option<String>,
}

fn expand_globs(input_patterns: Vec<String>) -> Vec<String> {
    let mut paths = Vec::new();
    for pattern in input_patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            for entry in glob(&pattern).expect("Failed to read glob pattern") {
                match entry {
                    Ok(path) => paths.push(path.to_string_lossy().into_owned()),
                    Err(e) => eprintln!("Error: {:?}", e),
                }
            }
        } else {
            paths.push(pattern);
        }
    }
    paths
}

fn load_bounds(path: Option<&str>) -> Result<BoundingRegion, String> {
    match path {
        Some(path) => {
            let contents =
                fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
            serde_json::from_str(&contents).map_err(|e| format!("cannot parse {}: {}", path, e))
        }
        None => Ok(BoundingRegion::default()),
    }
}

#[derive(Serialize)]
struct HeaderRecord<'a> {
    record: &'a str,
    frame_rate: u32,
}

#[derive(Serialize)]
struct PointRecord<'a> {
    record: &'a str,
    stream: &'a str,
    frame: usize,
    points: &'a [Point3],
}

#[derive(Serialize)]
struct MeshRecord<'a> {
    record: &'a str,
    stream: &'a str,
    frame: usize,
    points: &'a [Point3],
    triangles: &'a [[u32; 3]],
    tex_coords: &'a [TexCoord],
}

/// Newline-delimited JSON stand-in for an animated geometry container:
/// one header record, then per frame one point record and one mesh
/// record. Keeps the binary usable end to end without pinning a
/// container byte layout.
struct JsonlGeometrySink {
    writer: Option<BufWriter<File>>,
    frame: usize,
}

impl JsonlGeometrySink {
    fn new() -> Self {
        JsonlGeometrySink {
            writer: None,
            frame: 0,
        }
    }

    fn write_line(&mut self, line: String) {
        if let Some(writer) = &mut self.writer {
            if let Err(e) = writeln!(writer, "{}", line) {
                log::error!("sink write failed: {}", e);
            }
        }
    }
}

impl AnimatedGeometrySink for JsonlGeometrySink {
    fn open(&mut self, path: &str, frame_rate: u32) -> bool {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => {
                log::error!("cannot create {}: {}", path, e);
                return false;
            }
        };
        self.writer = Some(BufWriter::new(file));
        self.frame = 0;

        let header = HeaderRecord {
            record: "header",
            frame_rate,
        };
        self.write_line(serde_json::to_string(&header).unwrap());
        true
    }

    fn write_point_record(&mut self, stream: &str, points: &PointCloud) {
        let record = PointRecord {
            record: "points",
            stream,
            frame: self.frame,
            points: &points.points,
        };
        self.write_line(serde_json::to_string(&record).unwrap());
    }

    fn write_mesh_record(&mut self, stream: &str, mesh: &FrameMesh) {
        let record = MeshRecord {
            record: "mesh",
            stream,
            frame: self.frame,
            points: &mesh.cloud.points,
            triangles: &mesh.triangles,
            tex_coords: &mesh.tex_coords,
        };
        self.write_line(serde_json::to_string(&record).unwrap());
        self.frame += 1;
    }

    fn close(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                log::error!("sink flush failed: {}", e);
            }
        }
    }
}

fn main() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    let args = Cli::parse();

    log::info!("input frames: {:?}", args.input);
    log::info!("output file: {}", args.output);
    log::info!("frame rate: {}", args.fps);

    let start = std::time::Instant::now();

    let sources = expand_globs(args.input);
    log::info!("Expanded input frames: {:?}", sources);
    if sources.is_empty() {
        log::error!("no input frames matched");
        std::process::exit(1);
    }

    let region = match load_bounds(args.bounds.as_deref()) {
        Ok(region) => region,
        Err(e) => {
            log::error!("Failed to load bounds config: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("bounding region: {:?}", region);

    let loader = FileImageSource::new();
    let mut sink = JsonlGeometrySink::new();
    let ply_path = args.ply.map(PathBuf::from);

    log::info!("start exporting {} frames...", sources.len());
    match export_sequence(
        &sources,
        &region,
        args.fps,
        &loader,
        &mut sink,
        &args.output,
        ply_path.as_deref(),
    ) {
        Ok(summary) => {
            log::info!(
                "Finish exporting: {} frames, {} points in {:?}",
                summary.frames_written,
                summary.total_points,
                start.elapsed()
            );
        }
        Err(e) => {
            log::error!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}
