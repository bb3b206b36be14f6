use dpc_decoder::source::ImageLoadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The animated-geometry container could not be opened. Nothing was
    /// written.
    #[error("failed to open animated geometry sink")]
    SinkOpenFailed,

    /// A frame's source image could not be loaded. Every frame before
    /// `frame` was fully written and the sink was closed.
    #[error("failed to load frame {frame}: {source}")]
    FrameLoadFailed {
        frame: usize,
        #[source]
        source: ImageLoadError,
    },
}
