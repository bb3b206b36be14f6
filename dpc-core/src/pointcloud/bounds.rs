use serde::{Deserialize, Serialize};

use crate::pointcloud::point::Point3;

/// Closed interval, both endpoints included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisInterval {
    pub min: f32,
    pub max: f32,
}

impl AxisInterval {
    pub fn new(min: f32, max: f32) -> Self {
        AxisInterval { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Axis-aligned region of interest, one interval per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    pub x: AxisInterval,
    pub y: AxisInterval,
    pub z: AxisInterval,
}

impl BoundingRegion {
    pub fn new(x: AxisInterval, y: AxisInterval, z: AxisInterval) -> Self {
        BoundingRegion { x, y, z }
    }

    pub fn contains(&self, point: &Point3) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y) && self.z.contains(point.z)
    }
}

impl Default for BoundingRegion {
    // Capture-rig defaults of the original depth encoder.
    fn default() -> Self {
        BoundingRegion {
            x: AxisInterval::new(-0.75, 0.75),
            y: AxisInterval::new(-0.9, 0.75),
            z: AxisInterval::new(0.0, 2.25),
        }
    }
}
