//! Column ray-marcher.
//!
//! For every sampled screen column a ray is cast from the camera across the
//! heightfield. Depth `z` starts at 1 and advances by a step that itself grows
//! by `step_growth` each iteration, so nearby terrain is sampled densely and
//! distant terrain sparsely while the total work stays bounded.
//!
//! Occlusion is a per-column horizon: samples are visited front to back and a
//! sample is painted only if it projects strictly above everything painted so
//! far in that column. Spans are drawn downward from the new top to the old
//! horizon, shifted by a per-column tilt that fakes banking.
//!
//! The marcher trusts its inputs: `far_plane`, `scale_factor` and
//! `step_growth` must be positive and `horizontal_divisions` in `1..=4`.
//! [`RenderTuning`] guarantees this through its clamping setters. Very small
//! `z` produces huge projections; only the clamp to the layer height bounds
//! them.

use crate::camera::CameraState;
use crate::heightfield::HeightfieldStore;
use crate::surface::Surface;
use crate::tuning::RenderTuning;
use crate::types::SKY_INDEX;

/// One painted vertical run in a column, before tilt clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Projected height of the sample, `[0, layer_height)`.
    pub projected: i32,
    /// First painted row (projected + tilt, truncated).
    pub top: i32,
    /// One past the last painted row (old horizon + tilt).
    pub bottom: f32,
    pub color: u8,
    /// Depth the sample was taken at.
    pub z: f32,
}

/// Ray directions of the two frustum edges, per unit of depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    left: (f32, f32),
    right: (f32, f32),
    far: f32,
}

impl Frustum {
    /// ±45° around `yaw`, scaled to `far`.
    pub fn new(yaw: f32, far: f32) -> Self {
        let (sin, cos) = yaw.sin_cos();
        Self {
            left: (cos * far + sin * far, sin * far - cos * far),
            right: (cos * far - sin * far, sin * far + cos * far),
            far,
        }
    }

    /// Per-step ray advance for screen column `i` of `width`.
    #[inline]
    pub fn column_delta(&self, i: u16, width: u16) -> (f32, f32) {
        let t = i as f32 / width as f32;
        let dx = (self.left.0 + (self.right.0 - self.left.0) * t) / self.far;
        let dy = (self.left.1 + (self.right.1 - self.left.1) * t) / self.far;
        (dx, dy)
    }
}

/// March a single column and report each accepted span, nearest first.
///
/// Accepted `projected` values are strictly decreasing within a column.
pub fn march_column(
    camera: &CameraState,
    tuning: &RenderTuning,
    heightfield: &HeightfieldStore,
    frustum: &Frustum,
    column: u16,
    width: u16,
    layer_height: u16,
    mut emit: impl FnMut(Span),
) {
    let (dx, dy) = frustum.column_delta(column, width);
    let far = tuning.far_plane();
    let growth = tuning.step_growth();
    let scale = tuning.scale_factor();
    let cam_height = camera.height();
    let pitch = camera.pitch();
    let lh = layer_height as f32;
    let max_row = layer_height as i32 - 1;

    let tilt = (camera.roll_velocity() * (column as f32 / width as f32 - 0.5) + 0.5) * lh / 6.0;

    let mut rx = camera.x;
    let mut ry = camera.y;
    let mut horizon = lh;
    let mut z = 1.0f32;
    let mut dz = growth;

    while z < far {
        rx += dx;
        ry += dy;

        let (elevation, color) = heightfield.sample(rx, ry);
        let projected = ((cam_height - elevation as f32) / z * scale + pitch) as i32;
        let projected = projected.clamp(0, max_row.max(0));

        if (projected as f32) < horizon {
            emit(Span {
                projected,
                top: (projected as f32 + tilt) as i32,
                bottom: horizon + tilt,
                color,
                z,
            });
            horizon = projected as f32;
        }

        z += dz;
        dz += growth;
    }
}

/// Render one full frame into `surface`.
///
/// The surface is cleared to [`SKY_INDEX`] first, so no pixels carry over
/// from the previous frame.
pub fn render_frame(
    camera: &CameraState,
    tuning: &RenderTuning,
    heightfield: &HeightfieldStore,
    surface: &mut Surface,
) {
    surface.clear(SKY_INDEX);

    let width = surface.width();
    let height = surface.height();
    if width == 0 || height == 0 {
        return;
    }

    let frustum = Frustum::new(camera.yaw, tuning.far_plane());
    let divisions = tuning.horizontal_divisions().max(1) as u16;

    let mut column = 0u16;
    while column < width {
        march_column(
            camera,
            tuning,
            heightfield,
            &frustum,
            column,
            width,
            height,
            |span| {
                let bottom = span.bottom.ceil() as i32;
                for dx in 0..divisions {
                    let x = column + dx;
                    if x >= width {
                        break;
                    }
                    surface.fill_column(x, span.top, bottom, span.color);
                }
            },
        );
        column = column.saturating_add(divisions);
    }
}
