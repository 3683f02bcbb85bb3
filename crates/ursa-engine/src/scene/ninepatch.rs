use crate::coords::{ColorRgba, Rect};

use super::{Quad, Texture};

/// Splits `rect` and the full bounds of `texture` into 3×3 patches.
///
/// Corner patches keep their `margin` size; edges stretch along one axis and
/// the center stretches along both. Quads are returned in row-major order.
pub fn ninepatch_quads(texture: Texture, rect: Rect, margin: f32, color: ColorRgba) -> Vec<Quad> {
    let crop = texture.bounds();

    let (xs, ws) = thirds(rect.origin.x, rect.size.x, margin);
    let (ys, hs) = thirds(rect.origin.y, rect.size.y, margin);
    let (txs, tws) = thirds(crop.origin.x, crop.size.x, margin);
    let (tys, ths) = thirds(crop.origin.y, crop.size.y, margin);

    let mut quads = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            quads.push(Quad::new(
                Rect::new(xs[col], ys[row], ws[col], hs[row]),
                Rect::new(txs[col], tys[row], tws[col], ths[row]),
                color,
            ));
        }
    }
    quads
}

/// Positions and lengths of the three segments along one axis.
fn thirds(start: f32, len: f32, margin: f32) -> ([f32; 3], [f32; 3]) {
    let sizes = [margin, len - margin * 2.0, margin];
    let offsets = [start, start + sizes[0], start + sizes[0] + sizes[1]];
    (offsets, sizes)
}
