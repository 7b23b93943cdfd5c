//! Cairo-based rendering primitives for the raster target.

use super::color::Color;

/// Fills the entire target with a solid background color.
///
/// Uses `Operator::Source` so the result does not depend on what was painted
/// before; painting the same color twice yields identical pixels.
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let painted = ctx.paint();
    ctx.restore()?;
    painted
}

/// Strokes a single round-capped, round-joined segment.
///
/// When `from == to` the round caps collapse into a dot of diameter `width`.
/// Only the part of the segment that can touch the target is passed to Cairo.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `from` - Segment start in surface-local pixels
/// * `to` - Segment end in surface-local pixels
/// * `color` - Stroke color
/// * `width` - Line width in pixels
pub fn render_segment(
    ctx: &cairo::Context,
    from: (i32, i32),
    to: (i32, i32),
    color: Color,
    width: f64,
) -> Result<(), cairo::Error> {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x1, y1, x2, y2) = ctx.clip_extents()?;
    let reach = width.max(1.0);
    let from = (f64::from(from.0), f64::from(from.1));
    let to = (f64::from(to.0), f64::from(to.1));
    let Some((from, to)) = clip_segment(from, to, (x1 - reach, y1 - reach), (x2 + reach, y2 + reach))
    else {
        return Ok(());
    };

    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke()
}

/// Liang-Barsky clip of the segment `from -> to` against an axis-aligned box.
///
/// Returns the visible part, or `None` when the segment misses the box.
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    min: (f64, f64),
    max: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let (mut enter, mut exit) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, from.0 - min.0),
        (dx, max.0 - from.0),
        (-dy, from.1 - min.1),
        (dy, max.1 - from.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if (p < 0.0 && t > exit) || (p > 0.0 && t < enter) {
            return None;
        }
        if p < 0.0 {
            enter = enter.max(t);
        } else {
            exit = exit.min(t);
        }
    }

    Some((
        (from.0 + enter * dx, from.1 + enter * dy),
        (from.0 + exit * dx, from.1 + exit * dy),
    ))
}
