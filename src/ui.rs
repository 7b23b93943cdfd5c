//! UI rendering: palette toolbar and the cursor indicator
use crate::cursor::CursorOverlay;
use crate::draw::Color;
use crate::input::{ControlAction, Palette, ToolState};
use crate::util::Rect;

// ============================================================================
// Toolbar Layout Constants (not configurable)
// ============================================================================

/// Edge length of a swatch or button
const BUTTON_SIZE: i32 = 28;
/// Gap between neighbouring buttons
const BUTTON_GAP: i32 = 8;
/// Padding between the toolbar edge and the first button
const TOOLBAR_PADDING: i32 = 8;
/// Outline width of the active button
const ACTIVE_OUTLINE: f64 = 3.0;
/// Outline color of the active button
const ACTIVE_OUTLINE_COLOR: Color = Color {
    r: 0.2,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};
/// Fill of the trash button
const TRASH_FILL: Color = Color {
    r: 0.85,
    g: 0.85,
    b: 0.85,
    a: 1.0,
};

/// Horizontal strip of palette swatches followed by the eraser and trash buttons.
#[derive(Debug, Clone, PartialEq)]
pub struct Toolbar {
    buttons: Vec<(Rect, ControlAction)>,
}

impl Toolbar {
    /// Lays out one swatch per palette entry, then eraser, then trash.
    pub fn new(palette: &Palette) -> Self {
        let actions = (0..palette.len())
            .map(ControlAction::SelectPalette)
            .chain([ControlAction::SelectEraser, ControlAction::Clear]);

        let buttons = actions
            .enumerate()
            .filter_map(|(slot, action)| {
                let x = TOOLBAR_PADDING + slot as i32 * (BUTTON_SIZE + BUTTON_GAP);
                Rect::new(x, TOOLBAR_PADDING, BUTTON_SIZE, BUTTON_SIZE).map(|rect| (rect, action))
            })
            .collect();

        Self { buttons }
    }

    pub fn buttons(&self) -> &[(Rect, ControlAction)] {
        &self.buttons
    }

    /// Total toolbar size in pixels (width, height).
    pub fn size(&self) -> (i32, i32) {
        let width = self
            .buttons
            .last()
            .map(|(rect, _)| rect.x + rect.width + TOOLBAR_PADDING)
            .unwrap_or(TOOLBAR_PADDING * 2);
        (width, BUTTON_SIZE + TOOLBAR_PADDING * 2)
    }

    /// Returns the action of the button under `(x, y)`, if any.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ControlAction> {
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, action)| *action)
    }
}

/// Render the toolbar, outlining the active swatch (or the eraser)
pub fn render_toolbar(
    ctx: &cairo::Context,
    toolbar: &Toolbar,
    palette: &Palette,
    tool: &ToolState,
) -> Result<(), cairo::Error> {
    ctx.save()?;
    let active_swatch = (!tool.is_eraser)
        .then(|| palette.position(tool.brush_color))
        .flatten();

    for (rect, action) in toolbar.buttons() {
        let (x, y) = (rect.x as f64, rect.y as f64);
        let (w, h) = (rect.width as f64, rect.height as f64);

        let active = match action {
            ControlAction::SelectPalette(index) => {
                if let Some(entry) = palette.get(*index) {
                    set_source(ctx, entry.color);
                    ctx.rectangle(x, y, w, h);
                    ctx.fill()?;
                }
                active_swatch == Some(*index)
            }
            ControlAction::SelectEraser => {
                set_source(ctx, tool.eraser_color);
                ctx.rectangle(x, y, w, h);
                ctx.fill()?;
                set_source(ctx, ACTIVE_OUTLINE_COLOR);
                ctx.set_line_width(1.0);
                ctx.rectangle(x + 0.5, y + 0.5, w - 1.0, h - 1.0);
                ctx.stroke()?;
                tool.is_eraser
            }
            ControlAction::Clear => {
                set_source(ctx, TRASH_FILL);
                ctx.rectangle(x, y, w, h);
                ctx.fill()?;
                // Cross mark
                set_source(ctx, ACTIVE_OUTLINE_COLOR);
                ctx.set_line_width(2.0);
                ctx.move_to(x + w * 0.3, y + h * 0.3);
                ctx.line_to(x + w * 0.7, y + h * 0.7);
                ctx.move_to(x + w * 0.7, y + h * 0.3);
                ctx.line_to(x + w * 0.3, y + h * 0.7);
                ctx.stroke()?;
                false
            }
            _ => false,
        };

        if active {
            set_source(ctx, ACTIVE_OUTLINE_COLOR);
            ctx.set_line_width(ACTIVE_OUTLINE);
            let inset = ACTIVE_OUTLINE / 2.0;
            ctx.rectangle(x - inset, y - inset, w + ACTIVE_OUTLINE, h + ACTIVE_OUTLINE);
            ctx.stroke()?;
        }
    }

    ctx.restore()
}

/// Render the circular cursor indicator at its viewport position.
///
/// Draws a filled circle of the brush color with a thin contrasting rim.
pub fn render_cursor(ctx: &cairo::Context, cursor: &CursorOverlay) -> Result<(), cairo::Error> {
    let radius = (cursor.size as f64 / 2.0).max(0.5);
    let (cx, cy) = cursor.center();
    ctx.save()?;

    set_source(ctx, cursor.color);
    ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill()?;

    // Contrasting rim based on brightness
    let color = cursor.color;
    let brightness = color.r * 0.299 + color.g * 0.587 + color.b * 0.114;
    let rim = if brightness > 0.5 { 0.0 } else { 1.0 };
    ctx.set_source_rgba(rim, rim, rim, 0.8);
    ctx.set_line_width(1.0);
    ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke()?;

    ctx.restore()
}

fn set_source(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}
