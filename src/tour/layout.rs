use super::step::Placement;

/// Gap between the highlighted element and the tooltip, in px
const TOOLTIP_GAP: f64 = 15.0;
/// Minimum distance from the viewport edges, in px
const VIEWPORT_MARGIN: f64 = 10.0;
/// How far the spotlight extends past the highlighted element, in px
const SPOTLIGHT_PAD: f64 = 5.0;

/// A screen rectangle in CSS pixel coordinates, origin top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    pub fn inflate(&self, pad: f64) -> Rect {
        Rect::new(self.x - pad, self.y - pad, self.w + 2.0 * pad, self.h + 2.0 * pad)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Top-left position for a step tooltip.
///
/// Sits `TOOLTIP_GAP` off the preferred side of the target, centered along
/// the other axis, then clamps to the viewport margins. No target means a
/// viewport-centered tooltip.
pub fn place_tooltip(
    target: Option<Rect>,
    placement: Placement,
    tooltip: Size,
    viewport: Size,
) -> (f64, f64) {
    let centered = (
        viewport.w / 2.0 - tooltip.w / 2.0,
        viewport.h / 2.0 - tooltip.h / 2.0,
    );

    let (x, y) = match target {
        None => centered,
        Some(rect) => match placement {
            Placement::Bottom => (
                rect.center_x() - tooltip.w / 2.0,
                rect.bottom() + TOOLTIP_GAP,
            ),
            Placement::Top => (
                rect.center_x() - tooltip.w / 2.0,
                rect.y - tooltip.h - TOOLTIP_GAP,
            ),
            Placement::Left => (
                rect.x - tooltip.w - TOOLTIP_GAP,
                rect.center_y() - tooltip.h / 2.0,
            ),
            Placement::Right => (rect.right() + TOOLTIP_GAP, rect.center_y() - tooltip.h / 2.0),
            Placement::Center => centered,
        },
    };

    (
        clamp_axis(x, tooltip.w, viewport.w),
        clamp_axis(y, tooltip.h, viewport.h),
    )
}

fn clamp_axis(pos: f64, extent: f64, viewport_extent: f64) -> f64 {
    let max = viewport_extent - extent - VIEWPORT_MARGIN;
    // Lower bound wins when the tooltip is wider than the viewport
    pos.min(max).max(VIEWPORT_MARGIN)
}

/// Cut-out rect over the dimming overlay, leaving the target unobstructed
pub fn spotlight(target: Rect) -> Rect {
    target.inflate(SPOTLIGHT_PAD)
}
