//! Placement of the overlay relative to its trigger
//!
//! The overlay opens below the trigger unless it doesn't fit there and there
//! is more room above. Its height is capped so it never runs past the
//! viewport edge, margins included. Horizontally it either centers on the
//! trigger (clamped to the viewport) or hangs off whichever trigger edge
//! leaves more room.

use tracing::debug;

use crate::geometry::{MarginBox, Rect, SpaceAvailable, Viewport};
use crate::host::DropdownHost;

/// Inline style properties written by a placement pass
const POSITION_PROPERTIES: [&str; 5] = ["max-height", "top", "bottom", "left", "right"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Below,
    Above,
}

impl Side {
    /// Marker class set on the overlay
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Below => "below",
            Self::Above => "above",
        }
    }
}

/// Offset from the top of the viewport, or from its bottom
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalAnchor {
    Top(f64),
    Bottom(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HorizontalAnchor {
    Left(f64),
    Right(f64),
}

/// Result of a placement pass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub side: Side,
    pub vertical: VerticalAnchor,
    pub horizontal: HorizontalAnchor,
    pub max_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementInput {
    pub trigger: Rect,
    /// Overlay size measured with all positioning reset
    pub overlay: Rect,
    pub viewport: Viewport,
    pub margins: MarginBox,
    pub centered: bool,
}

pub fn compute_placement(input: &PlacementInput) -> Placement {
    let PlacementInput {
        trigger,
        overlay,
        viewport,
        margins,
        centered,
    } = input;
    let space = SpaceAvailable::around(trigger, viewport);

    let fits_below = space.bottom > overlay.height + margins.vertical();
    let (side, vertical, max_height) = if fits_below || space.bottom >= space.top {
        (
            Side::Below,
            VerticalAnchor::Top(trigger.top + trigger.height),
            space.bottom - margins.vertical(),
        )
    } else {
        (
            Side::Above,
            VerticalAnchor::Bottom(space.bottom + trigger.height),
            space.top - margins.vertical(),
        )
    };

    let horizontal = if *centered {
        let mut left = trigger.left + trigger.width / 2.0 - overlay.width / 2.0;
        if left + overlay.width > viewport.width {
            left = viewport.width - overlay.width - margins.horizontal();
        }
        HorizontalAnchor::Left(left.max(0.0))
    } else if space.left > space.right {
        HorizontalAnchor::Right(space.right)
    } else {
        HorizontalAnchor::Left(space.left)
    };

    Placement {
        side,
        vertical,
        horizontal,
        max_height: max_height.max(0.0),
    }
}

/// Clear everything a previous pass wrote so measuring sees the natural size.
pub fn reset_position<H: DropdownHost>(host: &mut H, overlay: &H::Node) {
    for property in POSITION_PROPERTIES {
        host.set_style(overlay, property, "initial");
    }
    host.remove_class(overlay, Side::Above.class_name());
    host.remove_class(overlay, Side::Below.class_name());
}

pub fn apply_placement<H: DropdownHost>(host: &mut H, overlay: &H::Node, placement: &Placement) {
    match placement.vertical {
        VerticalAnchor::Top(top) => host.set_style(overlay, "top", &px(top)),
        VerticalAnchor::Bottom(bottom) => host.set_style(overlay, "bottom", &px(bottom)),
    }
    match placement.horizontal {
        HorizontalAnchor::Left(left) => host.set_style(overlay, "left", &px(left)),
        HorizontalAnchor::Right(right) => host.set_style(overlay, "right", &px(right)),
    }
    host.set_style(overlay, "max-height", &px(placement.max_height));
    host.add_class(overlay, placement.side.class_name());
}

/// Measure trigger and overlay, then place the overlay.
pub fn position<H: DropdownHost>(
    host: &mut H,
    trigger: &H::Node,
    overlay: &H::Node,
    centered: bool,
) -> Placement {
    reset_position(host, overlay);

    let input = PlacementInput {
        trigger: host.bounding_rect(trigger),
        overlay: host.bounding_rect(overlay),
        viewport: host.viewport(),
        margins: host.computed_margins(overlay),
        centered,
    };
    let placement = compute_placement(&input);
    debug!(
        "Positioned dropdown {:?} at {:?}/{:?}, max height {}",
        placement.side, placement.vertical, placement.horizontal, placement.max_height
    );

    apply_placement(host, overlay, &placement);
    placement
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }

    fn input(trigger: Rect, overlay_w: f64, overlay_h: f64, viewport: Viewport) -> PlacementInput {
        PlacementInput {
            trigger,
            overlay: Rect::from_origin(0.0, 0.0, overlay_w, overlay_h),
            viewport,
            margins: MarginBox::default(),
            centered: false,
        }
    }

    #[test]
    fn test_near_bottom_opens_above() {
        let trigger = Rect::from_origin(100.0, 700.0, 100.0, 30.0);
        let mut input = input(trigger, 150.0, 100.0, viewport(1000.0, 750.0));
        input.margins = MarginBox {
            top: 4.0,
            bottom: 4.0,
            ..Default::default()
        };

        let placement = compute_placement(&input);
        assert_eq!(placement.side, Side::Above);
        assert_eq!(placement.vertical, VerticalAnchor::Bottom(50.0));
        assert_eq!(placement.max_height, 692.0);
    }

    #[test]
    fn test_ample_space_below_opens_below() {
        // More room above, but the overlay fits below
        let trigger = Rect::from_origin(100.0, 500.0, 100.0, 30.0);
        let input = input(trigger, 150.0, 100.0, viewport(1000.0, 750.0));

        let placement = compute_placement(&input);
        assert_eq!(placement.side, Side::Below);
        assert_eq!(placement.vertical, VerticalAnchor::Top(530.0));
        assert_eq!(placement.max_height, 220.0);
    }

    #[test]
    fn test_no_fit_but_more_room_below_stays_below() {
        let trigger = Rect::from_origin(100.0, 100.0, 100.0, 30.0);
        let input = input(trigger, 150.0, 1000.0, viewport(1000.0, 750.0));

        let placement = compute_placement(&input);
        assert_eq!(placement.side, Side::Below);
        assert_eq!(placement.max_height, 620.0);
    }

    #[test]
    fn test_tied_space_prefers_below() {
        let trigger = Rect::from_origin(100.0, 360.0, 100.0, 30.0);
        let input = input(trigger, 150.0, 500.0, viewport(1000.0, 750.0));

        assert_eq!(compute_placement(&input).side, Side::Below);
    }

    #[test]
    fn test_exact_fit_is_not_enough() {
        // 100px below, overlay 90 + 10 margin: needs strictly more
        let trigger = Rect::from_origin(100.0, 620.0, 100.0, 30.0);
        let mut input = input(trigger, 150.0, 90.0, viewport(1000.0, 750.0));
        input.margins = MarginBox {
            top: 5.0,
            bottom: 5.0,
            ..Default::default()
        };

        assert_eq!(compute_placement(&input).side, Side::Above);
    }

    #[test]
    fn test_aligns_to_side_with_more_room() {
        let vp = viewport(1000.0, 750.0);

        let left_trigger = Rect::from_origin(100.0, 100.0, 100.0, 30.0);
        let placement = compute_placement(&input(left_trigger, 150.0, 100.0, vp));
        assert_eq!(placement.horizontal, HorizontalAnchor::Left(100.0));

        let right_trigger = Rect::from_origin(800.0, 100.0, 100.0, 30.0);
        let placement = compute_placement(&input(right_trigger, 150.0, 100.0, vp));
        assert_eq!(placement.horizontal, HorizontalAnchor::Right(100.0));
    }

    #[test]
    fn test_centered_under_trigger() {
        let trigger = Rect::from_origin(400.0, 100.0, 100.0, 30.0);
        let mut input = input(trigger, 200.0, 100.0, viewport(1000.0, 750.0));
        input.centered = true;

        assert_eq!(
            compute_placement(&input).horizontal,
            HorizontalAnchor::Left(350.0)
        );
    }

    #[test]
    fn test_centered_clamps_to_right_edge() {
        let trigger = Rect::from_origin(950.0, 100.0, 40.0, 30.0);
        let mut input = input(trigger, 200.0, 100.0, viewport(1000.0, 750.0));
        input.centered = true;
        input.margins = MarginBox {
            left: 8.0,
            right: 8.0,
            ..Default::default()
        };

        assert_eq!(
            compute_placement(&input).horizontal,
            HorizontalAnchor::Left(784.0)
        );
    }

    #[test]
    fn test_centered_clamps_to_left_edge() {
        let trigger = Rect::from_origin(0.0, 100.0, 20.0, 30.0);
        let mut input = input(trigger, 200.0, 100.0, viewport(1000.0, 750.0));
        input.centered = true;

        assert_eq!(
            compute_placement(&input).horizontal,
            HorizontalAnchor::Left(0.0)
        );
    }

    #[test]
    fn test_max_height_never_negative() {
        let trigger = Rect::from_origin(0.0, 0.0, 20.0, 750.0);
        let mut input = input(trigger, 200.0, 100.0, viewport(1000.0, 750.0));
        input.margins = MarginBox {
            top: 10.0,
            bottom: 10.0,
            ..Default::default()
        };

        assert_eq!(compute_placement(&input).max_height, 0.0);
    }
}
