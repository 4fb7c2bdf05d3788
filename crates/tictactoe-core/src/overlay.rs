//! CSS placement for the win-line overlay.
//!
//! The browser client draws the winning line as an absolutely positioned
//! bar on top of the board. This turns a [`LineDescriptor`] into the style
//! values for that bar. Everything unit-specific lives here, not in the
//! geometry module.

use crate::geometry::{LineDescriptor, Orientation};
use serde::{Deserialize, Serialize};

/// Bar thickness in pixels
pub const LINE_THICKNESS_PX: u32 = 12;

/// Gap left at both ends of straight lines, in pixels
pub const LINE_INSET_PX: u32 = 12;

/// Delay before the overlay should become visible, in milliseconds
pub const REVEAL_DELAY_MS: u32 = 100;

/// Inline style values for the overlay element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub width: String,
    pub height: String,
    pub top: String,
    pub left: String,
    pub transform: String,
}

impl OverlayStyle {
    /// Compute the overlay style for a winning line
    pub fn for_descriptor(descriptor: &LineDescriptor) -> Self {
        let thickness = format!("{}px", LINE_THICKNESS_PX);
        let inset = format!("{}px", LINE_INSET_PX);
        let span = format!("calc(100% - {}px)", 2 * LINE_INSET_PX);
        let center = percent(descriptor.offset());

        match descriptor.orientation {
            Orientation::Column => Self {
                width: thickness,
                height: span,
                top: inset,
                left: center,
                transform: "translateX(-50%)".to_string(),
            },
            Orientation::Row => Self {
                width: span,
                height: thickness,
                top: center,
                left: inset,
                transform: "translateY(-50%)".to_string(),
            },
            Orientation::DiagonalMain | Orientation::DiagonalAnti => Self {
                width: percent(descriptor.length()),
                height: thickness,
                top: center.clone(),
                left: center,
                transform: format!(
                    "translate(-50%, -50%) rotate({}deg)",
                    descriptor.rotation_degrees()
                ),
            },
        }
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resolve;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_style() {
        let style = OverlayStyle::for_descriptor(&resolve([1, 4, 7]));
        assert_eq!(
            style,
            OverlayStyle {
                width: "12px".into(),
                height: "calc(100% - 24px)".into(),
                top: "12px".into(),
                left: "50.00%".into(),
                transform: "translateX(-50%)".into(),
            }
        );
    }

    #[test]
    fn test_row_style() {
        let style = OverlayStyle::for_descriptor(&resolve([6, 7, 8]));
        assert_eq!(style.top, "83.33%");
        assert_eq!(style.left, "12px");
        assert_eq!(style.width, "calc(100% - 24px)");
        assert_eq!(style.transform, "translateY(-50%)");
    }

    #[test]
    fn test_first_column_offset() {
        let style = OverlayStyle::for_descriptor(&resolve([0, 3, 6]));
        assert_eq!(style.left, "16.67%");
    }

    #[test]
    fn test_diagonal_styles() {
        let main = OverlayStyle::for_descriptor(&resolve([0, 4, 8]));
        assert_eq!(main.width, "141.42%");
        assert_eq!(main.top, "50.00%");
        assert_eq!(main.left, "50.00%");
        assert_eq!(main.transform, "translate(-50%, -50%) rotate(45deg)");

        let anti = OverlayStyle::for_descriptor(&resolve([2, 4, 6]));
        assert_eq!(anti.transform, "translate(-50%, -50%) rotate(-45deg)");
    }
}
