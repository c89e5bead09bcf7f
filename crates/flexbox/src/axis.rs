//! Main/cross axis resolution from the flex direction.

use trellis_style::FlexDirection;

/// How the container's main axis maps onto screen axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axes {
    /// Main axis runs horizontally (row directions).
    pub horizontal_main: bool,
    /// Main axis runs from the far edge back toward the origin.
    pub main_reverse: bool,
}

/// Resolve screen axes for a flex direction.
///
/// The default direction in this engine is `column` (vertical main axis);
/// the reverse directions only flip main-axis accumulation, never the cross
/// axis.
#[inline]
pub const fn resolve_axes(direction: FlexDirection) -> Axes {
    match direction {
        FlexDirection::Row => Axes {
            horizontal_main: true,
            main_reverse: false,
        },
        FlexDirection::RowReverse => Axes {
            horizontal_main: true,
            main_reverse: true,
        },
        FlexDirection::Column => Axes {
            horizontal_main: false,
            main_reverse: false,
        },
        FlexDirection::ColumnReverse => Axes {
            horizontal_main: false,
            main_reverse: true,
        },
    }
}
