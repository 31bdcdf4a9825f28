use css_box::{AbsoluteAxis, Line, Point, Rect, Size};
use css_values_units::{Dimension, LengthPercentage, LengthPercentageAuto, NumericIssue};
use serde::{Deserialize, Serialize};

use crate::grid_model::{GridAutoFlow, GridPlacement, NonRepeatedTrackSizingFunction, TrackSizingFunction};

/// Which layout algorithm lays out the children of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Display {
    Block,
    #[default]
    Flex,
    Grid,
    /// The node and its subtree are hidden and take no space.
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// In flow; insets apply as a pure translation after layout.
    #[default]
    Relative,
    /// Out of flow; placed against the parent's padding box.
    Absolute,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxSizing {
    ContentBox,
    #[default]
    BorderBox,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Overflow {
    #[default]
    Visible,
    Clip,
    Hidden,
    Scroll,
}

impl Overflow {
    /// Scroll containers get a zero content-based minimum size.
    #[inline]
    pub const fn is_scroll_container(self) -> bool {
        matches!(self, Self::Hidden | Self::Scroll)
    }

    /// `Some(0.0)` for scroll containers, `None` otherwise.
    #[inline]
    pub const fn maybe_into_automatic_min_size(self) -> Option<f32> {
        if self.is_scroll_container() {
            Some(0.0)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub const fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// The physical axis items are laid out along.
    #[inline]
    pub const fn main_axis(self) -> AbsoluteAxis {
        if self.is_row() {
            AbsoluteAxis::Horizontal
        } else {
            AbsoluteAxis::Vertical
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// `align-items` / `align-self` / `justify-items` / `justify-self` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignItems {
    Start,
    End,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

pub type AlignSelf = AlignItems;
pub type JustifyItems = AlignItems;
pub type JustifySelf = AlignItems;

/// `align-content` / `justify-content` keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignContent {
    Start,
    End,
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    SpaceBetween,
    SpaceEvenly,
    SpaceAround,
}

pub type JustifyContent = AlignContent;

/// All layout-relevant style properties of one node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub display: Display,
    pub position: Position,
    pub box_sizing: BoxSizing,
    /// Overflow per axis (`x` is horizontal).
    pub overflow: Point<Overflow>,
    /// Space reserved for a scrollbar when overflow is `Scroll`.
    pub scrollbar_width: f32,
    pub inset: Rect<LengthPercentageAuto>,

    // Box sizing
    pub size: Size<Dimension>,
    pub min_size: Size<Dimension>,
    pub max_size: Size<Dimension>,
    /// Width divided by height.
    pub aspect_ratio: Option<f32>,

    // Spacing
    pub margin: Rect<LengthPercentageAuto>,
    pub padding: Rect<LengthPercentage>,
    pub border: Rect<LengthPercentage>,
    /// `width` is the column gap, `height` the row gap.
    pub gap: Size<LengthPercentage>,

    // Alignment (None means "normal": the algorithm picks)
    pub align_items: Option<AlignItems>,
    pub align_self: Option<AlignSelf>,
    pub justify_items: Option<JustifyItems>,
    pub justify_self: Option<JustifySelf>,
    pub align_content: Option<AlignContent>,
    pub justify_content: Option<JustifyContent>,

    // Flexbox
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,

    // Grid container
    pub grid_template_rows: Vec<TrackSizingFunction>,
    pub grid_template_columns: Vec<TrackSizingFunction>,
    pub grid_auto_rows: Vec<NonRepeatedTrackSizingFunction>,
    pub grid_auto_columns: Vec<NonRepeatedTrackSizingFunction>,
    pub grid_auto_flow: GridAutoFlow,

    // Grid item
    pub grid_row: Line<GridPlacement>,
    pub grid_column: Line<GridPlacement>,
}

impl Style {
    /// Initial values of every property.
    pub const DEFAULT: Self = Self {
        display: Display::Flex,
        position: Position::Relative,
        box_sizing: BoxSizing::BorderBox,
        overflow: Point {
            x: Overflow::Visible,
            y: Overflow::Visible,
        },
        scrollbar_width: 0.0,
        inset: Rect {
            left: LengthPercentageAuto::Auto,
            right: LengthPercentageAuto::Auto,
            top: LengthPercentageAuto::Auto,
            bottom: LengthPercentageAuto::Auto,
        },
        size: Size {
            width: Dimension::Auto,
            height: Dimension::Auto,
        },
        min_size: Size {
            width: Dimension::Auto,
            height: Dimension::Auto,
        },
        max_size: Size {
            width: Dimension::Auto,
            height: Dimension::Auto,
        },
        aspect_ratio: None,
        margin: Rect {
            left: LengthPercentageAuto::ZERO,
            right: LengthPercentageAuto::ZERO,
            top: LengthPercentageAuto::ZERO,
            bottom: LengthPercentageAuto::ZERO,
        },
        padding: Rect {
            left: LengthPercentage::ZERO,
            right: LengthPercentage::ZERO,
            top: LengthPercentage::ZERO,
            bottom: LengthPercentage::ZERO,
        },
        border: Rect {
            left: LengthPercentage::ZERO,
            right: LengthPercentage::ZERO,
            top: LengthPercentage::ZERO,
            bottom: LengthPercentage::ZERO,
        },
        gap: Size {
            width: LengthPercentage::ZERO,
            height: LengthPercentage::ZERO,
        },
        align_items: None,
        align_self: None,
        justify_items: None,
        justify_self: None,
        align_content: None,
        justify_content: None,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::NoWrap,
        flex_grow: 0.0,
        flex_shrink: 1.0,
        flex_basis: Dimension::Auto,
        grid_template_rows: Vec::new(),
        grid_template_columns: Vec::new(),
        grid_auto_rows: Vec::new(),
        grid_auto_columns: Vec::new(),
        grid_auto_flow: GridAutoFlow::Row,
        grid_row: Line {
            start: GridPlacement::Auto,
            end: GridPlacement::Auto,
        },
        grid_column: Line {
            start: GridPlacement::Auto,
            end: GridPlacement::Auto,
        },
    };
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Style {
    /// Placement lines along an axis (columns are horizontal).
    #[inline]
    pub const fn grid_placement(&self, axis: AbsoluteAxis) -> Line<GridPlacement> {
        match axis {
            AbsoluteAxis::Horizontal => self.grid_column,
            AbsoluteAxis::Vertical => self.grid_row,
        }
    }

    /// Scrollbar space reserved per axis.
    ///
    /// Transposed on purpose: a node scrolling vertically reserves horizontal room.
    #[inline]
    pub fn scrollbar_gutter(&self) -> Point<f32> {
        self.overflow.transpose().map(|overflow| match overflow {
            Overflow::Scroll => self.scrollbar_width,
            Overflow::Visible | Overflow::Clip | Overflow::Hidden => 0.0,
        })
    }

    /// Replace NaN/infinite numbers by 0 and clamp negatives where CSS forbids them.
    ///
    /// Returns how many values had to be replaced.
    pub fn sanitize(&mut self) -> usize {
        let mut issues: Vec<NumericIssue> = Vec::new();
        let mut record = |issue: Option<NumericIssue>| {
            if let Some(found) = issue {
                issues.push(found);
            }
        };

        for number in [
            &mut self.scrollbar_width,
            &mut self.flex_grow,
            &mut self.flex_shrink,
        ] {
            let sanitized = css_values_units::sanitize_number(*number, false);
            *number = sanitized.value;
            record(sanitized.issue);
        }
        if let Some(ratio) = self.aspect_ratio
            && (!ratio.is_finite() || ratio <= 0.0)
        {
            self.aspect_ratio = None;
            record(Some(if ratio.is_nan() {
                NumericIssue::NaN
            } else if ratio.is_infinite() {
                NumericIssue::Infinite
            } else {
                NumericIssue::Negative
            }));
        }

        for dim in [
            &mut self.size.width,
            &mut self.size.height,
            &mut self.min_size.width,
            &mut self.min_size.height,
            &mut self.max_size.width,
            &mut self.max_size.height,
            &mut self.flex_basis,
        ] {
            let (value, issue) = dim.sanitized(false);
            *dim = value;
            record(issue);
        }
        for edge in [
            &mut self.padding.left,
            &mut self.padding.right,
            &mut self.padding.top,
            &mut self.padding.bottom,
            &mut self.border.left,
            &mut self.border.right,
            &mut self.border.top,
            &mut self.border.bottom,
            &mut self.gap.width,
            &mut self.gap.height,
        ] {
            let (value, issue) = edge.sanitized(false);
            *edge = value;
            record(issue);
        }
        for edge in [
            &mut self.margin.left,
            &mut self.margin.right,
            &mut self.margin.top,
            &mut self.margin.bottom,
            &mut self.inset.left,
            &mut self.inset.right,
            &mut self.inset.top,
            &mut self.inset.bottom,
        ] {
            let (value, issue) = edge.sanitized(true);
            *edge = value;
            record(issue);
        }
        for track in self
            .grid_template_rows
            .iter_mut()
            .chain(self.grid_template_columns.iter_mut())
        {
            record_all(track.sanitize(), &mut record);
        }
        for track in self
            .grid_auto_rows
            .iter_mut()
            .chain(self.grid_auto_columns.iter_mut())
        {
            record_all(track.sanitize(), &mut record);
        }

        if !issues.is_empty() {
            log::warn!(
                target: "css::style",
                "[STYLE-SANITIZE] replaced {} invalid numeric value(s): {:?}",
                issues.len(),
                issues
            );
        }
        issues.len()
    }
}

fn record_all(found: Vec<NumericIssue>, record: &mut impl FnMut(Option<NumericIssue>)) {
    for issue in found {
        record(Some(issue));
    }
}
