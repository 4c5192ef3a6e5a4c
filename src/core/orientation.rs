use serde::{Deserialize, Serialize};

/// Direction along which marker values are laid out on the plot.
///
/// `Vertical` maps marker values onto device Y, so shapes span the full
/// width of the drawing area. `Horizontal` maps them onto device X and
/// shapes span the full height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotOrientation {
    Vertical,
    Horizontal,
}

/// Side of the drawing area an axis is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectangleEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl RectangleEdge {
    /// Top and bottom edges carry axes that run along device X.
    #[must_use]
    pub fn is_top_or_bottom(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Plot-side collaborator consumed by marker painters.
pub trait Plot {
    fn orientation(&self) -> PlotOrientation;

    /// Edge passed to the axis when mapping marker values to device space.
    fn marker_edge(&self) -> RectangleEdge;
}

/// Plain `Plot` implementation holding an orientation and a marker edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotContext {
    pub orientation: PlotOrientation,
    pub marker_edge: RectangleEdge,
}

impl PlotContext {
    /// Uses the left edge for vertical plots and the bottom edge for
    /// horizontal ones, so mapped values land on the axis the shapes span
    /// across.
    #[must_use]
    pub fn new(orientation: PlotOrientation) -> Self {
        let marker_edge = match orientation {
            PlotOrientation::Vertical => RectangleEdge::Left,
            PlotOrientation::Horizontal => RectangleEdge::Bottom,
        };
        Self {
            orientation,
            marker_edge,
        }
    }

    #[must_use]
    pub fn with_marker_edge(mut self, edge: RectangleEdge) -> Self {
        self.marker_edge = edge;
        self
    }
}

impl Plot for PlotContext {
    fn orientation(&self) -> PlotOrientation {
        self.orientation
    }

    fn marker_edge(&self) -> RectangleEdge {
        self.marker_edge
    }
}
