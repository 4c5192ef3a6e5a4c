use serde::{Deserialize, Serialize};

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

/// Point of a text block that is placed on the anchor coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAnchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BaselineLeft,
    BaselineCenter,
    BaselineRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAnchor {
    #[must_use]
    pub fn h_align(self) -> TextHAlign {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BaselineLeft | Self::BottomLeft => {
                TextHAlign::Left
            }
            Self::TopCenter | Self::Center | Self::BaselineCenter | Self::BottomCenter => {
                TextHAlign::Center
            }
            Self::TopRight | Self::CenterRight | Self::BaselineRight | Self::BottomRight => {
                TextHAlign::Right
            }
        }
    }

    #[must_use]
    pub fn v_align(self) -> TextVAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => TextVAlign::Top,
            Self::CenterLeft | Self::Center | Self::CenterRight => TextVAlign::Center,
            Self::BaselineLeft | Self::BaselineCenter | Self::BaselineRight => {
                TextVAlign::Baseline
            }
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => TextVAlign::Bottom,
        }
    }
}
