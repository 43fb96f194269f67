//! Drawer sides and gravity resolution.

/// Absolute side a drawer slides in from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelSide {
    Left,
    Right,
}

impl PanelSide {
    pub const ALL: [PanelSide; 2] = [PanelSide::Left, PanelSide::Right];

    /// Side implied by a horizontal displacement from the press point: a
    /// rightward drag pulls the left drawer in, a leftward drag the right one.
    pub fn from_displacement(diff_x: f32) -> Option<PanelSide> {
        if diff_x > 0.0 {
            Some(PanelSide::Left)
        } else if diff_x < 0.0 {
            Some(PanelSide::Right)
        } else {
            None
        }
    }

    /// Signed travel toward opening this side's drawer.
    pub fn opening_progress(self, diff_x: f32) -> f32 {
        match self {
            PanelSide::Left => diff_x,
            PanelSide::Right => -diff_x,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Gravity a drawer is declared with. `Start` and `End` follow the layout
/// direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerGravity {
    Left,
    Right,
    Start,
    End,
}

impl DrawerGravity {
    pub fn resolve(self, direction: LayoutDirection) -> PanelSide {
        match (self, direction) {
            (DrawerGravity::Left, _) => PanelSide::Left,
            (DrawerGravity::Right, _) => PanelSide::Right,
            (DrawerGravity::Start, LayoutDirection::Ltr) => PanelSide::Left,
            (DrawerGravity::Start, LayoutDirection::Rtl) => PanelSide::Right,
            (DrawerGravity::End, LayoutDirection::Ltr) => PanelSide::Right,
            (DrawerGravity::End, LayoutDirection::Rtl) => PanelSide::Left,
        }
    }
}
