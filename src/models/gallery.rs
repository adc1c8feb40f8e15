//! Gallery-related view types.

/// Display mode for the item collection (grid of cards or vertical list).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Card grid (default)
    #[default]
    Grid,
    /// Vertical list
    List,
}
