//! Project grid: the filtered subset, capped until expanded.
//!
//! The grid never rebuilds markup. Every card is rendered once at build time
//! and the grid only decides which catalog positions are visible, so the page
//! host toggles `hidden` on the cards it is told about.

/// Cards shown before the "view all" button is pressed.
pub const DEFAULT_INITIAL_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    subset: Vec<usize>,
    cap: usize,
    expanded: bool,
}

/// What a toggle asks the host to do besides re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
}

impl GridView {
    pub fn new(subset: Vec<usize>, cap: usize) -> Self {
        Self {
            subset,
            cap: cap.max(1),
            expanded: false,
        }
    }

    /// Replace the filtered subset. Filtering or searching always collapses.
    pub fn set_subset(&mut self, subset: Vec<usize>) {
        self.subset = subset;
        self.expanded = false;
    }

    pub fn subset(&self) -> &[usize] {
        &self.subset
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_empty(&self) -> bool {
        self.subset.is_empty()
    }

    pub fn visible(&self) -> &[usize] {
        if self.expanded {
            &self.subset
        } else {
            &self.subset[..self.subset.len().min(self.cap)]
        }
    }

    /// Cards hidden behind the button while collapsed.
    pub fn remaining(&self) -> usize {
        self.subset.len().saturating_sub(self.cap)
    }

    pub fn has_more(&self) -> bool {
        self.subset.len() > self.cap
    }

    pub fn toggle(&mut self) -> Toggle {
        self.expanded = !self.expanded;
        if self.expanded {
            Toggle::Expanded
        } else {
            Toggle::Collapsed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapsed_view_is_capped() {
        let grid = GridView::new((0..5).collect(), 3);
        assert_eq!(grid.visible(), &[0, 1, 2]);
        assert!(grid.has_more());
        assert_eq!(grid.remaining(), 2);
    }

    #[test]
    fn expanded_view_shows_everything() {
        let mut grid = GridView::new((0..5).collect(), 3);
        assert_eq!(grid.toggle(), Toggle::Expanded);
        assert_eq!(grid.visible(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn small_subsets_have_no_button() {
        let grid = GridView::new(vec![4, 7], 3);
        assert_eq!(grid.visible(), &[4, 7]);
        assert!(!grid.has_more());
        assert_eq!(grid.remaining(), 0);
    }

    #[test]
    fn new_subset_collapses_grid() {
        let mut grid = GridView::new((0..5).collect(), 3);
        grid.toggle();
        grid.set_subset(vec![1, 3, 4, 5]);
        assert!(!grid.is_expanded());
        assert_eq!(grid.visible(), &[1, 3, 4]);
    }

    #[test]
    fn zero_cap_is_clamped() {
        let grid = GridView::new(vec![1, 2], 0);
        assert_eq!(grid.visible(), &[1]);
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_capped_view(len in 0usize..20, cap in 1usize..6) {
            let initial = GridView::new((0..len).collect(), cap);
            let mut grid = initial.clone();
            grid.toggle();
            grid.toggle();
            prop_assert_eq!(grid.visible(), initial.visible());
            prop_assert_eq!(grid, initial);
        }
    }
}
