use std::collections::VecDeque;

/// Fixed lane extent on the board axis, in virtual units. Zoom never
/// changes lane width.
pub const LANE_EXTENT: u64 = 320;

/// Overscan margin for the board's column axis.
pub const COLUMN_OVERSCAN: usize = 2;

/// Overscan margin for a lane's row axis.
pub const ROW_OVERSCAN: usize = 5;

/// One item of a window plan, with its absolute offset along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowItem {
    pub index: usize,
    pub offset: u64,
    pub extent: u64,
}

/// Result of planning one axis: the contiguous items to render and the
/// total extent of the axis (for scrollbar math and scroll clamping).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowPlan {
    pub items: Vec<WindowItem>,
    pub total_extent: u64,
}

impl WindowPlan {
    /// Index range `[first, last]` of the plan, if any items are present.
    pub fn index_range(&self) -> Option<(usize, usize)> {
        match (self.items.first(), self.items.last()) {
            (Some(first), Some(last)) => Some((first.index, last.index)),
            _ => None,
        }
    }
}

/// Compute the minimal contiguous index range intersecting the viewport,
/// expanded by `overscan` items on each side and clamped to `[0, count)`.
///
/// Offsets come from a running prefix sum over `extent_of`, so the plan
/// holds for any per-item size function; the board uses it with a fixed
/// lane extent and lanes use it with the zoom table. A scroll position past
/// the end clamps to the last full viewport rather than going blank.
pub fn plan_window<F>(
    count: usize,
    extent_of: F,
    scroll: u64,
    viewport: u64,
    overscan: usize,
) -> WindowPlan
where
    F: Fn(usize) -> u64,
{
    if count == 0 {
        return WindowPlan::default();
    }

    let total_extent: u64 = (0..count).map(&extent_of).sum();
    let scroll = scroll.min(total_extent.saturating_sub(viewport));
    let window_end = scroll.saturating_add(viewport);

    let mut items = Vec::new();
    // Ring of the most recent items before the window, back-filled as the
    // leading overscan once the first visible item is found.
    let mut lead: VecDeque<WindowItem> = VecDeque::with_capacity(overscan + 1);
    let mut in_window = false;
    let mut trailing = overscan;
    let mut offset = 0u64;

    for index in 0..count {
        let extent = extent_of(index);
        let end = offset + extent;
        let item = WindowItem {
            index,
            offset,
            extent,
        };

        if end > scroll && offset < window_end {
            if !in_window {
                in_window = true;
                items.extend(lead.drain(..));
            }
            items.push(item);
        } else if !in_window {
            if overscan > 0 {
                if lead.len() == overscan {
                    lead.pop_front();
                }
                lead.push_back(item);
            }
        } else if trailing > 0 {
            items.push(item);
            trailing -= 1;
        } else {
            break;
        }

        offset = end;
    }

    WindowPlan {
        items,
        total_extent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(count: usize, extent: u64, scroll: u64, viewport: u64, overscan: usize) -> WindowPlan {
        plan_window(count, |_| extent, scroll, viewport, overscan)
    }

    #[test]
    fn empty_axis_yields_empty_plan() {
        let plan = uniform(0, 85, 0, 600, 5);
        assert!(plan.items.is_empty());
        assert_eq!(plan.total_extent, 0);
        assert_eq!(plan.index_range(), None);
    }

    #[test]
    fn window_covers_viewport_plus_overscan() {
        // 100 rows of 10 units, viewport 50 units at scroll 200:
        // visible rows 20..=24, overscan 2 -> 18..=26.
        let plan = uniform(100, 10, 200, 50, 2);
        assert_eq!(plan.index_range(), Some((18, 26)));
        assert_eq!(plan.total_extent, 1000);
    }

    #[test]
    fn offsets_are_prefix_sums() {
        let plan = uniform(100, 10, 200, 50, 2);
        for item in &plan.items {
            assert_eq!(item.offset, item.index as u64 * 10);
            assert_eq!(item.extent, 10);
        }
    }

    #[test]
    fn overscan_clamps_at_the_start() {
        let plan = uniform(100, 10, 0, 50, 5);
        assert_eq!(plan.index_range(), Some((0, 9)));
    }

    #[test]
    fn overscan_clamps_at_the_end() {
        let plan = uniform(10, 10, 60, 40, 5);
        assert_eq!(plan.index_range(), Some((1, 9)));
    }

    #[test]
    fn scroll_past_the_end_clamps_to_last_viewport() {
        let plan = uniform(10, 10, 10_000, 30, 0);
        // clamped scroll = 100 - 30 = 70 -> rows 7..=9
        assert_eq!(plan.index_range(), Some((7, 9)));
    }

    #[test]
    fn viewport_larger_than_content_renders_everything() {
        let plan = uniform(4, 85, 0, 10_000, 5);
        assert_eq!(plan.index_range(), Some((0, 3)));
        assert_eq!(plan.total_extent, 340);
    }

    #[test]
    fn item_spanning_the_scroll_edge_is_included() {
        // Row 1 spans units 10..20; scroll 15 must still include it.
        let plan = uniform(10, 10, 15, 10, 0);
        assert_eq!(plan.index_range(), Some((1, 2)));
    }

    #[test]
    fn variable_extents_accumulate() {
        let extents = [5u64, 20, 40, 5, 30];
        let plan = plan_window(extents.len(), |i| extents[i], 25, 20, 0);
        // prefix: 0,5,25,65,70; window [25,45) -> index 2 only
        assert_eq!(plan.index_range(), Some((2, 2)));
        assert_eq!(plan.items[0].offset, 25);
        assert_eq!(plan.total_extent, 100);
    }

    #[test]
    fn board_axis_constants() {
        // One column window over 8 lanes of fixed extent.
        let plan = uniform(8, LANE_EXTENT, 0, 900, COLUMN_OVERSCAN);
        // visible lanes 0..=2 (0..960 clipped at 900), overscan 2 -> 0..=4
        assert_eq!(plan.index_range(), Some((0, 4)));
        assert_eq!(plan.total_extent, 8 * LANE_EXTENT);
        assert_eq!(ROW_OVERSCAN, 5);
    }
}
