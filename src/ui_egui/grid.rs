//! Availability grid interaction state.
//!
//! Holds the block list a mentor is editing, interprets drag gestures over
//! the discretized day/hour grid, and owns the pixel-to-slot geometry used
//! by the rendering layer. All transitions are synchronous and driven by
//! pointer events; there is no background state.

use chrono::{NaiveTime, Timelike};
use egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::models::availability::{AvailabilityBlock, DAYS_PER_WEEK};

/// First hour row on the grid (8 AM)
pub const GRID_START_HOUR: u8 = 8;
/// Hour the grid ends at, exclusive (rows run 8 AM - 10 PM)
pub const GRID_END_HOUR: u8 = 22;
/// Rendered height of one hour row in pixels
pub const HOUR_HEIGHT: f32 = 60.0;
/// Width of the time-label gutter left of the day columns
pub const TIME_LABEL_WIDTH: f32 = 64.0;

/// Number of hour rows on the grid
pub const fn row_count() -> usize {
    (GRID_END_HOUR - GRID_START_HOUR) as usize
}

/// The hour of each grid row, top to bottom
pub fn hour_rows() -> impl Iterator<Item = u8> {
    GRID_START_HOUR..GRID_END_HOUR
}

/// A single (day, hour) cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub day: u8,
    pub hour: u8,
}

/// Transient pointer-drag state, alive only between press and release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        anchor: GridCell,
        cursor: GridCell,
    },
}

/// Hour range a drag gesture currently spans, used for the live preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    pub day: u8,
    pub start_hour: u8,
    pub end_hour: u8,
}

/// Editing state for one mentor's weekly availability.
///
/// Blocks may overlap each other; no merge or rejection logic is applied.
/// Drags that start on an existing block are ignored, and drags that cross
/// day columns are discarded on release. Both are silent policy no-ops.
pub struct AvailabilityGrid {
    mentor_id: String,
    blocks: Vec<AvailabilityBlock>,
    drag: DragSession,
    next_block_seq: u64,
    dirty: bool,
}

impl AvailabilityGrid {
    /// Start editing from a mentor's saved block list
    pub fn new(mentor_id: impl Into<String>, blocks: Vec<AvailabilityBlock>) -> Self {
        Self {
            mentor_id: mentor_id.into(),
            blocks,
            drag: DragSession::Idle,
            next_block_seq: 1,
            dirty: false,
        }
    }

    pub fn mentor_id(&self) -> &str {
        &self.mentor_id
    }

    pub fn blocks(&self) -> &[AvailabilityBlock] {
        &self.blocks
    }

    /// Whether edits exist that have not been handed to the store yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the unsaved-changes marker after a save
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn drag_session(&self) -> DragSession {
        self.drag
    }

    /// The first block covering the given cell, if any
    pub fn block_at(&self, day: u8, hour: u8) -> Option<&AvailabilityBlock> {
        self.blocks.iter().find(|block| block.contains(day, hour))
    }

    /// Open a drag session anchored at the given cell.
    /// Ignored when the cell already lies inside an existing block.
    pub fn begin_drag(&mut self, day: u8, hour: u8) {
        if self.block_at(day, hour).is_some() {
            return;
        }
        let cell = GridCell { day, hour };
        self.drag = DragSession::Dragging {
            anchor: cell,
            cursor: cell,
        };
    }

    /// Move the cursor of an open drag session.
    /// No effect outside an open session.
    pub fn update_drag(&mut self, day: u8, hour: u8) {
        if let DragSession::Dragging { cursor, .. } = &mut self.drag {
            *cursor = GridCell { day, hour };
        }
    }

    /// Close the drag session, appending a block when anchor and cursor
    /// share a day. The drag is hour-granular and inclusive of the hour
    /// under the cursor, so a same-cell drag still yields a one-hour
    /// block. Cross-day drags are discarded.
    pub fn end_drag(&mut self) -> Option<&AvailabilityBlock> {
        let session = std::mem::take(&mut self.drag);
        let DragSession::Dragging { anchor, cursor } = session else {
            return None;
        };
        if anchor.day != cursor.day {
            return None;
        }

        let start_hour = anchor.hour.min(cursor.hour);
        let end_hour = anchor.hour.max(cursor.hour) + 1;
        let id = format!("avail-{}", self.next_block_seq);
        self.next_block_seq += 1;

        self.blocks.push(AvailabilityBlock {
            id,
            mentor_id: self.mentor_id.clone(),
            day: anchor.day,
            start_hour,
            end_hour,
        });
        self.dirty = true;
        self.blocks.last()
    }

    /// Discard an open drag session (pointer left the grid)
    pub fn cancel_drag(&mut self) {
        self.drag = DragSession::Idle;
    }

    /// The hour range the open drag spans, for the live preview overlay.
    /// `None` while idle or when the cursor wandered to another day.
    pub fn drag_preview(&self) -> Option<DragPreview> {
        let DragSession::Dragging { anchor, cursor } = self.drag else {
            return None;
        };
        if anchor.day != cursor.day {
            return None;
        }
        Some(DragPreview {
            day: anchor.day,
            start_hour: anchor.hour.min(cursor.hour),
            end_hour: anchor.hour.max(cursor.hour) + 1,
        })
    }

    /// Remove the block with the given id. No-op when absent.
    pub fn delete_block(&mut self, id: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|block| block.id != id);
        let removed = self.blocks.len() != before;
        if removed {
            self.dirty = true;
        }
        removed
    }

    /// Vertical pixel offset of "now" within the grid body, or `None`
    /// when the current time falls outside the displayed hour range.
    pub fn current_time_offset(now: NaiveTime) -> Option<f32> {
        let hour = now.hour() as f32 + now.minute() as f32 / 60.0;
        if hour < GRID_START_HOUR as f32 || hour > GRID_END_HOUR as f32 {
            return None;
        }
        Some((hour - GRID_START_HOUR as f32) * HOUR_HEIGHT)
    }
}

/// Map a pointer offset within the day-columns area to a grid cell.
/// Returns `None` outside the seven columns or the displayed hour rows.
pub fn cell_at(offset: Vec2, col_width: f32) -> Option<GridCell> {
    if offset.x < 0.0 || offset.y < 0.0 || col_width <= 0.0 {
        return None;
    }
    let day = (offset.x / col_width).floor() as i64;
    let row = (offset.y / HOUR_HEIGHT).floor() as i64;
    if day >= DAYS_PER_WEEK as i64 || row >= row_count() as i64 {
        return None;
    }
    Some(GridCell {
        day: day as u8,
        hour: GRID_START_HOUR + row as u8,
    })
}

/// Rectangle of an hour range within a day column, positioned purely by
/// `(start_hour - GRID_START_HOUR) * HOUR_HEIGHT`.
pub fn hour_range_rect(
    origin: Pos2,
    col_width: f32,
    day: u8,
    start_hour: u8,
    end_hour: u8,
) -> Rect {
    let x = origin.x + day as f32 * col_width;
    let y = origin.y + (start_hour as f32 - GRID_START_HOUR as f32) * HOUR_HEIGHT;
    let height = (end_hour as f32 - start_hour as f32) * HOUR_HEIGHT;
    Rect::from_min_size(pos2(x, y), vec2(col_width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn empty_grid() -> AvailabilityGrid {
        AvailabilityGrid::new("m1", Vec::new())
    }

    fn grid_with_block(day: u8, start: u8, end: u8) -> AvailabilityGrid {
        let block = AvailabilityBlock::new("a1", "m1", day, start, end).unwrap();
        AvailabilityGrid::new("m1", vec![block])
    }

    #[test_case(9, 11, 9, 12 ; "forward drag")]
    #[test_case(11, 9, 9, 12 ; "backward drag normalizes")]
    #[test_case(10, 10, 10, 11 ; "same-cell drag yields one hour")]
    fn test_drag_creates_block(h1: u8, h2: u8, expected_start: u8, expected_end: u8) {
        let mut grid = empty_grid();
        grid.begin_drag(1, h1);
        grid.update_drag(1, h2);
        let block = grid.end_drag().cloned().unwrap();

        assert_eq!(block.day, 1);
        assert_eq!(block.start_hour, expected_start);
        assert_eq!(block.end_hour, expected_end);
        assert_eq!(grid.drag_session(), DragSession::Idle);
        assert!(grid.is_dirty());
    }

    #[test]
    fn test_begin_drag_on_existing_block_ignored() {
        let mut grid = grid_with_block(2, 9, 12);
        grid.begin_drag(2, 10);
        assert_eq!(grid.drag_session(), DragSession::Idle);

        grid.update_drag(2, 15);
        assert!(grid.end_drag().is_none());
        assert_eq!(grid.blocks().len(), 1);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_begin_drag_next_to_block_allowed() {
        let mut grid = grid_with_block(2, 9, 12);
        // end_hour is exclusive, so the 12:00 cell is free
        grid.begin_drag(2, 12);
        assert!(grid.end_drag().is_some());
        assert_eq!(grid.blocks().len(), 2);
    }

    #[test]
    fn test_cross_day_drag_discarded() {
        let mut grid = empty_grid();
        grid.begin_drag(1, 9);
        grid.update_drag(2, 11);
        assert!(grid.end_drag().is_none());
        assert!(grid.blocks().is_empty());
        assert_eq!(grid.drag_session(), DragSession::Idle);
    }

    #[test]
    fn test_update_drag_without_session_no_effect() {
        let mut grid = empty_grid();
        grid.update_drag(3, 10);
        assert_eq!(grid.drag_session(), DragSession::Idle);
        assert!(grid.end_drag().is_none());
    }

    #[test]
    fn test_cancel_drag_discards_session() {
        let mut grid = empty_grid();
        grid.begin_drag(4, 10);
        grid.cancel_drag();
        assert!(grid.end_drag().is_none());
        assert!(grid.blocks().is_empty());
    }

    #[test]
    fn test_overlapping_blocks_permitted() {
        let mut grid = grid_with_block(2, 9, 12);
        // Start next to the block and drag back across it
        grid.begin_drag(2, 13);
        grid.update_drag(2, 10);
        let block = grid.end_drag().cloned().unwrap();
        assert_eq!(block.start_hour, 10);
        assert_eq!(block.end_hour, 14);
        assert_eq!(grid.blocks().len(), 2);
    }

    #[test]
    fn test_blocks_coexist_and_delete_is_scoped() {
        let first = AvailabilityBlock::new("a1", "m1", 2, 9, 12).unwrap();
        let second = AvailabilityBlock::new("a2", "m1", 2, 14, 17).unwrap();
        let mut grid = AvailabilityGrid::new("m1", vec![first, second.clone()]);

        assert!(grid.delete_block("a1"));
        assert_eq!(grid.blocks(), &[second]);
        assert!(grid.is_dirty());
    }

    #[test]
    fn test_delete_unknown_id_noop() {
        let mut grid = grid_with_block(2, 9, 12);
        assert!(!grid.delete_block("missing"));
        assert_eq!(grid.blocks().len(), 1);
        assert!(!grid.is_dirty());
    }

    #[test]
    fn test_created_blocks_get_fresh_ids() {
        let mut grid = empty_grid();
        grid.begin_drag(0, 8);
        let first = grid.end_drag().map(|b| b.id.clone()).unwrap();
        grid.begin_drag(1, 8);
        let second = grid.end_drag().map(|b| b.id.clone()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_drag_preview_tracks_session() {
        let mut grid = empty_grid();
        assert!(grid.drag_preview().is_none());

        grid.begin_drag(1, 11);
        grid.update_drag(1, 9);
        assert_eq!(
            grid.drag_preview(),
            Some(DragPreview {
                day: 1,
                start_hour: 9,
                end_hour: 12
            })
        );

        // Cursor on another day hides the preview but keeps the session
        grid.update_drag(2, 9);
        assert!(grid.drag_preview().is_none());
    }

    #[test]
    fn test_current_time_offset_visible_range() {
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert_eq!(AvailabilityGrid::current_time_offset(eight), Some(0.0));

        let half_past_nine = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(
            AvailabilityGrid::current_time_offset(half_past_nine),
            Some(1.5 * HOUR_HEIGHT)
        );

        let ten_pm = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        assert_eq!(
            AvailabilityGrid::current_time_offset(ten_pm),
            Some(14.0 * HOUR_HEIGHT)
        );
    }

    #[test]
    fn test_current_time_offset_sentinel() {
        let early = NaiveTime::from_hms_opt(7, 59, 0).unwrap();
        assert!(AvailabilityGrid::current_time_offset(early).is_none());

        let late = NaiveTime::from_hms_opt(22, 1, 0).unwrap();
        assert!(AvailabilityGrid::current_time_offset(late).is_none());

        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert!(AvailabilityGrid::current_time_offset(midnight).is_none());
    }

    #[test]
    fn test_cell_at_maps_pixels_to_slots() {
        let col_width = 100.0;
        assert_eq!(
            cell_at(vec2(0.0, 0.0), col_width),
            Some(GridCell { day: 0, hour: 8 })
        );
        assert_eq!(
            cell_at(vec2(150.0, 65.0), col_width),
            Some(GridCell { day: 1, hour: 9 })
        );
        assert_eq!(
            cell_at(vec2(699.0, 14.0 * HOUR_HEIGHT - 1.0), col_width),
            Some(GridCell { day: 6, hour: 21 })
        );
    }

    #[test]
    fn test_cell_at_rejects_outside() {
        let col_width = 100.0;
        assert!(cell_at(vec2(-1.0, 10.0), col_width).is_none());
        assert!(cell_at(vec2(10.0, -1.0), col_width).is_none());
        assert!(cell_at(vec2(700.0, 10.0), col_width).is_none());
        assert!(cell_at(vec2(10.0, 14.0 * HOUR_HEIGHT), col_width).is_none());
    }

    #[test]
    fn test_hour_range_rect_geometry() {
        let origin = pos2(10.0, 20.0);
        let rect = hour_range_rect(origin, 100.0, 1, 9, 12);
        assert_eq!(rect.left(), 110.0);
        assert_eq!(rect.top(), 20.0 + HOUR_HEIGHT);
        assert_eq!(rect.height(), 3.0 * HOUR_HEIGHT);
        assert_eq!(rect.width(), 100.0);
    }

    #[test]
    fn test_row_iteration_matches_bounds() {
        let hours: Vec<u8> = hour_rows().collect();
        assert_eq!(hours.len(), row_count());
        assert_eq!(hours.first(), Some(&GRID_START_HOUR));
        assert_eq!(hours.last(), Some(&(GRID_END_HOUR - 1)));
    }
}
