// Property-based tests for the availability grid's drag normalization,
// time-cursor mapping and pixel/slot geometry

use chrono::NaiveTime;
use egui::vec2;
use proptest::prelude::*;

use mentor_connect::ui_egui::grid::{
    cell_at, hour_range_rect, AvailabilityGrid, GRID_END_HOUR, GRID_START_HOUR, HOUR_HEIGHT,
};

fn grid_hour() -> impl Strategy<Value = u8> {
    GRID_START_HOUR..GRID_END_HOUR
}

fn grid_day() -> impl Strategy<Value = u8> {
    0u8..7
}

proptest! {
    /// Any same-day drag yields day = d, start = min, end = max + 1
    #[test]
    fn drag_normalizes_to_inclusive_hour_range(
        day in grid_day(),
        h1 in grid_hour(),
        h2 in grid_hour(),
    ) {
        let mut grid = AvailabilityGrid::new("m1", Vec::new());
        grid.begin_drag(day, h1);
        grid.update_drag(day, h2);
        let block = grid.end_drag().cloned().expect("same-day drag creates a block");

        prop_assert_eq!(block.day, day);
        prop_assert_eq!(block.start_hour, h1.min(h2));
        prop_assert_eq!(block.end_hour, h1.max(h2) + 1);
        prop_assert!(block.start_hour < block.end_hour);
        prop_assert!(block.end_hour <= GRID_END_HOUR);
    }

    /// Cross-day drags never create a block
    #[test]
    fn cross_day_drag_never_creates(
        d1 in grid_day(),
        d2 in grid_day(),
        h1 in grid_hour(),
        h2 in grid_hour(),
    ) {
        prop_assume!(d1 != d2);
        let mut grid = AvailabilityGrid::new("m1", Vec::new());
        grid.begin_drag(d1, h1);
        grid.update_drag(d2, h2);
        prop_assert!(grid.end_drag().is_none());
        prop_assert!(grid.blocks().is_empty());
    }

    /// Starting a drag anywhere inside an existing block is ignored
    #[test]
    fn drag_inside_existing_block_is_ignored(
        day in grid_day(),
        start in GRID_START_HOUR..(GRID_END_HOUR - 1),
        extra in 1u8..4,
        offset in 0u8..4,
    ) {
        let end = (start + extra).min(GRID_END_HOUR);
        let inside = (start + offset).min(end - 1);

        let block = mentor_connect::models::availability::AvailabilityBlock::new(
            "a1", "m1", day, start, end,
        ).unwrap();
        let mut grid = AvailabilityGrid::new("m1", vec![block]);

        grid.begin_drag(day, inside);
        grid.update_drag(day, inside);
        prop_assert!(grid.end_drag().is_none());
        prop_assert_eq!(grid.blocks().len(), 1);
    }

    /// The time cursor is linear in (hour - grid start) inside the range
    /// and the not-visible sentinel outside it
    #[test]
    fn time_cursor_linear_within_grid(hour in 0u32..24, minute in 0u32..60) {
        let now = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        let fractional = hour as f32 + minute as f32 / 60.0;
        let offset = AvailabilityGrid::current_time_offset(now);

        if fractional < GRID_START_HOUR as f32 || fractional > GRID_END_HOUR as f32 {
            prop_assert!(offset.is_none());
        } else {
            let expected = (fractional - GRID_START_HOUR as f32) * HOUR_HEIGHT;
            let actual = offset.expect("time within the grid is visible");
            prop_assert!((actual - expected).abs() < 0.001);
        }
    }

    /// Deleting one block leaves every other block untouched
    #[test]
    fn delete_removes_exactly_one(count in 2usize..8, victim in 0usize..8) {
        prop_assume!(victim < count);
        let blocks: Vec<_> = (0..count)
            .map(|i| {
                mentor_connect::models::availability::AvailabilityBlock::new(
                    format!("a{i}"), "m1", (i % 7) as u8, 9, 11,
                ).unwrap()
            })
            .collect();
        let mut grid = AvailabilityGrid::new("m1", blocks);

        let victim_id = format!("a{}", victim);
        prop_assert!(grid.delete_block(&victim_id));
        prop_assert_eq!(grid.blocks().len(), count - 1);
        for i in (0..count).filter(|&i| i != victim) {
            let want_id = format!("a{}", i);
            prop_assert!(grid.blocks().iter().any(|b| b.id == want_id));
        }

        // And deleting something unknown changes nothing
        prop_assert!(!grid.delete_block("unknown"));
        prop_assert_eq!(grid.blocks().len(), count - 1);
    }

    /// The center of every cell's rect maps back to the same cell
    #[test]
    fn pixel_mapping_round_trips(
        day in grid_day(),
        hour in grid_hour(),
        col_width in 40.0f32..200.0,
    ) {
        let origin = egui::pos2(0.0, 0.0);
        let rect = hour_range_rect(origin, col_width, day, hour, hour + 1);
        let center = rect.center();
        let cell = cell_at(vec2(center.x, center.y), col_width)
            .expect("cell centers are inside the grid");
        prop_assert_eq!(cell.day, day);
        prop_assert_eq!(cell.hour, hour);
    }
}
