// Availability module
// Mentor-declared weekly availability blocks

use serde::{Deserialize, Serialize};

/// Number of weekday columns on the availability grid (Sunday = 0).
pub const DAYS_PER_WEEK: u8 = 7;

/// A contiguous hour range on a given weekday during which a mentor is
/// willing to be booked.
///
/// `start_hour` is inclusive, `end_hour` exclusive. Blocks are allowed to
/// overlap each other; the grid renders them independently and applies no
/// merge or rejection logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBlock {
    pub id: String,
    pub mentor_id: String,
    /// Weekday column, 0-6 (Sunday-Saturday)
    pub day: u8,
    /// First hour covered by the block (inclusive)
    pub start_hour: u8,
    /// Hour the block ends at (exclusive)
    pub end_hour: u8,
}

impl AvailabilityBlock {
    /// Create a new block with validation
    ///
    /// # Arguments
    /// * `id` - Unique block identifier
    /// * `mentor_id` - Owning mentor
    /// * `day` - Weekday column, 0-6 (Sunday-Saturday)
    /// * `start_hour` - Inclusive start hour
    /// * `end_hour` - Exclusive end hour, must be after `start_hour`
    pub fn new(
        id: impl Into<String>,
        mentor_id: impl Into<String>,
        day: u8,
        start_hour: u8,
        end_hour: u8,
    ) -> Result<Self, String> {
        let block = Self {
            id: id.into(),
            mentor_id: mentor_id.into(),
            day,
            start_hour,
            end_hour,
        };
        block.validate()?;
        Ok(block)
    }

    /// Validate the block invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.day >= DAYS_PER_WEEK {
            return Err(format!("Day must be 0-6, got {}", self.day));
        }
        if self.start_hour >= self.end_hour {
            return Err("Block start hour must be before its end hour".to_string());
        }
        if self.end_hour > 24 {
            return Err(format!("End hour must be at most 24, got {}", self.end_hour));
        }
        Ok(())
    }

    /// Whether the given grid cell falls inside this block
    pub fn contains(&self, day: u8, hour: u8) -> bool {
        self.day == day && hour >= self.start_hour && hour < self.end_hour
    }

    /// Length of the block in whole hours
    pub fn duration_hours(&self) -> u8 {
        self.end_hour - self.start_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_success() {
        let block = AvailabilityBlock::new("a1", "m1", 1, 9, 12).unwrap();
        assert_eq!(block.day, 1);
        assert_eq!(block.start_hour, 9);
        assert_eq!(block.end_hour, 12);
        assert_eq!(block.duration_hours(), 3);
    }

    #[test]
    fn test_new_block_rejects_inverted_hours() {
        let result = AvailabilityBlock::new("a1", "m1", 1, 12, 9);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_block_rejects_zero_length() {
        let result = AvailabilityBlock::new("a1", "m1", 1, 9, 9);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_block_rejects_bad_day() {
        let result = AvailabilityBlock::new("a1", "m1", 7, 9, 12);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Day must be 0-6"));
    }

    #[test]
    fn test_new_block_rejects_hour_past_midnight() {
        let result = AvailabilityBlock::new("a1", "m1", 3, 20, 25);
        assert!(result.is_err());
    }

    #[test]
    fn test_contains_inclusive_start_exclusive_end() {
        let block = AvailabilityBlock::new("a1", "m1", 2, 9, 12).unwrap();
        assert!(block.contains(2, 9));
        assert!(block.contains(2, 11));
        assert!(!block.contains(2, 12));
        assert!(!block.contains(2, 8));
        assert!(!block.contains(3, 10));
    }

    #[test]
    fn test_serde_round_trip() {
        let block = AvailabilityBlock::new("a1", "m1", 5, 13, 18).unwrap();
        let json = serde_json::to_string(&block).unwrap();
        let back: AvailabilityBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(block, back);
    }
}
