// src/domain/schedule/time_slot.rs
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Duration, Utc};

/// A candidate interval `[start_time, end_time)` offered by the organizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, available: bool) -> Self {
        Self {
            start_time,
            end_time,
            available,
        }
    }

    /// Start must be strictly before end; a zero-length slot is invalid.
    pub fn validate(&self) -> DomainResult<()> {
        if self.start_time < self.end_time {
            Ok(())
        } else {
            Err(DomainError::InvalidSlot("start >= end".into()))
        }
    }

    /// Half-open intersection test. Slots that only touch at a boundary do
    /// not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// `HH:MM-HH:MM` in UTC.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }

    /// Back-to-back slots of `interval` covering `[start, end)`. A trailing
    /// remainder shorter than `interval` is dropped.
    pub fn split_range(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        interval: Duration,
        available: bool,
    ) -> Vec<Self> {
        let mut slots = Vec::new();
        if interval <= Duration::zero() {
            return slots;
        }

        let mut current = start;
        while current < end {
            let slot_end = current + interval;
            if slot_end > end {
                break;
            }
            slots.push(Self::new(current, slot_end, available));
            current = slot_end;
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }

    fn slot(start: (u32, u32), end: (u32, u32)) -> TimeSlot {
        TimeSlot::new(at(start.0, start.1), at(end.0, end.1), true)
    }

    #[test]
    fn validate_accepts_ordered_slot() {
        assert!(slot((9, 0), (10, 0)).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_length_slot() {
        let err = slot((9, 0), (9, 0)).validate().unwrap_err();
        assert!(matches!(err, DomainError::InvalidSlot(ref msg) if msg == "start >= end"));
    }

    #[test]
    fn validate_rejects_reversed_slot() {
        assert!(matches!(
            slot((10, 0), (9, 0)).validate(),
            Err(DomainError::InvalidSlot(_))
        ));
    }

    #[test]
    fn abutting_slots_do_not_overlap() {
        let a = slot((9, 0), (10, 0));
        let b = slot((10, 0), (11, 0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn partially_covering_slots_overlap() {
        let a = slot((9, 0), (10, 30));
        let b = slot((10, 0), (11, 0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn identical_and_nested_slots_overlap() {
        let a = slot((9, 0), (12, 0));
        assert!(a.overlaps(&a));
        assert!(a.overlaps(&slot((10, 0), (11, 0))));
    }

    #[test]
    fn split_range_drops_partial_tail() {
        let slots = TimeSlot::split_range(at(9, 0), at(11, 45), Duration::minutes(30), false);
        let labels: Vec<_> = slots.iter().map(TimeSlot::label).collect();
        assert_eq!(
            labels,
            vec!["09:00-09:30", "09:30-10:00", "10:00-10:30", "10:30-11:00", "11:00-11:30"]
        );
        assert!(slots.iter().all(|s| !s.available));
        assert!(slots.iter().all(|s| s.duration() == Duration::minutes(30)));
    }

    #[test]
    fn split_range_with_non_positive_interval_is_empty() {
        assert!(TimeSlot::split_range(at(9, 0), at(10, 0), Duration::zero(), true).is_empty());
        assert!(
            TimeSlot::split_range(at(9, 0), at(10, 0), Duration::minutes(-5), true).is_empty()
        );
    }
}
