//! Donation schedule constants
//! ===========================
//! Consumed by the orchestration layer that periodically redirects a share of
//! computed work to a beneficiary. The primitives never read them.

/// Lowest donation share accepted, in percent.
pub const MIN_DEV_DONATE_PERCENT: u8 = 0;

/// Length of one donation cycle in seconds (100 minutes).
pub const DONATE_CYCLE_TIME: u32 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("donation share {0}% exceeds 100%")]
    AboveMaximum(u8),
    #[error("donation cycle must be longer than zero seconds")]
    EmptyCycle,
}

/// Share of each cycle redirected, and the cycle length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DonationSchedule {
    pub percent: u8,
    pub cycle_secs: u32,
}

impl Default for DonationSchedule {
    fn default() -> Self {
        Self {
            percent: MIN_DEV_DONATE_PERCENT,
            cycle_secs: DONATE_CYCLE_TIME,
        }
    }
}

impl DonationSchedule {
    /// Schedule with the default cycle length.
    pub fn new(percent: u8) -> Result<Self, ScheduleError> {
        Self::with_cycle(percent, DONATE_CYCLE_TIME)
    }

    pub fn with_cycle(percent: u8, cycle_secs: u32) -> Result<Self, ScheduleError> {
        if percent > 100 {
            return Err(ScheduleError::AboveMaximum(percent));
        }
        if cycle_secs == 0 {
            return Err(ScheduleError::EmptyCycle);
        }
        Ok(Self {
            percent,
            cycle_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_donates_nothing() {
        let schedule = DonationSchedule::default();
        assert_eq!(schedule.cycle_secs, 6000);
        assert_eq!(schedule.percent, 0);
    }

    #[test]
    fn whole_percent_range_is_accepted() {
        assert_eq!(
            DonationSchedule::new(MIN_DEV_DONATE_PERCENT),
            Ok(DonationSchedule::default())
        );
        assert_eq!(DonationSchedule::new(100).map(|s| s.percent), Ok(100));
        assert_eq!(
            DonationSchedule::with_cycle(100, 90),
            Ok(DonationSchedule {
                percent: 100,
                cycle_secs: 90
            })
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            DonationSchedule::new(101),
            Err(ScheduleError::AboveMaximum(101))
        );
        assert_eq!(
            DonationSchedule::with_cycle(5, 0),
            Err(ScheduleError::EmptyCycle)
        );
        assert_eq!(
            std::format!("{}", ScheduleError::AboveMaximum(101)),
            "donation share 101% exceeds 100%"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_shape() {
        let schedule = DonationSchedule::new(2).unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        assert_eq!(json, r#"{"percent":2,"cycle_secs":6000}"#);
        let back: DonationSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
