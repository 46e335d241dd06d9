use chrono::{Local, NaiveTime};

/// Source of the current wall-clock time of day. Lets time-dependent
/// operations be driven by a fixed time in tests.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local wall-clock time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

#[cfg(test)]
pub struct FixedClock(pub NaiveTime);

#[cfg(test)]
impl FixedClock {
    pub fn at(hour: u32, minute: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
