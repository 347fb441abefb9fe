use chrono::{DateTime, Local};

use crate::core::interfaces::ports::Clock;

pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
