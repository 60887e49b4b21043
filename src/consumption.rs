use crate::{
    messages::{render, Messages},
    tracker::Tracker,
};
use log::debug;
use rust_decimal::Decimal;
use std::ops::{Deref, DerefMut};

/// Tracks calories eaten against a daily limit
#[derive(Clone, Debug)]
pub struct ConsumptionTracker {
    tracker: Tracker,
    messages: Messages,
}

impl ConsumptionTracker {
    pub fn new(limit: Decimal) -> Self {
        Self::from(Tracker::new(limit))
    }

    /// Replace the default (Russian) messages
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Describe how many calories are left for today.
    ///
    /// Unlike money, reaching the limit exactly counts as having eaten enough.
    pub fn remaining_calories(&self) -> String {
        let remaining = self.remaining();
        debug!("{} calories remaining for {}", remaining, self.today());

        if remaining > Decimal::ZERO {
            render(&self.messages.calories_remain, &remaining.to_string(), "")
        } else {
            self.messages.stop_eating.clone()
        }
    }
}

impl From<Tracker> for ConsumptionTracker {
    fn from(tracker: Tracker) -> Self {
        ConsumptionTracker {
            tracker,
            messages: Messages::default(),
        }
    }
}

impl Deref for ConsumptionTracker {
    type Target = Tracker;

    fn deref(&self) -> &Self::Target {
        &self.tracker
    }
}

impl DerefMut for ConsumptionTracker {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.tracker
    }
}
