//! Round-robin agent routing.
//!
//! An [`AgentRouter`] owns a fixed, non-empty roster and a rotation cursor.
//! Automatic selection scans forward from the cursor for at most one full
//! cycle and falls back to the first channel when nobody is available, so it
//! always produces a destination. Explicit selection never falls back.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::channel::{ChannelStatus, ContactChannel};
use crate::errors::DomainError;

#[derive(Clone, Debug)]
pub struct AgentRouter {
    roster: Vec<ContactChannel>,
    cursor: usize,
}

/// A roster entry paired with its position, for grouped presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndexedChannel<'a> {
    pub index: usize,
    pub channel: &'a ContactChannel,
}

impl AgentRouter {
    /// The cursor starts on index 0, so the first automatic selection
    /// examines index 1 first.
    pub fn new(roster: Vec<ContactChannel>) -> Result<Self, DomainError> {
        if roster.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        Ok(Self { roster, cursor: 0 })
    }

    pub fn select_next(&mut self) -> &ContactChannel {
        let len = self.roster.len();
        for _ in 0..len {
            self.cursor = (self.cursor + 1) % len;
            if self.roster[self.cursor].status.is_available() {
                let channel = &self.roster[self.cursor];
                debug!(
                    event_name = "storefront.routing.selected",
                    index = self.cursor,
                    label = %channel.label,
                    "round-robin selected available channel"
                );
                return channel;
            }
        }

        let fallback = &self.roster[0];
        warn!(
            event_name = "storefront.routing.fallback",
            label = %fallback.label,
            roster_len = len,
            "no available channel in a full cycle, falling back to first roster entry"
        );
        fallback
    }

    /// Returns the channel at `index` without touching the rotation cursor.
    pub fn select_specific(&self, index: i64) -> Result<&ContactChannel, DomainError> {
        let channel = self.resolve(index).ok_or(DomainError::InvalidChannelIndex {
            index,
            roster_len: self.roster.len(),
        })?;
        debug!(
            event_name = "storefront.routing.explicit",
            index,
            label = %channel.label,
            "explicit channel selected"
        );
        Ok(channel)
    }

    /// Sets the status of one channel. Out-of-range indices are ignored and
    /// reported as `false`.
    pub fn set_status(&mut self, index: i64, status: ChannelStatus) -> bool {
        let Some(position) = self.position(index) else {
            return false;
        };
        let channel = &mut self.roster[position];
        channel.status = status;
        info!(
            event_name = "storefront.routing.status_updated",
            index = position,
            label = %channel.label,
            status = %status,
            "channel status updated"
        );
        true
    }

    pub fn roster(&self) -> &[ContactChannel] {
        &self.roster
    }

    /// Available channels first, then away ones, each keeping roster order.
    pub fn partition_by_status(&self) -> (Vec<IndexedChannel<'_>>, Vec<IndexedChannel<'_>>) {
        self.roster
            .iter()
            .enumerate()
            .map(|(index, channel)| IndexedChannel { index, channel })
            .partition(|entry| entry.channel.status == ChannelStatus::Available)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index).ok().filter(|position| *position < self.roster.len())
    }

    fn resolve(&self, index: i64) -> Option<&ContactChannel> {
        self.position(index).map(|position| &self.roster[position])
    }
}

#[cfg(test)]
mod tests {
    use super::AgentRouter;
    use crate::domain::channel::{default_roster, ChannelStatus, ContactChannel};
    use crate::errors::DomainError;

    fn roster(statuses: &[ChannelStatus]) -> Vec<ContactChannel> {
        statuses
            .iter()
            .enumerate()
            .map(|(index, status)| {
                ContactChannel::new(
                    format!("25470000000{index}"),
                    format!("0700 000 00{index}"),
                    format!("Agent {index}"),
                    *status,
                )
            })
            .collect()
    }

    fn labels_of_next(router: &mut AgentRouter, calls: usize) -> Vec<String> {
        (0..calls).map(|_| router.select_next().label.clone()).collect()
    }

    #[test]
    fn empty_roster_is_rejected() {
        assert_eq!(AgentRouter::new(Vec::new()).err(), Some(DomainError::EmptyRoster));
    }

    #[test]
    fn full_cycle_visits_every_available_channel_starting_after_index_zero() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Available; 4])).expect("router");

        let labels = labels_of_next(&mut router, 5);

        assert_eq!(labels, vec!["Agent 1", "Agent 2", "Agent 3", "Agent 0", "Agent 1"]);
    }

    #[test]
    fn away_channels_are_skipped_in_rotation() {
        let mut router = AgentRouter::new(default_roster()).expect("router");

        let labels = labels_of_next(&mut router, 4);

        assert_eq!(labels, vec!["Sales Team 2", "Support Team", "Sales Team 1", "Sales Team 2"]);
    }

    #[test]
    fn total_unavailability_falls_back_to_first_channel() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Away; 3])).expect("router");

        for _ in 0..4 {
            assert_eq!(router.select_next().label, "Agent 0");
        }
    }

    #[test]
    fn fallback_scan_advances_cursor_by_one_full_cycle() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Away; 3])).expect("router");

        router.select_next();

        assert_eq!(router.cursor(), 0);
    }

    #[test]
    fn single_channel_roster_always_returns_that_channel() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Available])).expect("router");

        assert_eq!(labels_of_next(&mut router, 3), vec!["Agent 0"; 3]);
    }

    #[test]
    fn specific_selection_rejects_out_of_range_without_moving_cursor() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Available; 4])).expect("router");
        router.select_next();
        let cursor = router.cursor();

        assert_eq!(
            router.select_specific(-1).err(),
            Some(DomainError::InvalidChannelIndex { index: -1, roster_len: 4 })
        );
        assert_eq!(
            router.select_specific(4).err(),
            Some(DomainError::InvalidChannelIndex { index: 4, roster_len: 4 })
        );
        assert_eq!(router.cursor(), cursor);
    }

    #[test]
    fn specific_selection_returns_channel_and_keeps_rotation() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Available; 4])).expect("router");

        let first = router.select_specific(0).expect("index 0").clone();
        assert_eq!(first, router.roster()[0]);
        assert_eq!(router.cursor(), 0);

        router.select_specific(3).expect("index 3");
        assert_eq!(router.select_next().label, "Agent 1");
    }

    #[test]
    fn specific_selection_ignores_status() {
        let router = AgentRouter::new(roster(&[ChannelStatus::Away; 2])).expect("router");

        assert_eq!(router.select_specific(1).map(|channel| channel.label.as_str()), Ok("Agent 1"));
    }

    #[test]
    fn set_status_changes_only_the_named_channel() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Available; 4])).expect("router");
        router.select_next();
        let before = router.roster().to_vec();
        let cursor = router.cursor();

        assert!(router.set_status(2, ChannelStatus::Away));

        for (index, (old, new)) in before.iter().zip(router.roster()).enumerate() {
            if index == 2 {
                assert_eq!(new.status, ChannelStatus::Away);
                assert_eq!(new.address, old.address);
            } else {
                assert_eq!(new, old);
            }
        }
        assert_eq!(router.cursor(), cursor);
    }

    #[test]
    fn set_status_out_of_range_is_a_no_op() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Available; 2])).expect("router");
        let before = router.roster().to_vec();

        assert!(!router.set_status(-1, ChannelStatus::Away));
        assert!(!router.set_status(2, ChannelStatus::Away));
        assert_eq!(router.roster(), before.as_slice());
    }

    #[test]
    fn status_changes_feed_into_next_rotation() {
        let mut router = AgentRouter::new(roster(&[ChannelStatus::Away; 3])).expect("router");

        router.set_status(2, ChannelStatus::Available);

        assert_eq!(labels_of_next(&mut router, 2), vec!["Agent 2", "Agent 2"]);
    }

    #[test]
    fn partition_groups_by_status_keeping_roster_indices() {
        let router = AgentRouter::new(default_roster()).expect("router");

        let (available, away) = router.partition_by_status();

        let available: Vec<usize> = available.iter().map(|entry| entry.index).collect();
        let away: Vec<usize> = away.iter().map(|entry| entry.index).collect();
        assert_eq!(available, vec![0, 1, 3]);
        assert_eq!(away, vec![2]);
    }

    #[test]
    fn independent_routers_do_not_share_rotation() {
        let mut checkout = AgentRouter::new(default_roster()).expect("router");
        let mut inquiry = AgentRouter::new(default_roster()).expect("router");

        checkout.select_next();
        checkout.select_next();

        assert_eq!(inquiry.select_next().label, "Sales Team 2");
        assert_eq!(checkout.cursor(), 3);
    }
}
