// ── Hospital view ──
//
// Derived, per-query view of a faction's hospitalized members, ordered by
// soonest release. Built fresh from each API response and never stored.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use hosptrack_api::{FactionMember, HospitalEntry, MemberId};

use crate::duration::format_remaining_secs;

/// A faction member currently in hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalizedMember {
    pub member_id: MemberId,
    pub name: String,
    /// Unix timestamp (seconds) at which the member is released.
    pub until: i64,
    /// Seconds left relative to the view's `now`, never negative.
    pub remaining_secs: i64,
}

impl HospitalizedMember {
    pub fn remaining(&self) -> TimeDelta {
        TimeDelta::seconds(self.remaining_secs)
    }

    /// Remaining time as `H:MM:SS` or `MM:SS`.
    pub fn remaining_display(&self) -> String {
        format_remaining_secs(self.remaining_secs)
    }

    pub fn release_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.until, 0)
    }
}

/// Hospitalized members ordered by release time, earliest first.
#[derive(Debug, Clone, Serialize)]
pub struct HospitalView {
    now: DateTime<Utc>,
    members: Vec<HospitalizedMember>,
}

impl HospitalView {
    /// Build from a full member map, keeping only members in hospital.
    pub fn build(members: &BTreeMap<MemberId, FactionMember>, now: DateTime<Utc>) -> Self {
        let candidates = members
            .iter()
            .filter(|(_, member)| member.status.is_hospitalized())
            .map(|(id, member)| (*id, member.name.clone(), member.status.until));
        Self::from_candidates(candidates, now)
    }

    /// Build from the already-filtered map returned by
    /// `TornClient::get_faction_members_in_hospital`.
    pub fn from_entries(entries: BTreeMap<MemberId, HospitalEntry>, now: DateTime<Utc>) -> Self {
        let candidates = entries
            .into_iter()
            .map(|(id, entry)| (id, entry.name, entry.until));
        Self::from_candidates(candidates, now)
    }

    fn from_candidates(
        candidates: impl Iterator<Item = (MemberId, String, i64)>,
        now: DateTime<Utc>,
    ) -> Self {
        let now_secs = now.timestamp();
        let mut members: Vec<HospitalizedMember> = candidates
            .map(|(member_id, name, until)| HospitalizedMember {
                member_id,
                name,
                until,
                remaining_secs: until.saturating_sub(now_secs).max(0),
            })
            .collect();
        // Stable: equal release times keep member-ID order.
        members.sort_by_key(|m| m.until);
        Self { now, members }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn members(&self) -> &[HospitalizedMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HospitalizedMember> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a HospitalView {
    type Item = &'a HospitalizedMember;
    type IntoIter = std::slice::Iter<'a, HospitalizedMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use hosptrack_api::MemberStatus;

    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(NOW, 0).expect("valid timestamp")
    }

    fn id(raw: u64) -> MemberId {
        MemberId::new(raw).expect("non-zero")
    }

    fn member(name: &str, state: &str, until: i64) -> FactionMember {
        FactionMember {
            name: name.into(),
            status: MemberStatus {
                state: state.into(),
                until,
                ..MemberStatus::default()
            },
            ..FactionMember::default()
        }
    }

    #[test]
    fn keeps_only_hospital_members() {
        let members = BTreeMap::from([
            (id(1), member("Okay One", "Okay", 0)),
            (id(2), member("Patient", "Hospital", NOW + 600)),
            (id(3), member("Flyer", "Traveling", NOW + 900)),
        ]);

        let view = HospitalView::build(&members, now());

        assert_eq!(view.len(), 1);
        assert_eq!(view.members()[0].member_id, id(2));
        assert_eq!(view.members()[0].name, "Patient");
        assert_eq!(view.members()[0].remaining_secs, 600);
    }

    #[test]
    fn orders_by_soonest_release() {
        let members = BTreeMap::from([
            (id(10), member("Later", "Hospital", NOW + 7200)),
            (id(20), member("Sooner", "Hospital", NOW + 60)),
        ]);

        let view = HospitalView::build(&members, now());
        let names: Vec<&str> = view.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, vec!["Sooner", "Later"]);
    }

    #[test]
    fn equal_release_times_keep_member_id_order() {
        let entries = BTreeMap::from([
            (id(30), HospitalEntry { name: "C".into(), until: NOW + 100 }),
            (id(10), HospitalEntry { name: "A".into(), until: NOW + 100 }),
            (id(20), HospitalEntry { name: "B".into(), until: NOW + 50 }),
        ]);

        let view = HospitalView::from_entries(entries, now());
        let ids: Vec<u64> = view.iter().map(|m| m.member_id.get()).collect();

        assert_eq!(ids, vec![20, 10, 30]);
    }

    #[test]
    fn remaining_time_formats_and_clamps() {
        let entries = BTreeMap::from([
            (id(1), HospitalEntry { name: "Hour".into(), until: NOW + 3600 }),
            (id(2), HospitalEntry { name: "Under".into(), until: NOW + 3599 }),
            (id(3), HospitalEntry { name: "Gone".into(), until: NOW - 30 }),
        ]);

        let view = HospitalView::from_entries(entries, now());
        let shown: Vec<(String, String)> = view
            .iter()
            .map(|m| (m.name.clone(), m.remaining_display()))
            .collect();

        assert_eq!(
            shown,
            vec![
                ("Gone".to_owned(), "00:00".to_owned()),
                ("Under".to_owned(), "59:59".to_owned()),
                ("Hour".to_owned(), "1:00:00".to_owned()),
            ]
        );
        assert_eq!(view.members()[2].remaining(), TimeDelta::hours(1));
    }

    #[test]
    fn empty_input_gives_empty_view() {
        let view = HospitalView::build(&BTreeMap::new(), now());
        assert!(view.is_empty());
        assert_eq!(view.now(), now());
    }
}
