//! List views over a set of proposals: status filter, recency order and
//! per-status counts for the filter tabs.

use serde::Serialize;

use crate::domain::proposal::{Proposal, ProposalStatus};

/// Number of proposals shown in the dashboard's recent-activity list.
pub const RECENT_LIMIT: usize = 5;

/// Keeps the proposals with `status`, or all of them when `status` is `None`.
///
/// Input order is preserved.
pub fn filter_by_status(records: Vec<Proposal>, status: Option<ProposalStatus>) -> Vec<Proposal> {
    match status {
        None => records,
        Some(status) => records
            .into_iter()
            .filter(|p| p.status() == status)
            .collect(),
    }
}

/// Orders proposals newest first.
///
/// The sort is stable. Proposals without a creation time keep their input
/// positions; the dated ones are ordered among the remaining positions.
pub fn sort_by_recency(records: Vec<Proposal>) -> Vec<Proposal> {
    let dated_slots: Vec<bool> = records.iter().map(|p| p.created_at().is_some()).collect();
    let (mut dated, undated): (Vec<Proposal>, Vec<Proposal>) =
        records.into_iter().partition(|p| p.created_at().is_some());

    dated.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

    let mut dated = dated.into_iter();
    let mut undated = undated.into_iter();
    dated_slots
        .into_iter()
        .filter_map(|is_dated| {
            if is_dated {
                dated.next()
            } else {
                undated.next()
            }
        })
        .collect()
}

/// The `n` most recent proposals.
pub fn recent(records: Vec<Proposal>, n: usize) -> Vec<Proposal> {
    let mut sorted = sort_by_recency(records);
    sorted.truncate(n);
    sorted
}

/// Proposal counts per status, used to label the list filter tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub draft: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub fn count_by_status(records: &[Proposal]) -> StatusCounts {
    records.iter().fold(StatusCounts::default(), |mut counts, p| {
        counts.all += 1;
        match p.status() {
            ProposalStatus::Draft => counts.draft += 1,
            ProposalStatus::Accepted => counts.accepted += 1,
            ProposalStatus::Rejected => counts.rejected += 1,
        }
        counts
    })
}
