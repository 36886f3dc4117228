#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::domain::dashboard::summary::{add_value, summarize, ProposalStats};
    use crate::domain::foundation::ProposalId;
    use crate::domain::proposal::test_support::proposal;
    use crate::domain::proposal::ProposalStatus;

    #[test]
    fn empty_input_yields_zero_stats() {
        let stats = summarize(&[]);
        assert_eq!(stats, ProposalStats::default());
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.accepted_value, Decimal::ZERO);
    }

    #[test]
    fn accepted_draft_and_rejected_fall_into_their_buckets() {
        let records = vec![
            proposal("a", ProposalStatus::Accepted, "1000"),
            proposal("b", ProposalStatus::Draft, "2000"),
            proposal("c", ProposalStatus::Rejected, "500"),
        ];

        let stats = summarize(&records);

        assert_eq!(stats.accepted_value, Decimal::from(1000));
        assert_eq!(stats.pending_value, Decimal::from(2000));
        assert_eq!(stats.accepted_count, 1);
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.needs_attention_count, 1);
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.invalid_amount_count, 0);
    }

    #[test]
    fn unparseable_amount_counts_as_zero_and_is_flagged() {
        let records = vec![
            proposal("a", ProposalStatus::Accepted, "ca 5000"),
            proposal("b", ProposalStatus::Accepted, "1500.50"),
        ];

        let stats = summarize(&records);

        assert_eq!(stats.accepted_value, "1500.50".parse::<Decimal>().unwrap());
        assert_eq!(stats.accepted_count, 2);
        assert_eq!(stats.invalid_amount_count, 1);
    }

    #[test]
    fn largest_amounts_sum_exactly() {
        let records: Vec<_> = (0..1000)
            .map(|i| proposal(&format!("p-{}", i), ProposalStatus::Draft, "1000000000000000"))
            .collect();

        let stats = summarize(&records);

        assert_eq!(stats.pending_value, Decimal::from(1_000_000_000_000_000_000u64));
        assert_eq!(stats.pending_count, 1000);
        assert_eq!(stats.invalid_amount_count, 0);
    }

    #[test]
    fn out_of_range_amounts_count_as_invalid() {
        let records = vec![
            proposal("a", ProposalStatus::Draft, "50000000000000000000000000000"),
            proposal("b", ProposalStatus::Draft, "50000000000000000000000000000"),
            proposal("c", ProposalStatus::Draft, "100"),
        ];

        let stats = summarize(&records);

        assert_eq!(stats.pending_value, Decimal::from(100));
        assert_eq!(stats.pending_count, 3);
        assert_eq!(stats.invalid_amount_count, 2);
    }

    #[test]
    fn value_total_saturates_instead_of_overflowing() {
        let id = ProposalId::new("p-1").unwrap();

        assert_eq!(add_value(Decimal::MAX, Decimal::ONE, &id), Decimal::MAX);
        assert_eq!(add_value(Decimal::MAX - Decimal::ONE, Decimal::TEN, &id), Decimal::MAX);
        assert_eq!(add_value(Decimal::ONE, Decimal::ONE, &id), Decimal::TWO);
    }

    #[test]
    fn stats_serialize_in_camel_case() {
        let stats = summarize(&[proposal("a", ProposalStatus::Draft, "2000")]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["pendingValue"], "2000");
        assert_eq!(json["needsAttentionCount"], 1);
        assert_eq!(json["totalCount"], 1);
    }

    fn status_strategy() -> impl Strategy<Value = ProposalStatus> {
        prop_oneof![
            Just(ProposalStatus::Draft),
            Just(ProposalStatus::Accepted),
            Just(ProposalStatus::Rejected),
        ]
    }

    fn entries_and_permutation(
    ) -> impl Strategy<Value = (Vec<(ProposalStatus, u32)>, Vec<(ProposalStatus, u32)>)> {
        prop::collection::vec((status_strategy(), 0u32..1_000_000u32), 0..20)
            .prop_flat_map(|entries| (Just(entries.clone()), Just(entries).prop_shuffle()))
    }

    fn build(entries: &[(ProposalStatus, u32)]) -> Vec<crate::domain::proposal::Proposal> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (status, ore))| {
                let amount = Decimal::new(*ore as i64, 2).to_string();
                proposal(&format!("p-{}", i), *status, &amount)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn summarize_is_order_independent((original, permuted) in entries_and_permutation()) {
            prop_assert_eq!(summarize(&build(&original)), summarize(&build(&permuted)));
        }
    }
}
