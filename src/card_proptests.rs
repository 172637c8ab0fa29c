use super::*;
use proptest::prelude::*;

proptest! {
    /// 区切り記号を除去すると元の数字列に戻る
    #[test]
    fn prop_grouping_preserves_digits(amount in 0u32..=u32::MAX) {
        let formatted = format_usd(amount);
        prop_assert!(formatted.starts_with('$'));

        let digits: String = formatted[1..].chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits, amount.to_string());
    }

    /// 区切り位置は右から3桁ごと
    #[test]
    fn prop_groups_of_three(amount in 0u32..=u32::MAX) {
        let formatted = format_usd(amount);
        let groups: Vec<&str> = formatted[1..].split(',').collect();

        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
