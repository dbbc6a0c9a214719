//! Top-N merger
//!
//! Combines the two normalized platform sequences into a single list
//! sorted by rank descending (higher rank value wins), truncated to the
//! top 100 overall, with the rank stripped from the survivors.

use super::normalize::RankedApp;
use gamedb_common::db::GamePayload;

/// Combined cap across both platforms, not per platform
pub const TOP_N: usize = 100;

pub fn merge_top(ios: Vec<RankedApp>, android: Vec<RankedApp>, limit: usize) -> Vec<GamePayload> {
    let mut combined = ios;
    combined.extend(android);
    // Stable sort: ties keep concatenation order
    combined.sort_by(|a, b| b.rank.cmp(&a.rank));
    combined.truncate(limit);
    combined.into_iter().map(|app| app.payload).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(rank: i64, name: &str, platform: &str) -> RankedApp {
        RankedApp {
            rank,
            payload: GamePayload {
                publisher_id: "p".into(),
                name: name.into(),
                platform: platform.into(),
                store_id: None,
                bundle_id: "b".into(),
                app_version: "1".into(),
                is_published: true,
            },
        }
    }

    #[test]
    fn output_is_sorted_descending_and_capped() {
        let ios: Vec<_> = (1..=70).map(|r| ranked(r, &format!("ios-{}", r), "ios")).collect();
        let android: Vec<_> = (1..=70)
            .map(|r| ranked(r, &format!("and-{}", r), "android"))
            .collect();

        let merged = merge_top(ios, android, TOP_N);
        assert_eq!(merged.len(), 100);
        // First entries carry the highest ranks (70 twice, then 69 twice, ...)
        assert_eq!(merged[0].name, "ios-70");
        assert_eq!(merged[1].name, "and-70");
    }

    #[test]
    fn cap_is_combined_not_per_platform() {
        // 60 iOS entries all outranking 60 Android entries: the whole
        // top-100 tail may still be iOS-free and vice versa
        let ios: Vec<_> = (1000..1060).map(|r| ranked(r, "ios-app", "ios")).collect();
        let android: Vec<_> = (1..=60).map(|r| ranked(r, "and-app", "android")).collect();

        let merged = merge_top(ios, android, TOP_N);
        assert_eq!(merged.len(), 100);

        let ios_count = merged.iter().filter(|p| p.platform == "ios").count();
        let android_count = merged.iter().filter(|p| p.platform == "android").count();
        assert_eq!(ios_count, 60);
        assert_eq!(android_count, 40);

        // Every iOS entry survives; the lowest-ranked Android entries drop
        assert!(merged[..60].iter().all(|p| p.platform == "ios"));
    }

    #[test]
    fn one_platform_can_dominate_entirely() {
        let ios: Vec<_> = (1000..1120).map(|r| ranked(r, "ios-app", "ios")).collect();
        let android: Vec<_> = (1..=60).map(|r| ranked(r, "and-app", "android")).collect();

        let merged = merge_top(ios, android, TOP_N);
        assert_eq!(merged.len(), 100);
        assert!(merged.iter().all(|p| p.platform == "ios"));
    }

    #[test]
    fn ties_keep_concatenation_order() {
        let ios = vec![ranked(5, "ios-first", "ios")];
        let android = vec![ranked(5, "and-second", "android")];

        let merged = merge_top(ios, android, TOP_N);
        assert_eq!(merged[0].name, "ios-first");
        assert_eq!(merged[1].name, "and-second");
    }

    #[test]
    fn fewer_than_limit_passes_everything_through() {
        let ios = vec![ranked(2, "a", "ios")];
        let android = vec![ranked(9, "b", "android")];

        let merged = merge_top(ios, android, TOP_N);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "b");
    }
}
