//! Integration tests for chatlens.
//!
//! These exercise the public API end to end: raw export text in, timeline
//! and statistics out.

use std::collections::BTreeMap;

use chatlens::classify::{Sentiment, SentimentClassifier};
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::core::{FilterConfig, apply_filters};
use chatlens::metrics::{self, RankEntry};
use chatlens::parser::ChatParser;
use chatlens::parsing::TimestampFormat;
use chatlens::prelude::*;
use chrono::{NaiveDate, Weekday};

const TWELVE_HOUR_CHAT: &str = "\
12/3/2023, 9:00 AM - Messages and calls are end-to-end encrypted.
12/3/2023, 9:01 AM - Alice: Good morning everyone!
12/3/2023, 9:02 AM - Bob: morning 😀
12/3/2023, 9:05 AM - Carol: <Media omitted>
12/3/2023, 11:30 PM - Alice: Did you see this?
https://example.com/article
pretty cool
13/3/2023, 7:45 AM - Bob: I hate mondays
13/3/2023, 8:00 AM - Alice: not bad at all 😀😀
13/3/2023, 12:10 PM - Carol: www.example.org has the menu
14/3/2023, 12:00 AM - Carol: midnight snack 🍕
";

const TWENTY_FOUR_HOUR_CHAT: &str = "\
05/01/23, 22:15 - Bob: <Media omitted>
05/01/23, 22:16 - Alice: fuck
05/01/23, 22:17 - Alice: hello there
06/01/23, 08:00 - Bob: oh fuck off
";

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_twelve_hour_export() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);

    assert_eq!(timeline.format(), Some(TimestampFormat::TwelveHour));
    // the encryption notice has no sender and is skipped
    assert_eq!(timeline.len(), 8);
    assert_eq!(timeline[0].sender, "Alice");
    assert_eq!(timeline[0].body, "Good morning everyone!");
    assert_eq!(
        timeline[3].body,
        "Did you see this?\nhttps://example.com/article\npretty cool"
    );
    assert_eq!(timeline[3].hour(), Some(23));
    assert_eq!(timeline[7].hour(), Some(0));
    assert_eq!(timeline[7].date(), NaiveDate::from_ymd_opt(2023, 3, 14));
}

#[test]
fn test_twenty_four_hour_export() {
    let timeline = chatlens::parse(TWENTY_FOUR_HOUR_CHAT);

    assert_eq!(timeline.format(), Some(TimestampFormat::TwentyFourHour));
    assert_eq!(timeline.len(), 4);
    assert_eq!(timeline[0].year(), Some(2023));
    assert_eq!(timeline[0].month_name(), Some("January"));
    assert_eq!(timeline[0].weekday(), Some(Weekday::Thu));
    assert_eq!(timeline[0].hour(), Some(22));
    assert_eq!(timeline[0].minute(), Some(15));
}

#[test]
fn test_single_line_example() {
    let timeline = chatlens::parse("5/1/2023, 10:15 AM - Alice: Hello!");
    let msg = &timeline[0];
    assert_eq!(msg.sender, "Alice");
    assert_eq!(msg.body, "Hello!");
    assert_eq!(msg.hour(), Some(10));
    assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2023, 1, 5));
}

#[test]
fn test_media_line_example() {
    let timeline = chatlens::parse("5/1/2023, 22:15 - Bob: <Media omitted>");
    assert_eq!(metrics::media_messages(&timeline, chatlens::config::MEDIA_OMITTED), 1);
    assert_eq!(metrics::total_words(&timeline), 2);
}

#[test]
fn test_twelve_hour_wins_over_twenty_four_hour_lines() {
    let raw = "\
1/2/2023, 10:00 AM - Alice: morning
1/2/2023, 22:00 - Bob: looks like 24h
1/2/2023, 11:00 PM - Bob: evening";
    let timeline = chatlens::parse(raw);

    assert_eq!(timeline.format(), Some(TimestampFormat::TwelveHour));
    assert_eq!(timeline.len(), 2);
    assert!(timeline.iter().all(|r| r.body != "looks like 24h"));
    assert_eq!(timeline[1].hour(), Some(23));
}

#[test]
fn test_blank_senders_dropped() {
    let raw = "\
1/2/2023, 10:00 - Alice: one
1/2/2023, 10:01 -  : two
1/2/2023, 10:02 - Bob: three";
    let timeline = chatlens::parse(raw);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.senders(), vec!["Alice", "Bob"]);
}

#[test]
fn test_invalid_timestamp_kept_without_time() {
    let raw = "\
31/2/2023, 10:00 - Alice: impossible date
1/3/2023, 10:00 - Bob: fine";
    let timeline = chatlens::parse(raw);

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].timestamp, None);
    assert_eq!(timeline[0].hour(), None);
    assert!(timeline[1].timestamp.is_some());

    // counted in totals but not in date statistics
    assert_eq!(metrics::total_messages(&timeline), 2);
    assert_eq!(metrics::active_days(&timeline).total, 1);
    assert_eq!(metrics::first_message_date(&timeline), None);
}

#[test]
fn test_no_matching_lines() {
    let timeline = chatlens::parse("just some text\nnothing like an export\n");
    assert!(timeline.is_empty());
    assert_eq!(timeline.format(), None);
}

#[test]
fn test_forced_format() {
    let parser = ChatParser::with_config(ParserConfig::new().with_format(TimestampFormat::TwentyFourHour));
    let timeline = parser.parse_str(TWELVE_HOUR_CHAT);
    // none of the 12-hour lines match the forced 24-hour pattern
    assert!(timeline.is_empty());
    assert_eq!(parser.detect_format(TWELVE_HOUR_CHAT), Some(TimestampFormat::TwentyFourHour));
}

#[test]
fn test_multiline_joining_can_be_disabled() {
    let parser = ChatParser::with_config(ParserConfig::new().with_join_multiline(false));
    let timeline = parser.parse_str(TWELVE_HOUR_CHAT);
    assert_eq!(timeline[3].body, "Did you see this?");
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8() {
    let err = chatlens::parse_bytes(&[0x31, 0x2f, 0xff, 0xfe]).unwrap_err();
    assert!(err.is_utf8());

    let ok = chatlens::parse_bytes(TWENTY_FOUR_HOUR_CHAT.as_bytes()).unwrap();
    assert_eq!(ok.len(), 4);
}

#[test]
fn test_parse_file_missing() {
    let err = chatlens::parse_file("/definitely/not/here/chat.txt").unwrap_err();
    assert!(err.is_io());
}

// =========================================================================
// Metrics
// =========================================================================

#[test]
fn test_counts() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    assert_eq!(metrics::total_messages(&timeline), 8);
    assert_eq!(metrics::media_messages(&timeline, "<Media omitted>"), 1);
    assert_eq!(metrics::links_shared(&timeline), 2);
    assert_eq!(
        metrics::longest_message(&timeline),
        Some("Did you see this?\nhttps://example.com/article\npretty cool")
    );
}

#[test]
fn test_offensive_words_example() {
    let raw = "\
1/1/2023, 10:00 - A: fuck
1/1/2023, 10:01 - B: hello
1/1/2023, 10:02 - A: what the fuck";
    let timeline = chatlens::parse(raw);
    let denylist = AnalysisConfig::default().denylist_set();

    let hits = metrics::offensive_words(&timeline, &denylist);
    assert_eq!(hits, BTreeMap::from([("fuck".to_string(), 2)]));
}

#[test]
fn test_conversation_starter_example() {
    let raw = "\
1/1/2023, 10:00 - Alice: hi
1/1/2023, 10:05 - Bob: hey";
    let starters = metrics::conversation_starters(&chatlens::parse(raw));
    assert_eq!(starters, vec![RankEntry::new("Alice", 1)]);
}

#[test]
fn test_total_equals_sum_per_sender() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    let total = metrics::total_messages(&timeline);
    let per_sender: usize = timeline
        .senders()
        .iter()
        .map(|s| metrics::total_messages(timeline.by_sender(s)))
        .sum();
    assert_eq!(total, per_sender);
}

#[test]
fn test_active_days_and_heatmap() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    let days = metrics::active_days(&timeline);

    // 12 Mar 2023 was a Sunday
    let sunday = &days.days[6];
    assert_eq!(sunday.day, "Sunday");
    assert_eq!(sunday.count, 4);
    assert_eq!(sunday.percentage, 50.0);
    assert_eq!(days.days[0].count, 3);

    let sum: f64 = days.days.iter().map(|d| d.percentage).sum();
    assert!((sum - 100.0).abs() < 0.05);

    let heatmap = metrics::activity_heatmap(&timeline);
    assert_eq!(heatmap.get(Weekday::Sun, 9), 3);
    assert_eq!(heatmap.get(Weekday::Tue, 0), 1);
}

#[test]
fn test_sentiment_with_fake_classifier() {
    let timeline = chatlens::parse(TWENTY_FOUR_HOUR_CHAT);
    let fake = |text: &str| if text.contains("fuck") { -1.0 } else { 0.0 };
    assert_eq!(fake.polarity("fuck"), -1.0);

    let counts = metrics::sentiment(&timeline, &fake);
    assert_eq!(counts.get(Sentiment::Negative), 2);
    assert_eq!(counts.get(Sentiment::Neutral), 2);
    assert_eq!(counts.get(Sentiment::Positive), 0);
}

#[test]
fn test_emoji_usage() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    let usage = metrics::emoji_usage(&timeline, &UnicodeEmoji);
    assert_eq!(usage.get("😀"), Some(&3));
    assert_eq!(usage.get("🍕"), Some(&1));
    assert_eq!(metrics::top_emojis(&usage, 1), vec![RankEntry::new("😀", 3)]);
}

// =========================================================================
// Filtering and reports
// =========================================================================

#[test]
fn test_filter_subset_metrics() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    let filter = FilterConfig::new().with_date_from("2023-03-13").unwrap();
    let subset = apply_filters(timeline.records(), &filter);

    assert_eq!(subset.len(), 4);
    assert_eq!(metrics::total_messages(subset.iter().copied()), 4);
}

#[test]
fn test_report_for_one_sender() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    let report = Analyzer::new().analyze(&timeline, &FilterConfig::new().with_sender("Carol"));

    assert_eq!(report.total_messages, 3);
    assert_eq!(report.media_messages, 1);
    assert_eq!(report.links_shared, 1);
    // full-timeline statistics
    assert_eq!(report.senders, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(report.top_users[0], RankEntry::new("Alice", 3));
    assert_eq!(
        report.conversation_starters,
        vec![
            RankEntry::new("Alice", 1),
            RankEntry::new("Bob", 1),
            RankEntry::new("Carol", 1)
        ]
    );
}

#[test]
fn test_report_for_unknown_sender_is_zero() {
    let timeline = chatlens::parse(TWELVE_HOUR_CHAT);
    let report = Analyzer::new().analyze(&timeline, &FilterConfig::new().with_sender("Nobody"));

    assert_eq!(report.total_messages, 0);
    assert_eq!(report.longest_message, "");
    assert!(report.emoji_usage.is_empty());
    assert!(report.active_days.is_empty());
    assert_eq!(report.top_users.len(), 3);
}

#[test]
fn test_report_json_roundtrip_fields() {
    let report = Analyzer::new().analyze(&chatlens::parse(TWENTY_FOUR_HOUR_CHAT), &FilterConfig::new());
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["format"], "twenty-four-hour");
    assert_eq!(value["total_messages"], 4);
    assert_eq!(value["media_messages"], 1);
    assert_eq!(value["offensive_words"]["fuck"], 2);
    assert_eq!(value["first_message_date"], "2023-01-05T22:15:00");
    assert_eq!(value["activity_heatmap"]["cells"].as_array().unwrap().len(), 7);
}

#[test]
fn test_analysis_config_from_json() {
    let config = AnalysisConfig::from_json(r#"{"top_users_limit": 1, "denylist": ["hello"]}"#).unwrap();
    let report = Analyzer::with_config(config).analyze(&chatlens::parse(TWENTY_FOUR_HOUR_CHAT), &FilterConfig::new());

    assert_eq!(report.top_users.len(), 1);
    assert_eq!(report.offensive_words, BTreeMap::from([("hello".to_string(), 1)]));

    assert!(AnalysisConfig::from_json("{ not json").unwrap_err().is_config());
    assert!(AnalysisConfig::from_json(r#"{"top_users_limit": 0}"#).unwrap_err().is_config());
}
