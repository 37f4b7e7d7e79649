//! Tests for fragment slicing and export.

mod common;

use common::{RecordingCodec, silence_ms};
use lrc_slicer::lyrics::TimedEntry;
use lrc_slicer::slicer::{FragmentSlicer, Interval, SliceOutcome};
use tempfile::TempDir;

fn entry(offset_ms: u64, text: &str) -> TimedEntry {
    TimedEntry {
        offset_ms,
        text: text.to_string(),
    }
}

#[test]
fn test_fragments_cover_consecutive_intervals() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("output");
    let codec = RecordingCodec::new(silence_ms(20_000));
    let entries = vec![entry(0, "one"), entry(5000, "two"), entry(12_000, "three")];

    let outcome = FragmentSlicer::new(out.clone())
        .slice(&codec, &codec.audio, &entries)
        .unwrap();

    let SliceOutcome::Exported(fragments) = outcome else {
        panic!("expected fragments");
    };
    let intervals: Vec<Interval> = fragments.iter().map(|f| f.interval).collect();
    assert_eq!(
        intervals,
        vec![
            Interval { start_ms: 0, end_ms: 5000 },
            Interval { start_ms: 5000, end_ms: 12_000 },
            Interval { start_ms: 12_000, end_ms: 20_000 },
        ]
    );

    let frames: Vec<usize> = codec.encoded.borrow().iter().map(|(_, n)| *n).collect();
    assert_eq!(frames, vec![5000, 7000, 8000]);
    assert_eq!(
        codec.encoded_names(),
        vec!["001_one.mp3", "002_two.mp3", "003_three.mp3"]
    );
    assert!(out.join("003_three.mp3").exists());
}

#[test]
fn test_empty_entries_write_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("output");
    let codec = RecordingCodec::new(silence_ms(1000));

    let outcome = FragmentSlicer::new(out.clone())
        .slice(&codec, &codec.audio, &[])
        .unwrap();

    assert_eq!(outcome, SliceOutcome::NoEntries);
    assert!(codec.encoded.borrow().is_empty());
    assert!(!out.exists());
}

#[test]
fn test_index_follows_parse_order_not_time() {
    let temp_dir = TempDir::new().unwrap();
    let codec = RecordingCodec::new(silence_ms(10_000));
    let entries = vec![entry(8000, "late"), entry(3000, "early")];

    FragmentSlicer::new(temp_dir.path().to_path_buf())
        .slice(&codec, &codec.audio, &entries)
        .unwrap();

    assert_eq!(codec.encoded_names(), vec!["001_late.mp3", "002_early.mp3"]);
    // The inverted first interval yields an empty fragment
    let frames: Vec<usize> = codec.encoded.borrow().iter().map(|(_, n)| *n).collect();
    assert_eq!(frames, vec![0, 7000]);
}

#[test]
fn test_filenames_are_sanitized() {
    let temp_dir = TempDir::new().unwrap();
    let codec = RecordingCodec::new(silence_ms(1000));

    FragmentSlicer::new(temp_dir.path().to_path_buf())
        .slice(&codec, &codec.audio, &[entry(0, "a/b:c?d")])
        .unwrap();

    assert_eq!(codec.encoded_names(), vec!["001_abcd.mp3"]);
    assert!(temp_dir.path().join("001_abcd.mp3").exists());
}

#[test]
fn test_rerun_into_populated_directory_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("output");
    std::fs::create_dir_all(&out).unwrap();
    std::fs::write(out.join("001_hello.mp3"), "stale").unwrap();

    let entries = vec![entry(0, "hello"), entry(400, "world")];
    for _ in 0..2 {
        let codec = RecordingCodec::new(silence_ms(1000));
        FragmentSlicer::new(out.clone())
            .slice(&codec, &codec.audio, &entries)
            .unwrap();
    }

    assert_eq!(
        std::fs::read_to_string(out.join("001_hello.mp3")).unwrap(),
        "400"
    );
    assert_eq!(
        std::fs::read_to_string(out.join("002_world.mp3")).unwrap(),
        "600"
    );
    assert_eq!(std::fs::read_dir(&out).unwrap().count(), 2);
}

#[test]
fn test_export_failure_aborts_and_keeps_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    let codec = RecordingCodec::failing_on(silence_ms(3000), 2);
    let entries = vec![entry(0, "a"), entry(1000, "b"), entry(2000, "c")];

    let result = FragmentSlicer::new(temp_dir.path().to_path_buf())
        .slice(&codec, &codec.audio, &entries);

    assert!(result.is_err());
    assert_eq!(codec.encoded_names(), vec!["001_a.mp3"]);
    assert!(temp_dir.path().join("001_a.mp3").exists());
    assert!(!temp_dir.path().join("003_c.mp3").exists());
}
