//! mora モジュール用統合テスト
//! tests/mora/segmenter_tests.rs

use akusento::mora::{GeminateMode, SegmenterOptions, count_mora, normalize, segment, segment_with};
use proptest::prelude::*;

fn seg(reading: &str) -> Vec<String> {
  segment(reading).into_vec()
}

// ─── 代表的な語 ─────────────────────────────────────────────────────────

#[test]
fn corpus_words() {
  assert_eq!(seg("サクラ"), ["サ", "ク", "ラ"]);
  assert_eq!(seg("キャベツ"), ["キャ", "ベ", "ツ"]);
  assert_eq!(seg("コーヒー"), ["コー", "ヒー"]);
  assert_eq!(seg("シュウマツ"), ["シュ", "ウ", "マ", "ツ"]);
  assert_eq!(seg("トウキョウ"), ["ト", "ウ", "キョ", "ウ"]);
}

#[test]
fn geminate_in_both_modes() {
  assert_eq!(seg("ガッコウ"), ["ガ", "ッ", "コ", "ウ"]);

  let attach = SegmenterOptions {
    geminate: GeminateMode::AttachToPrevious,
  };
  assert_eq!(segment_with("ガッコウ", &attach).into_vec(), ["ガッ", "コ", "ウ"]);
  assert_eq!(segment_with("ッテ", &attach).into_vec(), ["ッ", "テ"]);
}

#[test]
fn hiragana_after_normalize_matches_katakana() {
  assert_eq!(segment(&normalize("きゃべつ")), segment("キャベツ"));
  assert_eq!(segment(&normalize("がっこう")), segment("ガッコウ"));
}

#[test]
fn count_mora_matches_segment() {
  assert_eq!(count_mora(""), 0);
  assert_eq!(count_mora("コーヒー"), 2);
  assert_eq!(count_mora("トウキョウ"), 4);
}

// ─── 端のケース ─────────────────────────────────────────────────────────

#[test]
fn empty_and_leading_marks() {
  assert!(segment("").is_empty());
  assert_eq!(seg("ー"), ["ー"]);
  assert_eq!(seg("ャア"), ["ャ", "ア"]);
  assert_eq!(seg("ッ"), ["ッ"]);
}

#[test]
fn non_kana_passes_through() {
  assert_eq!(seg("AB"), ["A", "B"]);
  assert_eq!(seg("東京"), ["東", "京"]);
}

// ─── プロパティ ─────────────────────────────────────────────────────────

proptest! {
  #[test]
  fn segmentation_is_lossless(reading in any::<String>()) {
    prop_assert_eq!(segment(&reading).concat(), reading.clone());

    let attach = SegmenterOptions { geminate: GeminateMode::AttachToPrevious };
    prop_assert_eq!(segment_with(&reading, &attach).concat(), reading);
  }

  #[test]
  fn count_agrees_with_segment(reading in "[ァ-ヶーぁ-ゖ]{0,16}") {
    prop_assert_eq!(count_mora(&reading), segment(&reading).len());
    prop_assert!(count_mora(&reading) <= reading.chars().count());
  }

  #[test]
  fn no_mora_is_empty(reading in "[ァ-ヶーぁ-ゖA-Za-z]{0,16}") {
    prop_assert!(segment(&reading).iter().all(|m| !m.is_empty()));
  }

  #[test]
  fn normalize_is_idempotent(reading in any::<String>()) {
    let once = normalize(&reading);
    prop_assert_eq!(normalize(&once), once);
  }

  #[test]
  fn normalize_keeps_mora_count(reading in "[ぁ-ゖー]{0,16}") {
    prop_assert_eq!(count_mora(&normalize(&reading)), count_mora(&reading));
  }
}
