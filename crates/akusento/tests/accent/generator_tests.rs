//! accent モジュール用統合テスト
//! tests/accent/generator_tests.rs

use akusento::accent::{
  AccentClass, classify_drop, default_nakadaka_drop, drop_markers, generate, generate_all,
  to_line_graph, validate_pattern,
};
use akusento::errors::{AccentError, AccentErrorKind};
use akusento::models::{CanvasSize, PitchLevel};
use akusento::mora::count_mora;
use proptest::prelude::*;

fn bits(mora_count: usize, class: AccentClass) -> Vec<u8> {
  generate(mora_count, class, None).expect("パターン生成失敗").levels_as_bits()
}

// ─── 代表的なパターン ───────────────────────────────────────────────────

#[test]
fn three_mora_patterns() {
  assert_eq!(bits(3, AccentClass::Atamadaka), [1, 0, 0]);
  assert_eq!(bits(3, AccentClass::Heiban), [0, 1, 1]);
  assert_eq!(bits(3, AccentClass::Nakadaka), [0, 1, 0]);
  assert_eq!(bits(3, AccentClass::Odaka), [0, 1, 1]);
}

#[test]
fn short_words() {
  assert_eq!(bits(2, AccentClass::Atamadaka), [1, 0]);
  assert_eq!(bits(1, AccentClass::Heiban), [1]);
  assert_eq!(
    generate(1, AccentClass::Heiban, None).unwrap().drop_position,
    None
  );
}

#[test]
fn heiban_and_odaka_differ_only_on_the_particle() {
  let heiban = generate(3, AccentClass::Heiban, None).unwrap();
  let odaka = generate(3, AccentClass::Odaka, None).unwrap();

  assert_eq!(heiban.levels, odaka.levels);
  assert_eq!(heiban.particle_level(), PitchLevel::High);
  assert_eq!(odaka.particle_level(), PitchLevel::Low);
}

#[test]
fn corpus_word_mora_counts_drive_generation() {
  for (reading, mora_count) in [("サクラ", 3), ("コーヒー", 2), ("トウキョウ", 4)] {
    assert_eq!(count_mora(reading), mora_count);
    let patterns = generate_all(count_mora(reading)).unwrap();
    assert!(patterns.iter().all(|p| p.mora_count() == mora_count));
  }
}

#[test]
fn nakadaka_default_is_pinned() {
  let pinned = [(3, 2), (4, 3), (5, 4), (6, 4), (7, 5)];
  for (mora_count, drop) in pinned {
    assert_eq!(default_nakadaka_drop(mora_count), drop, "n={mora_count}");
    assert_eq!(
      generate(mora_count, AccentClass::Nakadaka, None)
        .unwrap()
        .drop_position,
      Some(drop)
    );
  }
}

#[test]
fn line_graph_markers() {
  let canvas = CanvasSize::default();

  let atamadaka = generate(3, AccentClass::Atamadaka, None).unwrap();
  assert_eq!(to_line_graph(&atamadaka, canvas).drop_markers, vec![1]);

  let odaka = generate(5, AccentClass::Odaka, None).unwrap();
  assert!(to_line_graph(&odaka, canvas).drop_markers.is_empty());
}

// ─── 異常系 ─────────────────────────────────────────────────────────────

#[test]
fn error_kinds() {
  let err = generate(0, AccentClass::Heiban, None).unwrap_err();
  assert_eq!(err.kind(), AccentErrorKind::InvalidInput);

  let err = generate(4, AccentClass::Heiban, Some(2)).unwrap_err();
  assert_eq!(err.kind(), AccentErrorKind::ConflictingParameter);

  let err = generate(4, AccentClass::Nakadaka, Some(4)).unwrap_err();
  assert!(matches!(err, AccentError::DropPositionOutOfRange { .. }));
  assert_eq!(err.kind(), AccentErrorKind::InvalidInput);

  let err = "kifuku".parse::<AccentClass>().unwrap_err();
  assert_eq!(err.kind(), AccentErrorKind::UnknownAccentClass);
}

// ─── プロパティ ─────────────────────────────────────────────────────────

fn accent_class() -> impl Strategy<Value = AccentClass> {
  prop::sample::select(AccentClass::ALL.to_vec())
}

proptest! {
  #[test]
  fn pattern_length_matches_mora_count(n in 1usize..40, class in accent_class()) {
    let pattern = generate(n, class, None).unwrap();
    prop_assert_eq!(pattern.levels.len(), n);
    prop_assert_eq!(pattern.levels_with_particle().len(), n + 1);
  }

  #[test]
  fn heiban_never_drops(n in 1usize..40) {
    let pattern = generate(n, AccentClass::Heiban, None).unwrap();
    prop_assert_eq!(pattern.drop_position, None);
    prop_assert!(drop_markers(&pattern.levels).is_empty());
  }

  #[test]
  fn atamadaka_drops_at_one(n in 1usize..40) {
    let pattern = generate(n, AccentClass::Atamadaka, None).unwrap();
    prop_assert_eq!(pattern.drop_position, Some(1));
    prop_assert_eq!(pattern.levels[0], PitchLevel::High);
    prop_assert!(pattern.levels[1..].iter().all(|&l| l == PitchLevel::Low));
  }

  #[test]
  fn odaka_drops_at_end(n in 1usize..40) {
    let pattern = generate(n, AccentClass::Odaka, None).unwrap();
    prop_assert_eq!(pattern.drop_position, Some(n));
    prop_assert!(drop_markers(&pattern.levels).is_empty());
  }

  #[test]
  fn nakadaka_default_stays_inside_word(n in 3usize..40) {
    let drop = default_nakadaka_drop(n);
    prop_assert!((2..n).contains(&drop));
  }

  #[test]
  fn generate_all_is_complete_and_ordered(n in 1usize..40) {
    let patterns = generate_all(n).unwrap();
    let classes: Vec<_> = patterns.iter().map(|p| p.accent_class).collect();
    prop_assert_eq!(classes, AccentClass::ALL.to_vec());
    prop_assert!(patterns.iter().all(|p| validate_pattern(p).is_ok()));
  }

  #[test]
  fn markers_agree_with_internal_drops(n in 2usize..40, class in accent_class()) {
    let pattern = generate(n, class, None).unwrap();
    let graph = to_line_graph(&pattern, CanvasSize::default());

    let expected = match (class, pattern.drop_position) {
      (AccentClass::Atamadaka, Some(drop)) => vec![drop],
      (AccentClass::Nakadaka, Some(drop)) if drop < n => vec![drop],
      _ => Vec::new(),
    };
    prop_assert_eq!(graph.drop_markers, expected);
    prop_assert_eq!(graph.points.len(), n);
  }

  #[test]
  fn explicit_nakadaka_drop_round_trips(n in 3usize..40, seed in any::<usize>()) {
    let drop = 2 + seed % (n - 2);
    let pattern = generate(n, AccentClass::Nakadaka, Some(drop)).unwrap();

    prop_assert_eq!(drop_markers(&pattern.levels), vec![drop]);
    prop_assert_eq!(classify_drop(n, pattern.drop_position), Ok(AccentClass::Nakadaka));
  }

  #[test]
  fn points_stay_on_canvas(n in 1usize..40, width in 1u32..2000, height in 1u32..2000) {
    let canvas = CanvasSize::new(width, height).unwrap();
    let pattern = generate(n, AccentClass::Nakadaka, None).unwrap();
    let graph = to_line_graph(&pattern, canvas);

    for point in &graph.points {
      prop_assert!(point.x > 0.0 && point.x < width as f32);
      prop_assert!(point.y > 0.0 && point.y < height as f32);
    }
  }
}
