//! akusento crate example
//!
//! Builds vote options for a handful of readings and prints them as text and JSON.

use akusento::config::AkusentoConfig;
use akusento::service::{AccentOption, AkusentoService};
use akusento::{AccentClass, PitchLevel};

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Renders the levels plus the particle as a row of 高/低.
fn level_row(option: &AccentOption) -> String {
  let mut row: String = option
    .pattern
    .levels
    .iter()
    .map(|level| match level {
      PitchLevel::High => '高',
      PitchLevel::Low => '低',
    })
    .collect();

  // following particle (が)
  row.push_str(match option.pattern.particle_level() {
    PitchLevel::High => " (が:高)",
    PitchLevel::Low => " (が:低)",
  });
  row
}

fn main() -> AppResult<()> {
  let config = AkusentoConfig::from_json_str(
    r#"{
      "segmenter": { "normalize": true, "geminate": "standalone" },
      "graph": { "canvas_width": 280, "canvas_height": 80 },
      "logging": { "level": "debug" }
    }"#,
  )?;

  // Initialize tracing_subscriber
  // Use RUST_LOG environment variable if set, otherwise the configured level
  let env_filter = config.logging.env_filter();
  tracing_subscriber::fmt().with_env_filter(env_filter).with_target(true).with_level(true).init();

  let service = AkusentoService::new(config)?;

  // 1. Vote options for each reading
  for reading in ["サクラ", "きゃべつ", "コーヒー", "ガッコウ", "トウキョウ"] {
    let analysis = service.analyze(reading)?;
    println!(
      "\n=== {} → {} ({} mora) ===",
      reading,
      analysis.mora.as_slice().join("|"),
      analysis.mora_count()
    );

    for option in &analysis.options {
      println!(
        "  {:<4} {:<24} drop={:?} markers={:?}",
        option.display_name,
        level_row(option),
        option.pattern.drop_position,
        option.graph.drop_markers
      );
    }
  }

  // 2. Admin edit: explicit Nakadaka drop
  let edited = service.pattern_for_code("シュウマツ", AccentClass::Nakadaka.code(), Some(2))?;
  println!("\n=== シュウマツ (中高型, drop=2) ===");
  println!("{}", serde_json::to_string_pretty(&edited)?);

  // 3. Rejected input
  match service.pattern_for_code("サクラ", "heiban", Some(1)) {
    Ok(_) => println!("unexpected success"),
    Err(e) => println!("\nrejected: {} ({:?})", e, e.accent_kind().map(|k| k.code())),
  }

  Ok(())
}
