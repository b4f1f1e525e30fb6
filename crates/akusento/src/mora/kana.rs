//! かな文字の分類と正規化
//!
//! モーラ分割で使う文字種の判定はすべて `const fn` の述語で行い、
//! 呼び出しごとの集合構築は行わない。

/// 拗音・小書き母音として直前の文字と結合する小書きかな。
///
/// 促音（ッ/っ）はここに含めない。促音は常に独立した 1 モーラ。
pub const fn is_contraction_target(c: char) -> bool {
  matches!(
    c,
    // カタカナ
    'ャ' | 'ュ' | 'ョ' | 'ァ' | 'ィ' | 'ゥ' | 'ェ' | 'ォ' | 'ヮ' | 'ヵ' | 'ヶ'
    // ひらがな
    | 'ゃ' | 'ゅ' | 'ょ' | 'ぁ' | 'ぃ' | 'ぅ' | 'ぇ' | 'ぉ' | 'ゎ' | 'ゕ' | 'ゖ'
  )
}

/// 促音（小さい「つ」）
pub const fn is_geminate(c: char) -> bool {
  matches!(c, 'ッ' | 'っ')
}

/// 長音記号（ー）と波ダッシュ代わりの全角チルダ（～）
pub const fn is_long_vowel_mark(c: char) -> bool {
  matches!(c, 'ー' | '～')
}

/// モーラ分割における書記素クラスタの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KanaClass {
  /// 拗音・小書き母音（直前と結合する）
  SmallKana,
  /// 促音（ッ）
  Geminate,
  /// 長音記号（ー、～）
  LongVowel,
  /// その他（通常のかな、かな以外の文字を含む）
  Ordinary,
}

/// 書記素クラスタを分類する。
///
/// 判定はクラスタ先頭のスカラー値で行うため、結合文字付きの小書きかなも
/// 小書きかなとして扱う。空文字列は `Ordinary`。
pub fn classify(cluster: &str) -> KanaClass {
  match cluster.chars().next() {
    Some(c) if is_contraction_target(c) => KanaClass::SmallKana,
    Some(c) if is_geminate(c) => KanaClass::Geminate,
    Some(c) if is_long_vowel_mark(c) => KanaClass::LongVowel,
    _ => KanaClass::Ordinary,
  }
}

/// ひらがな → カタカナ の差分
const HIRAGANA_TO_KATAKANA_OFFSET: u32 = 0x60;

/// ひらがな 1 文字をカタカナに変換する。対象外の文字はそのまま返す。
const fn to_katakana(c: char) -> char {
  match c {
    // ぁ(U+3041)〜ゖ(U+3096), ゝ(U+309D), ゞ(U+309E)
    '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => {
      match char::from_u32(c as u32 + HIRAGANA_TO_KATAKANA_OFFSET) {
        Some(k) => k,
        None => c,
      }
    }
    _ => c,
  }
}

/// 読みを正規化する（ひらがな → カタカナ）。
///
/// カタカナ・長音記号・結合用濁点・かな以外の文字は変更しない。
/// 冪等であり、`segment` からは暗黙に呼ばれない。
///
/// # Examples
/// ```
/// use akusento::mora::normalize;
/// assert_eq!(normalize("きゃべつ"), "キャベツ");
/// assert_eq!(normalize("コーひー"), "コーヒー");
/// ```
pub fn normalize(reading: &str) -> String {
  reading.chars().map(to_katakana).collect()
}
