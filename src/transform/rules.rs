// src/transform/rules.rs
// The ordered rewrite table for the spelling persona. Order is part of the
// data: later rules run over the output of earlier ones, so moving a rule
// changes the result.

/// One rewrite rule. `Swap` exchanges both tokens in a single atomic pass;
/// `OneWay` replaces without a reverse direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Swap(&'static str, &'static str),
    OneWay(&'static str, &'static str),
}

/// Misspelling rules applied to every finished 새종데왕 AI response,
/// top to bottom.
pub const MISSPELLING_RULES: &[Rule] = &[
    // 음운 탈락: ㅎ dropped from the ㄶ final (괜찮아 ↔ 괜찬아)
    Rule::Swap("찮", "찬"),
    // 않 flattens one-way; bare 안 is far too common to swap back.
    Rule::OneWay("않", "안"),
    // 형태소 오류: 됐어 → 됬어
    Rule::OneWay("됐", "됬"),
    // 발음 유사: 돼지 → 되지
    Rule::OneWay("돼", "되"),
    // 쌍받침 축약: ㅆ 받침 → ㅅ
    Rule::OneWay("셨", "셧"),
    Rule::OneWay("겠", "겟"),
    Rule::OneWay("었", "엇"),
    Rule::OneWay("았", "앗"),
    // 모음 교체: ㅔ ↔ ㅐ, ㅖ ↔ ㅒ, ㅚ ↔ ㅙ, ㅞ → ㅙ, ㅢ ↔ ㅟ
    Rule::Swap("에", "애"),
    Rule::Swap("예", "얘"),
    Rule::Swap("외", "왜"),
    Rule::OneWay("웨", "왜"),
    Rule::Swap("의", "위"),
    // ㅎ 받침 탈락: 좋을까 → 조을까
    Rule::OneWay("좋", "조"),
    // 쌍받침 축약 for 됐: the one-way 됐 → 됬 rule above has already
    // consumed every 됐 by the time this runs, so only the 됫 → 됐
    // direction can still match. Kept in this position to mirror the
    // table the chat service has always shipped.
    Rule::Swap("됐", "됫"),
];
