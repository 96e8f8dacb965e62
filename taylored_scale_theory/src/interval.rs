// Interval names for the 12 scale degrees, and their Roman numerals.
//
// Degree `d` is `d` semitones above the tonic. Each degree has an ordered
// list of enharmonic interval names (quality letter + diatonic number);
// the first is the default. The diatonic number decides which letter a
// note is spelled on (see `ScaleModel::note_names`).
//
// `TT` (tritone) carries no number of its own and is treated as an
// augmented fourth.

/// Enharmonic interval names per degree.
pub const INTERVAL_NAMES: [&[&str]; 12] = [
    &["P1", "d2"],
    &["m2", "A1"],
    &["M2", "d3"],
    &["m3", "A2"],
    &["M3", "d4"],
    &["P4", "A3"],
    &["TT", "A4", "d5"],
    &["P5", "d6"],
    &["m6", "A5"],
    &["M6", "d7"],
    &["m7", "A6"],
    &["M7", "d8"],
];

/// Diatonic number of an interval name ("M3" -> 3, "d8" -> 8, "TT" -> 4).
pub fn interval_number(name: &str) -> Option<u8> {
    if name == "TT" {
        return Some(4);
    }
    let digits = name.get(1..)?;
    digits.parse().ok().filter(|n| (1..=8).contains(n))
}

/// Roman numeral for an interval name, relative to a major-scale reference.
pub fn roman_numeral(name: &str) -> &'static str {
    match name {
        "P1" => "I",
        "A1" => "#I",
        "d2" => "bbII",
        "m2" => "bII",
        "M2" => "II",
        "A2" => "#II",
        "d3" => "bbIII",
        "m3" => "bIII",
        "M3" => "III",
        "A3" => "#III",
        "d4" => "bIV",
        "P4" => "IV",
        "TT" | "A4" => "#IV",
        "d5" => "bV",
        "P5" => "V",
        "A5" => "#V",
        "d6" => "bbVI",
        "m6" => "bVI",
        "M6" => "VI",
        "A6" => "#VI",
        "d7" => "bbVII",
        "m7" => "bVII",
        "M7" => "VII",
        "d8" => "bI",
        _ => "?",
    }
}
