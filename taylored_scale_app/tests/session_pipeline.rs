// End-to-end tests for the session pipeline.
//
// Each test drives a `Session` the way a front end would: commands (often
// decoded from JSON) go in through `apply()` or a permalink query, and the
// checks read only the resulting `ScaleSnapshot`. The embedded default
// registry and default view config are used unless a test says otherwise.

use std::collections::BTreeSet;

use taylored_scale_app::layout::WheelOrder;
use taylored_scale_app::query::{QueryFormat, permalink};
use taylored_scale_app::{NotationSystem, Session, ViewConfig};
use taylored_scale_theory::chord::ChordFamily;
use taylored_scale_theory::{
    ChordQuality, IntervalSet, ModeOrder, ScaleCommand, ScaleModel, TheoryError, default_registry,
};

fn session_with(config: ViewConfig) -> Session {
    Session::new(ScaleModel::default(), config, default_registry())
}

fn apply_json(session: &mut Session, json: &str) -> Result<(), TheoryError> {
    let command: ScaleCommand = serde_json::from_str(json).unwrap();
    session.apply(&command)
}

// ---------------------------------------------------------------------------
// Core scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_major_scale_identity() {
    let mut session = Session::default();
    apply_json(&mut session, r#"{"action": "set_tonic", "tonic": 0}"#).unwrap();
    apply_json(
        &mut session,
        r#"{"action": "set_intervals", "intervals": [1,0,1,0,1,1,0,1,0,1,0,1]}"#,
    )
    .unwrap();

    let snap = session.snapshot();
    assert_eq!(snap.number, 2741);
    assert_eq!(snap.title, "C Major (2741)");
    assert_eq!(snap.ian_ring_url, "https://ianring.com/musictheory/scales/2741");
    let notes: Vec<&str> = snap
        .degrees
        .iter()
        .filter(|d| d.on)
        .map(|d| d.note_name.as_deref().unwrap())
        .collect();
    assert_eq!(notes, vec!["C", "D", "E", "F", "G", "A", "B"]);
}

#[test]
fn test_toggling_third_removes_tonic_major_triad() {
    let mut session = Session::default();
    apply_json(&mut session, r#"{"action": "toggle_interval", "degree": 4}"#).unwrap();

    let snap = session.snapshot();
    assert!(!snap.degrees[4].on);
    let tonic_triads: Vec<ChordQuality> = snap
        .chords
        .iter()
        .filter(|c| c.family == ChordFamily::Triad && c.root == 0)
        .map(|c| c.quality)
        .collect();
    assert!(!tonic_triads.contains(&ChordQuality::Major));
    // Chords not using degree 4 survive.
    assert!(snap.chords.iter().any(|c| c.symbol == "F"));
    assert!(snap.chords.iter().any(|c| c.symbol == "Dm"));
    assert!(!snap.chords.iter().any(|c| c.symbol == "Em"));
}

#[test]
fn test_enharmonicize_tonic_twice_wraps() {
    let mut session = Session::default();
    apply_json(&mut session, r#"{"action": "set_tonic", "tonic": 1}"#).unwrap();
    let before = session.snapshot().tonic_name;
    assert_eq!(before, "C#");

    apply_json(&mut session, r#"{"action": "enharmonicize_tonic"}"#).unwrap();
    assert_eq!(session.snapshot().tonic_name, "Db");
    apply_json(&mut session, r#"{"action": "enharmonicize_tonic"}"#).unwrap();
    assert_eq!(session.snapshot().tonic_name, before);
}

#[test]
fn test_major_scale_has_seven_distinct_modes() {
    let snap = Session::default().snapshot();
    assert_eq!(snap.modes.len(), 7);
    let numbers: BTreeSet<u16> = snap.modes.iter().map(|m| m.number).collect();
    assert_eq!(numbers.len(), 7);
    let names: Vec<&str> = snap.modes.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Major", "Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian"]
    );
}

// ---------------------------------------------------------------------------
// Mode navigation
// ---------------------------------------------------------------------------

#[test]
fn test_go_relative_keeps_pitches() {
    let mut session = Session::default();
    let before: BTreeSet<u8> = session
        .snapshot()
        .degrees
        .iter()
        .filter(|d| d.on)
        .map(|d| d.pitch_class)
        .collect();

    apply_json(&mut session, r#"{"action": "go_relative", "mode": 1453}"#).unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.title, "A Aeolian (1453)");
    let after: BTreeSet<u8> = snap
        .degrees
        .iter()
        .filter(|d| d.on)
        .map(|d| d.pitch_class)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_go_relative_rejects_foreign_mode() {
    let mut session = Session::default();
    let err = apply_json(&mut session, r#"{"action": "go_relative", "mode": 1365}"#);
    assert_eq!(err, Err(TheoryError::ModeNotFound { number: 1365 }));
    assert_eq!(session.snapshot().title, "C Major (2741)");
}

#[test]
fn test_go_parallel_keeps_tonic() {
    let mut session = Session::default();
    apply_json(&mut session, r#"{"action": "set_tonic", "tonic": 2}"#).unwrap();
    apply_json(&mut session, r#"{"action": "go_parallel", "mode": 1709}"#).unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.title, "D Dorian (1709)");
    let notes: Vec<&str> = snap
        .degrees
        .iter()
        .filter(|d| d.on)
        .map(|d| d.note_name.as_deref().unwrap())
        .collect();
    assert_eq!(notes, vec!["D", "E", "F", "G", "A", "B", "C"]);
}

// ---------------------------------------------------------------------------
// Spelling
// ---------------------------------------------------------------------------

#[test]
fn test_unspellable_degree_is_reported() {
    let mut session = Session::default();
    // B# tonic with degree 10 named A6 asks for a G triple-sharp.
    apply_json(&mut session, r#"{"action": "enharmonicize_tonic"}"#).unwrap();
    apply_json(&mut session, r#"{"action": "enharmonicize_interval", "degree": 10}"#).unwrap();

    assert_eq!(session.model().tonic_name(), "B#");
    assert_eq!(
        session.model().note_names()[10],
        Err(TheoryError::UnspellableDegree {
            degree: 10,
            letter: 'G'
        })
    );
    let snap = session.snapshot();
    assert_eq!(snap.degrees[10].interval, "A6");
    assert_eq!(snap.degrees[10].note_name, None);
    // Letter labels fall back to the pitch class's default name.
    assert_eq!(snap.pitch_labels[10], "A#");
    // Other degrees still spell from B#.
    assert_eq!(snap.degrees[4].note_name.as_deref(), Some("Dx"));
}

#[test]
fn test_set_tonic_resets_spelling() {
    let mut session = Session::default();
    apply_json(&mut session, r#"{"action": "set_tonic", "tonic": 10}"#).unwrap();
    apply_json(&mut session, r#"{"action": "enharmonicize_tonic"}"#).unwrap();
    assert_eq!(session.snapshot().tonic_name, "Bb");
    apply_json(&mut session, r#"{"action": "set_tonic", "tonic": 10}"#).unwrap();
    assert_eq!(session.snapshot().tonic_name, "A#");
}

// ---------------------------------------------------------------------------
// Sharing and lookup
// ---------------------------------------------------------------------------

#[test]
fn test_permalink_round_trip_between_sessions() {
    let mut original = Session::default();
    apply_json(&mut original, r#"{"action": "set_tonic", "tonic": 7}"#).unwrap();
    apply_json(&mut original, r#"{"action": "set_canonical_number", "number": 2477}"#).unwrap();

    for format in [QueryFormat::Long, QueryFormat::Packed] {
        let link = permalink("https://example.com/", original.model(), format);
        let (_, query) = link.split_once('?').unwrap();
        let mut restored = Session::default();
        restored.apply_query(query).unwrap();
        assert_eq!(restored.snapshot().title, "G Harmonic Minor (2477)");
    }
}

#[test]
fn test_bad_canonical_number_leaves_session_alone() {
    let mut session = Session::default();
    let err = apply_json(&mut session, r#"{"action": "set_canonical_number", "number": 2740}"#);
    assert_eq!(err, Err(TheoryError::MissingRoot { number: 2740 }));
    let err = apply_json(&mut session, r#"{"action": "set_intervals", "intervals": [1, 2]}"#);
    assert_eq!(err, Err(TheoryError::InvalidIntervalValue { index: 1, value: 2 }));
    assert_eq!(session.snapshot().number, 2741);
}

#[test]
fn test_search_feeds_set_canonical_number() {
    let mut session = Session::default();
    let hits = session.search("pentatonic");
    assert!(hits.iter().any(|e| e.name == "Minor Pentatonic"));
    assert!(hits.iter().all(|e| e.name.to_lowercase().contains("pentatonic")));

    let minor = hits.iter().find(|e| e.name == "Minor Pentatonic").unwrap();
    session
        .apply(&ScaleCommand::SetCanonicalNumber {
            number: minor.number as u32,
        })
        .unwrap();
    let snap = session.snapshot();
    assert_eq!(snap.number, 1193);
    assert_eq!(snap.degrees.iter().filter(|d| d.on).count(), 5);
}

// ---------------------------------------------------------------------------
// View configuration
// ---------------------------------------------------------------------------

#[test]
fn test_config_drives_snapshot() {
    let config = ViewConfig::from_json(
        r#"{
            "label_notation": "solfege",
            "note_notation": "semitones",
            "mode_order": "prime_form",
            "wheel": "fifths",
            "chords": {"include_suspended": true, "dense_voicing": true}
        }"#,
    )
    .unwrap();
    assert_eq!(config.mode_order, ModeOrder::PrimeForm);
    assert_eq!(config.wheel, WheelOrder::Fifths);
    assert_eq!(config.label_notation, NotationSystem::Solfege);

    let snap = session_with(config).snapshot();
    assert_eq!(snap.degrees[7].label, "so");
    assert_eq!(snap.pitch_labels[0], "0");

    let mode_numbers: Vec<u16> = snap.modes.iter().map(|m| m.number).collect();
    assert_eq!(mode_numbers, vec![2773, 2741, 1717, 1709, 1453, 1451, 1387]);

    assert!(snap.chords.iter().any(|c| c.symbol == "Csus4"));
    assert!(snap.chords.iter().any(|c| c.symbol == "Dsus2"));
    let g = snap.chords.iter().find(|c| c.symbol == "G").unwrap();
    assert_eq!(g.voicing, vec![7, 11, 2]);

    let wheel: Vec<u8> = snap.wheel.iter().map(|w| w.pitch_class).collect();
    assert_eq!(wheel[..3], [0, 7, 2]);
}

#[test]
fn test_snapshot_json_shape() {
    let snap = Session::default().snapshot();
    let value = serde_json::to_value(&snap).unwrap();
    assert_eq!(value["number"], 2741);
    assert_eq!(value["query"], "tonic=0&intervals=101011010101");
    assert_eq!(value["modes"][0]["intervals"], 2741);
    assert_eq!(value["chords"][0]["quality"], "major");
    assert_eq!(value["keyboard"].as_array().unwrap().len(), 25);
    assert_eq!(value["fretboard"].as_array().unwrap().len(), 6 * 23);
}

#[test]
fn test_every_rooted_scale_snapshots() {
    let mut session = Session::default();
    for number in (1u32..4096).step_by(2) {
        session
            .apply(&ScaleCommand::SetCanonicalNumber { number })
            .unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.number as u32, number);
        let on = snap.degrees.iter().filter(|d| d.on).count();
        assert_eq!(on as u32, IntervalSet::from_canonical_number(number).unwrap().note_count());
        assert!(snap.modes.len() <= on);
        assert!(snap.modes.iter().any(|m| m.offset == 0));
    }
}
