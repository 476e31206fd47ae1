mod common;

use common::*;
use territory_decay::ecs::*;
use territory_decay::flush::flush_decay_log;
use territory_decay::model::*;

const TEMPLATES: &str = r#"{
    "structures/wall": { "decay_rate": 1.5, "territory": ["neutral"] },
    "structures/outpost": { "decay_rate": 4, "territory": ["neutral", "enemy"] },
    "gaia/relic": { "decay_rate": "Infinity" },
    "units/ship": {}
}"#;

#[test]
fn template_set_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");
    std::fs::write(&path, TEMPLATES).unwrap();

    let set = TemplateSet::load(&path).unwrap();
    assert_eq!(set.len(), 4);
    assert_eq!(
        set.names().collect::<Vec<_>>(),
        vec!["gaia/relic", "structures/outpost", "structures/wall", "units/ship"]
    );

    let wall = set.get("structures/wall").unwrap();
    assert_eq!(wall.decay_rate, Some(DecayRate::Finite(1.5)));
    assert_eq!(wall.territory, Some(vec![TerritoryKind::Neutral]));
    assert_eq!(set.get("gaia/relic").unwrap().decay_rate, Some(DecayRate::Infinite));
    assert_eq!(set.get("units/ship").unwrap(), &TerritoryDecayTemplate::default());
}

#[test]
fn template_set_load_reports_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = TemplateSet::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(missing.contains("failed to read"), "{missing}");

    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"x": {"decay_rate": -1}}"#).unwrap();
    assert!(TemplateSet::load(&path).is_err());

    std::fs::write(&path, r#"{"x": {"territory": ["ally"]}}"#).unwrap();
    assert!(TemplateSet::load(&path).is_err());
}

#[test]
fn loaded_templates_drive_decay() {
    let set = TemplateSet::from_json_str(TEMPLATES).unwrap();
    let mut app = strip_app();

    let wall = spawn(&mut app, set.get("structures/wall").unwrap().clone(), Some(tile(2)), P1);
    let outpost = spawn(&mut app, set.get("structures/outpost").unwrap().clone(), Some(tile(3)), P1);
    let ship = spawn(&mut app, set.get("units/ship").unwrap().clone(), Some(tile(3)), P1);
    let relic = spawn(&mut app, set.get("gaia/relic").unwrap().clone(), Some(tile(3)), P1);
    tick(&mut app, 1);

    assert!(!is_decaying(&app, wall));
    assert!(!is_decaying(&app, outpost));
    // No configured rate: rate 0, never decays
    assert!(!is_decaying(&app, ship));
    assert!(app.world().get::<TerritoryDecay>(relic).unwrap().has_territory_ownership());
    assert!(!app.world().get::<TerritoryDecay>(ship).unwrap().has_territory_ownership());
}

#[test]
fn decay_log_flushes_to_jsonl() {
    let mut app = strip_app();
    let e = spawn(&mut app, TerritoryDecayTemplate::decaying(2.5), Some(tile(2)), P1);
    tick(&mut app, 2);
    send(&mut app, TerritoryCommand::MoveEntity { entity: e, position: Some(tile(1)) });
    tick(&mut app, 1);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    flush_decay_log(app.world().resource::<DecayLog>(), &out).unwrap();

    let lines = read_lines(&out.join("decay_changes.jsonl"));
    assert_eq!(lines.len(), 2);

    let first: DecayRecord = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(
        first,
        DecayRecord { tick: 0, entity: e.to_bits(), decaying: true, rate: 2.5 }
    );
    let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(second["tick"], 2);
    assert_eq!(second["decaying"], false);
}

#[test]
fn empty_log_flushes_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    flush_decay_log(&DecayLog::new(), dir.path()).unwrap();
    assert!(read_lines(&dir.path().join("decay_changes.jsonl")).is_empty());
}
