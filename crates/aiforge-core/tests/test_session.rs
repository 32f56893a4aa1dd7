mod common;

use std::time::{Duration, Instant};

use aiforge_core::analysis::{run_analysis, AnalysisOutcome};
use aiforge_core::catalog::{GarmentCategory, Gender};
use aiforge_core::config::ForgeConfig;
use aiforge_core::consts::FALLBACK_ANALYSIS;
use aiforge_core::measurements::{FitPreference, MeasurementField};
use aiforge_core::session::{ScanPhase, Session, StagePhase};
use aiforge_core::site::{Language, Page};

use common::{CannedAnalyzer, FailingAnalyzer};

const SETTLE: Duration = Duration::from_millis(1200);

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_is_idle() {
    let s = Session::default();
    assert_eq!(s.gender(), Gender::Men);
    assert_eq!(s.stage_phase(), StagePhase::Idle);
    assert!(s.selected_garment().is_none());
    assert!(s.analysis().is_none());
    assert!(!s.show_garment_overlay());
}

#[test]
fn test_select_issues_ticket_and_scans() {
    let mut s = Session::default();
    let ticket = s.select_garment("m-2").unwrap();
    assert_eq!(ticket.request.garment.id, "m-2");
    assert_eq!(ticket.request.gender, Gender::Men);
    assert_eq!(s.selected_garment().unwrap().id, "m-2");
    assert!(s.is_scanning());
    assert!(s.is_analyzing());
    assert_eq!(s.stage_phase(), StagePhase::Scanning);
    assert!(!s.show_garment_overlay());
}

#[test]
fn test_select_other_gender_is_noop() {
    let mut s = Session::default();
    s.select_garment("m-1").unwrap();
    let now = Instant::now();
    let before = s.scan_phase();

    assert!(s.select_garment("w-1").is_none());
    assert_eq!(s.selected_garment().unwrap().id, "m-1");
    assert_eq!(s.scan_phase(), before);
    assert!(!s.tick(now + SETTLE));
}

#[test]
fn test_select_unknown_id_is_noop() {
    let mut s = Session::default();
    assert!(s.select_garment("nope").is_none());
    assert!(s.selected_garment().is_none());
    assert!(!s.is_scanning());
}

#[test]
fn test_tokens_increase() {
    let mut s = Session::default();
    let a = s.select_garment("m-1").unwrap();
    let b = s.select_garment("m-1").unwrap();
    assert!(b.token > a.token);
}

#[test]
fn test_request_captures_measurements_at_selection() {
    let mut s = Session::default();
    s.set_measurement(MeasurementField::Chest, 41.0);
    s.set_fit(FitPreference::Slim);
    let ticket = s.select_garment("m-1").unwrap();
    s.set_measurement(MeasurementField::Chest, 50.0);
    assert_eq!(ticket.request.measurements.chest, 41.0);
    assert_eq!(ticket.request.measurements.fit_preference, FitPreference::Slim);
}

// ---------------------------------------------------------------------------
// Settling
// ---------------------------------------------------------------------------

#[test]
fn test_settle_then_clear_after_delay() {
    let mut s = Session::default();
    let ticket = s.select_garment("m-1").unwrap();
    let now = Instant::now();

    assert!(s.settle_analysis(ticket.token, AnalysisOutcome::live("Sharp. | Fit Score: 90"), now));
    assert!(!s.is_analyzing());
    assert!(s.is_scanning());
    assert_eq!(s.settle_remaining(now), Some(SETTLE));
    assert_eq!(s.report().unwrap().score_value(), Some(90));

    assert!(!s.tick(now + Duration::from_millis(1199)));
    assert!(s.is_scanning());
    assert!(s.tick(now + SETTLE));
    assert_eq!(s.stage_phase(), StagePhase::Idle);
    assert!(s.show_garment_overlay());
    assert!(!s.tick(now + SETTLE * 2));
}

#[test]
fn test_stale_result_is_discarded() {
    let mut s = Session::default();
    let first = s.select_garment("m-1").unwrap();
    let second = s.select_garment("m-3").unwrap();
    let now = Instant::now();

    assert!(!s.settle_analysis(first.token, AnalysisOutcome::live("old | Fit Score: 10"), now));
    assert!(s.analysis().is_none());
    assert!(s.is_analyzing());

    assert!(s.settle_analysis(second.token, AnalysisOutcome::live("new | Fit Score: 80"), now));
    assert_eq!(s.analysis().unwrap().text, "new | Fit Score: 80");

    // The first result may also arrive after the second.
    assert!(!s.settle_analysis(first.token, AnalysisOutcome::live("old | Fit Score: 10"), now));
    assert_eq!(s.analysis().unwrap().text, "new | Fit Score: 80");
}

#[test]
fn test_previous_analysis_stays_until_replaced() {
    let mut s = Session::default();
    let now = Instant::now();
    let t = s.select_garment("m-1").unwrap();
    s.settle_analysis(t.token, AnalysisOutcome::live("A | Fit Score: 70"), now);
    s.tick(now + SETTLE);

    s.select_garment("m-2").unwrap();
    assert!(s.is_analyzing());
    assert_eq!(s.analysis().unwrap().text, "A | Fit Score: 70");
}

#[test]
fn test_custom_settle_delay() {
    let mut config = ForgeConfig::default();
    config.demo.settle_delay_ms = 0;
    let mut s = Session::new(&config);
    let t = s.select_garment("m-1").unwrap();
    let now = Instant::now();
    s.settle_analysis(t.token, AnalysisOutcome::fallback("offline"), now);
    assert!(s.tick(now));
    assert!(!s.is_scanning());
}

// ---------------------------------------------------------------------------
// Gender switch
// ---------------------------------------------------------------------------

#[test]
fn test_gender_switch_clears_selection_and_rotation() {
    let mut s = Session::default();
    s.select_garment("m-1").unwrap();
    s.viewport.pointer_down(0.0);
    s.viewport.pointer_move(90.0);
    s.viewport.pointer_up();

    s.set_gender(Gender::Women);
    assert_eq!(s.gender(), Gender::Women);
    assert!(s.selected_garment().is_none());
    assert_eq!(s.viewport.rotation, 0.0);
    assert!(!s.is_scanning());
}

#[test]
fn test_gender_switch_retires_inflight_request() {
    let mut s = Session::default();
    let ticket = s.select_garment("m-1").unwrap();
    s.set_gender(Gender::Women);
    assert!(!s.settle_analysis(
        ticket.token,
        AnalysisOutcome::live("late | Fit Score: 50"),
        Instant::now()
    ));
    assert!(s.analysis().is_none());
}

#[test]
fn test_same_gender_is_noop() {
    let mut s = Session::default();
    s.select_garment("m-1").unwrap();
    s.viewport.pointer_down(0.0);
    s.viewport.pointer_move(10.0);
    s.set_gender(Gender::Men);
    assert_eq!(s.selected_garment().unwrap().id, "m-1");
    assert!(s.viewport.rotation != 0.0);
    assert!(s.is_analyzing());
}

#[test]
fn test_gender_switch_drops_unavailable_category() {
    let mut s = Session::default();
    s.set_category(Some(GarmentCategory::ShalwarKameez));
    s.set_gender(Gender::Women);
    assert_eq!(s.category, None);

    s.set_category(Some(GarmentCategory::Kurtas));
    s.set_gender(Gender::Men);
    assert_eq!(s.category, Some(GarmentCategory::Kurtas));
}

#[test]
fn test_visible_garments_follow_filters() {
    let mut s = Session::default();
    s.set_category(Some(GarmentCategory::Kurtas));
    let ids: Vec<_> = s.visible_garments().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec!["m-2"]);
    s.set_category(None);
    assert_eq!(s.visible_garments().len(), 3);
}

// ---------------------------------------------------------------------------
// Stage phase
// ---------------------------------------------------------------------------

#[test]
fn test_dragging_during_scan_still_rotates() {
    let mut s = Session::default();
    s.select_garment("m-1").unwrap();
    s.viewport.pointer_down(0.0);
    s.viewport.pointer_move(20.0);
    assert_eq!(s.stage_phase(), StagePhase::Scanning);
    assert_eq!(s.viewport.rotation, 10.0);
}

#[test]
fn test_dragging_phase() {
    let mut s = Session::default();
    s.viewport.pointer_down(5.0);
    assert_eq!(s.stage_phase(), StagePhase::Dragging);
    s.viewport.pointer_up();
    assert_eq!(s.stage_phase(), StagePhase::Idle);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn test_end_to_end_with_provider() {
    let analyzer = CannedAnalyzer::new("Relaxed through the chest. | Fit Score: 88");
    let mut s = Session::default();

    let ticket = s.select_garment("m-1").unwrap();
    assert_eq!(s.stage_phase(), StagePhase::Scanning);

    let outcome = run_analysis(&analyzer, &ticket.request);
    let prompts = analyzer.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Chest 38\""));
    assert!(prompts[0].contains("Waist 32\""));
    assert!(prompts[0].contains("Men model"));
    assert!(prompts[0].contains("Pima Cotton"));

    let now = Instant::now();
    assert!(s.settle_analysis(ticket.token, outcome, now));
    s.tick(now + SETTLE);
    assert_eq!(s.stage_phase(), StagePhase::Idle);
    let analysis = s.analysis().unwrap();
    assert!(!analysis.text.is_empty());
    assert!(!analysis.is_fallback());
}

#[test]
fn test_end_to_end_failure_uses_fallback() {
    let analyzer = FailingAnalyzer::default();
    let mut s = Session::default();
    let ticket = s.select_garment("m-1").unwrap();

    let outcome = run_analysis(&analyzer, &ticket.request);
    assert_eq!(analyzer.calls(), 1);

    let now = Instant::now();
    s.settle_analysis(ticket.token, outcome, now);
    s.tick(now + SETTLE);

    let analysis = s.analysis().unwrap();
    assert_eq!(analysis.text, FALLBACK_ANALYSIS);
    assert!(analysis.is_fallback());
    assert_eq!(s.report().unwrap().score_display().as_deref(), Some("94%"));
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

#[test]
fn test_snapshot_roundtrip() {
    let mut s = Session::default();
    s.set_gender(Gender::Women);
    s.set_measurement(MeasurementField::Waist, 29.5);
    s.set_category(Some(GarmentCategory::Abayas));
    s.select_garment("w-1").unwrap();
    s.viewport.zoom_in();
    s.shell.navigate(Page::Demo);
    s.shell.toggle_language();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");
    s.save(&path).unwrap();

    let loaded = Session::load(&path, &ForgeConfig::default()).unwrap();
    assert_eq!(loaded.gender(), Gender::Women);
    assert_eq!(loaded.measurements.waist, 29.5);
    assert_eq!(loaded.category, Some(GarmentCategory::Abayas));
    assert_eq!(loaded.selected_garment().unwrap().id, "w-1");
    assert_eq!(loaded.viewport.zoom, s.viewport.zoom);
    assert_eq!(loaded.shell.page, Page::Demo);
    assert_eq!(loaded.shell.language, Language::Ur);

    // Transient state is not restored.
    assert_eq!(loaded.scan_phase(), ScanPhase::Idle);
    assert!(loaded.analysis().is_none());
}

#[test]
fn test_snapshot_load_repairs_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");
    std::fs::write(
        &path,
        r#"
gender = "Men"
selected = "w-2"

[measurements]
chest = 99.0

[viewport]
zoom = 9.0
"#,
    )
    .unwrap();

    let loaded = Session::load(&path, &ForgeConfig::default()).unwrap();
    assert_eq!(loaded.measurements.chest, 60.0);
    assert_eq!(loaded.measurements.waist, 32.0);
    assert!(loaded.selected_garment().is_none());
    assert_eq!(loaded.viewport.zoom, 3.0);
}

#[test]
fn test_snapshot_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Session::load(&dir.path().join("missing.toml"), &ForgeConfig::default());
    assert!(err.is_err());
}

#[test]
fn test_imported_session_rejects_results_from_before_import() {
    let mut s = Session::default();
    let before = s.select_garment("m-1").unwrap();

    let mut snapshot = Session::default();
    snapshot.set_gender(Gender::Women);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");
    snapshot.save(&path).unwrap();

    s.replace_with(Session::load(&path, &ForgeConfig::default()).unwrap());
    assert_eq!(s.gender(), Gender::Women);
    assert_eq!(s.scan_phase(), ScanPhase::Idle);
    assert!(s.analysis().is_none());

    let after = s.select_garment("w-1").unwrap();
    assert!(after.token > before.token);

    let now = Instant::now();
    assert!(!s.settle_analysis(before.token, AnalysisOutcome::live("Tee | Fit Score: 10"), now));
    assert!(s.analysis().is_none());
    assert!(s.is_analyzing());

    assert!(s.settle_analysis(after.token, AnalysisOutcome::live("Abaya | Fit Score: 90"), now));
    assert_eq!(s.analysis().unwrap().text, "Abaya | Fit Score: 90");
}

#[test]
fn test_replace_with_keeps_imported_fields() {
    let mut s = Session::default();
    s.select_garment("m-2").unwrap();

    let mut imported = Session::default();
    imported.set_measurement(MeasurementField::Chest, 44.0);
    imported.shell.navigate(Page::Pricing);

    s.replace_with(imported);
    assert_eq!(s.measurements.chest, 44.0);
    assert_eq!(s.shell.page, Page::Pricing);
    assert!(s.selected_garment().is_none());
    assert!(!s.is_scanning());
}
