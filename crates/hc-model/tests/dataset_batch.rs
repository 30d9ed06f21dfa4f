//! End-to-end dataset batch run with the bundled ideal-cycle backend.

use hc_cycle::CycleSpec;
use hc_model::HeatPumpModel;
use hc_results::{COP_CHART_SVG, DesignStateStore, MANIFEST_JSON, METRICS_CSV, MemorySink};
use hc_solver::IdealCycleBackend;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn model() -> HeatPumpModel {
    HeatPumpModel::new(CycleSpec::default(), Box::new(IdealCycleBackend::new())).unwrap()
}

#[test]
fn dataset_run_keeps_one_row_per_accepted_input() {
    let data_path = temp_path("hc_batch_timeseries.csv");
    // Six data rows: four pass the plausibility filter, one is malformed,
    // one is out of range. Of the four accepted, the 80 K lift row cannot
    // converge off-design and must come back with empty metrics.
    fs::write(
        &data_path,
        "timestamp,Source Water T_in,Sink Water T_out\n\
         2024-01-01T00:00,20.0,80.0\n\
         2024-01-01T01:00,30.0,70.0\n\
         2024-01-01T02:00,broken,70.0\n\
         2024-01-01T03:00,10.0,90.0\n\
         2024-01-01T04:00,25.0,85.0\n\
         2024-01-01T05:00,-12.0,80.0\n",
    )
    .unwrap();

    let store = DesignStateStore::new(temp_path("hc_batch_design_state.json"));
    let mut sink = MemorySink::new();
    let mut model = model();

    // Design run first: the batch needs the saved design state.
    let design_outcome = model.run_design(&store, &mut sink).unwrap();
    assert!(design_outcome.metrics().is_some());
    assert!(store.exists());

    let summary = model.run_dataset(&data_path, &store, &mut sink).unwrap();
    assert_eq!(summary.rows_solved, 4);
    assert_eq!(summary.rows_converged, 3);

    let csv = sink.get(METRICS_CSV).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "T_source_C,T_sink_C,COP,Q_cond_kW,Q_evap_kW,Power_kW");
    assert_eq!(lines.len(), 5, "header plus one line per accepted row");

    // The 80 K lift row keeps its boundary conditions but no metrics
    assert_eq!(lines[3], "10.00,90.00,,,,");
    // Converged rows carry all four metrics
    assert_eq!(lines[1].split(',').count(), 6);
    assert!(!lines[1].contains(",,"));

    let chart = sink.get(COP_CHART_SVG).unwrap();
    assert!(chart.starts_with("<svg"));
    assert!(sink.get(MANIFEST_JSON).is_some());

    // The batch restores the nominal boundary conditions
    assert_eq!(model.spec().source_t_c, 20.0);
    assert_eq!(model.spec().sink_t_c, 80.0);

    let _ = fs::remove_file(data_path);
    let _ = fs::remove_file(store.path());
}

#[test]
fn dataset_run_without_design_state_fails_before_reading_data() {
    let store = DesignStateStore::new(temp_path("hc_batch_missing_design_state.json"));
    let mut sink = MemorySink::new();
    let mut model = model();

    // The data path does not exist either; the missing design state wins
    let err = model
        .run_dataset(&temp_path("hc_batch_absent.csv"), &store, &mut sink)
        .unwrap_err();
    assert!(matches!(err, hc_model::ModelError::Results(_)));
    assert!(sink.get(METRICS_CSV).is_none());
}
