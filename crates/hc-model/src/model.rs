//! Heat pump model and run modes.

use crate::dataset::{FilterRanges, read_dataset};
use crate::error::{ModelError, ModelResult};
use crate::outcome::SolveOutcome;
use crate::sweep::{SWEEP_POINTS, SweepVariable, standard_sweeps};
use hc_core::linspace;
use hc_cycle::CycleSpec;
use hc_results::{
    COP_CHART_SVG, DesignStateStore, MANIFEST_JSON, METRICS_CSV, MetricsRow, OutputSink,
    PARAMETRIC_CHART_SVG, PARAMETRIC_CSV, RunManifest, Series, SweepSection, indexed_series,
    line_chart, render_metrics_csv, render_parametric_csv,
};
use hc_solver::{CycleSolver, DesignState, SolveMode, SolveReport};
use std::path::Path;

/// Pressure ratio pinned on the compressor when a solve needs stabilizing.
pub const DEFAULT_FALLBACK_PR: f64 = 4.0;

/// Delta applied to the source temperature for the standalone off-design run.
pub const DEFAULT_OFFDESIGN_DELTA_T_K: f64 = -5.0;

/// Summary of a dataset batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Rows accepted by the plausibility filter and solved
    pub rows_solved: usize,
    /// Rows whose solve converged to usable metrics
    pub rows_converged: usize,
}

/// The fixed five-component heat pump with its solver backend.
///
/// Holds the nominal parameter snapshot; run modes perturb it, solve, and
/// restore. The stabilization fallback deliberately pins the compressor
/// pressure ratio on this stored snapshot, so later calls in the same
/// process see the pin — matching how the tool has always behaved.
pub struct HeatPumpModel {
    spec: CycleSpec,
    solver: Box<dyn CycleSolver>,
    fallback_pr: f64,
    filters: FilterRanges,
}

impl HeatPumpModel {
    pub fn new(spec: CycleSpec, solver: Box<dyn CycleSolver>) -> ModelResult<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            solver,
            fallback_pr: DEFAULT_FALLBACK_PR,
            filters: FilterRanges::default(),
        })
    }

    /// Override the fallback pressure ratio used by the stabilization retry.
    /// Values that `pin_pr` would later reject are rejected here, before any
    /// solve depends on the fallback working.
    pub fn with_fallback_pr(mut self, fallback_pr: f64) -> ModelResult<Self> {
        if !fallback_pr.is_finite() || fallback_pr <= 1.0 {
            return Err(ModelError::Config {
                message: format!("fallback pressure ratio {fallback_pr} must exceed 1"),
            });
        }
        self.fallback_pr = fallback_pr;
        Ok(self)
    }

    pub fn with_filters(mut self, filters: FilterRanges) -> Self {
        self.filters = filters;
        self
    }

    pub fn spec(&self) -> &CycleSpec {
        &self.spec
    }

    /// Solve with the stabilization heuristic: at most one fallback retry.
    ///
    /// - A design-mode solver failure pins the fallback pressure ratio and
    ///   retries once; a second failure propagates.
    /// - An off-design failure propagates immediately — it depends on a prior
    ///   design solution, so retrying with different parameters would answer
    ///   a different question.
    /// - A success with missing or non-positive compressor power pins the
    ///   fallback ratio and retries once; that retry's report is returned
    ///   without re-validation.
    pub fn solve_stabilized(
        &mut self,
        mode: SolveMode,
        design: Option<&DesignState>,
    ) -> ModelResult<SolveReport> {
        let report = match self.solver.solve(mode, &self.spec, design) {
            Ok(report) => report,
            Err(err) => match mode {
                SolveMode::Design => {
                    tracing::info!(
                        error = %err,
                        fallback_pr = self.fallback_pr,
                        "design solve failed, retrying with pinned pressure ratio"
                    );
                    self.spec.compressor.pin_pr(self.fallback_pr)?;
                    self.solver.solve(mode, &self.spec, design)?
                }
                SolveMode::OffDesign => return Err(err.into()),
            },
        };

        if report.compressor_power_valid() {
            return Ok(report);
        }

        tracing::warn!(
            power_kw = ?report.compressor_power_kw,
            fallback_pr = self.fallback_pr,
            "compressor power invalid after solve, attempting single fallback solve"
        );
        self.spec.compressor.pin_pr(self.fallback_pr)?;
        Ok(self.solver.solve(mode, &self.spec, design)?)
    }

    /// Design run: solve at nominal conditions, persist the design state,
    /// and report the outcome.
    pub fn run_design(
        &mut self,
        store: &DesignStateStore,
        sink: &mut dyn OutputSink,
    ) -> ModelResult<SolveOutcome> {
        tracing::info!(backend = self.solver.name(), "design simulation");
        let report = self.solve_stabilized(SolveMode::Design, None)?;
        let outcome = SolveOutcome::from_report(&report);

        match DesignState::from_report(&self.spec, &report) {
            Some(design) => {
                store.save(&design)?;
                tracing::info!(path = %store.path().display(), "design state saved");
            }
            None => {
                tracing::warn!("design result invalid, design state not saved");
            }
        }

        self.write_manifest(SolveMode::Design, sink)?;
        self.log_outcome(&outcome);
        Ok(outcome)
    }

    /// Off-design run: perturb the source temperature by `delta_t_k`, solve
    /// against the saved design state, and restore the original temperature.
    /// The restore is unconditional: it runs on the error path too.
    pub fn run_offdesign(
        &mut self,
        delta_t_k: f64,
        store: &DesignStateStore,
        sink: &mut dyn OutputSink,
    ) -> ModelResult<SolveOutcome> {
        let design = store.load()?;
        let base_t_c = self.spec.source_t_c;
        tracing::info!(
            t_source_c = base_t_c + delta_t_k,
            delta_t_k,
            "off-design simulation"
        );

        self.spec.source_t_c = base_t_c + delta_t_k;
        let solved = self.solve_stabilized(SolveMode::OffDesign, Some(&design));
        self.spec.source_t_c = base_t_c;
        let report = solved?;

        let outcome = SolveOutcome::from_report(&report);
        self.write_manifest(SolveMode::OffDesign, sink)?;
        self.log_outcome(&outcome);
        Ok(outcome)
    }

    /// Parametric study: sweep each variable over 11 points with the others
    /// at defaults, one design solve per point, restoring the variable to
    /// its default after its sweep. Failed points are recorded as gaps.
    pub fn run_parametric(&mut self, sink: &mut dyn OutputSink) -> ModelResult<Vec<SweepSection>> {
        let mut sections = Vec::new();

        for variable in standard_sweeps() {
            let (lo, hi) = variable.range();
            let points = linspace(lo, hi, SWEEP_POINTS);
            let mut cop = Vec::with_capacity(points.len());

            let original = self.get_variable(variable);
            for &value in &points {
                self.set_variable(variable, value)?;
                let point_cop = match self.solve_stabilized(SolveMode::Design, None) {
                    Ok(report) => SolveOutcome::from_report(&report).cop(),
                    Err(err) => {
                        tracing::warn!(variable = %variable, value, error = %err, "sweep point failed");
                        None
                    }
                };
                cop.push(point_cop);
            }
            self.set_variable(variable, original)?;

            sections.push(SweepSection {
                variable: variable.label().to_string(),
                points,
                cop,
            });
        }

        sink.write_text(PARAMETRIC_CSV, &render_parametric_csv(&sections))?;
        let series: Vec<Series> = sections
            .iter()
            .map(|s| indexed_series(&s.variable, &s.cop))
            .collect();
        sink.write_text(
            PARAMETRIC_CHART_SVG,
            &line_chart("Parametric Study", "Sweep point index", "COP (-)", &series),
        )?;
        self.write_manifest(SolveMode::Design, sink)?;
        Ok(sections)
    }

    /// Dataset batch: one off-design solve per accepted row, metrics CSV plus
    /// COP time-series chart. Failed rows are recorded with null metrics so
    /// the output keeps one line per accepted row.
    pub fn run_dataset(
        &mut self,
        data_path: &Path,
        store: &DesignStateStore,
        sink: &mut dyn OutputSink,
    ) -> ModelResult<DatasetSummary> {
        let design = store.load()?;
        let rows = read_dataset(data_path, &self.filters)?;
        tracing::info!(rows = rows.len(), "dataset simulation");

        let base_source_t_c = self.spec.source_t_c;
        let base_sink_t_c = self.spec.sink_t_c;

        let mut results = Vec::with_capacity(rows.len());
        let mut rows_converged = 0usize;
        for (i, row) in rows.iter().enumerate() {
            self.spec.source_t_c = row.t_source_c;
            self.spec.sink_t_c = row.t_sink_c;

            let outcome = match self.solve_stabilized(SolveMode::OffDesign, Some(&design)) {
                Ok(report) => SolveOutcome::from_report(&report),
                Err(err) => {
                    tracing::warn!(row = i, error = %err, "row solve failed");
                    SolveOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };

            let metrics = outcome.metrics();
            if metrics.is_some() {
                rows_converged += 1;
            }
            results.push(MetricsRow {
                t_source_c: row.t_source_c,
                t_sink_c: row.t_sink_c,
                cop: metrics.map(|m| m.cop),
                q_cond_kw: metrics.map(|m| m.condenser_duty_kw.abs()),
                q_evap_kw: metrics.map(|m| m.evaporator_duty_kw.abs()),
                power_kw: metrics.map(|m| m.compressor_power_kw),
            });
            tracing::debug!(row = i, cop = ?outcome.cop(), "row solved");
        }

        self.spec.source_t_c = base_source_t_c;
        self.spec.sink_t_c = base_sink_t_c;

        sink.write_text(METRICS_CSV, &render_metrics_csv(&results))?;
        let cop_values: Vec<Option<f64>> = results.iter().map(|r| r.cop).collect();
        sink.write_text(
            COP_CHART_SVG,
            &line_chart(
                "COP Time Series",
                "Time Index",
                "COP (-)",
                &[indexed_series("COP", &cop_values)],
            ),
        )?;
        self.write_manifest(SolveMode::OffDesign, sink)?;

        Ok(DatasetSummary {
            rows_solved: results.len(),
            rows_converged,
        })
    }

    fn get_variable(&self, variable: SweepVariable) -> f64 {
        match variable {
            SweepVariable::SourceTemperature => self.spec.source_t_c,
            SweepVariable::SinkTemperature => self.spec.sink_t_c,
            SweepVariable::IsentropicEfficiency => self.spec.compressor.eta_s,
        }
    }

    fn set_variable(&mut self, variable: SweepVariable, value: f64) -> ModelResult<()> {
        match variable {
            SweepVariable::SourceTemperature => self.spec.source_t_c = value,
            SweepVariable::SinkTemperature => self.spec.sink_t_c = value,
            SweepVariable::IsentropicEfficiency => self.spec.compressor.set_eta_s(value)?,
        }
        Ok(())
    }

    fn write_manifest(&self, mode: SolveMode, sink: &mut dyn OutputSink) -> ModelResult<()> {
        let manifest = RunManifest::new(
            &mode.to_string(),
            self.solver.name(),
            self.spec.refrigerant.as_str(),
        );
        sink.write_text(MANIFEST_JSON, &manifest.to_json()?)?;
        Ok(())
    }

    fn log_outcome(&self, outcome: &SolveOutcome) {
        match outcome {
            SolveOutcome::Converged(m) => {
                tracing::info!(
                    cop = m.cop,
                    power_kw = m.compressor_power_kw,
                    q_cond_kw = m.condenser_duty_kw,
                    q_evap_kw = m.evaporator_duty_kw,
                    "solve converged"
                );
            }
            SolveOutcome::Invalid { reason } => {
                tracing::warn!(reason = %reason, "solve result invalid");
            }
            SolveOutcome::Failed { error } => {
                tracing::warn!(error = %error, "solve failed");
            }
        }
    }
}
