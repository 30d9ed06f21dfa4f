use clap::{Parser, Subcommand};
use hc_model::{
    DEFAULT_OFFDESIGN_DELTA_T_K, HeatPumpModel, ModelConfig, ModelResult, SolveOutcome,
};
use hc_results::{
    COP_CHART_SVG, DESIGN_STATE_JSON, DesignStateStore, DirectorySink, METRICS_CSV,
    PARAMETRIC_CHART_SVG, PARAMETRIC_CSV,
};
use hc_solver::IdealCycleBackend;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(about = "HeatCycle CLI - Heat pump cycle simulation tool", long_about = None)]
struct Cli {
    /// Path to a YAML config overriding the nominal design point
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for run artifacts
    #[arg(long, global = true, default_value = "out")]
    out_dir: PathBuf,
    /// Path to the design state JSON (defaults to <OUT_DIR>/design_state.json)
    #[arg(long, global = true)]
    design_state: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the nominal design point and save the design state
    Design,
    /// Solve at a perturbed source temperature against the saved design state
    Offdesign {
        /// Source temperature delta in kelvin
        #[arg(long, default_value_t = DEFAULT_OFFDESIGN_DELTA_T_K, allow_negative_numbers = true)]
        delta_t: f64,
    },
    /// Sweep source/sink temperatures and isentropic efficiency against COP
    Parametric,
    /// Batch-solve a CSV time series of boundary temperatures
    Dataset {
        /// Path to the CSV dataset
        data: PathBuf,
    },
}

fn main() -> ModelResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ModelConfig::load(path)?,
        None => ModelConfig::default(),
    };

    let mut model = HeatPumpModel::new(config.to_spec(), Box::new(IdealCycleBackend::new()))?
        .with_fallback_pr(config.fallback_pr)?
        .with_filters(config.filter_ranges());

    let store_path = cli
        .design_state
        .clone()
        .unwrap_or_else(|| cli.out_dir.join(DESIGN_STATE_JSON));
    let store = DesignStateStore::new(store_path);
    let mut sink = DirectorySink::new(cli.out_dir.clone())?;

    match cli.command {
        Commands::Design => cmd_design(&mut model, &store, &mut sink),
        Commands::Offdesign { delta_t } => cmd_offdesign(&mut model, delta_t, &store, &mut sink),
        Commands::Parametric => cmd_parametric(&mut model, &mut sink),
        Commands::Dataset { data } => cmd_dataset(&mut model, &data, &store, &mut sink),
    }
}

fn cmd_design(
    model: &mut HeatPumpModel,
    store: &DesignStateStore,
    sink: &mut DirectorySink,
) -> ModelResult<()> {
    println!(
        "Running design simulation ({}, {:.1} °C -> {:.1} °C)",
        model.spec().refrigerant,
        model.spec().source_t_c,
        model.spec().sink_t_c
    );

    let outcome = model.run_design(store, sink)?;
    print_outcome(&outcome);
    if store.exists() {
        println!("  Design state: {}", store.path().display());
    }
    Ok(())
}

fn cmd_offdesign(
    model: &mut HeatPumpModel,
    delta_t: f64,
    store: &DesignStateStore,
    sink: &mut DirectorySink,
) -> ModelResult<()> {
    println!("Running off-design simulation (delta T_source = {delta_t:.1} K)");

    let outcome = model.run_offdesign(delta_t, store, sink)?;
    print_outcome(&outcome);
    Ok(())
}

fn cmd_parametric(model: &mut HeatPumpModel, sink: &mut DirectorySink) -> ModelResult<()> {
    println!("Running parametric study");

    let sections = model.run_parametric(sink)?;
    println!("✓ Parametric study completed ({} sweeps)", sections.len());
    for section in &sections {
        let solved = section.cop.iter().filter(|c| c.is_some()).count();
        println!(
            "  {}: {}/{} points solved",
            section.variable,
            solved,
            section.points.len()
        );
    }
    println!("  Results: {}", sink.path_of(PARAMETRIC_CSV).display());
    println!(
        "  Chart:   {}",
        sink.path_of(PARAMETRIC_CHART_SVG).display()
    );
    Ok(())
}

fn cmd_dataset(
    model: &mut HeatPumpModel,
    data: &Path,
    store: &DesignStateStore,
    sink: &mut DirectorySink,
) -> ModelResult<()> {
    println!("Running dataset simulation: {}", data.display());

    let summary = model.run_dataset(data, store, sink)?;
    println!(
        "✓ Dataset completed: {}/{} rows converged",
        summary.rows_converged, summary.rows_solved
    );
    println!("  Metrics: {}", sink.path_of(METRICS_CSV).display());
    println!("  Chart:   {}", sink.path_of(COP_CHART_SVG).display());
    Ok(())
}

fn print_outcome(outcome: &SolveOutcome) {
    match outcome {
        SolveOutcome::Converged(m) => {
            println!("✓ Solve converged");
            println!("  COP:    {:.3}", m.cop);
            println!("  Power:  {:.1} kW", m.compressor_power_kw);
            println!("  Q_cond: {:.1} kW", m.condenser_duty_kw.abs());
            println!("  Q_evap: {:.1} kW", m.evaporator_duty_kw.abs());
        }
        SolveOutcome::Invalid { reason } => {
            println!("✗ Result invalid: {reason}");
        }
        SolveOutcome::Failed { error } => {
            println!("✗ Solve failed: {error}");
        }
    }
}
