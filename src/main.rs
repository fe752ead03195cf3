use flyby::{CsvSink, ScenarioConfig, SweepPlan, TrajectoryLayout, VariantConfig};
use flyby::run_sweep;

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file to run
    #[arg(short, default_value = "scenarios/cartesian_baseline.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml(path: &str) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening scenario file {path}"))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig =
        serde_yaml::from_reader(reader).with_context(|| format!("parsing scenario file {path}"))?;
    Ok(scenario_cfg)
}

fn print_setup(plan: &SweepPlan) {
    let p = &plan.config.parameters;
    let s = &plan.config.sweep;

    println!("Scenario '{}'", plan.config.name);
    println!("Initial conditions:");
    match &plan.config.variant {
        VariantConfig::SingleBodyCartesian {
            start_distance_factor,
            v_infinity,
            perturber,
        } => {
            println!("\t perturber mass: {:.4e} kg", perturber.mass);
            println!("\t perturber radius: {:.4e} m", perturber.radius);
            println!(
                "\t x(0): {:.4e} m",
                -start_distance_factor * perturber.radius
            );
            println!("\t v_infinity: {:.4e} m/s", v_infinity);
        }
        VariantConfig::TwoBodyPolar {
            primary_mass,
            perturber,
            probe_orbit_radius,
            probe_radial_velocity,
            escape_distance,
            ..
        } => {
            println!("\t primary mass: {:.4e} kg", primary_mass);
            println!("\t perturber mass: {:.4e} kg", perturber.mass);
            println!("\t perturber orbit radius: {:.4e} m", perturber.orbit_radius);
            println!("\t probe orbit radius: {:.4e} m", probe_orbit_radius);
            println!("\t probe radial velocity: {:.4e} m/s", probe_radial_velocity);
            println!("\t escape distance: {:.4e} m", escape_distance);
        }
        VariantConfig::ThreeBodyPatched {
            primary_mass,
            perturber,
            entry_radius_factor,
            v_infinity,
            ..
        } => {
            println!("\t primary mass: {:.4e} kg", primary_mass);
            println!("\t perturber mass: {:.4e} kg", perturber.mass);
            println!("\t perturber orbit radius: {:.4e} m", perturber.orbit_radius);
            println!(
                "\t entry radius: {:.4e} m",
                entry_radius_factor * perturber.radius
            );
            println!("\t v_infinity: {:.4e} m/s", v_infinity);
        }
    }
    println!(
        "\t impact parameter: [{:.4e} m; {:.4e} m], step {:.4e} m, {} tests",
        s.b_min,
        s.b_max,
        plan.step(),
        s.tests
    );
    println!("\t max integration time: {:.4e} s", p.max_time);
    println!("\t time step: {:.4} s", p.dt);
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let plan = SweepPlan::new(scenario_cfg)?;
    print_setup(&plan);

    let dir = PathBuf::from(&plan.config.name);
    let layout = TrajectoryLayout::for_variant(&plan.config.variant);
    let mut sink = CsvSink::create(&dir, layout)?;
    println!("Writing results to '{}'", dir.display());

    println!();
    println!("Running simulations ...");
    let results = run_sweep(&plan, &mut sink)?;

    println!(
        "Done: {} tests, summary in '{}'",
        results.len(),
        dir.join("global.csv").display()
    );
    Ok(())
}
