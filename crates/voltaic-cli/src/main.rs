//! Voltaic command-line interface.

use anyhow::Result;
use clap::Parser;
use voltaic_core::{ArrayConfig, OperatingPoint, PanelConstants};
use voltaic_solver::{solve_pv_curve, SolveOptions};

#[derive(Parser)]
#[command(name = "voltaic")]
#[command(about = "Photovoltaic array I-V curve and maximum power point solver", long_about = None)]
#[command(version)]
struct Cli {
    /// Panels wired in series per string
    #[arg(short = 's', long, default_value_t = 4)]
    series: u32,

    /// Parallel panel strings
    #[arg(short = 'p', long, default_value_t = 3)]
    parallel: u32,

    /// Irradiance (W/m^2)
    #[arg(short = 'g', long, default_value_t = 1000.0)]
    irradiance: f64,

    /// Cell temperature (K)
    #[arg(short = 't', long, default_value_t = 298.0)]
    temperature: f64,

    /// Voltage samples along the sweep
    #[arg(long, default_value_t = 1000)]
    resolution: usize,

    /// Curve rows to print
    #[arg(long, default_value_t = 5)]
    head: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ArrayConfig::new(cli.series, cli.parallel);
    let point = OperatingPoint::new(cli.irradiance, cli.temperature);
    let constants = PanelConstants::default();
    let options = SolveOptions {
        resolution: cli.resolution,
        ..SolveOptions::default()
    };

    if cli.verbose {
        let params = config.params(&constants);
        println!(
            "Array: {} series x {} parallel ({} cells per string)",
            cli.series, cli.parallel, params.n_s
        );
        println!("I_sc = {} A, V_oc = {} V", params.i_sc, params.v_oc);
        println!(
            "Operating point: G = {} W/m^2, T = {} K",
            cli.irradiance, cli.temperature
        );
        println!();
    }

    let solution = solve_pv_curve(&config, &point, &constants, &options)
        .map_err(|e| anyhow::anyhow!("Solver error: {}", e))?;

    println!("I-V Curve Analysis");
    println!("==================");
    println!();

    println!("{:>12}{:>12}{:>12}", "V (V)", "I (A)", "P (W)");
    println!("{}", "-".repeat(36));
    for row in solution.curve.points().iter().take(cli.head) {
        println!(
            "{:>12.4}{:>12.4}{:>12.4}",
            row.voltage, row.current, row.power
        );
    }

    println!();
    println!("Sweep complete ({} points).", solution.curve.len());
    println!();
    println!(
        "Vmp = {:.2} V, Imp = {:.2} A, Pmax = {:.2} W",
        solution.mpp.voltage, solution.mpp.current, solution.mpp.power
    );

    Ok(())
}
