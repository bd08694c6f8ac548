use life_engine::{Simulation, SimulationConfig};
use tracing_subscriber::layer::SubscriberExt;

fn main() -> life_engine::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::new("life_engine=debug")),
    )
    .unwrap();

    // An optional JSON config file, e.g. {"n_steps": 50, "size": [40, 20], "seed": 7}
    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig {
            size: Some((50, 50)),
            start_delay: Some(1),
            ..SimulationConfig::default()
        },
    };

    let report = Simulation::new(config)?.run()?;

    println!(
        "\nRun {} (seed {:?}) took {:.1} s",
        report.id,
        report.seed,
        report.elapsed.as_secs_f64()
    );

    Ok(())
}
