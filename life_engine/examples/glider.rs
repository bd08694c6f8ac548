use life_engine::{Simulation, SimulationConfig};
use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;

fn main() -> life_engine::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("life_engine=info")),
            ),
    )
    .unwrap();

    // Pass `glider`, `glider-gun` or `pulsar` to pick one of the bundled boards
    let name = std::env::args().nth(1).unwrap_or_else(|| "glider".to_string());
    let board_file = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("examples/boards")
        .join(format!("{}.txt", name));

    let config = SimulationConfig {
        n_steps: 100,
        board_file: Some(board_file),
        start_delay: Some(1),
        replay_file: Some(format!("/tmp/{}_replay.json", name)),
        ..SimulationConfig::default()
    };

    let report = Simulation::new(config)?.run()?;

    println!(
        "\nSimulated {} generations in {:.1} s, {} cells alive",
        report.generations,
        report.elapsed.as_secs_f64(),
        report.population
    );

    Ok(())
}
