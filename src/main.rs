use clap::Parser;
use productpilot::cli::{Cli, Commands};
use productpilot::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; only a missing file falls back to defaults
    let config = match Config::load_optional(&cli.config)? {
        Some(config) => config,
        None => {
            eprintln!("Warning: Config file {} not found", cli.config);
            eprintln!("Using default configuration");
            Config::default()
        }
    };

    // Initialize telemetry
    let _telemetry = productpilot::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            tracing::info!("Starting opportunity analysis");
            args.execute(&config).await?;
        }
        Commands::Costs(args) => {
            args.execute().await?;
        }
        Commands::BreakEven(args) => {
            args.execute().await?;
        }
        Commands::Sensitivity(args) => {
            tracing::info!("Starting sensitivity analysis");
            args.execute().await?;
        }
        Commands::Timeline(args) => {
            args.execute().await?;
        }
        Commands::Config => {
            let a = &config.assumptions;
            println!("Current configuration:");
            println!(
                "  Growth: {}, Penetration: {}, Years: {}",
                a.growth_rate, a.penetration_rate, a.years
            );
            println!(
                "  Discount rate: {}, Investment: {}",
                a.discount_rate, a.initial_investment
            );
            println!("  Complexity: {:?}", a.complexity);
            println!(
                "  Adoption: {}% over {} months",
                a.target_penetration_pct, a.ramp_up_months
            );
            println!("  Scenarios: {}", a.scenarios.len());
            println!(
                "  Selection: min confidence {:?}, max opportunities {:?}",
                config.analysis.min_confidence, config.analysis.max_opportunities
            );
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
