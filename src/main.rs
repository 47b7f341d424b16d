use clap::Parser;
use plan_gen::config::Command;
use plan_gen::domain::model::InteriorRequest;
use plan_gen::utils::error::{ErrorSeverity, PlanError};
use plan_gen::utils::{logger, validation::Validate};
use plan_gen::{Cli, PlanRequest, Planner, TomlConfig};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting plan-gen CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    let pretty = config.pretty_output();
    let planner = Planner::from_config(&config);

    if let Err(e) = run(&planner, &cli.command, pretty).await {
        exit_with(&e);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> plan_gen::Result<TomlConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

async fn run(planner: &Planner, command: &Command, pretty: bool) -> plan_gen::Result<()> {
    match command {
        Command::Generate {
            area,
            rooms,
            style,
            features,
        } => {
            let request = PlanRequest {
                area: *area,
                rooms: *rooms,
                style: style.clone(),
                features: features.clone(),
            };
            let (plans, source) = planner.generate(&request).await?;
            tracing::info!("📦 {} plans ready ({:?} layout)", plans.len(), source);
            print_json(&plans, pretty)
        }
        Command::Save { file } => {
            let saved = planner.save_from_file(file).await?;
            print_json(&saved, pretty)
        }
        Command::List => {
            let plans = planner.list().await?;
            print_json(&plans, pretty)
        }
        Command::Interior { room_type, style } => {
            let request = InteriorRequest {
                room_type: room_type.clone(),
                style: style.clone(),
            };
            let design = planner.interior(&request)?;
            print_json(&design, pretty)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> plan_gen::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn exit_with(e: &PlanError) -> ! {
    tracing::error!(
        "❌ plan-gen failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
