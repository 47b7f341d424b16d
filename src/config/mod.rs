pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "plan-gen")]
#[command(about = "Generates budget, standard and premium apartment floor plans")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Override the random seed from config
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override the title locale from config (en, ru)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Ask the image generator for room data before falling back to local layout
    #[arg(long, global = true)]
    pub use_image_generator: bool,

    /// Print compact JSON
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate three plan variants
    Generate {
        #[arg(long)]
        area: u32,
        #[arg(long)]
        rooms: u32,
        #[arg(long, default_value = "modern")]
        style: String,
        #[arg(long, value_delimiter = ',')]
        features: Vec<String>,
    },
    /// Save a plan read from a JSON file (echoed back)
    Save {
        #[arg(long)]
        file: PathBuf,
    },
    /// List saved plans
    List,
    /// Interior design image for one room
    Interior {
        #[arg(long)]
        room_type: String,
        #[arg(long)]
        style: String,
    },
}

#[cfg(feature = "cli")]
impl Cli {
    /// 命令列參數覆蓋 TOML 設定
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(seed) = self.seed {
            config.generator.seed = Some(seed);
            tracing::info!("🔧 Seed overridden to: {}", seed);
        }
        if let Some(locale) = &self.locale {
            config.titles.locale = locale.clone();
            tracing::info!("🔧 Locale overridden to: {}", locale);
        }
        if self.use_image_generator {
            config.imagery.use_image_generator = true;
        }
        if self.compact {
            config.output.pretty = false;
        }
    }
}
