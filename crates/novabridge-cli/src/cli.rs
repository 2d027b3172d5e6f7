use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "novabridge-ios",
    about = "NovaBridge iOS plugin injection: additive Info.plist and entitlements patcher",
    version
)]
pub struct Cli {
    /// Path to the app's Info.plist
    #[arg(long = "info-plist", visible_alias = "infoPlist", value_name = "PATH")]
    pub info_plist: PathBuf,

    /// Path to the app's .entitlements file
    #[arg(long, value_name = "PATH")]
    pub entitlements: PathBuf,

    /// Plugin flags as a JSON object, e.g. '{"camera":true,"push":false}'
    #[arg(long, value_name = "JSON")]
    pub plugins: String,

    /// TOML file overriding declaration strings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Compute and report changes without writing any file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
