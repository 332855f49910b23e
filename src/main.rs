use anyhow::{Context, Result as AnyhowResult};
use clap::{Parser, ValueEnum};
use menu_bind::config::Config;
use menu_bind::hash::Djb2;
use menu_bind::menu::{EntrySetting, LeftBinder, MenuEntryClassification, SettingKind};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Resolve the "navigate left" action of a menu entry
#[derive(Parser, Debug)]
#[command(name = "menu-bind")]
#[command(about = "Show which left action a menu entry binds to", long_about = None)]
#[command(version)]
struct Args {
    /// Label of the entry
    #[arg(long, default_value = "")]
    label: String,

    /// Type code of the entry, decimal or 0x-prefixed hex
    #[arg(long, value_name = "CODE", default_value = "0", value_parser = parse_type_code)]
    type_code: u32,

    /// Label of the menu the entry lives in
    #[arg(long, value_name = "LABEL", default_value = "")]
    menu_label: String,

    /// Path hint of the entry
    #[arg(long, value_name = "PATH", default_value = "")]
    path: String,

    /// Parent group of the setting behind the entry
    #[arg(long, value_name = "GROUP", requires = "setting_kind")]
    parent_group: Option<String>,

    /// Kind of the setting behind the entry
    #[arg(long, value_enum, value_name = "KIND")]
    setting_kind: Option<CliSettingKind>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file (default: stderr)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Print every label the resolvers match on, with its hash, and exit
    #[arg(long)]
    list_labels: bool,

    /// Print the binding as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSettingKind {
    Action,
    Group,
    Subgroup,
    Bool,
    Int,
    Uint,
    Float,
    String,
    Path,
    Directory,
    Bind,
}

impl From<CliSettingKind> for SettingKind {
    fn from(kind: CliSettingKind) -> Self {
        match kind {
            CliSettingKind::Action => SettingKind::Action,
            CliSettingKind::Group => SettingKind::Group,
            CliSettingKind::Subgroup => SettingKind::Subgroup,
            CliSettingKind::Bool => SettingKind::Bool,
            CliSettingKind::Int => SettingKind::Int,
            CliSettingKind::Uint => SettingKind::UInt,
            CliSettingKind::Float => SettingKind::Float,
            CliSettingKind::String => SettingKind::String,
            CliSettingKind::Path => SettingKind::Path,
            CliSettingKind::Directory => SettingKind::Directory,
            CliSettingKind::Bind => SettingKind::Bind,
        }
    }
}

fn parse_type_code(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid type code '{}': {}", s, e))
}

fn init_tracing(log_file: Option<&Path>) -> AnyhowResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("menu_bind=info"));

    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

/// An explicit config file that exists must load; otherwise use defaults.
fn load_config(path: Option<&Path>) -> AnyhowResult<Config> {
    match path {
        Some(path) if path.exists() => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => Ok(Config::load_or_default(path)),
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    init_tracing(args.log_file.as_deref())?;

    let config = load_config(args.config.as_deref())?;
    tracing::info!(
        "menu-bind {} (resolution mode {:?}, {} users)",
        env!("CARGO_PKG_VERSION"),
        config.video.resolution_mode,
        config.input.max_users
    );

    if args.dump_config {
        let json = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{}", json);
        return Ok(());
    }

    let binder = LeftBinder::new(&Djb2, &config);

    if args.list_labels {
        for (label, hash) in binder.labels().entries() {
            println!("{:#010x}  {}", hash, label);
        }
        return Ok(());
    }

    let mut entry = MenuEntryClassification::new(args.label.as_str(), args.type_code, &Djb2)
        .with_menu_label(&args.menu_label, &Djb2)
        .with_path(args.path.as_str());
    if let Some(kind) = args.setting_kind {
        let group = args.parent_group.unwrap_or_default();
        entry = entry.with_setting(EntrySetting::new(group, kind.into(), &Djb2));
    }

    let binding = binder.bind(Some(&entry))?;

    if args.json {
        let json = serde_json::to_string_pretty(&binding).context("Failed to serialize binding")?;
        println!("{}", json);
    } else {
        println!(
            "{} (type {:#x}) -> {:?} [{:?}]",
            if entry.label.is_empty() { "<unlabelled>" } else { entry.label.as_str() },
            entry.type_code,
            binding.action,
            binding.source
        );
    }
    Ok(())
}
