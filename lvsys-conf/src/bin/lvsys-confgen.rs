use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lvsys_conf::{fonts, logger, paths, ShimConfig};

#[derive(Parser, Debug)]
#[command(name = "lvsys-confgen")]
#[command(about = "Generate and check LVGL configuration headers")]
struct Cli {
    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render lv_conf.h, lv_drv_conf.h and the driver and font headers
    Generate {
        /// Config file
        #[arg(short, long, default_value = "lvsys.toml")]
        config: PathBuf,

        /// Output directory
        #[arg(short, long)]
        out: PathBuf,

        /// Font directory, overriding the config file and LVGL_FONTS_DIR
        #[arg(long)]
        fonts: Option<PathBuf>,
    },
    /// Check the directory named by DEP_LV_CONFIG_PATH
    Check {
        /// Fallback directory when the variable is unset
        #[arg(long)]
        vendored: Option<PathBuf>,

        /// Also require lv_drv_conf.h
        #[arg(long)]
        drivers: bool,
    },
}

fn run(cli: Cli) -> lvsys_conf::Result<()> {
    match cli.command {
        Command::Generate {
            config,
            out,
            fonts: fonts_override,
        } => {
            let mut shim = ShimConfig::load(&config)?;
            if fonts_override.is_some() {
                shim.fonts_dir = fonts_override;
            } else if shim.fonts_dir.is_none() {
                let cwd = std::env::current_dir().map_err(|e| lvsys_conf::ConfError::Io {
                    path: PathBuf::from("."),
                    source: e,
                })?;
                shim.fonts_dir = fonts::fonts_dir(&cwd)?;
            }

            let generated = lvsys_conf::generate(&shim, &out)?;
            println!("{}", generated.lv_conf.display());
            println!("{}", generated.lv_drv_conf.display());
            println!("{}", generated.drv_umbrella.display());
            if let Some(path) = &generated.fonts {
                println!("{}", path.display());
            }
            for src in &generated.font_sources {
                println!("{}", src.display());
            }
        }
        Command::Check { vendored, drivers } => {
            let fallback = vendored.as_deref();
            let dir = match fallback {
                Some(v) => paths::from_env(v, true, drivers)?,
                None => paths::resolve_config_dir(
                    std::env::var_os(paths::CONFIG_DIR_VAR).map(PathBuf::from),
                    None,
                    drivers,
                )?,
            };
            println!("{}", dir.path.display());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
