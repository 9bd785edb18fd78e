use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};

use forge_sync::config::{SyncConfig, log_path};
use forge_sync::installer::PuppetModuleTool;
use forge_sync::installer::puppet::display_command;
use forge_sync::module::Module;
use forge_sync::sync::build_command;

#[derive(Parser)]
#[command(name = "forge-sync")]
#[command(version, about = "Keep forge modules at their desired version")]
struct Cli {
    /// Config file (defaults to $XDG_DATA_HOME/forge-sync/config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to the data directory instead of stderr
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the sync state and the installer command that would run
    Check(ModuleArgs),
    /// Install, upgrade, or downgrade the module to the desired version
    Sync(ModuleArgs),
}

#[derive(Args)]
struct ModuleArgs {
    /// Qualified module name, e.g. puppetlabs/stdlib
    name: String,
    /// Desired semantic version, e.g. 4.1.0
    version: String,
    /// Directory modules are installed into
    #[arg(long)]
    moduledir: Option<PathBuf>,
}

impl ModuleArgs {
    fn module(&self, config: &SyncConfig) -> anyhow::Result<Module> {
        let Some(moduledir) = self.moduledir.clone().or_else(|| config.moduledir.clone()) else {
            bail!("no module directory: pass --moduledir or set moduledir in the config");
        };

        Module::from_entry(&self.name, moduledir, &self.version)
            .with_context(|| format!("cannot manage {} {}", self.name, self.version))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SyncConfig::resolve(cli.config.as_deref())?;

    let log_file = cli.log_file.then(log_path);
    let _guard = forge_sync::logging::init(&config.log_level, log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let installer = PuppetModuleTool::new(&config.installer.program);

    match cli.command {
        Command::Check(args) => {
            let module = args.module(&config)?;
            let status = module.status()?;
            println!("{} ({}): {}", status.full_name, module.kind(), status.state);
            println!("  installed: {}", status.installed);
            println!("  desired:   {}", status.desired);

            if let Some(command) = build_command(status.state, &status.desired, module.identity())
            {
                println!(
                    "  would run: {}",
                    display_command(
                        installer.program(),
                        module.identity().basedir(),
                        &command.args()
                    )
                );
            }
        }
        Command::Sync(args) => {
            let module = args.module(&config)?;
            let outcome = module.sync(&installer)?;

            match outcome.command {
                Some(command) => println!("{}: {}", module.identity(), command),
                None => println!("{}: {}", module.identity(), outcome.state),
            }
            if let Some(output) = outcome.output
                && !output.stdout.trim().is_empty()
            {
                print!("{}", output.stdout);
            }
        }
    }

    Ok(())
}
