//! The `config` command.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use bundlecfg::operations::ConfigCommand as SettingsCommand;
use bundlecfg::{FileSettings, Shell};
use clap::Args;

/// List, show, set or delete settings.
#[derive(Args)]
#[command(after_help = "\
Examples:
  bundlecfg config                           list every setting
  bundlecfg config path                      show where `path` is set
  bundlecfg config --local without dev test  skip two groups for this app
  bundlecfg config --delete path --global    remove the per-user value")]
pub struct ConfigCommand {
    /// Show notices for a write without changing any file
    #[arg(long)]
    pub dry_run: bool,

    /// [--local | --global | --delete] [NAME [VALUE...]]
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut store = FileSettings::open(&config)?;
        let shell = Shell::new(global.log_level);

        let command = SettingsCommand::new(&mut store, &shell, &config.working_dir);
        let mut command = if self.dry_run {
            command.dry_run()
        } else {
            command
        };

        match command.execute(self.args, config.prefer_local) {
            Ok(outcome) => {
                log::debug!("config finished: {outcome:?}");
                Ok(())
            }
            Err(e) if e.is_usage_error() => Err(CliError::Reported(e)),
            Err(e) => Err(e.into()),
        }
    }
}
