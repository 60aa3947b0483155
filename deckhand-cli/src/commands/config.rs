use anyhow::Result;

use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::ConfigCommands;

pub fn handle_config_command(
    command: ConfigCommands,
    config: &mut Config,
    output_format: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            output::print_single(config, output_format)?;
        }
        ConfigCommands::SetServer { url } => {
            config.default_server = url;
            config.save()?;
            output::print_success(&format!("Default server set to '{}'", config.default_server));
        }
        ConfigCommands::SetOutput { format } => {
            if OutputFormat::parse(&format).is_none() {
                anyhow::bail!("Unknown output format '{}' (expected table, json or yaml)", format);
            }
            config.default_output = format.to_lowercase();
            config.save()?;
            output::print_success(&format!("Default output set to '{}'", config.default_output));
        }
    }
    Ok(())
}
