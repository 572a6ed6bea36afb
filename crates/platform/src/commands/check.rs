//! Check command - Confirms the configuration loaded cleanly.

use settings::Settings;

use super::CommandResult;

/// Execute the check command
pub fn execute(settings: &Settings) -> CommandResult {
    tracing::info!(
        app_env = %settings.app_env(),
        llm_provider = %settings.llm_provider(),
        "Configuration is valid"
    );

    println!("ok ({})", settings.app_env());
    Ok(())
}
