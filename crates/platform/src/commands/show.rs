//! Show command - Prints the effective settings.

use settings::Settings;

use super::CommandResult;
use crate::cli::ShowArgs;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> CommandResult {
    if args.json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        print!("{}", render(settings));
    }
    Ok(())
}

/// Human-readable summary. Never includes secret values.
pub fn render(settings: &Settings) -> String {
    let configured = |value: Option<&str>| {
        if value.is_some() {
            "configured"
        } else {
            "not configured"
        }
    };

    let mut out = String::new();
    out.push_str(&format!("App Environment: {}\n", settings.app_env()));
    out.push_str(&format!("Debug Mode:      {}\n", settings.debug()));
    out.push_str(&format!("AWS Region:      {}\n", settings.aws_region()));
    out.push_str(&format!("Is Production:   {}\n", settings.is_production()));
    out.push_str(&format!("LLM Provider:    {}\n", settings.llm_provider()));
    out.push_str(&format!("Database:        {}\n", configured(settings.database_url())));
    out.push_str(&format!("Redis:           {}\n", configured(settings.redis_url())));
    out.push_str(&format!(
        "S3 Bucket:       {}\n",
        settings.s3_bucket_name().unwrap_or("not configured")
    ));
    out.push_str(&format!("Max Upload:      {} bytes\n", settings.max_file_size()));
    out
}
