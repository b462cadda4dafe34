use serde_json::json;

use crate::auth::create_token;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(config: &AppConfig, username: &str, admin: bool, output_format: OutputFormat) -> anyhow::Result<()> {
    let token = create_token(&config.security, username, admin)?;

    match output_format {
        OutputFormat::Json => output_success(
            &output_format,
            "Token created",
            Some(json!({
                "token": token,
                "username": username,
                "isAdmin": admin,
                "expiresInHours": config.security.jwt_expiry_hours
            })),
        ),
        // Bare token so it can be used as `$(jobly token u1)`
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
