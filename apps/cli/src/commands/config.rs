use anyhow::{Result, Context};
use tracing::info;

use novellint_types::Config;
use crate::ConfigAction;
use crate::config_manager::{ConfigManager, DEFAULT_PROFILE};
use crate::error::CliError;

pub fn config_command(action: ConfigAction, config_manager: &ConfigManager) -> Result<()> {
    match action {
        ConfigAction::List => list_profiles(config_manager),
        ConfigAction::Show { profile } => show_profile(&profile, config_manager),
        ConfigAction::Create { profile, from } => {
            create_profile(&profile, from.as_deref(), config_manager)
        }
        ConfigAction::Delete { profile, yes } => delete_profile(&profile, yes, config_manager),
    }
}

fn list_profiles(config_manager: &ConfigManager) -> Result<()> {
    info!("Listing available profiles");

    let profiles = config_manager.list_profiles()
        .context("Failed to list profiles")?;

    if profiles.is_empty() {
        println!("No configuration profiles found.");
        println!("Create a new profile with: novellint config create <name>");
        return Ok(());
    }

    println!("📋 Available Configuration Profiles:");
    for (i, profile) in profiles.iter().enumerate() {
        let marker = if profile == DEFAULT_PROFILE { " (default)" } else { "" };
        println!("  {}. {}{}", i + 1, profile, marker);
    }

    Ok(())
}

fn show_profile(profile_name: &str, config_manager: &ConfigManager) -> Result<()> {
    info!("Showing profile: {}", profile_name);

    let config = config_manager.load_config(Some(profile_name))
        .with_context(|| format!("Failed to load profile '{}'", profile_name))?;

    println!("📄 Profile: {}", profile_name);
    println!("   {}", config_manager.get_profile_path(profile_name).display());
    println!("{}", "=".repeat(50));

    println!("\n📝 Pipeline ({}):", config.options.pipeline.len());
    for (i, kind) in config.options.pipeline.iter().enumerate() {
        println!("  {}. {}: {}", i + 1, kind, kind.description());
    }

    println!("\n⚙️ Options:");
    println!("  Consider dashes: {}",
             if config.options.consider_dashes { "Yes" } else { "No" });
    println!("  Normalize CRLF: {}",
             if config.normalize_crlf { "Yes" } else { "No" });

    Ok(())
}

fn create_profile(
    profile_name: &str,
    from_profile: Option<&str>,
    config_manager: &ConfigManager,
) -> Result<()> {
    info!("Creating profile: {}", profile_name);

    if config_manager.profile_exists(profile_name) {
        return Err(CliError::invalid_args(format!("Profile '{}' already exists", profile_name)).into());
    }

    let base_config = match from_profile {
        Some(from) => {
            println!("📋 Copying from profile: {}", from);
            config_manager.load_config(Some(from))
                .with_context(|| format!("Failed to load base profile '{}'", from))?
        }
        None => Config::default(),
    };

    config_manager.save_config(profile_name, &base_config)
        .with_context(|| format!("Failed to save profile '{}'", profile_name))?;

    println!("✅ Profile '{}' created", profile_name);
    println!("  {}", config_manager.get_profile_path(profile_name).display());

    Ok(())
}

fn delete_profile(profile_name: &str, yes: bool, config_manager: &ConfigManager) -> Result<()> {
    info!("Deleting profile: {}", profile_name);

    if !config_manager.profile_exists(profile_name) {
        return Err(CliError::profile_not_found(profile_name).into());
    }

    if !yes {
        print!("⚠️  Delete profile '{}'? This cannot be undone. (y/N): ", profile_name);
        std::io::Write::flush(&mut std::io::stdout())?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        if input != "y" && input != "yes" {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    config_manager.delete_profile(profile_name)
        .with_context(|| format!("Failed to delete profile '{}'", profile_name))?;

    println!("✅ Profile '{}' deleted", profile_name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager_in(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::new(Some(temp_dir.path().join("config.json"))).unwrap()
    }

    #[test]
    fn test_list_empty_profiles() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_profiles(&manager_in(&temp_dir)).is_ok());
    }

    #[test]
    fn test_show_default_profile_creates_it() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        assert!(show_profile(DEFAULT_PROFILE, &manager).is_ok());
        assert!(manager.profile_exists(DEFAULT_PROFILE));
    }

    #[test]
    fn test_create_profile_from_existing() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        let mut base = Config::default();
        base.options.consider_dashes = false;
        manager.save_config("base", &base).unwrap();

        create_profile("copy", Some("base"), &manager).unwrap();
        assert_eq!(manager.load_config(Some("copy")).unwrap(), base);
    }

    #[test]
    fn test_create_duplicate_profile() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        assert!(create_profile("web", None, &manager).is_ok());
        assert!(create_profile("web", None, &manager).is_err());
    }

    #[test]
    fn test_delete_profile_without_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let manager = manager_in(&temp_dir);

        create_profile("web", None, &manager).unwrap();
        delete_profile("web", true, &manager).unwrap();
        assert!(!manager.profile_exists("web"));
    }
}
