use anyhow::Result;
use std::path::Path;

use inject_text::config::Config;
use inject_text::generate::package_folder;

use crate::ConfigCommands;

pub fn handle_config_command(command: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_config_path);

    match command {
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                println!("⚠️  Config file already exists at: {}", path.display());
                println!("   Use --force to overwrite");
                return Ok(());
            }

            let default_config = Config::default();
            default_config.save(&path)?;
            println!("✅ Created config file at: {}", path.display());

            println!("\nSample configuration:");
            println!("{}", serde_json::to_string_pretty(&default_config)?);
        }
        ConfigCommands::Show { json } => {
            let config = Config::load(config_path)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Inject Text Configuration");
                println!("=========================");
                println!();
                println!("Version: {}", config.version);
                println!("Src Gen Folder Base: {}", config.src_gen_folder_base);
                println!(
                    "Safe Mode: {}",
                    if config.safe_mode { "on" } else { "off" }
                );
                println!();
                if config.injections.is_empty() {
                    println!("Injections: none");
                } else {
                    println!("Injections:");
                    for injection in &config.injections {
                        println!(
                            "  {}.{}.{} <- {}",
                            injection.package_name,
                            injection.class_name,
                            injection.constant_name,
                            injection.input_file
                        );
                        if let Some(base) = &injection.src_gen_folder_base {
                            println!("    Src Gen Folder Base: {base}");
                        }
                    }
                }
            }
        }
        ConfigCommands::Validate => {
            println!("🔍 Validating config file at: {}", path.display());

            match Config::load(Some(path.as_path())) {
                Ok(config) => {
                    println!("✅ Config file is valid!");
                    println!();
                    println!("Resolved paths:");
                    for request in config.requests(&path) {
                        println!("  Input: {}", request.input_file.display());
                        println!(
                            "  Output Folder: {}",
                            package_folder(&request.src_gen_folder_base, &request.package_name)
                                .display()
                        );
                    }
                }
                Err(e) => {
                    println!("❌ Config file validation failed:");
                    println!("   {e}");
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
