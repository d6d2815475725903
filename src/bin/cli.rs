use algoviz::{config::ServerConfig, db, models::SettingsPatch, services::AccountService};
use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "algoviz-cli")]
#[command(about = "CLI tool for managing algoviz users and settings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Visualizer settings commands
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a new user with default settings
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,
    },

    /// Look up the user id registered for an email
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
    },

    /// Show a user by id
    Show {
        /// User id
        #[arg(short, long)]
        id: i64,
    },

    /// List all users
    List {
        /// Maximum number of users to display
        #[arg(short, long, default_value_t = 100)]
        limit: i64,

        /// Offset for pagination
        #[arg(short = 'o', long, default_value_t = 0)]
        offset: i64,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Show a user's settings
    Get {
        /// User id
        #[arg(short, long)]
        user_id: i64,
    },

    /// Change a user's settings; omitted or zero values are kept
    Set {
        /// User id
        #[arg(short, long)]
        user_id: i64,

        /// Number of elements to visualize
        #[arg(short, long)]
        array_size: Option<i64>,

        /// Animation speed
        #[arg(short, long)]
        speed: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env().context("Invalid configuration")?;

    // Connect to database
    let pool = db::create_pool(&config)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    // Run migrations
    db::run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let account_service = AccountService::new(pool.clone());

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::User { command } => match command {
            UserCommands::Create { email } => match account_service.create_user(&email).await {
                Ok(user_id) => {
                    println!("✅ User created successfully!");
                    println!("  ID: {}", user_id);
                    println!("  Email: {}", email);
                }
                Err(err) => {
                    eprintln!("❌ Failed to create user: {}", err);
                    std::process::exit(1);
                }
            },

            UserCommands::Login { email } => match account_service.login_user(&email).await {
                Ok(user_id) => println!("{}", user_id),
                Err(err) => {
                    eprintln!("❌ {}", err);
                    std::process::exit(1);
                }
            },

            UserCommands::Show { id } => match account_service.find_user_by_id(id).await {
                Ok(Some(user)) => {
                    println!("  ID: {}", user.id);
                    println!("  Email: {}", user.email);
                    println!("  Created: {}", user.created_at.to_rfc3339());
                }
                Ok(None) => {
                    eprintln!("❌ User {} not found", id);
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("❌ Failed to find user: {}", err);
                    std::process::exit(1);
                }
            },

            UserCommands::List { limit, offset } => {
                match account_service.list_users(Some(limit), Some(offset)).await {
                    Ok(users) => {
                        if users.is_empty() {
                            println!("No users found.");
                        } else {
                            println!("{:<5} {:<40} {:<25}", "ID", "Email", "Created");
                            println!("{}", "-".repeat(70));
                            for user in users {
                                println!(
                                    "{:<5} {:<40} {:<25}",
                                    user.id,
                                    user.email,
                                    user.created_at.format("%Y-%m-%d %H:%M:%S")
                                );
                            }
                        }
                    }
                    Err(err) => {
                        eprintln!("❌ Failed to list users: {}", err);
                        std::process::exit(1);
                    }
                }
            }
        },

        Commands::Settings { command } => match command {
            SettingsCommands::Get { user_id } => {
                match account_service.get_user_settings(user_id).await {
                    Ok(settings) => {
                        println!("  User ID: {}", settings.user_id);
                        println!("  Array size: {}", settings.array_size);
                        println!("  Speed: {}", settings.speed);
                        println!("  Updated: {}", settings.updated_at.to_rfc3339());
                    }
                    Err(err) => {
                        eprintln!("❌ Failed to load settings: {}", err);
                        std::process::exit(1);
                    }
                }
            }

            SettingsCommands::Set {
                user_id,
                array_size,
                speed,
            } => {
                let patch = SettingsPatch { array_size, speed };
                if patch.is_empty() {
                    println!("ℹ️  Nothing to change, only the timestamp will be refreshed");
                }

                match account_service.update_user_settings(user_id, patch).await {
                    Ok(settings) => {
                        println!("✅ Settings updated for user {}!", settings.user_id);
                        println!("  Array size: {}", settings.array_size);
                        println!("  Speed: {}", settings.speed);
                    }
                    Err(err) => {
                        eprintln!("❌ Failed to update settings: {}", err);
                        std::process::exit(1);
                    }
                }
            }
        },
    }

    pool.close().await;

    Ok(())
}
