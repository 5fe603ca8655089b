//! Huddle CLI - a command-line frontend for the Huddle social network.
//!
//! Thin presentation layer over `huddle-core`: it collects form input,
//! pre-validates it, drives the session manager, and lets the routing
//! gate decide what to show after every session operation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use huddle_core::api::ApiClient;
use huddle_core::auth::{
    decide_initial_route, CredentialStore, FileStore, KeyringStore, Route, SessionManager,
};
use huddle_core::models::SignupRequest;
use huddle_core::utils::{
    format_date_range, format_optional, is_valid_email, is_valid_password, MIN_PASSWORD_LEN,
};
use huddle_core::Config;

/// Environment variable selecting the file-backed credential store
/// instead of the OS keychain (containers, CI).
const FILE_STORE_ENV: &str = "HUDDLE_FILE_STORE";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Pick the credential store backing at startup. The session layer
/// never branches on platform; it just receives one of these.
fn select_store() -> Result<Box<dyn CredentialStore>> {
    if std::env::var(FILE_STORE_ENV).is_ok() {
        Ok(Box::new(FileStore::new(Config::data_dir()?)))
    } else {
        Ok(Box::new(KeyringStore))
    }
}

fn usage() {
    eprintln!("Usage: huddle <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  register <username> <email> <first> <last>   create an account");
    eprintln!("  login <email>                                authenticate");
    eprintln!("  verify <otp>                                 confirm the emailed code");
    eprintln!("  resend                                       request a fresh code");
    eprintln!("  logout                                       clear the local session");
    eprintln!("  whoami                                       show session state");
    eprintln!("  profile [username]                           show a profile");
    eprintln!("  privacy                                      show privacy settings");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::load().context("Failed to load configuration")?;
    let api = ApiClient::new(config.base_url()).context("Failed to build API client")?;
    let store = select_store()?;
    let mut manager = SessionManager::new(api, store);
    manager.load_session();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str);

    match command {
        Some("register") => register(&mut manager, &config, &args[2..]).await,
        Some("login") => login(&mut manager, &config, &args[2..]).await,
        Some("verify") => verify(&mut manager, &args[2..]).await,
        Some("resend") => resend(&mut manager).await,
        Some("logout") => {
            manager.logout();
            println!("Logged out.");
            Ok(())
        }
        Some("whoami") => {
            whoami(&manager);
            Ok(())
        }
        Some("profile") => profile(&manager, &args[2..]).await,
        Some("privacy") => privacy(&manager).await,
        _ => {
            usage();
            Ok(())
        }
    }
}

/// Where the session stands right now, per the routing gate.
fn whoami(manager: &SessionManager<Box<dyn CredentialStore>>) {
    match (decide_initial_route(manager.session()), &manager.session().user) {
        (Some(Route::Verify), Some(user)) => {
            println!("{} <{}> - email not verified yet", user.full_name(), user.email);
        }
        (Some(Route::Home), Some(user)) => {
            println!("{} <{}> (@{})", user.full_name(), user.email, user.username);
        }
        (None, _) => println!("Session still loading."),
        _ => println!("Not logged in."),
    }
}

fn prompt_password(prompt: &str) -> Result<String> {
    let password = rpassword::prompt_password(prompt).context("Failed to read password")?;
    if !is_valid_password(&password) {
        anyhow::bail!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }
    Ok(password)
}

async fn login(
    manager: &mut SessionManager<Box<dyn CredentialStore>>,
    config: &Config,
    args: &[String],
) -> Result<()> {
    let email = match args.first() {
        Some(email) => email.clone(),
        None => config
            .last_email
            .clone()
            .context("Usage: huddle login <email>")?,
    };
    if !is_valid_email(&email) {
        anyhow::bail!("Please enter a valid email address");
    }
    let password = prompt_password("Password: ")?;

    manager.login(&email, &password).await?;

    let mut config = config.clone();
    config.last_email = Some(email);
    if let Err(e) = config.save() {
        tracing::warn!(error = %e, "failed to save config");
    }

    match decide_initial_route(manager.session()) {
        Some(Route::Verify) => {
            println!("Logged in. Your email is not verified yet - check your inbox,");
            println!("then run: huddle verify <otp>");
        }
        _ => println!("Logged in."),
    }
    Ok(())
}

async fn register(
    manager: &mut SessionManager<Box<dyn CredentialStore>>,
    config: &Config,
    args: &[String],
) -> Result<()> {
    let [username, email, first_name, last_name] = args else {
        anyhow::bail!("Usage: huddle register <username> <email> <first> <last>");
    };
    if !is_valid_email(email) {
        anyhow::bail!("Please enter a valid email address");
    }
    let password = prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let request = SignupRequest {
        username: username.clone(),
        email: email.clone(),
        password,
        first_name: first_name.clone(),
        last_name: last_name.clone(),
    };
    manager.signup(&request).await?;

    let mut config = config.clone();
    config.last_email = Some(email.clone());
    if let Err(e) = config.save() {
        tracing::warn!(error = %e, "failed to save config");
    }

    println!("Account created. A verification code was sent to {}.", email);
    println!("Run: huddle verify <otp>");
    Ok(())
}

async fn verify(
    manager: &mut SessionManager<Box<dyn CredentialStore>>,
    args: &[String],
) -> Result<()> {
    let otp = args.first().context("Usage: huddle verify <otp>")?.clone();
    let email = manager
        .session()
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .context("Not logged in - run: huddle login <email>")?;

    manager.verify_email(&email, &otp).await?;
    println!("Email verified. Welcome to Huddle!");
    Ok(())
}

async fn resend(manager: &mut SessionManager<Box<dyn CredentialStore>>) -> Result<()> {
    let email = manager
        .session()
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .context("Not logged in - run: huddle login <email>")?;

    manager.resend_otp(&email).await?;
    println!("A new verification code was sent to {}.", email);
    Ok(())
}

async fn profile(
    manager: &SessionManager<Box<dyn CredentialStore>>,
    args: &[String],
) -> Result<()> {
    let username = match args.first() {
        Some(name) => name.clone(),
        None => manager
            .session()
            .user
            .as_ref()
            .map(|u| u.username.clone())
            .context("Usage: huddle profile <username>")?,
    };

    let profile = manager.api().fetch_profile(&username).await?;

    println!("{} (@{})", profile.full_name(), profile.username);
    if let Some(ref bio) = profile.bio {
        println!("  {}", bio);
    }
    println!(
        "  {} followers / {} following",
        profile.follower_count, profile.following_count
    );
    println!("  City: {}", format_optional(&profile.current_city, "-"));

    if !profile.education.is_empty() {
        println!("  Education:");
        for entry in &profile.education {
            println!(
                "    {} - {} ({})",
                entry.institution,
                entry.degree,
                format_date_range(&entry.start_date, &entry.end_date, entry.current)
            );
        }
    }
    if !profile.work_experience.is_empty() {
        println!("  Work:");
        for entry in &profile.work_experience {
            println!(
                "    {} at {} ({})",
                entry.position,
                entry.company,
                format_date_range(&entry.start_date, &entry.end_date, entry.current)
            );
        }
    }
    io::stdout().flush().ok();
    Ok(())
}

async fn privacy(manager: &SessionManager<Box<dyn CredentialStore>>) -> Result<()> {
    if !manager.session().is_authenticated() {
        anyhow::bail!("Not logged in - run: huddle login <email>");
    }
    let settings = manager.api().fetch_privacy_settings().await?;

    println!("Profile visibility:     {}", settings.profile_visibility);
    println!("Default post audience:  {}", settings.default_post_visibility);
    println!("Friend list visibility: {}", settings.friend_list_visibility);
    println!("Allow friend requests:  {}", settings.allow_friend_requests);
    println!("Allow search engines:   {}", settings.allow_search_engines);
    if !settings.section_visibility.is_empty() {
        println!("Sections:");
        let mut sections: Vec<_> = settings.section_visibility.iter().collect();
        sections.sort();
        for (section, visibility) in sections {
            println!("  {}: {}", section, visibility);
        }
    }
    Ok(())
}
