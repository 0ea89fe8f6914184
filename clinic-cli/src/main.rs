mod cli;
mod paths;
mod roster;
mod settings;

use std::fs;
use std::fs::File;

use anyhow::Result;
use clap::Parser;
use clinic_lib::form::RegistrationField;
use clinic_lib::form::RegistrationForm;
use clinic_lib::form::SubmitOutcome;
use clinic_lib::store::AuthStore;
use clinic_lib::AuthClient;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;

use cli::Args;
use cli::Command;
use roster::StaffView;
use roster::STAFF;
use settings::Settings;

/// Logs to `latest.log` in the cache directory. Logging is skipped when no
/// cache directory can be determined or created.
fn init_logging(level: LevelFilter) {
    let Some(cache) = paths::cache_dir() else { return };
    if fs::create_dir_all(&cache).is_err() {
        return;
    }
    paths::rotate_logs(&cache);

    let Some(path) = paths::log_file() else { return };
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

fn show_staff(
    settings: &Settings,
    page: usize,
    select_all: bool,
    toggle: &[usize],
) {
    let mut view = StaffView::new(&STAFF, settings.page_size);
    view.pager.go_to_page(page.saturating_sub(1));

    if select_all {
        view.selection.set_all(true);
    }
    for row in toggle {
        let id = row.saturating_sub(1);
        if view.selection.toggle_row(&id).is_none() {
            log::warn!("No staff row {}", row);
            eprintln!("warning: no staff row {}", row);
        }
    }

    println!("{}", view.render());
}

async fn register(settings: &Settings, username: String, email: String, password: String) -> Result<bool> {
    let client = AuthClient::builder().base_url(&settings.auth_url).build()?;
    let mut store = AuthStore::auth();
    store.subscribe(|state| {
        if state.show_loading {
            println!("Registering...");
        }
    });

    let mut form = RegistrationForm::new();
    form.set_field(RegistrationField::Username, username);
    form.set_field(RegistrationField::Email, email);
    form.set_field(RegistrationField::Password, password);

    match form.submit(&client, &mut store).await {
        SubmitOutcome::Navigate(route) => {
            if let Some(message) = &store.state().success_message {
                println!("{}", message);
            }
            println!("Next: {}", route.path());
            Ok(true)
        }
        SubmitOutcome::Invalid => {
            for field in RegistrationField::ALL {
                if let Some(message) = form.errors().get(field) {
                    eprintln!("{}: {}", field, message);
                }
            }
            Ok(false)
        }
        SubmitOutcome::Failed => {
            if let Some(message) = &form.errors().general {
                eprintln!("error: {}", message);
            }
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_env()?;
    init_logging(settings.log_level);
    log::debug!("Starting with {:?}", settings);

    let ok = match args.command {
        Command::Staff {
            page,
            page_size,
            select_all,
            toggle,
        } => {
            let settings = settings.with_overrides(None, page_size);
            show_staff(&settings, page, select_all, &toggle);
            true
        }
        Command::Register {
            username,
            email,
            password,
            url,
        } => {
            let settings = settings.with_overrides(url, None);
            register(&settings, username, email, password).await?
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
