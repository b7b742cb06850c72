use confsnap::core::db::connection::ConnectionManager;
use confsnap::core::db::sqlite::SqliteDriver;
use confsnap::settings;
use confsnap::snapshot;
use tracing::info;

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    info!("Starting confsnap...");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: confsnap <settings.toml>");
        std::process::exit(2);
    }

    let loaded = match settings::load_settings(&args[1]) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    // Export direction: snapshot the settings into field records.
    println!("Configuration snapshot:");
    for record in snapshot::extract(&loaded) {
        println!("  {} [{}] = {}", record.name, record.db_type, record.value);
    }

    let descriptor = match loaded.descriptor() {
        Ok(descriptor) => descriptor,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    println!("Connection descriptor: {}", descriptor.url());

    // Local mode: the embedded driver treats the database name as a file
    // path, which makes the connectivity check runnable without a server.
    let manager = ConnectionManager::new(SqliteDriver::new());
    if manager.check_connection(&descriptor, &loaded.credentials()) {
        println!("Connection check passed.");
    } else {
        println!("Connection check failed.");
    }
}
