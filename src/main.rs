use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use wizard_backend::notify::BroadcastHub;
use wizard_backend::routes;
use wizard_backend::state::app_state::AppState;
use wizard_backend::store::MemoryStore;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("WIZARD_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("WIZARD_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ WIZARD_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("🚀 Starting Wizard Backend on http://{}:{}", host, port);

    let store = Arc::new(MemoryStore::new());
    let hub = Arc::new(BroadcastHub::new());
    let app_state = AppState::new(store, hub);

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
