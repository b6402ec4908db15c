use std::env;
use std::sync::{Arc, Mutex};

use log::info;

use model::config::Config;
use reservation::ReservationEngine;

#[tokio::main]
pub async fn main() {
    env_logger::init();

    // Parse command line arguments to get the port number
    let args: Vec<String> = env::args().collect();
    let port: u16 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3000);

    let mut engine = ReservationEngine::new(Arc::new(Config::default()));
    if args.iter().any(|arg| arg == "--demo") {
        // the classic demo line: train 1 on CityA -> CityC via CityB
        engine
            .seed_demo_network()
            .expect("the demo network seeds into an empty graph");
        info!("demo network seeded");
    }

    let app = server::build_router(Arc::new(Mutex::new(engine)));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    println!(
        "Server running on port {} (http://localhost:{}/health)",
        port, port
    );
    axum::serve(listener, app).await.unwrap();
}
