use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use travelplanner::{TravelPlanner, TravelPlannerConfig, VERSION, logging, web};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = TravelPlannerConfig::load_from_path(config_path)?;

    logging::init_tracing(&config.logging)?;
    info!("Starting travel planner {}", VERSION);

    let keys = [
        ("WEATHER_API_KEY", &config.weather.api_key),
        ("NEWS_API_KEY", &config.news.api_key),
        ("AVIATIONSTACK_API_KEY", &config.flights.api_key),
    ];
    for (variable, key) in keys {
        if key.is_none() {
            warn!("{} is not set; requests needing it will fail", variable);
        }
    }

    let planner = Arc::new(TravelPlanner::from_config(&config)?);
    web::run(&config.server, planner).await
}
