use std::error::Error;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use user_dao::config::Settings;
use user_dao::handlers;
use user_dao::{DataSourceRegistry, UserRepository};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env()?;
    let mut registry = DataSourceRegistry::new();
    registry.connect(&settings.datasource).await?;

    // The users table is expected to exist already.
    let datasource = registry.lookup(&settings.datasource.name)?;
    let repo = web::Data::new(UserRepository::new(datasource));

    info!("Starting a webserver on http://{}/users", settings.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(repo.clone())
            .configure(handlers::configure_routes)
    })
    .bind(&settings.bind_addr)?
    .run()
    .await?;

    Ok(())
}
