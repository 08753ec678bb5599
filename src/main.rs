#[macro_use]
extern crate diesel;

mod api;
mod config;
mod database;
mod mailer;
mod models;
mod pages;
mod protocol;
mod schema;
#[cfg(test)]
mod test_utils;
mod utils;

use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, SqliteConnection};
use std::sync::Arc;

use crate::{
    config::Config,
    mailer::{LogMailer, Mailer, SmtpMailer},
};

type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub fn routes(cfg: &mut web::ServiceConfig, static_dir: &str) {
    cfg.service(web::scope("/api").configure(api::config))
        .configure(pages::config)
        .service(Files::new("/static", static_dir));
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;

    let pool = database::create_pool(&config.database_url)?;
    database::init(&pool)?;
    log::info!("Database ready at {}", config.database_url);

    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => {
            log::info!("Sending mail through {}:{}", smtp.server, smtp.port);
            Arc::new(SmtpMailer::new(smtp)?)
        }
        None => {
            log::warn!("MAIL_USERNAME/MAIL_PASSWORD not set, outgoing mail will only be logged");
            Arc::new(LogMailer)
        }
    };
    let mailer = web::Data::from(mailer);
    let tera = web::Data::new(pages::templates()?);
    let pool = web::Data::new(pool);
    let bind = config.bind_address.clone();
    let static_dir = config.static_dir.clone();
    let config = web::Data::new(config);

    log::info!("Listening on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pool.clone())
            .app_data(mailer.clone())
            .app_data(config.clone())
            .app_data(tera.clone())
            .configure(|cfg| routes(cfg, &static_dir))
    })
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}", bind))?
    .run()
    .await
    .context("Server error")
}
