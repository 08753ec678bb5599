use crate::{
    config::{Config, DEFAULT_ADMIN_EMAIL},
    database::{self, get_db_conn, DbConn},
    mailer::{Email, Mailer},
    DbPool,
};
use anyhow::bail;
use std::sync::Mutex;
use tempfile::TempDir;

/// A migrated and seeded SQLite file that lives as long as the value.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("medicare.db");
        let pool = database::create_pool(path.to_str().unwrap()).unwrap();
        database::init(&pool).unwrap();
        Self { pool, _dir: dir }
    }

    pub fn conn(&self) -> DbConn {
        get_db_conn(&self.pool).unwrap()
    }
}

#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn send(&self, email: &Email) -> anyhow::Result<()> {
        if self.fail {
            bail!("SMTP unavailable");
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: ":memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        static_dir: "static".to_string(),
        admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
        smtp: None,
    }
}

#[macro_export]
macro_rules! test_app {
    ($db:expr, $mailer:expr) => {
        actix_web::App::new()
            .app_data(actix_web::web::Data::new($db.pool.clone()))
            .app_data(actix_web::web::Data::from(
                $mailer.clone() as std::sync::Arc<dyn $crate::mailer::Mailer>
            ))
            .app_data(actix_web::web::Data::new(
                $crate::test_utils::test_config(),
            ))
            .app_data(actix_web::web::Data::new(
                $crate::pages::templates().unwrap(),
            ))
            .configure(|cfg| $crate::routes(cfg, "static"))
    };
}
