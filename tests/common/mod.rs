use actix_web::{App, web};
use anyhow::Result;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;

use equiptrack::AppState;
use equiptrack::config::Config;
use equiptrack::database::init_database;
use equiptrack::database::models::Record;
use equiptrack::database::repositories::{
    EquipmentRepository, PersonnelRepository, RecordRepository, UserRepository,
};
use equiptrack::routes;
use equiptrack::services::AuthService;

#[allow(dead_code)]
pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub auth_service: AuthService,
    pub users: UserRepository,
    pub personnel: PersonnelRepository,
    pub equipment: EquipmentRepository,
    pub records: RecordRepository,
    _temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = Config {
            database_url: database_url.clone(),
            jwt_secret: "test-jwt-secret-key-that-is-long-enough".to_string(),
            jwt_expiration_days: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            admin_email: None,
            admin_password: None,
        };

        let pool = init_database(&database_url).await?;
        let users = UserRepository::new(pool.clone());
        let personnel = PersonnelRepository::new(pool.clone());
        let equipment = EquipmentRepository::new(pool.clone());
        let records = RecordRepository::new(pool.clone());
        let auth_service = AuthService::new(users.clone(), config.clone());

        Ok(TestContext {
            pool,
            config,
            auth_service,
            users,
            personnel,
            equipment,
            records,
            _temp_dir: temp_dir,
        })
    }

    /// Actix app wired exactly like the production route table.
    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(AppState {
                auth_service: self.auth_service.clone(),
            }))
            .app_data(web::Data::new(self.users.clone()))
            .app_data(web::Data::new(self.personnel.clone()))
            .app_data(web::Data::new(self.equipment.clone()))
            .app_data(web::Data::new(self.records.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .configure(routes::configure)
    }
}

/// Insert a checkout record directly, optionally backdating the checkout
/// time so listing order is deterministic.
#[allow(dead_code)]
pub async fn seed_record(
    records: &RecordRepository,
    user_name: &str,
    equipment_name: &str,
    checked_out_by: &str,
    checkout_time: Option<NaiveDateTime>,
) -> Record {
    let mut record = Record::new(
        user_name.to_string(),
        equipment_name.to_string(),
        checked_out_by.to_string(),
    );
    if let Some(ts) = checkout_time {
        record.checkout_time = ts;
    }
    records
        .create_checkout(&record)
        .await
        .expect("Failed to seed record");
    record
}

#[allow(dead_code)]
pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
