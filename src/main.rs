use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use equiptrack::database::{
    init_database,
    repositories::{EquipmentRepository, PersonnelRepository, RecordRepository, UserRepository},
};
use equiptrack::middleware::RequestIdMiddleware;
use equiptrack::{AppState, AuthService, Config, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Equiptrack API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting Equiptrack API server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // Initialize repositories and services
    let user_repository = UserRepository::new(pool.clone());
    let personnel_repository = PersonnelRepository::new(pool.clone());
    let equipment_repository = EquipmentRepository::new(pool.clone());
    let record_repository = RecordRepository::new(pool.clone());
    let auth_service = AuthService::new(user_repository.clone(), config.clone());

    // Bootstrap the admin account from the environment, if configured
    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        auth_service.ensure_admin(email, password).await?;
    }

    let app_state = web::Data::new(AppState {
        auth_service: auth_service.clone(),
    });
    let user_repo_data = web::Data::new(user_repository);
    let personnel_repo_data = web::Data::new(personnel_repository);
    let equipment_repo_data = web::Data::new(equipment_repository);
    let record_repo_data = web::Data::new(record_repository);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(user_repo_data.clone())
            .app_data(personnel_repo_data.clone())
            .app_data(equipment_repo_data.clone())
            .app_data(record_repo_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin("http://localhost:3000")
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
