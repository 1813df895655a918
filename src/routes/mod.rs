use actix_web::web;

pub mod admin;
pub mod auth;
pub mod records;

use crate::handlers::{equipment, personnel};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure)
            .configure(records::configure)
            .configure(admin::configure)
            .route("/personnel", web::get().to(personnel::list_personnel))
            .route("/equipment", web::get().to(equipment::list_equipment)),
    );
}
