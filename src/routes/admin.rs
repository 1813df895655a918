use actix_web::web;

use crate::handlers::{equipment, personnel};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/personnel", web::get().to(personnel::get_personnel))
            .route("/personnel", web::post().to(personnel::create_personnel))
            .route(
                "/personnel/{id}",
                web::delete().to(personnel::delete_personnel),
            )
            .route("/equipment", web::get().to(equipment::get_equipment))
            .route("/equipment", web::post().to(equipment::create_equipment))
            .route(
                "/equipment/{id}",
                web::delete().to(equipment::delete_equipment),
            ),
    );
}
