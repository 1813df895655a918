use actix_web::web;

use crate::handlers::records;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/records")
            .route("", web::get().to(records::list_records))
            .route("", web::post().to(records::checkout))
            .route("/batch-return", web::post().to(records::batch_return))
            .route("/{id}/return", web::post().to(records::return_record))
            .route("/{id}", web::delete().to(records::delete_record)),
    );
}
