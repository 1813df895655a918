use actix_web::{HttpResponse, Result, web};

use crate::{
    database::{models::EquipmentInput, repositories::EquipmentRepository},
    error::AppError,
    handlers::shared::ApiResponse,
    services::Claims,
};

/// Ungated listing backing the checkout form.
pub async fn list_equipment(equipment_repo: web::Data<EquipmentRepository>) -> Result<HttpResponse> {
    let equipment = equipment_repo.get_all().await.map_err(|e| {
        log::error!("Error fetching equipment: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(equipment))
}

pub async fn get_equipment(
    claims: Claims,
    equipment_repo: web::Data<EquipmentRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let equipment = equipment_repo.get_all().await.map_err(|e| {
        log::error!("Error fetching equipment: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(equipment))
}

pub async fn create_equipment(
    claims: Claims,
    input: web::Json<EquipmentInput>,
    equipment_repo: web::Data<EquipmentRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let input = input.into_inner();
    input.validate()?;

    if equipment_repo.name_exists(&input.name).await.map_err(|e| {
        log::error!("Error checking equipment name: {}", e);
        AppError::from(e)
    })? {
        return Err(AppError::Validation(format!(
            "Equipment '{}' already exists",
            input.name
        ))
        .into());
    }

    let equipment = equipment_repo.create(input).await.map_err(|e| {
        log::error!("Error creating equipment: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::created(equipment))
}

pub async fn delete_equipment(
    path: web::Path<i64>,
    claims: Claims,
    equipment_repo: web::Data<EquipmentRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let id = path.into_inner();

    let deleted = equipment_repo.delete(id).await.map_err(|e| {
        log::error!("Error deleting equipment {}: {}", id, e);
        AppError::from(e)
    })?;

    if !deleted {
        return Err(AppError::NotFound("Equipment not found".to_string()).into());
    }

    Ok(ApiResponse::success_message("Equipment deleted successfully"))
}
