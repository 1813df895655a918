use actix_web::{HttpResponse, Result, web};

use crate::{
    database::{models::PersonnelInput, repositories::PersonnelRepository},
    error::AppError,
    handlers::shared::ApiResponse,
    services::Claims,
};

/// Ungated listing backing the checkout/return forms.
pub async fn list_personnel(personnel_repo: web::Data<PersonnelRepository>) -> Result<HttpResponse> {
    let personnel = personnel_repo.get_all().await.map_err(|e| {
        log::error!("Error fetching personnel: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(personnel))
}

pub async fn get_personnel(
    claims: Claims,
    personnel_repo: web::Data<PersonnelRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let personnel = personnel_repo.get_all().await.map_err(|e| {
        log::error!("Error fetching personnel: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::success(personnel))
}

pub async fn create_personnel(
    claims: Claims,
    input: web::Json<PersonnelInput>,
    personnel_repo: web::Data<PersonnelRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let input = input.into_inner();
    input.validate()?;

    if personnel_repo.name_exists(&input.name).await.map_err(|e| {
        log::error!("Error checking personnel name: {}", e);
        AppError::from(e)
    })? {
        return Err(AppError::Validation(format!(
            "Personnel '{}' already exists",
            input.name
        ))
        .into());
    }

    let person = personnel_repo.create(input).await.map_err(|e| {
        log::error!("Error creating personnel: {}", e);
        AppError::from(e)
    })?;

    Ok(ApiResponse::created(person))
}

pub async fn delete_personnel(
    path: web::Path<i64>,
    claims: Claims,
    personnel_repo: web::Data<PersonnelRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let id = path.into_inner();

    let deleted = personnel_repo.delete(id).await.map_err(|e| {
        log::error!("Error deleting personnel {}: {}", id, e);
        AppError::from(e)
    })?;

    if !deleted {
        return Err(AppError::NotFound("Personnel not found".to_string()).into());
    }

    Ok(ApiResponse::success_message("Personnel deleted successfully"))
}
