use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::{
    database::{
        models::{
            BatchReturnInput, BatchReturnResponse, CheckoutInput, Record, RecordStatus,
            RecordView, ReturnInput,
        },
        repositories::RecordRepository,
    },
    error::AppError,
    handlers::shared::ApiResponse,
    services::Claims,
};

#[derive(Debug, Deserialize)]
pub struct RecordListQuery {
    pub responsible: Option<String>,
    pub equipment: Option<String>,
}

/// Empty query parameters count as absent, like a blank search form field.
fn normalize(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub async fn list_records(
    query: web::Query<RecordListQuery>,
    record_repo: web::Data<RecordRepository>,
) -> Result<HttpResponse> {
    let responsible = normalize(&query.responsible);
    let equipment = normalize(&query.equipment);

    let records = record_repo
        .list(responsible, equipment)
        .await
        .map_err(|e| {
            log::error!("Error listing records: {}", e);
            AppError::from(e)
        })?;

    let views: Vec<RecordView> = records.into_iter().map(RecordView::from).collect();

    Ok(ApiResponse::success(views))
}

pub async fn checkout(
    input: web::Json<CheckoutInput>,
    record_repo: web::Data<RecordRepository>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    input.validate()?;

    let record = Record::new(
        input.user_name.trim().to_string(),
        input.equipment_name.trim().to_string(),
        input.checked_out_by.trim().to_string(),
    );

    record_repo.create_checkout(&record).await.map_err(|e| {
        log::error!("Error creating checkout record: {}", e);
        AppError::from(e)
    })?;

    log::info!(
        "Equipment '{}' checked out by '{}' for '{}'",
        record.equipment_name,
        record.checked_out_by,
        record.user_name
    );

    Ok(ApiResponse::created(record))
}

pub async fn return_record(
    path: web::Path<String>,
    input: web::Json<ReturnInput>,
    record_repo: web::Data<RecordRepository>,
) -> Result<HttpResponse> {
    let record_id = path.into_inner();
    let input = input.into_inner();
    input.validate()?;

    let existing = record_repo
        .find_by_id(&record_id)
        .await
        .map_err(|e| {
            log::error!("Error fetching record {}: {}", record_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| {
            log::warn!("Record {} not found", record_id);
            AppError::NotFound("Record not found".to_string())
        })?;

    if existing.status == RecordStatus::Complete {
        return Err(AppError::Validation("Record is already returned".to_string()).into());
    }

    let updated = record_repo
        .mark_returned(&record_id, input.returned_by.trim())
        .await
        .map_err(|e| {
            log::error!("Error returning record {}: {}", record_id, e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;

    Ok(ApiResponse::success(updated))
}

pub async fn batch_return(
    claims: Claims,
    input: web::Json<BatchReturnInput>,
    record_repo: web::Data<RecordRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let input = input.into_inner();

    if input.record_ids.is_empty() {
        return Err(AppError::Validation(
            "No records selected for the batch action".to_string(),
        )
        .into());
    }

    if input.action != "complete" {
        return Err(AppError::Validation(format!("Unknown batch action: {}", input.action)).into());
    }

    let returned_by = input
        .returned_by
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            AppError::Validation("A responsible person is required for batch return".to_string())
        })?;

    let updated = record_repo
        .batch_return(&input.record_ids, returned_by)
        .await
        .map_err(|e| {
            log::error!("Error in batch return: {}", e);
            AppError::from(e)
        })?;

    log::info!(
        "Batch return by {}: {} of {} records updated",
        claims.email,
        updated,
        input.record_ids.len()
    );

    Ok(ApiResponse::success_with_message(
        BatchReturnResponse { updated },
        &format!("{} records updated", updated),
    ))
}

pub async fn delete_record(
    path: web::Path<String>,
    claims: Claims,
    record_repo: web::Data<RecordRepository>,
) -> Result<HttpResponse> {
    claims.requires_admin()?;

    let record_id = path.into_inner();

    let deleted = record_repo.delete(&record_id).await.map_err(|e| {
        log::error!("Error deleting record {}: {}", record_id, e);
        AppError::from(e)
    })?;

    if !deleted {
        return Err(AppError::NotFound("Record not found".to_string()).into());
    }

    Ok(ApiResponse::success_message("Record deleted successfully"))
}
