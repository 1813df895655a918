use actix_web::{HttpResponse, Result, web};

use crate::{
    AppState,
    database::models::{CreateUserInput, LoginInput, UserInfo},
    database::repositories::UserRepository,
    error::AppError,
    handlers::shared::ApiResponse,
    services::Claims,
};

pub async fn register(
    request: web::Json<CreateUserInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let register_request = request.into_inner();

    let response = state
        .auth_service
        .register(register_request)
        .await
        .map_err(|e| {
            log::error!("Failed to register user: {}", e);
            AppError::Validation(e.to_string())
        })?;

    Ok(ApiResponse::created(response))
}

pub async fn login(
    request: web::Json<LoginInput>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let login_request = request.into_inner();

    let response = state.auth_service.login(login_request).await.map_err(|e| {
        log::warn!("Failed login attempt: {}", e);
        AppError::Unauthorized
    })?;

    Ok(ApiResponse::success(response))
}

pub async fn me(claims: Claims, user_repo: web::Data<UserRepository>) -> Result<HttpResponse> {
    let user = user_repo
        .find_by_id(claims.user_id())
        .await
        .map_err(|e| {
            log::error!("Failed to fetch user {}: {}", claims.user_id(), e);
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(ApiResponse::success(UserInfo::from(user)))
}
