//! Login route: username find-or-create.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::users::User;
use crate::state::app_state::AppState;

#[derive(Deserialize)]
struct LoginRequest {
    username: String,
}

#[derive(Serialize)]
struct LoginResponse {
    user: User,
}

async fn login(
    app_state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = app_state.users.login(&body.username).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { user }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/auth/login").route(web::post().to(login)));
}
