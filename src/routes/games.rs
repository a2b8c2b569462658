//! Game-related HTTP routes: the operation contract of the session engine.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{CardColor, GameSession};
use crate::error::AppError;
use crate::services::game_flow::LeaveOutcome;
use crate::state::app_state::AppState;

#[derive(Serialize)]
struct GameResponse {
    game: GameSession,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Deserialize)]
struct CreateGameRequest {
    user_id: Uuid,
    username: String,
}

async fn create_game(
    app_state: web::Data<AppState>,
    body: web::Json<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.username.trim().is_empty() {
        return Err(AppError::invalid(
            "MISSING_USERNAME",
            "username is required".to_string(),
        ));
    }
    let game = app_state
        .games
        .create_game(body.user_id, body.username)
        .await?;
    Ok(HttpResponse::Created().json(GameResponse { game }))
}

#[derive(Deserialize)]
struct JoinGameRequest {
    code: String,
    user_id: Uuid,
    username: String,
}

async fn join_game(
    app_state: web::Data<AppState>,
    body: web::Json<JoinGameRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    if body.username.trim().is_empty() || body.code.trim().is_empty() {
        return Err(AppError::invalid(
            "MISSING_FIELDS",
            "code and username are required".to_string(),
        ));
    }
    let game = app_state
        .games
        .join_game(&body.code, body.user_id, body.username)
        .await?;
    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

#[derive(Deserialize)]
struct LeaveGameRequest {
    game_id: Uuid,
    user_id: Uuid,
}

async fn leave_game(
    app_state: web::Data<AppState>,
    body: web::Json<LeaveGameRequest>,
) -> Result<HttpResponse, AppError> {
    match app_state
        .games
        .leave_game(body.game_id, body.user_id)
        .await?
    {
        LeaveOutcome::Deleted { .. } => Ok(HttpResponse::Ok().json(MessageResponse {
            message: "Game deleted".to_string(),
        })),
        LeaveOutcome::Left(game) => Ok(HttpResponse::Ok().json(GameResponse { game })),
    }
}

#[derive(Deserialize)]
struct StartGameRequest {
    game_id: Uuid,
    user_id: Uuid,
}

async fn start_game(
    app_state: web::Data<AppState>,
    body: web::Json<StartGameRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .start_game(body.game_id, body.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

#[derive(Deserialize)]
struct SelectTrumpRequest {
    game_id: Uuid,
    user_id: Uuid,
    color: CardColor,
}

async fn select_trump(
    app_state: web::Data<AppState>,
    body: web::Json<SelectTrumpRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .select_trump(body.game_id, body.user_id, body.color)
        .await?;
    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

#[derive(Deserialize)]
struct BidRequest {
    game_id: Uuid,
    user_id: Uuid,
    bid: u8,
}

async fn place_bid(
    app_state: web::Data<AppState>,
    body: web::Json<BidRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .place_bid(body.game_id, body.user_id, body.bid)
        .await?;
    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

#[derive(Deserialize)]
struct PlayCardRequest {
    game_id: Uuid,
    user_id: Uuid,
    card_id: String,
}

async fn play_card(
    app_state: web::Data<AppState>,
    body: web::Json<PlayCardRequest>,
) -> Result<HttpResponse, AppError> {
    let (game, _outcome) = app_state
        .games
        .play_card(body.game_id, body.user_id, &body.card_id)
        .await?;
    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

async fn get_game(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let game = app_state.games.find_by_code(&code).await?;
    Ok(HttpResponse::Ok().json(GameResponse { game }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/games")
            .service(web::resource("/create").route(web::post().to(create_game)))
            .service(web::resource("/join").route(web::post().to(join_game)))
            .service(web::resource("/leave").route(web::post().to(leave_game)))
            .service(web::resource("/start").route(web::post().to(start_game)))
            .service(web::resource("/select-trump").route(web::post().to(select_trump)))
            .service(web::resource("/bid").route(web::post().to(place_bid)))
            .service(web::resource("/play-card").route(web::post().to(play_card)))
            .service(web::resource("/{code}").route(web::get().to(get_game))),
    );
}
