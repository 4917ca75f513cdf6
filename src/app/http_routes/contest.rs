use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::contest::{ParticipantCreate, VoteSubmission};
use actix_web::{delete, get, post, web, HttpResponse};

// ==========================================
// 参赛者管理（新增、查询、删除）
// ==========================================

/// 查询全部参赛者
#[get("/api/participants")]
pub async fn list_participants(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let result = state.contest_api.list_participants()?;
    Ok(HttpResponse::Ok().json(result))
}

/// 新增参赛者
#[post("/api/participants")]
pub async fn add_participant(
    state: web::Data<AppState>,
    body: web::Json<ParticipantCreate>,
) -> Result<HttpResponse, ApiError> {
    let result = state.contest_api.add_participant(body.into_inner())?;
    Ok(HttpResponse::Ok().json(result))
}

/// 删除参赛者
#[delete("/api/participants/{participant_id}")]
pub async fn delete_participant(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let result = state.contest_api.delete_participant(&path)?;
    Ok(HttpResponse::Ok().json(result))
}

/// 查询参赛者打分明细
#[get("/api/participants/{participant_id}/details")]
pub async fn participant_details(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let result = state.contest_api.participant_details(&path)?;
    Ok(HttpResponse::Ok().json(result))
}

// ==========================================
// 评分与排行榜
// ==========================================

/// 评委打分（新增或覆盖）
#[post("/api/vote")]
pub async fn submit_vote(
    state: web::Data<AppState>,
    body: web::Json<VoteSubmission>,
) -> Result<HttpResponse, ApiError> {
    let result = state.contest_api.submit_vote(body.into_inner())?;
    Ok(HttpResponse::Ok().json(result))
}

/// 排行榜
#[get("/api/leaderboard")]
pub async fn leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let result = state.contest_api.leaderboard()?;
    Ok(HttpResponse::Ok().json(result))
}
