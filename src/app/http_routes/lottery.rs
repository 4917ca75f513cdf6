use crate::api::error::{ApiError, ApiResult};
use crate::app::state::AppState;
use crate::importer::ImportError;
use actix_multipart::{Field, Multipart};
use actix_web::{get, post, web, HttpResponse};
use futures::StreamExt;
use serde::Deserialize;

// ==========================================
// 抽奖相关路由
// ==========================================

/// 上传名单
///
/// multipart 表单中第一个带文件名的字段即为名单文件
#[post("/upload")]
pub async fn upload_roster(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let (file_name, bytes) = read_file_part(&mut payload, state.config.max_upload_bytes).await?;
    tracing::info!("[upload_roster] 收到文件: {}, {} 字节", file_name, bytes.len());

    // 表格解析为 CPU 密集操作，放到阻塞线程池执行
    let api = state.lottery_api.clone();
    let result = web::block(move || api.upload_roster(&file_name, &bytes))
        .await
        .map_err(|e| ApiError::InternalError(format!("后台任务失败: {}", e)))??;

    Ok(HttpResponse::Ok().json(result))
}

/// 读取 multipart 中的文件字段，超过上限立即中止
async fn read_file_part(payload: &mut Multipart, limit: usize) -> ApiResult<(String, Vec<u8>)> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ImportError::FileReadError(e.to_string()))?;

        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let Some(file_name) = file_name else {
            drain_field(&mut field).await?;
            continue;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ImportError::FileReadError(e.to_string()))?;
            if bytes.len() + chunk.len() > limit {
                return Err(ImportError::UploadTooLarge { limit }.into());
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok((file_name, bytes));
    }

    Err(ImportError::MissingFilePart.into())
}

async fn drain_field(field: &mut Field) -> ApiResult<()> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| ImportError::FileReadError(e.to_string()))?;
    }
    Ok(())
}

/// 查询当前候选人
#[get("/candidates")]
pub async fn list_candidates(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let result = state.lottery_api.candidates()?;
    Ok(HttpResponse::Ok().json(result))
}

/// 抽奖请求参数
#[derive(Debug, Deserialize)]
pub struct DrawQuery {
    #[serde(default = "default_num_winners")]
    pub num_winners: usize,
}

fn default_num_winners() -> usize {
    1
}

/// 抽奖
#[post("/draw")]
pub async fn draw(
    state: web::Data<AppState>,
    query: web::Query<DrawQuery>,
) -> Result<HttpResponse, ApiError> {
    tracing::info!("[draw] 收到请求: num_winners={}", query.num_winners);

    let result = state.lottery_api.draw(query.num_winners)?;
    Ok(HttpResponse::Ok().json(result))
}

/// 查询累计中奖名单
#[get("/winners")]
pub async fn list_winners(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let result = state.lottery_api.winners()?;
    Ok(HttpResponse::Ok().json(result))
}

/// 重置抽奖数据
#[post("/reset")]
pub async fn reset(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let result = state.lottery_api.reset()?;
    Ok(HttpResponse::Ok().json(result))
}
