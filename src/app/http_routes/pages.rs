use crate::api::error::ApiError;
use crate::app::state::AppState;
use actix_web::{get, web, HttpResponse};
use std::io::ErrorKind;
use std::path::{Component, Path};

// ==========================================
// 页面与静态文件
// ==========================================

const SCORE_PAGE: &str = "chamdiem.html";
const RANK_PAGE: &str = "xephang.html";
const ADMIN_PAGE: &str = "quanly.html";

/// 评分页
#[get("/")]
pub async fn score_page(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    serve_file(&state.config.static_dir, SCORE_PAGE).await
}

/// 排行榜页
#[get("/rank")]
pub async fn rank_page(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    serve_file(&state.config.static_dir, RANK_PAGE).await
}

/// 管理页
#[get("/admin")]
pub async fn admin_page(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    serve_file(&state.config.static_dir, ADMIN_PAGE).await
}

/// 静态目录下的任意文件
#[get("/static/{file_path:.*}")]
pub async fn static_file(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    serve_file(&state.config.static_dir, &path).await
}

/// 读取静态目录下的文件
///
/// 只接受普通路径段，`..`、绝对路径一律按不存在处理
async fn serve_file(static_dir: &Path, relative: &str) -> Result<HttpResponse, ApiError> {
    let rel = Path::new(relative);
    let is_safe = !relative.is_empty()
        && rel.components().all(|c| matches!(c, Component::Normal(_)));
    if !is_safe {
        tracing::warn!("[static] 拒绝非法路径: {}", relative);
        return Err(ApiError::NotFound(format!("文件 {} 不存在", relative)));
    }

    let full_path = static_dir.join(rel);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&full_path).first_or_octet_stream();
            Ok(HttpResponse::Ok().content_type(mime.to_string()).body(bytes))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ApiError::NotFound(format!("文件 {} 不存在", relative)))
        }
        Err(e) => Err(ApiError::InternalError(format!(
            "读取文件 {} 失败: {}",
            full_path.display(),
            e
        ))),
    }
}
