// ==========================================
// 比赛评分与抽奖系统 - 抽奖API
// ==========================================
// 职责: 名单上传、抽奖、中奖查询、重置
// 并发: 单个 LotterySession 由 Mutex 保护，
//       抽奖/上传/重置的读-改-写在同一临界区内完成
// ==========================================

use crate::api::dto::{
    CandidateListResponse, DrawResponse, MessageResponse, UploadResponse, WinnerListResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::engine::LotterySession;
use crate::i18n;
use crate::importer::{RosterImporter, RosterImporterImpl};
use std::sync::{Mutex, MutexGuard};

/// 抽奖API
pub struct LotteryApi {
    session: Mutex<LotterySession>,
    importer: Box<dyn RosterImporter>,
}

impl LotteryApi {
    /// 使用默认名单导入器创建
    pub fn new() -> Self {
        Self::with_importer(Box::new(RosterImporterImpl::new()))
    }

    /// 注入自定义名单导入器
    pub fn with_importer(importer: Box<dyn RosterImporter>) -> Self {
        Self {
            session: Mutex::new(LotterySession::new()),
            importer,
        }
    }

    fn lock_session(&self) -> ApiResult<MutexGuard<'_, LotterySession>> {
        self.session
            .lock()
            .map_err(|e| ApiError::InternalError(format!("抽奖会话锁获取失败: {}", e)))
    }

    /// 上传名单
    ///
    /// 文件解析在加锁前完成；解析失败时现有名单与中奖名单保持不变
    pub fn upload_roster(&self, file_name: &str, bytes: &[u8]) -> ApiResult<UploadResponse> {
        let roster = self.importer.ingest_roster(file_name, bytes).map_err(|e| {
            tracing::warn!("[upload_roster] 名单解析失败: file={}, error={}", file_name, e);
            ApiError::from(e)
        })?;

        let count = roster.len();
        {
            let mut session = self.lock_session()?;
            session.load_roster(roster.clone());
        }

        tracing::info!("[upload_roster] 名单已替换: file={}, count={}", file_name, count);

        Ok(UploadResponse {
            message: i18n::t_with_args("lottery.uploaded", &[("count", &count.to_string())]),
            count,
            candidates: roster,
        })
    }

    /// 当前候选人
    pub fn candidates(&self) -> ApiResult<CandidateListResponse> {
        let session = self.lock_session()?;
        let candidates = session.roster().to_vec();
        Ok(CandidateListResponse {
            count: candidates.len(),
            candidates,
        })
    }

    /// 抽取 num_winners 人
    pub fn draw(&self, num_winners: usize) -> ApiResult<DrawResponse> {
        let mut session = self.lock_session()?;

        let winners = session.draw(num_winners).map_err(|e| {
            tracing::warn!("[draw] 抽奖请求被拒绝: {}", e);
            ApiError::from(e)
        })?;

        let remaining = session.roster().len();
        let total_winners = session.winners().len();
        drop(session);

        tracing::info!(
            requested = num_winners,
            remaining,
            total_winners,
            winners = ?winners.iter().map(|c| c.full_name.as_str()).collect::<Vec<_>>(),
            "[draw] 抽奖完成"
        );

        Ok(DrawResponse {
            count: winners.len(),
            winners,
            remaining,
            total_winners,
        })
    }

    /// 累计中奖名单
    pub fn winners(&self) -> ApiResult<WinnerListResponse> {
        let session = self.lock_session()?;
        let winners = session.winners().to_vec();
        Ok(WinnerListResponse {
            count: winners.len(),
            winners,
        })
    }

    /// 清空名单与中奖名单
    pub fn reset(&self) -> ApiResult<MessageResponse> {
        self.lock_session()?.reset();
        tracing::info!("[reset] 抽奖数据已清空");

        Ok(MessageResponse {
            message: i18n::t("lottery.reset"),
        })
    }
}

impl Default for LotteryApi {
    fn default() -> Self {
        Self::new()
    }
}
