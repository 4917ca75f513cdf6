// ==========================================
// 比赛评分与抽奖系统 - HTTP 路由（按域拆分）
// ==========================================
// 职责: 路由定义,连接前端与后端 API
// ==========================================

mod common;
mod contest;
mod lottery;
mod pages;

use actix_web::web;

pub use common::ErrorResponse;

/// 注册全部路由
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(common::query_config())
        .app_data(common::json_config())
        .app_data(common::path_config())
        // ==========================================
        // 抽奖相关路由 (5个)
        // ==========================================
        .service(
            web::scope("/api/lottery")
                .service(lottery::upload_roster)
                .service(lottery::list_candidates)
                .service(lottery::draw)
                .service(lottery::list_winners)
                .service(lottery::reset),
        )
        // ==========================================
        // 评分相关路由 (6个)
        // ==========================================
        .service(contest::list_participants)
        .service(contest::add_participant)
        .service(contest::participant_details)
        .service(contest::delete_participant)
        .service(contest::submit_vote)
        .service(contest::leaderboard)
        // ==========================================
        // 页面与静态文件
        // ==========================================
        .service(pages::score_page)
        .service(pages::rank_page)
        .service(pages::admin_page)
        .service(pages::static_file);
}
