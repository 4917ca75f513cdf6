// ==========================================
// 比赛评分与抽奖系统 - 名单导入 Trait
// ==========================================
// 职责: 定义名单导入接口（不包含实现）
// ==========================================

use crate::domain::candidate::Candidate;
use crate::importer::error::ImportResult;

// ==========================================
// RosterImporter Trait
// ==========================================
// 用途: 名单导入主接口,抽奖会话只消费其输出
// 实现者: RosterImporterImpl
pub trait RosterImporter: Send + Sync {
    /// 将上传文件解析为候选人名单
    ///
    /// # 参数
    /// - file_name: 上传时的文件名（用于选择解析器）
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - Ok(Vec<Candidate>): 已过滤空行、已清洗文本、已派生 full_name 的名单
    /// - Err: 文件无法解析
    fn ingest_roster(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Vec<Candidate>>;
}

// ==========================================
// RosterParser Trait
// ==========================================
// 用途: 文件解析接口,按列位置返回数据行
// 实现者: ExcelParser, CsvParser
pub trait RosterParser: Send + Sync {
    /// 解析文件为原始数据行（首行为表头，已跳过）
    fn parse_rows(&self, bytes: &[u8]) -> ImportResult<Vec<Vec<String>>>;
}
