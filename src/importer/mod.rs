// ==========================================
// 比赛评分与抽奖系统 - 导入层
// ==========================================
// 职责: 将上传的表格文件转换为抽奖候选人名单
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod roster_importer_impl;
pub mod roster_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use roster_importer_impl::RosterImporterImpl;

// 重导出 Trait 接口
pub use roster_importer_trait::{RosterImporter, RosterParser};
