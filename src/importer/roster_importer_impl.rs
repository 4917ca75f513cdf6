// ==========================================
// 比赛评分与抽奖系统 - 名单导入器实现
// ==========================================
// 导入流程:
// 1) 文件解析（按扩展名选择解析器，跳过表头）
// 2) 第 1 列 = 部门代码，第 2 列 = 姓名
// 3) 文本清洗（换行残留 / 空白折叠）
// 4) 部门代码或姓名缺失的行直接丢弃
// 5) 派生 full_name + 分配合成 id
// ==========================================

use crate::domain::candidate::Candidate;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::roster_importer_trait::RosterImporter;
use std::time::Instant;

const DEPT_ID_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;

pub struct RosterImporterImpl {
    parser: UniversalFileParser,
    cleaner: DataCleaner,
}

impl RosterImporterImpl {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            cleaner: DataCleaner,
        }
    }

    /// 将一行原始文本转换为候选人，缺少部门或姓名时返回 None
    fn map_row(&self, row: &[String]) -> Option<Candidate> {
        let dept_id = self
            .cleaner
            .normalize_null(row.get(DEPT_ID_COLUMN).map(String::as_str))?;
        let name = self
            .cleaner
            .normalize_null(row.get(NAME_COLUMN).map(String::as_str))?;

        Some(Candidate::new(dept_id, name))
    }
}

impl Default for RosterImporterImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterImporter for RosterImporterImpl {
    fn ingest_roster(&self, file_name: &str, bytes: &[u8]) -> ImportResult<Vec<Candidate>> {
        if bytes.is_empty() {
            return Err(ImportError::EmptyUpload);
        }

        let start = Instant::now();
        let rows = self.parser.for_file_name(file_name).parse_rows(bytes)?;

        let mut roster = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for (idx, row) in rows.iter().enumerate() {
            match self.map_row(row) {
                Some(candidate) => roster.push(candidate),
                None => {
                    skipped += 1;
                    // 行号按表格显示口径：表头为第 1 行
                    tracing::debug!(row = idx + 2, "跳过缺少部门或姓名的行");
                }
            }
        }

        tracing::info!(
            file_name,
            total_rows = rows.len(),
            imported = roster.len(),
            skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "名单解析完成"
        );

        Ok(roster)
    }
}
