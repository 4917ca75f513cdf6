// ==========================================
// 比赛评分与抽奖系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 输出: 按列位置的原始文本行,首行表头已跳过
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::roster_importer_trait::RosterParser;
use calamine::{open_workbook_auto_from_rs, Reader};
use csv::ReaderBuilder;
use std::io::Cursor;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl RosterParser for CsvParser {
    fn parse_rows(&self, bytes: &[u8]) -> ImportResult<Vec<Vec<String>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// 根据文件内容自动识别 xlsx / xls / ods,只读取第一个 sheet
pub struct ExcelParser;

impl RosterParser for ExcelParser {
    fn parse_rows(&self, bytes: &[u8]) -> ImportResult<Vec<Vec<String>>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 跳过表头（第一行）
        let rows = range
            .rows()
            .skip(1)
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    /// 选择解析器：.csv 走 CSV，其余一律按表格文件尝试
    pub fn for_file_name(&self, file_name: &str) -> Box<dyn RosterParser> {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Box::new(CsvParser),
            _ => Box::new(ExcelParser),
        }
    }
}
