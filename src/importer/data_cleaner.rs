// ==========================================
// 比赛评分与抽奖系统 - 数据清洗器
// ==========================================
// 职责: 换行残留清理 / 空白折叠 / NULL 标准化
// ==========================================

/// Excel 导出的回车转义残留
const EXCEL_CR_ARTIFACT: &str = "_x000D_";

pub struct DataCleaner;

impl DataCleaner {
    /// 清洗单元格文本
    ///
    /// `_x000D_`、`\r`、`\n` 及连续空白统一折叠为单个空格，并去除首尾空白
    pub fn clean_text(&self, value: &str) -> String {
        value
            .replace(EXCEL_CR_ARTIFACT, " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 清洗后为空的值视为缺失
    pub fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.map(|v| self.clean_text(v)).filter(|v| !v.is_empty())
    }
}
