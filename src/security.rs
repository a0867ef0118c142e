//! Security Module
//!
//! 入力ファイルに対するセキュリティ制限を定義するモジュール。

use crate::error::ReportError;

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

impl SecurityConfig {
    /// 読み込んだバイト数が上限以内か検証する
    pub fn check_input_size(&self, bytes_read: u64) -> Result<(), ReportError> {
        if bytes_read > self.max_input_file_size {
            return Err(ReportError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, self.max_input_file_size
            )));
        }
        Ok(())
    }
}
