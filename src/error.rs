use crate::domain::input_source::PathError;
use crate::prompt::PromptError;
use thiserror::Error;

/// バッチ全体を中断する致命的なエラー。
///
/// 1ファイルごとの変換エラーはここには含まれず、`ConversionOutcome::Failed` として報告される。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Path(#[from] PathError),

    #[error("{0}")]
    Prompt(#[from] PromptError),
}
