use crate::domain::conversion_mode::ConversionMode;
use crate::domain::output_format::OutputFormat;
use crate::prompt::{PromptError, Prompter};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// 変換エンジンに渡す設定。
///
/// コマンドライン引数や対話的な入力から組み立てられ、エンジン自体は入出力の方法を知らない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    pub mode: ConversionMode,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub output_format: OutputFormat,
}

impl ConversionConfig {
    /// 出力フォーマットが固定されているモードでは、`output_format` よりもモードの指定を優先します。
    pub fn new(
        mode: ConversionMode,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            mode,
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            output_format: mode.fixed_output_format().unwrap_or(output_format),
        }
    }

    /// 指定されていない項目だけを対話的に質問して設定を組み立てます。
    ///
    /// 質問の順序は 入力フォルダ → 出力フォルダ → 出力フォーマット です。
    /// 出力フォーマットが固定されているモードではフォーマットを質問しません。
    pub fn resolve<R: BufRead, W: Write>(
        mode: ConversionMode,
        input_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        output_format: Option<OutputFormat>,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Self, PromptError> {
        let input_dir = match input_dir {
            Some(dir) => dir,
            None => prompter.ask_path(mode.input_prompt())?,
        };
        let output_dir = match output_dir {
            Some(dir) => dir,
            None => prompter.ask_path(mode.output_prompt())?,
        };
        let output_format = match (mode.fixed_output_format(), output_format) {
            (Some(fixed), _) => fixed,
            (None, Some(chosen)) => chosen,
            (None, None) => prompter.ask_output_format()?,
        };

        Ok(Self {
            mode,
            input_dir,
            output_dir,
            output_format,
        })
    }
}
