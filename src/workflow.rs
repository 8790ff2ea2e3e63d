//! 一括変換のメインワークフローを定義するモジュール。
//!
//! 入力フォルダの列挙 → 出力フォルダの準備 → 1ファイルずつの変換 → 結果の報告、の順に処理します。
//! 1ファイルの失敗はバッチを止めず、入力・出力フォルダ自体の問題だけが致命的なエラーになります。

use crate::config::ConversionConfig;
use crate::domain::candidate_file::CandidateFile;
use crate::domain::input_source::DirectoryPath;
use crate::domain::outcome::{BatchReport, ConversionOutcome};
use crate::domain::output_directory::OutputDirectory;
use crate::domain::output_format::OutputFormat;
use crate::domain::source_image::SourceImage;
use crate::error::AppError;
use crate::report::Reporter;
use std::io::Write;

// --- public な関数 ---

/// 設定に従って一括変換を実行します。
///
/// # 引数
/// * `config`: 入力・出力フォルダ、モード、出力フォーマット。
/// * `reporter`: 各ファイルの結果と完了メッセージの出力先。
///
/// # 戻り値
/// * `Ok(BatchReport)`: バッチを最後まで処理した場合（個々のファイルの失敗を含む）。
///   変換対象がなかった場合は空のレポートを返します。
/// * `Err(AppError)`: 入力フォルダが無効、または出力フォルダを作成できなかった場合。
pub fn run<W: Write>(
    config: &ConversionConfig,
    reporter: &mut Reporter<W>,
) -> Result<BatchReport, AppError> {
    // 1. 入力フォルダの検証と変換対象の列挙
    let input_dir = DirectoryPath::new(&config.input_dir)?;
    let candidates = input_dir.candidate_files(config.mode)?;

    if candidates.is_empty() {
        // 対象がないのはエラーではないので、メッセージを出して正常終了する
        reporter.no_candidates(config.mode);
        reporter.completed();
        return Ok(BatchReport::new());
    }
    log::info!(
        "found {} candidate file(s) in {}",
        candidates.len(),
        input_dir
    );

    // 2. 出力フォルダの準備
    let output_dir = OutputDirectory::prepare(&config.output_dir)?;
    log::info!("writing {} output to {}", config.output_format, output_dir.as_path().display());

    // 3. 1ファイルずつ変換
    let mut report = BatchReport::new();
    for candidate in &candidates {
        let outcome = convert_candidate(candidate, &output_dir, config.output_format);
        reporter.outcome(&outcome);
        report.push(outcome);
    }

    log::info!(
        "{} converted, {} failed",
        report.converted_count(),
        report.failed_count()
    );
    reporter.completed();
    Ok(report)
}

// --- private なヘルパー関数 ---

/// 1ファイルを変換します。失敗は呼び出し元に伝播させず、結果として返します。
fn convert_candidate(
    candidate: &CandidateFile,
    output_dir: &OutputDirectory,
    format: OutputFormat,
) -> ConversionOutcome {
    let target = output_dir.target_for(candidate, format);
    log::debug!("decoding {}", candidate.path().display());

    let result = SourceImage::open(candidate.path()).and_then(|image| image.save_as(&target, format));
    match result {
        Ok(()) => ConversionOutcome::Converted {
            source: candidate.file_name().to_string(),
            destination: target
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        },
        Err(error) => {
            log::debug!("failed to convert {}: {:?}", candidate.path().display(), error);
            ConversionOutcome::Failed {
                source: candidate.file_name().to_string(),
                error,
            }
        }
    }
}
