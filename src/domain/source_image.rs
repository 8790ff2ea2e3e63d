// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::output_format::OutputFormat;
use image::{DynamicImage, ImageError, ImageReader};
use std::path::Path;
use thiserror::Error;

// --- エラー定義 ---

/// 1ファイルの変換中に発生するエラー。
///
/// このエラーはバッチを中断せず、`ConversionOutcome::Failed` として記録されます。
#[derive(Debug, Error)]
pub enum ConversionError {
    /// ファイルを開けなかった、または形式の判定で読み取りに失敗した場合。
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// 画像としてデコードできなかった場合（破損、空ファイル、未対応の形式など）。
    #[error("{0}")]
    Decode(#[source] ImageError),
    /// エンコードまたは書き込みに失敗した場合。
    #[error("{0}")]
    Encode(#[source] ImageError),
}

// --- 構造体定義 ---

/// デコード済みの変換元画像。
///
/// アニメーションGIFの場合は最初のフレームのみを保持します。
/// 1ファイル分の画像だけをメモリに持ち、変換後は破棄される想定です。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
}

// --- 実装ブロック ---

impl SourceImage {
    /// ファイルを開いて画像としてデコードします。
    ///
    /// 対象ファイルの判定は拡張子で行いますが、デコード時の形式はファイルの内容から推定します。
    /// 内容から判定できない場合は拡張子による判定にフォールバックします。
    pub fn open(path: &Path) -> Result<Self, ConversionError> {
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(ConversionError::Decode)?;
        Ok(Self { image })
    }

    #[cfg(test)]
    pub(crate) fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// 元画像がアルファチャンネルを持っているかどうか。
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// 出力フォーマットに合わせてカラーモデルを変換します。
    ///
    /// * JPG: 3チャンネルのRGBに変換します。透明部分は背景色と合成せず、アルファ値をそのまま破棄します。
    /// * PNG: 変換せずにそのまま返します（アルファチャンネルは保持されます）。
    pub fn into_format(self, format: OutputFormat) -> DynamicImage {
        match format {
            OutputFormat::Jpg => DynamicImage::ImageRgb8(self.image.to_rgb8()),
            OutputFormat::Png => self.image,
        }
    }

    /// 変換してファイルに書き込みます。既存のファイルは警告なしに上書きされます。
    pub fn save_as(self, target: &Path, format: OutputFormat) -> Result<(), ConversionError> {
        if format == OutputFormat::Jpg && self.has_alpha() {
            log::debug!("discarding alpha channel for {}", target.display());
        }
        let converted = self.into_format(format);
        log::debug!(
            "encoding {:?} image as {} -> {}",
            converted.color(),
            format,
            target.display()
        );
        converted
            .save_with_format(target, format.image_format())
            .map_err(ConversionError::Encode)
    }
}

// --- テストモジュール ---
