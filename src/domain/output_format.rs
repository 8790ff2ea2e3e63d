use image::ImageFormat;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 変換後の出力フォーマット。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG。アルファチャンネルは破棄される。
    Jpg,
    /// PNG。元画像のアルファチャンネルを保持する。
    Png,
}

/// 出力フォーマットの文字列が `JPG` / `PNG` のどちらでもなかった場合のエラー。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutputFormatError {
    #[error("unsupported output format '{0}', expected JPG or PNG")]
    Unsupported(String),
}

impl OutputFormat {
    /// 出力ファイルに付ける拡張子（ドットなし、小文字）。
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    /// エンコードに使う `image` クレートのフォーマット。
    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Jpg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputFormatError;

    /// 前後の空白を取り除き、大文字小文字を区別せずに解釈する。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "JPG" => Ok(OutputFormat::Jpg),
            "PNG" => Ok(OutputFormat::Png),
            _ => Err(OutputFormatError::Unsupported(s.trim().to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Jpg => write!(f, "JPG"),
            OutputFormat::Png => write!(f, "PNG"),
        }
    }
}
