//! ツールごとの違い（認識する拡張子、出力フォーマットの選択可否、メッセージ文言）を
//! 1つの列挙型にまとめたモジュール。

use super::output_format::OutputFormat;

const GIF_EXTENSIONS: &[&str] = &["gif"];
const COMMON_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"];

/// 変換ツールの動作モード。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// GIFのみを対象とし、常にJPGへ変換する。
    GifToJpg,
    /// 一般的な画像フォーマットを対象とし、JPG/PNGを選択できる。
    General,
}

impl ConversionMode {
    /// このモードで変換対象とみなす拡張子（小文字、ドットなし）。
    pub fn recognized_extensions(self) -> &'static [&'static str] {
        match self {
            ConversionMode::GifToJpg => GIF_EXTENSIONS,
            ConversionMode::General => COMMON_IMAGE_EXTENSIONS,
        }
    }

    /// 拡張子が変換対象かどうかを大文字小文字を区別せずに判定する。
    pub fn recognizes(self, extension: &str) -> bool {
        let extension = extension.to_lowercase();
        self.recognized_extensions().contains(&extension.as_str())
    }

    /// 出力フォーマットが固定されている場合はそれを返す。
    pub fn fixed_output_format(self) -> Option<OutputFormat> {
        match self {
            ConversionMode::GifToJpg => Some(OutputFormat::Jpg),
            ConversionMode::General => None,
        }
    }

    pub fn welcome_message(self) -> &'static str {
        match self {
            ConversionMode::GifToJpg => "Welcome to the GIF to JPG converter!",
            ConversionMode::General => "Welcome to the Image Converter!",
        }
    }

    pub fn input_prompt(self) -> &'static str {
        match self {
            ConversionMode::GifToJpg => "Enter the path to the folder containing GIF files: ",
            ConversionMode::General => "Enter the path to the folder containing image files: ",
        }
    }

    pub fn output_prompt(self) -> &'static str {
        match self {
            ConversionMode::GifToJpg => {
                "Enter the path to the folder where JPG files should be saved: "
            }
            ConversionMode::General => {
                "Enter the path to the folder where converted files should be saved: "
            }
        }
    }

    /// 変換対象が1つも見つからなかったときに表示する文言。
    pub fn no_candidates_message(self) -> &'static str {
        match self {
            ConversionMode::GifToJpg => "No GIF files found in the input folder.",
            ConversionMode::General => "No image files found in the input folder.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_mode_only_recognizes_gif() {
        let mode = ConversionMode::GifToJpg;
        assert!(mode.recognizes("gif"));
        assert!(mode.recognizes("GIF"));
        assert!(!mode.recognizes("png"));
        assert!(!mode.recognizes("jpg"));
        assert_eq!(mode.fixed_output_format(), Some(OutputFormat::Jpg));
    }

    #[test]
    fn general_mode_recognizes_common_formats() {
        let mode = ConversionMode::General;
        for ext in ["jpg", "JPEG", "Png", "gif", "bmp", "TIFF", "webp"] {
            assert!(mode.recognizes(ext), "{ext} should be recognized");
        }
        // tif は元の一覧に含まれないため対象外
        for ext in ["tif", "txt", "svg", ""] {
            assert!(!mode.recognizes(ext), "{ext} should not be recognized");
        }
        assert_eq!(mode.fixed_output_format(), None);
    }
}
