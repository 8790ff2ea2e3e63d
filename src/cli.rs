use crate::domain::output_format::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// フォルダ内の画像をJPGまたはPNGに一括変換します。
/// 指定しなかった項目は対話的に質問されます。
#[derive(Parser, Debug)]
#[command(name = "image-converter", author, version, about, long_about = None)]
pub struct ConvertArgs {
    /// 変換元の画像ファイル (.jpg .jpeg .png .gif .bmp .tiff .webp) が含まれるフォルダのパス
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// 変換後のファイルの出力先フォルダのパス (存在しない場合は作成されます)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// 出力フォーマット (JPG または PNG、大文字小文字は問いません)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// デバッグログを表示する
    #[arg(short, long)]
    pub verbose: bool,
}

/// フォルダ内のGIFファイルをJPGに一括変換します。
/// 指定しなかった項目は対話的に質問されます。
#[derive(Parser, Debug)]
#[command(name = "gif-to-jpg", author, version, about, long_about = None)]
pub struct GifToJpgArgs {
    /// 変換元のGIFファイルが含まれるフォルダのパス
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// JPGファイルの出力先フォルダのパス (存在しない場合は作成されます)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// デバッグログを表示する
    #[arg(short, long)]
    pub verbose: bool,
}

/// ロガーを初期化します。`RUST_LOG` が設定されている場合はそちらを優先します。
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_args_accept_all_flags() {
        let args = ConvertArgs::try_parse_from([
            "image-converter",
            "-i",
            "in",
            "--output-dir",
            "out",
            "--format",
            "Png",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.input_dir, Some(PathBuf::from("in")));
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.format, Some(OutputFormat::Png));
        assert!(args.verbose);
    }

    #[test]
    fn convert_args_are_optional() {
        let args = ConvertArgs::try_parse_from(["image-converter"]).unwrap();
        assert!(args.input_dir.is_none());
        assert!(args.output_dir.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn convert_args_reject_unknown_format() {
        assert!(ConvertArgs::try_parse_from(["image-converter", "-f", "bmp"]).is_err());
    }

    #[test]
    fn gif_args_have_no_format_flag() {
        assert!(GifToJpgArgs::try_parse_from(["gif-to-jpg", "-f", "png"]).is_err());
        let args = GifToJpgArgs::try_parse_from(["gif-to-jpg", "-i", "gifs"]).unwrap();
        assert_eq!(args.input_dir, Some(PathBuf::from("gifs")));
    }
}
