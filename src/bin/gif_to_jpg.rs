use batch_image_converter::cli::{self, GifToJpgArgs};
use batch_image_converter::config::ConversionConfig;
use batch_image_converter::domain::ConversionMode;
use batch_image_converter::error::AppError;
use batch_image_converter::prompt::Prompter;
use batch_image_converter::report::Reporter;
use batch_image_converter::workflow;
use clap::Parser;
use std::io;

fn main() {
    let args = GifToJpgArgs::parse();
    cli::init_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: GifToJpgArgs) -> Result<(), AppError> {
    let mode = ConversionMode::GifToJpg;
    println!("{}", mode.welcome_message());

    // 出力フォーマットはJPG固定なので質問しない
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let config =
        ConversionConfig::resolve(mode, args.input_dir, args.output_dir, None, &mut prompter)?;

    workflow::run(&config, &mut Reporter::new(io::stdout()))?;
    Ok(())
}
