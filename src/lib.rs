//! フォルダ内の画像ファイルをJPG/PNGに一括変換するライブラリ。
//!
//! `image-converter` と `gif-to-jpg` の2つのコマンドは、このクレートの同じ変換エンジンを
//! [`ConversionMode`](domain::ConversionMode) の違いだけで使い分けています。

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod prompt;
pub mod report;
pub mod workflow;
