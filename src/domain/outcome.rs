use super::source_image::ConversionError;

/// 1ファイル分の変換結果。
#[derive(Debug)]
pub enum ConversionOutcome {
    /// 変換に成功した。`destination` は出力ファイル名（フォルダ部分を含まない）。
    Converted { source: String, destination: String },
    /// 変換に失敗した。
    Failed {
        source: String,
        error: ConversionError,
    },
}

impl ConversionOutcome {
    #[cfg(test)]
    pub(crate) fn source(&self) -> &str {
        match self {
            ConversionOutcome::Converted { source, .. } => source,
            ConversionOutcome::Failed { source, .. } => source,
        }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    /// 報告用の1行を組み立てます。
    pub fn report_line(&self) -> String {
        match self {
            ConversionOutcome::Converted {
                source,
                destination,
            } => format!("Converted: {} -> {}", source, destination),
            ConversionOutcome::Failed { source, error } => {
                format!("Error converting {}: {}", source, error)
            }
        }
    }
}

/// 1回のバッチ実行で得られたすべての変換結果。処理順に並ぶ。
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<ConversionOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ConversionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[ConversionOutcome] {
        &self.outcomes
    }

    /// 変換対象が1つもなかったかどうか。
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn report_lines() {
        let ok = ConversionOutcome::Converted {
            source: "a.gif".into(),
            destination: "a.jpg".into(),
        };
        let failed = ConversionOutcome::Failed {
            source: "b.gif".into(),
            error: ConversionError::Io(io::Error::new(io::ErrorKind::NotFound, "gone")),
        };
        assert_eq!(ok.report_line(), "Converted: a.gif -> a.jpg");
        assert_eq!(failed.report_line(), "Error converting b.gif: gone");
        assert_eq!(failed.source(), "b.gif");
    }

    #[test]
    fn counts() {
        let mut report = BatchReport::new();
        assert!(report.is_empty());
        report.push(ConversionOutcome::Converted {
            source: "a.png".into(),
            destination: "a.jpg".into(),
        });
        report.push(ConversionOutcome::Failed {
            source: "b.png".into(),
            error: ConversionError::Io(io::Error::new(io::ErrorKind::Other, "boom")),
        });
        report.push(ConversionOutcome::Converted {
            source: "c.png".into(),
            destination: "c.jpg".into(),
        });
        assert_eq!(report.converted_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.outcomes()[1].source(), "b.png");
    }
}
