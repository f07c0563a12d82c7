//! Matrix command implementation

use super::input::{create_output, describe, load_evaluation, to_json};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::cli::MatrixArgs;
use crate::config::OutputFormat;
use crate::error;
use crate::eval::classification::{ConfusionMatrix, Label};
use crate::render::{plot_confusion_matrix, CsvRenderer, TextRenderer};
use std::path::Path;

pub fn run_matrix(args: MatrixArgs, level: LogLevel) -> Result<(), String> {
    let (eval, _config) = load_evaluation(&args.input, level).map_err(describe)?;
    let cm = eval.matrix();

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Confusion Matrix (rows: y_true, columns: y_pred):");
            let mut renderer = TextRenderer::new(std::io::stdout().lock());
            plot_confusion_matrix(cm, &mut renderer).map_err(describe)?;
            log(level, LogLevel::Verbose, &format!("Accuracy: {:.4}", cm.accuracy().map_err(describe)?));
        }
        OutputFormat::Json => {
            let json = to_json(cm).map_err(describe)?;
            println!("{json}");
        }
    }

    if let Some(path) = &args.output {
        write_heatmap_csv(cm, path).map_err(describe)?;
        log(level, LogLevel::Normal, &format!("Heatmap written to {}", path.display()));
    }

    Ok(())
}

fn write_heatmap_csv(cm: &ConfusionMatrix<Label>, path: &Path) -> error::Result<()> {
    let mut renderer = CsvRenderer::new(create_output(path)?);
    plot_confusion_matrix(cm, &mut renderer)?;
    renderer.into_inner()?;
    Ok(())
}
