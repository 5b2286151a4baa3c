use std::process::ExitCode;

use textstats_core::{Analysis, build_strategy};
use tracing::debug;

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::{parse_strategy, read_input, remote_config};

pub fn run_analyze(args: AnalyzeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let kind = parse_strategy(&args.strategy)?;
    let remote = remote_config(&args.remote)?;
    let strategy = build_strategy(kind, remote)?;

    let text = read_input(&args.input, args.stdin)?;
    debug!(input = %args.input, bytes = text.len(), strategy = strategy.name(), "Analyzing");

    let analysis = strategy.analyze(&text);

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&analysis)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_text(&analysis)),
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn render_text(analysis: &Analysis) -> String {
    let result = &analysis.result;
    let mut out = format!("--- Text Analysis Results ({}) ---\n", analysis.method);
    out.push_str(&format!("Word Count: {}\n", result.word_count));
    out.push_str(&format!("Sentence Count: {}\n", result.sentence_count));
    out.push_str("\nTop 10 Most Frequent Words:\n");
    for (word, frequency) in &result.top_words {
        out.push_str(&format!("{}: {}\n", word, frequency));
    }
    if let Some(reason) = &analysis.fallback_reason {
        out.push_str(&format!(
            "\nNote: remote analysis failed ({}); computed locally\n",
            reason
        ));
    }
    out
}
