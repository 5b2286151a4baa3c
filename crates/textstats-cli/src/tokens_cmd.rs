use std::process::ExitCode;

use serde::Serialize;
use textstats_core::{split_sentences, tokenize};

use crate::cli::TokensArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::read_input;

#[derive(Debug, Serialize)]
struct TokensOutput<'a> {
    sentences: Vec<&'a str>,
    tokens: Vec<String>,
}

pub fn run_tokens(args: TokensArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let text = read_input(&args.input, args.stdin)?;
    let tokens = tokenize(&text);
    // Segments only count as sentences once the text has a word in it.
    let sentences = if tokens.is_empty() {
        Vec::new()
    } else {
        split_sentences(&text)
    };
    let output = TokensOutput { sentences, tokens };

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("Sentences ({}):", output.sentences.len());
            for (idx, sentence) in output.sentences.iter().enumerate() {
                println!("  {}. {}", idx + 1, sentence.replace('\n', " "));
            }
            println!("Tokens ({}):", output.tokens.len());
            if !output.tokens.is_empty() {
                println!("  {}", output.tokens.join(" "));
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}
