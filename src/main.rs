use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use reviewscope::config::{self, Config, TranslatorBackend};
use reviewscope::output::terminal;
use reviewscope::pipeline::{OutputPaths, Pipeline};
use reviewscope::sentiment::lexicon::LexiconScorer;
use reviewscope::themes::dictionary::ThemeDictionary;
use reviewscope::themes::tagger::ThemeTagger;
use reviewscope::topics::tfidf::TfIdfKeywordExtractor;
use reviewscope::translate::detect::WhatlangDetector;
use reviewscope::translate::google::GoogleTranslator;
use reviewscope::translate::traits::{DisabledTranslator, Translator};

/// reviewscope: sentiment and theme analysis for app-store reviews.
///
/// Cleans scraped review exports, then translates, scores, tags and
/// summarizes them into tables ready for reporting.
#[derive(Parser)]
#[command(name = "reviewscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a raw scraped export into the analysis input table
    Clean {
        /// Raw export (columns: Review Text, Rating, Date, App Name)
        #[arg(long)]
        input: PathBuf,

        /// Where to write the cleaned table
        #[arg(long, default_value = "bank_reviews.csv")]
        output: PathBuf,
    },

    /// Translate, score, theme-tag and summarize a cleaned review table
    Analyze {
        /// Cleaned review table
        #[arg(long, default_value = "bank_reviews.csv")]
        input: PathBuf,

        /// Where to write the enriched per-review table
        #[arg(long, default_value = "reviews_analyzed.csv")]
        output: PathBuf,

        /// Where to write the mean sentiment per entity and rating
        #[arg(long, default_value = "sentiment_summary.csv")]
        summary: PathBuf,

        /// Also write the keyword report as JSON
        #[arg(long)]
        keywords: Option<PathBuf>,

        /// Skip translation (source-language reviews keep their original text)
        #[arg(long)]
        no_translate: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reviewscope=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Clean { input, output } => {
            let source_tag = config::source_tag();

            println!("Cleaning {}...", input.display());
            let report = reviewscope::records::clean::clean_file(&input, &output, &source_tag)?;
            terminal::display_clean_report(&report);

            if report.kept > 0 {
                println!("Saved cleaned reviews to: {}", output.display());
                println!("\nNext step: cargo run -- analyze --input {}", output.display());
            }
        }

        Commands::Analyze {
            input,
            output,
            summary,
            keywords,
            no_translate,
        } => {
            let config = Config::load()?;

            let dictionary = load_dictionary(&config)?;
            let tagger = ThemeTagger::new(&dictionary)?;
            let translator = create_translator(&config, no_translate);
            let scorer = LexiconScorer::default();
            let extractor = TfIdfKeywordExtractor {
                top_n: config.top_keywords,
                max_features: config.max_features,
            };

            let pipeline = Pipeline {
                detector: &WhatlangDetector,
                translator: translator.as_ref(),
                policy: config.policy.clone(),
                scorer: &scorer,
                tagger: &tagger,
                extractor: &extractor,
                show_progress: true,
            };

            let outputs = OutputPaths {
                enriched: output,
                summary,
                keywords,
            };

            println!("Analyzing {}...", input.display());
            let result = pipeline.run(&input, &outputs).await?;

            terminal::display_run_stats(&result.stats);
            terminal::display_summary(&result.summary);
            terminal::display_keywords(&result.keywords);

            println!("{}", "Pipeline finished successfully.".bold());
            println!("  Enriched reviews: {}", outputs.enriched.display());
            println!("  Summary: {}", outputs.summary.display());
            if let Some(path) = &outputs.keywords {
                println!("  Keywords: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Use the configured theme file if there is one, otherwise the built-in themes.
fn load_dictionary(config: &Config) -> Result<ThemeDictionary> {
    match &config.themes_path {
        Some(path) => {
            let dictionary = ThemeDictionary::from_json_file(path)?;
            info!(path = %path.display(), themes = dictionary.len(), "Loaded theme dictionary");
            Ok(dictionary)
        }
        None => Ok(ThemeDictionary::default()),
    }
}

/// Create a translator based on the configured backend.
fn create_translator(config: &Config, no_translate: bool) -> Box<dyn Translator> {
    if no_translate || config.translator_backend == TranslatorBackend::Disabled {
        info!("Translation disabled");
        return Box::new(DisabledTranslator);
    }

    info!(endpoint = %config.translate_url, "Using Google translator");
    Box::new(GoogleTranslator::new(
        &config.translate_url,
        &config.translate_target,
        config.translate_qps,
    ))
}
