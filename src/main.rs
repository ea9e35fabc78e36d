use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use archetype_matrix::adapters::{
    FileKeyValueStore, HttpApiClient, StoredTokenProvider, YamlQuestionSource,
};
use archetype_matrix::application::{
    BuildMatrixHandler, LoadQuestionnaireHandler, SubmitQuestionnaireHandler,
    SubmitQuestionnaireResult,
};
use archetype_matrix::config::{AppConfig, LogFormat, LoggingConfig};
use archetype_matrix::domain::matrix::RadarChart;
use archetype_matrix::ports::{KeyValueStore, QuestionSource};

#[derive(Parser)]
#[command(name = "archetype-matrix", about = "Archetype questionnaire scoring and life-sphere charts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a completed questionnaire.
    Score {
        /// JSON file: {"answers": {"<question id>": 1-5}, "life_spheres": [12 values]}
        #[arg(long)]
        answers: PathBuf,

        /// YAML question file. Questions come from the API when omitted.
        #[arg(long)]
        questions: Option<PathBuf>,

        /// Also submit the answers to the API and check its verdict.
        #[arg(long)]
        remote: bool,
    },

    /// Build the life-sphere chart for twelve 0-10 values.
    Matrix {
        /// Comma-separated values in sphere order.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<f64>,
    },
}

/// Contents of the `--answers` file.
#[derive(Debug, Deserialize)]
struct AnswersFile {
    answers: BTreeMap<u32, i64>,
    #[serde(default)]
    life_spheres: Option<Vec<f64>>,
}

#[derive(Serialize)]
struct MatrixReport {
    svg_points: String,
    chart: RadarChart,
}

impl From<RadarChart> for MatrixReport {
    fn from(chart: RadarChart) -> Self {
        Self {
            svg_points: chart.svg_points(),
            chart,
        }
    }
}

#[derive(Serialize)]
struct ScoreReport {
    session_id: String,
    question_count: usize,
    scoring: SubmitQuestionnaireResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<MatrixReport>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_validated().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let matrix = BuildMatrixHandler::new(config.radar.layout(), config.radar.projector());

    let output = match cli.command {
        Commands::Matrix { values } => {
            serde_json::to_string_pretty(&MatrixReport::from(matrix.handle(&values)?))?
        }
        Commands::Score {
            answers,
            questions,
            remote,
        } => {
            let answers = read_answers(&answers).await?;
            let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.storage.path));
            let tokens = Arc::new(StoredTokenProvider::new(store.clone()));
            let api = Arc::new(HttpApiClient::new(config.api.client_config(), tokens)?);

            let source: Arc<dyn QuestionSource> = match questions {
                Some(path) => Arc::new(YamlQuestionSource::new(path)),
                None => api.clone() as Arc<dyn QuestionSource>,
            };
            let mut collector = LoadQuestionnaireHandler::new(source).handle().await?;
            collector.apply_answers(&answers.answers)?;

            let submit = if remote {
                SubmitQuestionnaireHandler::with_sink(store, api)
            } else {
                SubmitQuestionnaireHandler::local(store)
            };
            let scoring = submit
                .handle(collector.questions(), collector.responses())
                .await?;

            let matrix = match answers.life_spheres {
                Some(values) => Some(MatrixReport::from(matrix.handle(&values)?)),
                None => None,
            };

            serde_json::to_string_pretty(&ScoreReport {
                session_id: collector.session_id().to_string(),
                question_count: collector.question_count(),
                scoring,
                matrix,
            })?
        }
    };

    println!("{}", output);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(logging.env_filter());
    match logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

async fn read_answers(path: &Path) -> anyhow::Result<AnswersFile> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid answers file {}", path.display()))
}
