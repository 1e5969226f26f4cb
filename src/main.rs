//! Console wizard.
//!
//! Usage: `costseg-flow [category]` (default `residential`). Answers are read
//! line by line from stdin; for questions with options, a number picks the
//! matching option. Prints the cost allocation report as JSON on completion.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use costseg_flow::adapters::{ConsolePresenter, InMemorySessionRepository};
use costseg_flow::application::{
    DialogueSubject, GenerateReportHandler, GenerateReportQuery, StartDialogueCommand,
    StartDialogueHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use costseg_flow::config::{AppConfig, LoggingConfig};
use costseg_flow::domain::dialogue::StepOutcome;
use costseg_flow::domain::questionnaire::{Phase, QuestionPrompt};
use costseg_flow::ports::DialogueSessionRepository;

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

/// Maps `3` to the third option when the prompt offers options.
fn resolve_answer(prompt: &QuestionPrompt, line: &str) -> String {
    line.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| prompt.options.get(i))
        .cloned()
        .unwrap_or_else(|| line.to_string())
}

fn print_choices(prompt: &QuestionPrompt) {
    for (i, option) in prompt.options.iter().enumerate() {
        println!("  {}) {}", i + 1, option);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let category = std::env::args().nth(1).unwrap_or_else(|| "residential".to_string());

    let repository = Arc::new(InMemorySessionRepository::new());
    let presenter = Arc::new(ConsolePresenter::new(config.dialogue.typing_delay()));
    let start = StartDialogueHandler::new(repository.clone(), presenter.clone(), config.dialogue.clone());
    let submit = SubmitAnswerHandler::new(repository.clone(), presenter);
    let report = GenerateReportHandler::new(repository.clone());

    let started = start
        .handle(StartDialogueCommand {
            subject: DialogueSubject::Category(category),
        })
        .await?;
    let session_id = started.session_id;
    let mut prompt = started.prompt;
    let mut phase = Phase::Tax;
    println!("── {} ──", phase.label());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_choices(&prompt);

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                tracing::warn!(session_id = %session_id, "input closed before the dialogue finished");
                repository.delete(&session_id).await?;
                return Ok(());
            }
        };

        let result = submit
            .handle(SubmitAnswerCommand {
                session_id,
                answer: resolve_answer(&prompt, line.trim()),
            })
            .await?;

        match result.outcome {
            StepOutcome::Prompt(next) => {
                if next.phase != phase {
                    phase = next.phase;
                    println!("── {} ──", phase.label());
                }
                prompt = next;
            }
            StepOutcome::Completed(_) => break,
        }
    }

    let report = report.handle(GenerateReportQuery { session_id }).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    repository.delete(&session_id).await?;
    Ok(())
}
