//! CLI entrypoint for pollstream
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use pollstream_application::{BuilderConfig, DraftController, DraftRepository, DraftStorage};
use pollstream_domain::{PageId, QuestionId, QuestionKind, builtin_templates, find_template};
use pollstream_infrastructure::{
    ConfigLoader, FileDraftStorage, FileOutputFormat, MemoryDraftStorage,
};
use pollstream_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, LatestView, OutputFormat, ViewModelRenderer,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

type Controller<'a, S> = DraftController<S, ViewModelRenderer<&'a LatestView>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    for issue in config.validate() {
        warn!("{}", issue);
    }

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = cli.format.unwrap_or(match config.output.format {
        FileOutputFormat::Text => OutputFormat::Text,
        FileOutputFormat::Json => OutputFormat::Json,
    });

    let builder = config.to_builder_config();
    let locale = builder.locale;
    let command = cli.command_or_show();

    match command {
        Command::Kinds => {
            print!("{}", ConsoleFormatter::format_kinds(locale));
            return Ok(());
        }
        Command::Templates => {
            print!("{}", ConsoleFormatter::format_templates(builtin_templates()));
            return Ok(());
        }
        _ => {}
    }

    // === Template payload ===
    let requested = cli
        .survey
        .clone()
        .unwrap_or_else(|| builder.default_survey_name.clone());
    let (survey_name, payload) = match cli.template.as_deref() {
        Some(id) => {
            let template =
                find_template(id).ok_or_else(|| anyhow!("unknown template '{}'", id))?;
            let payload = template
                .to_payload(locale)
                .with_context(|| format!("failed to build template '{}'", id))?;
            (
                template.resolve_survey_name(&requested, &builder.default_survey_name),
                Some(payload),
            )
        }
        None => (requested, None),
    };

    // === Dependency Injection ===
    let session = Session {
        builder: &builder,
        survey_name: &survey_name,
        template: payload.as_deref(),
        command: &command,
        format,
    };
    if cli.ephemeral {
        info!("Ephemeral session: the draft is kept in memory only");
        session.run(Arc::new(MemoryDraftStorage::new()));
    } else {
        let dir = config.storage.resolve_dir();
        info!("Drafts directory: {}", dir.display());
        session.run(Arc::new(FileDraftStorage::new(dir)));
    }

    Ok(())
}

/// Everything one invocation needs once configuration is resolved
struct Session<'a> {
    builder: &'a BuilderConfig,
    survey_name: &'a str,
    template: Option<&'a str>,
    command: &'a Command,
    format: OutputFormat,
}

impl Session<'_> {
    /// Open the draft over `storage`, apply the command and print the result.
    fn run<S: DraftStorage>(&self, storage: Arc<S>) {
        let locale = self.builder.locale;
        let repository = DraftRepository::new(storage, self.builder, self.survey_name);
        info!("Survey key: {}", repository.key());

        let sink = LatestView::new();
        let mut controller = DraftController::open(
            repository,
            ViewModelRenderer::new(&sink, locale),
            self.template,
        );

        let created = run_command(&mut controller, self.command);

        // === Output ===
        let view = sink.view().unwrap_or_default();
        let notices = sink.notices();
        match self.format {
            OutputFormat::Text => {
                for notice in &notices {
                    eprintln!("{}", ConsoleFormatter::format_notice(notice));
                }
                print!("{}", ConsoleFormatter::format(&view, locale));
                if let Some(id) = created {
                    println!("\ncreated: {}", id);
                }
            }
            OutputFormat::Json => println!("{}", JsonFormatter::format(&view, &notices)),
        }
    }
}

/// Apply one draft operation. Returns the id of anything created.
fn run_command<S: DraftStorage>(
    controller: &mut Controller<'_, S>,
    command: &Command,
) -> Option<String> {
    debug!("Running {:?}", command);
    match command {
        Command::Show | Command::Kinds | Command::Templates => {}

        Command::AddPage { title, current } => {
            return Some(
                controller
                    .add_page(title.as_deref(), *current)
                    .to_string(),
            );
        }
        Command::DeletePage { id } => {
            // The notice also reaches the sink; nothing else to do here.
            let _ = controller.delete_page(&PageId::new(id.as_str()));
        }
        Command::SwitchPage { id } => controller.switch_page(&PageId::new(id.as_str())),
        Command::RenamePage { id, title } => {
            controller.rename_page(&PageId::new(id.as_str()), title)
        }

        Command::AddQuestion { kind } => {
            let kind = QuestionKind::from(kind.as_str());
            if !kind.is_known() {
                warn!("Unknown question kind '{}', adding it as free text", kind);
            }
            return controller.add_question(kind).map(|id| id.to_string());
        }
        Command::DeleteQuestion { id } => controller.delete_question(&question(id)),
        Command::SetTitle { id, text } => controller.update_question_title(&question(id), text),
        Command::SetRequired { id, required } => {
            controller.set_question_required(&question(id), *required)
        }

        Command::AddOption { id } => controller.add_option(&question(id)),
        Command::RemoveOption { id, index } => controller.remove_option(&question(id), *index),
        Command::UpdateOption { id, index, text } => {
            controller.update_option(&question(id), *index, text)
        }

        Command::AddRow { id } => controller.add_row(&question(id)),
        Command::RemoveRow { id, index } => controller.remove_row(&question(id), *index),
        Command::UpdateRow { id, index, text } => {
            controller.update_row(&question(id), *index, text)
        }

        Command::AddCol { id } => controller.add_col(&question(id)),
        Command::RemoveCol { id, index } => controller.remove_col(&question(id), *index),
        Command::UpdateCol { id, index, text } => {
            controller.update_col(&question(id), *index, text)
        }
    }
    None
}

fn question(id: &str) -> QuestionId {
    QuestionId::new(id)
}
