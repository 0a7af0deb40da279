use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use coursediff_notify::{
    cli::{Cli, OutputFormat},
    CourseChangeSet, DiffMessageBuilder, NotificationMessage, NotifyConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = cli.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    cli.setup_logging();

    let config = NotifyConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?
        .with_env_overrides()
        .context("invalid environment override")?;
    config.validate()?;

    let courses = read_courses(&cli)?;
    tracing::info!("Loaded {} courses with changes", courses.len());

    let builder = DiffMessageBuilder::new(config);
    let messages = if cli.skip_invalid {
        build_skipping_invalid(&builder, &courses)
    } else {
        builder.build(&courses)?
    };

    match cli.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&messages)?),
        OutputFormat::Text => messages.iter().for_each(print_text_message),
        OutputFormat::Compact => messages.iter().for_each(print_compact_message),
    }

    Ok(())
}

fn read_courses(cli: &Cli) -> Result<Vec<CourseChangeSet>> {
    let content = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    serde_json::from_str(&content).context("input is not a JSON array of course changes")
}

fn build_skipping_invalid(
    builder: &DiffMessageBuilder,
    courses: &[CourseChangeSet],
) -> Vec<NotificationMessage> {
    let mut messages = Vec::new();
    for course in courses {
        match builder.build_course(course) {
            Ok(rendered) => messages.extend(rendered),
            Err(err) => {
                tracing::warn!("Skipping course '{}': {}", course.display_name(), err);
            }
        }
    }
    messages
}

fn print_text_message(message: &NotificationMessage) {
    println!("{}", message.title);
    for line in message.text.lines() {
        println!("  {}", line);
    }
    if let Some(url) = &message.source_url {
        println!("  -> {}", url);
    }
    println!();
}

fn print_compact_message(message: &NotificationMessage) {
    match &message.source_url {
        Some(url) => println!("{} <{}>", message.title, url),
        None => println!("{}", message.title),
    }
}
