mod cli;
mod config;
mod logging;
mod repl;
mod speaker;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncWriteExt;

use cli::{Cli, Commands};
use practice_core::model::{AgeBand, Language};
use services::{Clock, PracticeConfig, PracticeLoopService};
use storage::repository::Storage;

fn render_lesson(svc: &PracticeLoopService, age_band: AgeBand, lang: Language) -> String {
    let concept = svc.content().concept();
    let mut out = format!(
        "{} (Grade {}, {})\n\n{}\n",
        concept.title,
        concept.grade,
        concept.subject,
        svc.content().explainer(age_band, lang)
    );
    let sections = [
        (lang.pick("Real-world hooks", "वास्तविक जीवन से जुड़ाव"), concept.real_world_hooks),
        (lang.pick("Learning objectives", "सीखने के उद्देश्य"), concept.learning_objectives),
        (lang.pick("Common misconceptions", "आम भ्रांतियाँ"), concept.misconceptions),
    ];
    for (heading, lines) in sections {
        out.push_str(&format!("\n{heading}:\n"));
        for line in lines {
            out.push_str(&format!("  - {line}\n"));
        }
    }
    out
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    let db_url = config::normalize_sqlite_url(&cli.db);
    config::prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url)
        .await
        .with_context(|| format!("opening {db_url}"))?;

    let practice_config = PracticeConfig::default()
        .with_target_count(cli.target)
        .with_language(cli.lang);
    let mut svc = PracticeLoopService::new(Clock::system(), &storage).with_config(practice_config);
    if cli.speak {
        svc = svc.with_speaker(Arc::new(speaker::CommandSpeaker));
    }
    let lang = svc.language().await;

    match cli.command.unwrap_or(Commands::Practice) {
        Commands::Practice => repl::run(&svc, lang).await?,
        Commands::Lesson { age_band } => {
            println!("{}", render_lesson(&svc, age_band, lang));
            svc.speak_explainer(age_band, lang);
        }
        Commands::Progress => {
            let session = svc.start_session().await;
            print!("{}", repl::render_progress(&svc, &svc.progress(&session), lang));
        }
        Commands::Export { out } => {
            let session = svc.start_session().await;
            let text = svc.export(&session)?;
            match out {
                Some(path) => tokio::fs::write(&path, text)
                    .await
                    .with_context(|| format!("writing {}", path.display()))?,
                None => {
                    let mut stdout = tokio::io::stdout();
                    stdout.write_all(text.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                    stdout.flush().await?;
                }
            }
        }
        Commands::Import { file } => {
            let text = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            let mut session = svc.start_session().await;
            svc.import(&mut session, &text)
                .await
                .context(lang.pick("Invalid progress file", "अमान्य प्रगति फ़ाइल"))?;
            println!(
                "{} {} · {} {}",
                session.state().history().len(),
                lang.pick("attempts", "प्रयास"),
                session.state().points(),
                lang.pick("points", "अंक")
            );
        }
        Commands::Reset => {
            let mut session = svc.start_session().await;
            svc.reset(&mut session).await;
            println!("{}", lang.pick("Progress cleared.", "प्रगति मिटा दी गई।"));
        }
        Commands::Lang { language } => {
            svc.set_language(language).await;
            println!("{language}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
