//! Interactive practice transcript on stdin/stdout.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use practice_core::model::{AgeBand, Language};
use services::{PracticeLoopService, PracticeSession, ProgressView, format_elapsed};

const HELP_EN: &str = "Type an answer, or :hint [partial], :speak, :explain, :progress, :quit";
const HELP_HI: &str = "उत्तर लिखें, या :hint [आंशिक उत्तर], :speak, :explain, :progress, :quit";

enum Input<'a> {
    Answer(&'a str),
    Hint(Option<&'a str>),
    Speak,
    Explain,
    Progress,
    Quit,
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    let (cmd, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    let rest = rest.trim();
    match cmd {
        ":hint" => Input::Hint((!rest.is_empty()).then_some(rest)),
        ":speak" => Input::Speak,
        ":explain" => Input::Explain,
        ":progress" => Input::Progress,
        ":quit" | ":q" => Input::Quit,
        _ => Input::Answer(line),
    }
}

fn render_item(svc: &PracticeLoopService, session: &PracticeSession, lang: Language) -> String {
    let content = svc.content();
    let item = session.current_item();
    let mut out = format!(
        "\n[{}] {}\n",
        item.difficulty().level(),
        content.prompt(item, lang)
    );
    let choices = content.choices(item, lang);
    if !choices.is_empty() {
        out.push_str(&format!("  ({})\n", choices.join(" | ")));
    }
    if let Some(placeholder) = content.answer_placeholder(item.kind(), lang) {
        out.push_str(&format!("  {placeholder}\n"));
    }
    out.push_str("> ");
    out
}

/// Format a progress view for the terminal.
///
/// Recent attempts show the item prompt when the item is still in the
/// catalog, and the parent notes close the report.
pub fn render_progress(svc: &PracticeLoopService, view: &ProgressView, lang: Language) -> String {
    let s = &view.summary;
    let content = svc.content();
    let mut out = String::new();
    out.push_str(&format!(
        "{}: {}  ·  {}: {}  ·  {}: {}%\n",
        lang.pick("Points", "अंक"),
        view.points,
        lang.pick("Streak", "लगातार सही"),
        view.streak,
        lang.pick("Accuracy", "सटीकता"),
        s.accuracy,
    ));
    out.push_str(&format!(
        "{}: {}  ·  {}: {}\n",
        lang.pick("Attempts", "प्रयास"),
        s.total,
        lang.pick("Avg time (last 10)", "औसत समय (अंतिम 10)"),
        format_elapsed(s.average_latency_ms),
    ));
    out.push_str(&format!(
        "{}: {}%  ({} {})\n",
        lang.pick("Session progress", "सत्र प्रगति"),
        s.completion_ratio,
        lang.pick("target", "लक्ष्य"),
        view.target_count,
    ));
    for recent in &view.recent {
        let prompt = svc
            .catalog()
            .get(&recent.item_id)
            .map_or_else(|| recent.item_id.to_string(), |item| content.prompt(item, lang));
        let response = if recent.response.is_empty() {
            lang.pick("(blank)", "(खाली)")
        } else {
            recent.response.as_str()
        };
        out.push_str(&format!(
            "\n  {} Q: {prompt}\n    {}: {response}  ·  {}\n    {}: {}  ·  {}: {}\n",
            if recent.correct { "✓" } else { "✗" },
            lang.pick("Your answer", "आपका उत्तर"),
            if recent.correct {
                lang.pick("Correct", "सही")
            } else {
                lang.pick("Incorrect", "गलत")
            },
            lang.pick("Time", "समय"),
            format_elapsed(recent.elapsed_ms),
            lang.pick("Hint", "संकेत"),
            if recent.hint_used {
                lang.pick("Yes", "हाँ")
            } else {
                lang.pick("No", "नहीं")
            },
        ));
    }
    out.push_str(&format!("\n{}:\n", lang.pick("Parent View", "अभिभावक दृश्य")));
    for note in content.parent_guidance(lang) {
        out.push_str(&format!("  - {note}\n"));
    }
    out
}

/// Run the practice loop until `:quit` or end of input.
pub async fn run(svc: &PracticeLoopService, lang: Language) -> Result<()> {
    let mut session = svc.start_session().await;
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("{}\n", lang.pick(HELP_EN, HELP_HI)).as_bytes())
        .await?;
    stdout
        .write_all(render_item(svc, &session, lang).as_bytes())
        .await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match parse_input(&line) {
            Input::Quit => break,
            Input::Hint(partial) => {
                let hint = svc.hint(&mut session, partial, lang);
                format!("{}{hint}\n> ", lang.pick("Hint: ", "संकेत: "))
            }
            Input::Speak => {
                svc.speak_prompt(&session, lang);
                "> ".to_string()
            }
            Input::Explain => {
                svc.speak_explainer(AgeBand::default(), lang);
                format!(
                    "{}\n> ",
                    svc.content().explainer(AgeBand::default(), lang)
                )
            }
            Input::Progress => {
                format!("{}> ", render_progress(svc, &svc.progress(&session), lang))
            }
            Input::Answer(raw) => {
                let outcome = svc.submit(&mut session, raw).await;
                let verdict = if outcome.attempt.correct {
                    lang.pick("Correct!", "सही!")
                } else {
                    lang.pick("Not quite.", "थोड़ा और प्रयास करें।")
                };
                let mut reply = format!(
                    "{verdict} {:+} → {}",
                    outcome.delta.points_delta, outcome.points
                );
                if outcome.delta.streak_bonus {
                    reply.push_str(&format!(
                        "  🔥 {} {}",
                        lang.pick("streak", "लगातार"),
                        outcome.delta.new_streak
                    ));
                }
                reply.push('\n');
                reply.push_str(&render_item(svc, &session, lang));
                reply
            }
        };
        stdout.write_all(reply.as_bytes()).await?;
        stdout.flush().await?;
    }

    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognized() {
        assert!(matches!(parse_input(":quit"), Input::Quit));
        assert!(matches!(parse_input(" :hint "), Input::Hint(None)));
        assert!(matches!(
            parse_input(":hint 400+8+0"),
            Input::Hint(Some("400+8+0"))
        ));
        assert!(matches!(parse_input(":progress"), Input::Progress));
    }

    #[test]
    fn anything_else_is_an_answer() {
        assert!(matches!(parse_input("405 < 450"), Input::Answer("405 < 450")));
        assert!(matches!(parse_input(""), Input::Answer("")));
    }

    #[test]
    fn progress_render_shows_prompts_and_parent_notes() {
        use practice_core::model::{Attempt, ItemId};
        use practice_core::time::{fixed_clock, fixed_now};
        use storage::repository::Storage;

        let attempt = |id: &str, response: &str| Attempt {
            item_id: ItemId::new(id),
            response: response.into(),
            correct: false,
            elapsed_ms: 65_000,
            hint_used: true,
            timestamp: fixed_now(),
        };
        let history = vec![attempt("q1", "3"), attempt("retired", "")];
        let svc = PracticeLoopService::new(fixed_clock(), &Storage::in_memory());
        let view = ProgressView::build(&history, 7, 0, 10);
        let text = render_progress(&svc, &view, Language::En);

        assert!(text.contains("Points: 7"));
        assert!(text.contains("Avg time (last 10): 1:05"));
        assert!(text.contains("Q: Which digit is in the hundreds place in 346?"));
        assert!(text.contains("Q: retired"));
        assert!(text.contains("Your answer: (blank)"));
        assert!(text.contains("Hint: Yes"));
        assert!(text.contains("Parent View:"));
        assert!(text.contains("Aim for 10 questions"));
        // Newest first.
        assert!(text.find("Q: retired") < text.find("Q: Which digit"));
    }
}
