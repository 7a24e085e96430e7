use crate::infra::{open_event_log, parse_answers, AnswerPicks};
use basecamp_quiz::analytics::{EventLog, KeyValueStore};
use basecamp_quiz::config::{AppConfig, ShareConfig};
use basecamp_quiz::error::AppError;
use basecamp_quiz::quiz::{
    deep_link_param, Progress, QuizDefinition, QuizSession, QuizStage, Question, ResultView,
};
use clap::Args;
use std::io::{self, BufRead, Write};
use tracing::warn;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Answer numbers (1-4) for every question, comma separated. Prompts on stdin when omitted.
    #[arg(long, value_parser = parse_answers)]
    pub(crate) answers: Option<AnswerPicks>,
    /// Open a shared result: a share URL, `result=<id>`, or a bare personality id
    #[arg(long)]
    pub(crate) shared: Option<String>,
    /// Record a share and print the share link after the result
    #[arg(long)]
    pub(crate) share: bool,
    /// Sign up for the newsletter with this email address after the result
    #[arg(long)]
    pub(crate) email: Option<String>,
}

pub(crate) fn run_quiz(config: &AppConfig, args: QuizArgs) -> Result<(), AppError> {
    let quiz = QuizDefinition::standard();
    let log = open_event_log(&config.storage);
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(
        &quiz,
        &log,
        &config.share,
        args,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

pub(crate) fn play<S, R, W>(
    quiz: &QuizDefinition,
    log: &EventLog<S>,
    share: &ShareConfig,
    args: QuizArgs,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let shared = args
        .shared
        .as_deref()
        .map(|raw| deep_link_param(raw).unwrap_or(raw));
    let mut session = QuizSession::from_deep_link(quiz, log, shared);

    if *session.stage() == QuizStage::Welcome {
        if let Some(raw) = shared {
            writeln!(out, "'{raw}' is not a shared result we recognise, starting a fresh quiz.")?;
        }
        render_welcome(quiz, out)?;
        session.start();

        let mut scripted = args.answers.map(|picks| picks.0.into_iter());
        while let Some(question) = session.current_question() {
            if let Some(progress) = session.progress() {
                render_question(question, progress, out)?;
            }
            let choice = match scripted.as_mut() {
                Some(picks) => picks.next().ok_or_else(|| {
                    AppError::Input(format!(
                        "--answers covers fewer than {} questions",
                        quiz.question_count()
                    ))
                })?,
                None => prompt_choice(input, out)?,
            };
            session.answer(choice)?;
        }

        if let Some(extra) = scripted.map(Iterator::count).filter(|extra| *extra > 0) {
            warn!(extra, "ignoring answers beyond the last question");
        }
    }

    let result = session
        .result()
        .ok_or_else(|| AppError::Input("the quiz ended without a result".to_string()))?;
    render_result(&result, out)?;

    if args.share {
        let link = session.share(share)?;
        writeln!(out)?;
        writeln!(out, "Share it: {}", link.text)?;
        writeln!(out, "  {}", link.url)?;
    }

    if let Some(email) = args.email.as_deref() {
        session.sign_up(email)?;
        writeln!(out)?;
        writeln!(out, "Thanks! Brewing tips for your personality are on their way.")?;
    }

    Ok(())
}

fn prompt_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<usize, AppError> {
    loop {
        write!(out, "Your pick (1-4): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::Input(
                "input closed before the quiz finished".to_string(),
            ));
        }
        match line.trim().parse::<usize>() {
            Ok(slot @ 1..=4) => return Ok(slot - 1),
            _ => writeln!(out, "Please enter a number from 1 to 4.")?,
        }
    }
}

fn render_welcome<W: Write>(quiz: &QuizDefinition, out: &mut W) -> io::Result<()> {
    writeln!(out, "☕ What's your coffee personality?")?;
    writeln!(
        out,
        "{} quick questions to find the brew that matches you.",
        quiz.question_count()
    )?;
    writeln!(out)
}

fn render_question<W: Write>(question: &Question, progress: Progress, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Question {} of {} ({}%)",
        progress.number, progress.total, progress.percent
    )?;
    writeln!(out, "{} {}", question.emoji, question.prompt)?;
    for (slot, answer) in question.answers.iter().enumerate() {
        writeln!(out, "  {}. {} {}", slot + 1, answer.emoji, answer.text)?;
    }
    Ok(())
}

fn render_result<W: Write>(result: &ResultView<'_>, out: &mut W) -> io::Result<()> {
    let profile = result.profile;
    writeln!(out)?;
    if result.shared {
        writeln!(out, "A friend shared their result:")?;
    } else {
        writeln!(out, "You're a...")?;
    }
    writeln!(out, "{}", profile.name)?;
    writeln!(out, "\"{}\"", profile.tagline)?;
    writeln!(out, "{}", profile.description)?;
    writeln!(out)?;
    writeln!(out, "Your perfect drink: {}", profile.drink)?;
    writeln!(out, "  {}", profile.drink_description)?;
    writeln!(out)?;
    writeln!(out, "Your full profile:")?;
    for score in &result.scores {
        writeln!(
            out,
            "  {:<18} {:>3}% {}",
            score.profile.name,
            score.percentage,
            bar(score.percentage)
        )?;
    }
    Ok(())
}

pub(crate) fn bar(percentage: u32) -> String {
    "█".repeat((percentage / 5) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use basecamp_quiz::analytics::{EventKind, InMemoryStore};
    use std::io::Cursor;

    fn share_config() -> ShareConfig {
        ShareConfig {
            base_url: "https://basecamp.coffee/quiz".to_string(),
        }
    }

    fn run(args: QuizArgs, stdin: &str) -> (Result<(), AppError>, String, EventLog<InMemoryStore>) {
        let quiz = QuizDefinition::standard();
        let log = EventLog::new(InMemoryStore::default());
        let mut out = Vec::new();
        let result = play(
            &quiz,
            &log,
            &share_config(),
            args,
            &mut Cursor::new(stdin.as_bytes().to_vec()),
            &mut out,
        );
        (result, String::from_utf8(out).expect("utf-8 output"), log)
    }

    fn kinds(log: &EventLog<InMemoryStore>) -> Vec<EventKind> {
        log.read_all().iter().map(|event| event.kind).collect()
    }

    #[test]
    fn scripted_answers_complete_share_and_sign_up() {
        let args = QuizArgs {
            answers: Some(AnswerPicks(vec![2, 1, 1, 1, 2, 1])),
            share: true,
            email: Some("sam@basecamp.coffee".to_string()),
            ..QuizArgs::default()
        };
        let (result, output, log) = run(args, "");

        result.expect("quiz runs");
        assert!(output.contains("Question 6 of 6 (100%)"));
        assert!(output.contains("You're a...\nEspresso Explorer\n\"Always curious"));
        assert!(output.contains("  Espresso Explorer  100% "));
        assert!(output.contains("?result=explorer"));
        assert_eq!(
            kinds(&log),
            vec![
                EventKind::QuizStart,
                EventKind::QuizComplete,
                EventKind::ShareClick,
                EventKind::EmailSignup,
            ]
        );
    }

    #[test]
    fn first_slot_on_every_question_crowns_classic() {
        let args = QuizArgs {
            answers: Some(AnswerPicks(vec![0, 0, 0, 0, 0, 0])),
            share: true,
            ..QuizArgs::default()
        };
        let (result, output, _) = run(args, "");

        result.expect("quiz runs");
        assert!(output.contains("You're a...\nClassic Comfort\n"));
        assert!(output.contains("?result=classic"));
        assert!(!output.contains("/images/"));
    }

    #[test]
    fn interactive_prompt_reasks_on_bad_input() {
        let (result, output, log) = run(QuizArgs::default(), "7\nabc\n2\n2\n2\n2\n2\n2\n");

        result.expect("quiz runs");
        assert_eq!(output.matches("Please enter a number from 1 to 4.").count(), 2);
        assert_eq!(kinds(&log), vec![EventKind::QuizStart, EventKind::QuizComplete]);
    }

    #[test]
    fn closed_input_is_an_input_error() {
        let (result, _, log) = run(QuizArgs::default(), "1\n1\n");

        assert!(matches!(result, Err(AppError::Input(_))));
        assert_eq!(kinds(&log), vec![EventKind::QuizStart]);
    }

    #[test]
    fn short_answer_list_is_rejected() {
        let args = QuizArgs {
            answers: Some(AnswerPicks(vec![0, 1])),
            ..QuizArgs::default()
        };
        let (result, _, _) = run(args, "");
        assert!(matches!(result, Err(AppError::Input(message)) if message.contains("fewer than 6")));
    }

    #[test]
    fn shared_link_skips_the_questions() {
        let args = QuizArgs {
            shared: Some("https://basecamp.coffee/quiz?result=mindful".to_string()),
            ..QuizArgs::default()
        };
        let (result, output, log) = run(args, "");

        result.expect("shared result renders");
        assert!(output.contains("A friend shared their result:\nMindful Sipper\n"));
        assert!(!output.contains("Question 1"));
        assert!(log.read_all().is_empty());
    }

    #[test]
    fn unknown_shared_id_falls_back_to_a_fresh_quiz() {
        let args = QuizArgs {
            shared: Some("decaf".to_string()),
            answers: Some(AnswerPicks(vec![3, 3, 3, 3, 3, 3])),
            ..QuizArgs::default()
        };
        let (result, output, _) = run(args, "");

        result.expect("quiz runs");
        assert!(output.contains("'decaf' is not a shared result"));
        assert!(output.contains("Question 1 of 6"));
    }

    #[test]
    fn invalid_email_surfaces_a_quiz_error() {
        let args = QuizArgs {
            answers: Some(AnswerPicks(vec![1, 1, 1, 1, 1, 1])),
            email: Some("not-an-email".to_string()),
            ..QuizArgs::default()
        };
        let (result, _, log) = run(args, "");

        assert!(matches!(result, Err(AppError::Quiz(_))));
        assert!(!kinds(&log).contains(&EventKind::EmailSignup));
    }

    #[test]
    fn bars_scale_to_twenty_blocks() {
        assert_eq!(bar(100).chars().count(), 20);
        assert_eq!(bar(33).chars().count(), 6);
        assert!(bar(0).is_empty());
    }
}
