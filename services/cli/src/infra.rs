use basecamp_quiz::analytics::{EventLog, FileStore};
use basecamp_quiz::config::StorageConfig;

/// Answer slots picked up front, zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerPicks(pub(crate) Vec<usize>);

pub(crate) fn open_event_log(config: &StorageConfig) -> EventLog<FileStore> {
    EventLog::new(FileStore::new(&config.data_dir))
}

/// Parses `--answers 1,3,2,4,1,1` (one-based slots) into zero-based picks.
pub(crate) fn parse_answers(raw: &str) -> Result<AnswerPicks, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(slot @ 1..=4) => Ok(slot - 1),
            _ => Err(format!("'{part}' is not an answer number between 1 and 4")),
        })
        .collect::<Result<Vec<_>, _>>()
        .and_then(|picks| {
            if picks.is_empty() {
                Err("expected a comma-separated list of answer numbers".to_string())
            } else {
                Ok(AnswerPicks(picks))
            }
        })
}
