//! Round submissions.

use debate_platform_client::ApiClient;
use debate_platform_core::{RoundId, RoundStatus, RoundStep, RoundSubmission};
use tracing::info;

use super::{CliError, print_json};

/// Build the submission for `step` from the command-line content.
///
/// Statement and reply steps take `text`; question steps take `questions`.
pub fn submission(
    step: RoundStep,
    text: Option<String>,
    questions: Vec<String>,
) -> Result<RoundSubmission, CliError> {
    let text = || {
        text.filter(|t| !t.trim().is_empty())
            .ok_or(CliError::MissingText(step))
    };
    let questions = || {
        if questions.is_empty() {
            Err(CliError::MissingQuestions(step))
        } else {
            Ok(questions)
        }
    };

    Ok(match step {
        RoundStep::ProsStatement => RoundSubmission::ProsStatement(text()?),
        RoundStep::ConsQuestions => RoundSubmission::ConsQuestions(questions()?),
        RoundStep::ProsReply => RoundSubmission::ProsReply(text()?),
        RoundStep::ConsStatement => RoundSubmission::ConsStatement(text()?),
        RoundStep::ProsQuestions => RoundSubmission::ProsQuestions(questions()?),
        RoundStep::ConsReply => RoundSubmission::ConsReply(text()?),
    })
}

/// Reject a step the round is not currently waiting for.
pub fn check_turn(step: RoundStep, status: RoundStatus) -> Result<(), CliError> {
    if status.awaiting() == Some(step) {
        Ok(())
    } else {
        Err(CliError::OutOfTurn { step, status })
    }
}

pub async fn submit(
    client: &ApiClient,
    round_id: RoundId,
    step: RoundStep,
    text: Option<String>,
    questions: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let submission = submission(step, text, questions)?;

    let round = client.rounds().get(round_id).await?;
    check_turn(step, round.status)?;
    info!(round_id = %round_id, step = %step, side = %step.side(), "Submitting");

    let message = client.rounds().submit(round_id, &submission).await?;
    print_json(&message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_steps() {
        let text = Some("Because".to_string());
        let submission = submission(RoundStep::ConsReply, text, vec![]).unwrap();
        assert_eq!(submission, RoundSubmission::ConsReply("Because".to_string()));

        assert!(matches!(
            submission_err(RoundStep::ProsStatement, None, vec!["q".to_string()]),
            CliError::MissingText(RoundStep::ProsStatement)
        ));
        assert!(matches!(
            submission_err(RoundStep::ProsReply, Some("  ".to_string()), vec![]),
            CliError::MissingText(_)
        ));
    }

    #[test]
    fn test_question_steps() {
        let submission = submission(
            RoundStep::ProsQuestions,
            None,
            vec!["Why?".to_string(), "How?".to_string()],
        )
        .unwrap();
        assert_eq!(submission.step(), RoundStep::ProsQuestions);

        assert!(matches!(
            submission_err(RoundStep::ConsQuestions, Some("text".to_string()), vec![]),
            CliError::MissingQuestions(RoundStep::ConsQuestions)
        ));
    }

    #[test]
    fn test_check_turn() {
        assert!(check_turn(RoundStep::ProsReply, RoundStatus::WaitProsReply).is_ok());
        assert!(check_turn(RoundStep::ConsReply, RoundStatus::WaitConsReply).is_ok());

        assert!(matches!(
            check_turn(RoundStep::ProsReply, RoundStatus::WaitConsQuestions),
            Err(CliError::OutOfTurn {
                step: RoundStep::ProsReply,
                status: RoundStatus::WaitConsQuestions,
            })
        ));
        assert!(check_turn(RoundStep::ProsStatement, RoundStatus::WaitVoting).is_err());
    }

    fn submission_err(step: RoundStep, text: Option<String>, questions: Vec<String>) -> CliError {
        super::submission(step, text, questions).unwrap_err()
    }
}
