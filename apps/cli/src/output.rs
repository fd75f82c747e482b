//! Report rendering

use std::fmt::Write as _;

use formgate_form::{Submission, SubmitOutcome};
use serde_json::json;

use crate::cli::OutputFormat;

pub fn render(format: OutputFormat, submission: &Submission<'_>) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(submission)),
        OutputFormat::Json => {
            let body = json!({
                "outcome": submission.outcome,
                "report": submission.result.report(),
            });
            Ok(serde_json::to_string_pretty(&body)?)
        }
    }
}

fn render_text(submission: &Submission<'_>) -> String {
    let mut out = String::new();
    for (index, field) in submission.fields().iter().enumerate() {
        let status = match (&field.error, field.requires_validation()) {
            (Some(error), _) => format!("invalid ({error})"),
            (None, false) => "ok (not required)".to_string(),
            (None, true) => "ok".to_string(),
        };
        let _ = writeln!(out, "[{index}] {}: {status}", field.field_key());
    }

    let outcome = match submission.outcome {
        SubmitOutcome::Submitted => "submitted",
        SubmitOutcome::SubmittedUnchecked => "submitted (not validated)",
        SubmitOutcome::Blocked => "blocked",
    };
    let _ = writeln!(
        out,
        "{outcome}: {} of {} field(s) invalid",
        submission.result.invalid_count(),
        submission.fields().len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgate_form::{Form, Node};
    use pretty_assertions::assert_eq;

    fn blocked_form() -> Form {
        Form::new(vec![
            Node::new().required().prop("value", "a"),
            Node::new().required().prop("value", ""),
            Node::new().prop("value", ""),
        ])
        .should_validate(true)
        .on_submit(|| {})
    }

    #[test]
    fn text_lists_every_field() {
        let mut form = blocked_form();
        let text = render(OutputFormat::Text, &form.validate()).unwrap();
        assert_eq!(
            text,
            "[0] value: ok\n\
             [1] value: invalid ([value] required: This field is required)\n\
             [2] value: ok (not required)\n\
             blocked: 1 of 3 field(s) invalid\n"
        );
    }

    #[test]
    fn json_carries_outcome_and_report() {
        let mut form = blocked_form();
        let text = render(OutputFormat::Json, &form.validate()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["outcome"], json!("blocked"));
        assert_eq!(value["report"]["isValid"], json!(false));
        assert_eq!(value["report"]["fields"].as_array().map(Vec::len), Some(3));
    }
}
