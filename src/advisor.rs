use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ExtractoError, Result};
use crate::models::SummaryRow;
use crate::settings::Settings;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const SYSTEM_PROMPT: &str = "You are an expert in personal and household finances.";
/// Fixed assumption baked into the prompt, in Colombian pesos.
const MONTHLY_INCOME_COP: u64 = 15_000_000;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Sends the summary to the completion API and returns the advice text.
/// Fatal on any transport, status or shape problem; no retries.
pub fn request_advice(settings: &Settings, summary: &[SummaryRow]) -> Result<String> {
    let prompt = build_prompt(summary);
    let body = ChatRequest {
        model: &settings.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            ChatMessage {
                role: "user",
                content: &prompt,
            },
        ],
        temperature: 0.0,
    };

    info!("requesting advice from model {}", settings.model);
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(API_URL)
        .bearer_auth(&settings.api_key)
        .json(&body)
        .send()?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().unwrap_or_default();
        return Err(ExtractoError::Advisor(format!("{status} {text}")));
    }

    let parsed: ChatResponse = response
        .json()
        .map_err(|e| ExtractoError::Advisor(format!("invalid response: {e}")))?;
    let content = parsed
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or_else(|| ExtractoError::Advisor("response contained no content".to_string()))?;
    Ok(content.trim().to_string())
}

/// Builds the fixed advice prompt around the serialized summary table:
/// three months of activity, negative amounts are expenses, recurrence 3
/// means a fixed expense, focus on the 10 largest, income of 15,000,000
/// COP, a 2-month reduction plan and a 5-year investment projection.
pub fn build_prompt(summary: &[SummaryRow]) -> String {
    let mut table = String::from("description\ttotal\trecurrence\n");
    for row in summary {
        table.push_str(&format!(
            "{}\t{}\t{}\n",
            row.description, row.total, row.recurrence
        ));
    }
    format!(
        "The table below summarizes three months of bank account activity. The first \
column is the expense description, the second the total amount, the third how many \
times it occurred. Negative amounts are expenses.\n\
Expenses recurring 3 times can be assumed fixed; the rest may be variable depending \
on the description.\n\
Give personal finance recommendations. Fixed expenses are hard to reduce and belong \
in an aggressive reduction plan; variable expenses can be lowered with concrete \
saving measures. Focus on the 10 largest expenses.\n\
Monthly income is {MONTHLY_INCOME_COP} Colombian pesos.\n\
Lay out a structured 2-month plan to start reducing variable expenses, project the \
resulting savings over time, and project how those savings would grow over 5 years \
in a high-yield investment fund.\n\
Format the answer as a clean, readable document.\n\n{table}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> Vec<SummaryRow> {
        vec![
            SummaryRow {
                description: "NOMINA".into(),
                total: 15000000.0,
                recurrence: 3,
            },
            SummaryRow {
                description: "PAGO ARRIENDO".into(),
                total: -4500000.0,
                recurrence: 3,
            },
        ]
    }

    #[test]
    fn test_build_prompt_embeds_summary_and_assumptions() {
        let prompt = build_prompt(&sample_summary());
        assert!(prompt.contains("PAGO ARRIENDO\t-4500000\t3"));
        assert!(prompt.contains("15000000 Colombian pesos"));
        assert!(prompt.contains("10 largest"));
        assert!(prompt.contains("5 years"));
    }

    #[test]
    fn test_request_serializes_expected_shape() {
        let prompt = build_prompt(&sample_summary());
        let body = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.0,
        };
        let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&body).unwrap()).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_parses_expected_shape() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Cut the coffee."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Cut the coffee.")
        );
    }
}
