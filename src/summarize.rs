use std::env;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::http_client::http_client;
use crate::normalize::PerformanceEntry;

/// Fast mode goes to the flash model; thorough mode pays for the pro model
/// plus a thinking budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    Fast,
    Thorough,
}

pub const MISSING_KEY_MESSAGE: &str =
    "GEMINI_API_KEY is not configured. Set it in .env.local to enable AI summaries.";

const FAST_MODEL: &str = "gemini-2.5-flash";
const THOROUGH_MODEL: &str = "gemini-2.5-pro";
const THINKING_BUDGET: u32 = 32768;
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Ask the text-generation API for a markdown summary of the entry set.
/// A missing key is not an error: it yields a fixed explanatory string so the
/// dashboard can show it in place of the summary.
pub fn summarize(entries: &[PerformanceEntry], mode: SummaryMode) -> Result<String> {
    let Some(api_key) = env::var("GEMINI_API_KEY")
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
    else {
        return Ok(MISSING_KEY_MESSAGE.to_string());
    };

    let model = match mode {
        SummaryMode::Fast => FAST_MODEL,
        SummaryMode::Thorough => THOROUGH_MODEL,
    };
    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: build_prompt(entries)?,
            }],
        }],
        generation_config: match mode {
            SummaryMode::Fast => None,
            SummaryMode::Thorough => Some(GenerationConfig {
                thinking_config: ThinkingConfig {
                    thinking_budget: THINKING_BUDGET,
                },
            }),
        },
    };

    let url = format!("{API_BASE}/models/{model}:generateContent?key={api_key}");
    let response = http_client()?
        .post(url)
        .json(&request)
        .send()
        .context("send summary request")?;
    let status = response.status();
    let body = response.text().context("read summary response")?;
    if !status.is_success() {
        bail!("summarizer returned {status}: {}", body.chars().take(200).collect::<String>());
    }

    let parsed: GenerateResponse =
        serde_json::from_str(&body).context("parse summary response")?;
    extract_text(&parsed).ok_or_else(|| anyhow!("summarizer response contained no text"))
}

fn build_prompt(entries: &[PerformanceEntry]) -> Result<String> {
    let data = serde_json::to_string_pretty(entries).context("serialize entries for summary")?;
    Ok(format!(
        "Analyze the following player performance data and provide a detailed summary.\n\
         The data is in JSON format.\n\n\
         Data:\n{data}\n\n\
         Please provide the following:\n\
         1. A high-level overview of the team's performance.\n\
         2. The top 3 standout performers across all drills and why.\n\
         3. For each drill, the player with the highest score.\n\
         4. Potential areas for team-wide improvement based on the data.\n\
         5. Format the output in clear, readable markdown."
    ))
}

fn extract_text(response: &GenerateResponse) -> Option<String> {
    let text = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() { None } else { Some(text) }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "thinkingConfig")]
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}
