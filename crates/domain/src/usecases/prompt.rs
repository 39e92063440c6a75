//! Summarization prompt construction

use crate::model::{AggregatedResult, Platform, Topic};

const NO_DATA: &str = "No data available";

const REFERENCES_INSTRUCTION: &str = "Finally, after summarizing, list the posts, topics, or links that were used to generate this summary.";

/// Instruction added when one or more platforms returned nothing
pub fn fallback_instruction(topic: &Topic) -> String {
    format!(
        "Also, generate comprehensive content on the topic \"{}\" covering recent trends, analysis, and public opinion.",
        topic
    )
}

/// Build the prompt sent to the summarizer
///
/// Platforms are listed in [`Platform::ALL`] order. Present data is embedded as
/// compact JSON, so identical inputs always yield an identical prompt.
pub fn build_trends_prompt(topic: &Topic, data: &AggregatedResult) -> String {
    let mut prompt = String::new();

    if !data.is_complete() {
        prompt.push_str(&fallback_instruction(topic));
    }
    prompt.push('\n');

    prompt.push_str("Summarize the data from the following platforms:\n\n");
    for platform in Platform::ALL {
        let section = data
            .get(platform)
            .and_then(|items| serde_json::to_string(items).ok())
            .unwrap_or_else(|| NO_DATA.to_string());
        prompt.push_str(&format!("**{}:** {}\n", platform.display_name(), section));
    }

    prompt.push('\n');
    prompt.push_str(REFERENCES_INSTRUCTION);

    prompt
}
