use tubesum_genai::Part;

/// Instruction sent with every video
pub const DEFAULT_PROMPT: &str = "Provide a summary of the video. Do not say 'Certainly', 'Sure', or \
                                  'Here is a summary'. Just provide the summary.";

/// Assemble the content parts for a summarize request
///
/// The additional instructions are appended to the default prompt and, when
/// not blank, also sent again as their own text part.
pub fn build_contents(video: Part, additional_prompt: Option<&str>) -> Vec<Part> {
    let mut prompt_text = DEFAULT_PROMPT.to_owned();
    if let Some(extra) = additional_prompt.filter(|p| !p.is_empty()) {
        prompt_text.push(' ');
        prompt_text.push_str(extra);
    }

    let mut parts = vec![video, Part::from_text(prompt_text)];

    if let Some(extra) = additional_prompt.filter(|p| !p.trim().is_empty()) {
        parts.push(Part::from_text(extra));
    }

    parts
}
