//! LLM prompt engineering for abbreviation extraction

/// Builds prompts asking the model to list abbreviation definitions
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for already-prepared document text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Text to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"List every abbreviation that the following document defines.
An abbreviation is defined where a full phrase is followed by its short form in parentheses, for example "Chinese Academy of Science (CAS)".

Rules:
- Only include abbreviations that are defined in the document
- Use the full phrase exactly as written in the document
- One abbreviation per line
- Do not invent expansions for abbreviations the document does not define"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (one line per abbreviation, no additional text):
ABBR: full phrase

Remember: no numbering, no explanations. If the document defines no abbreviations, output nothing."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text() {
        let prompt = PromptBuilder::new("Chinese Academy of Science (CAS)").build();
        assert!(prompt.contains("---\nChinese Academy of Science (CAS)\n---"));
    }

    #[test]
    fn test_prompt_includes_instructions() {
        let prompt = PromptBuilder::new("Test text").build();
        assert!(prompt.contains("List every abbreviation"));
        assert!(prompt.contains("ABBR: full phrase"));
    }

    #[test]
    fn test_empty_text() {
        let prompt = PromptBuilder::new("").build();
        assert!(prompt.contains("---\n\n---"));
    }
}
