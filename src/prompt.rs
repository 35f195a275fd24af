pub const SYSTEM_INSTRUCTION: &str = "You are an advanced language model tasked with analyzing blog content and identifying the top 5 most relevant keywords that best represent the main themes or topics discussed. Consider the overall context and key ideas from the blog. Avoid common stop words or overly generic terms. Ensure the keywords are precise, relevant, and descriptive of the blog’s content.";

const INSTRUCTION: &str = "Analyze the following blog content and extract the top 5 keywords that best describe the main themes or topics discussed. The keywords should be relevant, concise, and representative of the blog's content. Return the keywords in a JSON format.\n\nBlog Content:\n";

pub fn build_prompt(content: &str) -> String {
    let mut result = String::with_capacity(INSTRUCTION.len() + content.len());
    result.push_str(INSTRUCTION);
    result.push_str(content);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_ends_with_content_verbatim() {
        let content = "A post about hiking gear and trail safety.\n\n  Pack water.";
        let prompt = build_prompt(content);

        assert!(prompt.starts_with("Analyze the following blog content"));
        assert!(prompt.ends_with(&format!("Blog Content:\n{}", content)));
    }

    #[test]
    fn prompt_asks_for_json_keywords() {
        let prompt = build_prompt("");
        assert!(prompt.contains("top 5 keywords"));
        assert!(prompt.contains("JSON format"));
        assert!(SYSTEM_INSTRUCTION.contains("top 5 most relevant keywords"));
    }

    #[test]
    fn system_instruction_keeps_typographic_apostrophe() {
        assert!(SYSTEM_INSTRUCTION.ends_with("descriptive of the blog\u{2019}s content."));
        assert!(!SYSTEM_INSTRUCTION.contains("blog's"));
    }
}
