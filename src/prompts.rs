//! Instruction templates for the two summarization calls.
//!
//! Both templates carry a `{text}` placeholder that [`render`] fills with
//! the document to summarize. The templates are passed explicitly into the
//! summarization provider rather than living inside it, so the pipeline
//! stays decoupled from any particular model client.

/// Placeholder token replaced by the document text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Per-article summarization instructions.
///
/// Constraints: at most 100 words, a literal `"Content empty"` sentinel for
/// empty or erroneous input, only supplied material, first-person authorial
/// voice, named causes and responsibilities for conflicts, accurate
/// statistics, English output.
pub const ARTICLE_SUMMARY_TEMPLATE: &str = r#"Generate summary for the text below, using the following steps:
1. Summary consists of maximum 100 words
2. If the text cannot be found or error, return: "Content empty"
3. Use only materials from the text supplied.
4. Do not talk about the text as if written by somebody else. Write it like the author would have done.
5. Name causes and responsibilities from the conflicts described.
6. If statistics are available, include them in the summary. Ensuring that all statistical data is accurately represented.
7. Create the summary in English

"{text}"
SUMMARY:"#;

/// Final consolidation instructions applied to the concatenated per-article
/// summaries.
pub const FINAL_DIGEST_TEMPLATE: &str = r#"As an expert analyst, carefully review and consolidate the following summaries into a comprehensive final summary:

{text}

Your task is to:
1. Create a concise summary of approximately 300 words.
2. Fact-check and cross-reference the information from different sources.
3. Highlight the most important and recurring points across the summaries.
4. Provide a balanced view of the topic, considering different perspectives if present.
5. Ensure all statistical data is accurately represented and consistent across sources.
6. Identify and resolve any contradictions or inconsistencies in the information.
7. Present the information in a clear, coherent, and objective manner.

FINAL SUMMARY:"#;

/// Fill a template's `{text}` placeholder with the document text.
pub fn render(template: &str, document: &str) -> String {
    template.replace(TEXT_PLACEHOLDER, document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_document() {
        let rendered = render("before {text} after", "DOCUMENT");
        assert_eq!(rendered, "before DOCUMENT after");
    }

    #[test]
    fn test_article_template_renders_document_once() {
        let rendered = render(ARTICLE_SUMMARY_TEMPLATE, "the article body");
        assert!(rendered.contains("the article body"));
        assert!(!rendered.contains(TEXT_PLACEHOLDER));
        assert_eq!(rendered.matches("the article body").count(), 1);
    }

    #[test]
    fn test_article_template_keeps_sentinel_instruction() {
        assert!(ARTICLE_SUMMARY_TEMPLATE.contains("\"Content empty\""));
        assert!(ARTICLE_SUMMARY_TEMPLATE.contains("maximum 100 words"));
    }

    #[test]
    fn test_final_template_renders_document() {
        let rendered = render(FINAL_DIGEST_TEMPLATE, "summary one summary two");
        assert!(rendered.contains("summary one summary two"));
        assert!(rendered.contains("approximately 300 words"));
        assert!(!rendered.contains(TEXT_PLACEHOLDER));
    }
}
