//! Prompt templates for the two LLM calls. Pure functions, no I/O.

use crate::domain::PromptMessage;

/// System directive for the common/differ analysis.
fn analysis_directive(article_count: usize) -> String {
    format!(
        "You will be provided with {n} articles on the same subject.
Your task is to create two bullet-point lists based on the content of these articles:
Common Content: A list of points that are consistently mentioned in all {n} articles.
Unique Content: A list of points that are only mentioned in some of the articles.
Make sure the lists are concise and focus on the key ideas.",
        n = article_count
    )
}

/// System directive for the composite article, with the prior analysis embedded verbatim.
fn synthesis_directive(analysis: &str, article_count: usize) -> String {
    format!(
        "Use the following step-by-step instructions to create a neutral article of 2000-2300 words based on {n} articles provided by the user. The article should highlight commonalities shared across these articles as well as present differing narratives in a balanced manner. The goal is to inform readers without persuading or advocating for a particular viewpoint.

# Steps

**Read and Analyze**: Carefully read all {n} articles to identify both common themes and differing narratives.

**Identify Commonalities**: Extract the key themes, facts, or data that are consistently mentioned across the majority of the articles.

**Identify Differing Narratives**: Note any differing opinions, perspectives, or interpretations present in the articles.

**Outline the Article**: Create an article structure that includes an introduction, sections for common themes, sections for different narratives, and a concluding summary.

**Draft the Article**: Write the article, ensuring neutrality in presenting information without advocating for any particular perspective. Use neutral language and focus on clarity and balance.

**Review and Revise**: Edit the draft for coherence, tone, neutrality, and to ensure it meets the word count requirement.

# Output Format

A single continuous article of 2000-2300 words, structured with headings and subheadings as necessary, presenting both common themes and differing narratives from the source articles in a balanced and neutral manner.

# Notes

- Ensure that the article maintains a neutral tone and does not persuade or influence the reader towards any particular viewpoint.
- Be mindful of the coherence and flow, linking the common themes and differing perspectives seamlessly.
- It is critical that each part of the article directly relates to the content of the provided articles without introducing external arguments or data.

Here is a first analysis of the articles, what they have in common and where they differ. In the final article, focus on the common points at the beginning, and on the points where they differ at the end, stating clearly that they differ and how:
{analysis}

The user will provide you the {n} articles.",
        n = article_count,
        analysis = analysis
    )
}

/// Messages for the analysis call: `[system directive, user corpus]`.
pub fn analysis_prompt(corpus: &str, article_count: usize) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(analysis_directive(article_count)),
        PromptMessage::user(corpus),
    ]
}

/// Messages for the synthesis call: `[system directive + analysis, user corpus]`.
pub fn synthesis_prompt(corpus: &str, analysis: &str, article_count: usize) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(synthesis_directive(analysis, article_count)),
        PromptMessage::user(corpus),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    const CORPUS: &str = "(Journal: A):\nEvent happened.\n\n(Journal: B):\nEvent reported.\n\n";

    #[test]
    fn test_analysis_prompt_shape() {
        let messages = analysis_prompt(CORPUS, 2);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, CORPUS);
        assert!(messages[0].content.contains("provided with 2 articles"));
        assert!(messages[0].content.contains("mentioned in all 2 articles"));
        assert!(messages[0].content.contains("Common Content"));
        assert!(messages[0].content.contains("Unique Content"));
    }

    #[test]
    fn test_analysis_prompt_deterministic() {
        assert_eq!(analysis_prompt(CORPUS, 2), analysis_prompt(CORPUS, 2));
        assert_ne!(analysis_prompt(CORPUS, 2), analysis_prompt(CORPUS, 3));
    }

    #[test]
    fn test_synthesis_prompt_embeds_analysis() {
        let analysis = "- Common: event in city X\n- Unique: casualty estimates";
        let messages = synthesis_prompt(CORPUS, analysis, 2);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, CORPUS);

        let system = &messages[0].content;
        assert!(system.contains(analysis));
        assert!(system.contains("2000-2300 words"));
        assert!(system.contains("based on 2 articles"));
        assert!(system.contains("neutral"));
        assert!(system.trim_end().ends_with("The user will provide you the 2 articles."));
    }

    #[test]
    fn test_synthesis_prompt_empty_analysis() {
        let messages = synthesis_prompt(CORPUS, "", 2);
        assert!(messages[0].content.contains("differ and how:\n\n\nThe user will provide"));
    }
}
