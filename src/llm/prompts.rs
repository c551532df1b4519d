//! Prompt templates, keyword-list parsing, and the pitch-theme
//! vocabulary used for missing-elements detection.

/// Themes an investor pitch is expected to cover. Grouped by topic:
/// problem, market, business model, traction, defensibility, team,
/// financials, competition, vision, and the ask.
pub const PITCH_VOCABULARY: &[&str] = &[
    // Problem
    "problem",
    "pain point",
    "customer need",
    "unmet need",
    "urgency",
    "why now",
    "status quo",
    "workaround",
    // Market
    "market",
    "market size",
    "tam",
    "sam",
    "som",
    "addressable market",
    "target market",
    "market opportunity",
    "customer segment",
    "go to market",
    "distribution",
    "sales strategy",
    "marketing",
    "customer acquisition",
    // Business model
    "business model",
    "revenue model",
    "pricing",
    "monetization",
    "unit economics",
    "margins",
    "gross margin",
    "recurring revenue",
    "subscription",
    "ltv",
    "cac",
    "payback period",
    // Traction
    "traction",
    "revenue",
    "growth",
    "users",
    "customers",
    "retention",
    "churn",
    "engagement",
    "pilot",
    "partnerships",
    "milestones",
    "early adopters",
    "case study",
    "pipeline",
    "waitlist",
    // Product
    "product",
    "solution",
    "technology",
    "platform",
    "mvp",
    "product market fit",
    "value proposition",
    "roadmap",
    "demo",
    // Defensibility
    "moat",
    "defensibility",
    "intellectual property",
    "patent",
    "network effect",
    "switching cost",
    "proprietary",
    "barrier to entry",
    "data advantage",
    // Team
    "team",
    "founder",
    "founding team",
    "experience",
    "advisors",
    "hiring",
    "track record",
    "domain expertise",
    "technical team",
    // Financials
    "financials",
    "projections",
    "forecast",
    "burn rate",
    "runway",
    "profitability",
    "break even",
    "cash flow",
    "metrics",
    "kpi",
    "benchmarks",
    // Competition
    "competition",
    "competitors",
    "competitive landscape",
    "differentiation",
    "alternatives",
    "positioning",
    "competitive advantage",
    "incumbents",
    // Vision
    "vision",
    "mission",
    "long term",
    "expansion",
    "scale",
    "exit strategy",
    // The ask
    "ask",
    "raise",
    "funding",
    "round",
    "valuation",
    "use of funds",
    "investment",
];

/// Prompt for the pitch summary
pub fn summary_prompt(text: &str) -> String {
    format!("Summarize the following pitch in 3-4 sentences:\n\n{}", text)
}

/// Prompt for keyword extraction; the response is expected as a
/// comma-separated list
pub fn keyword_prompt(text: &str) -> String {
    format!(
        "Extract the 10 most important keywords or phrases from the following pitch transcript. \
         Return them as a comma-separated list.\n\n{}",
        text
    )
}

/// Prompt for free-text improvement feedback
pub fn improvement_prompt(text: &str) -> String {
    format!(
        "Based on the following pitch, what are 3 ways it could be improved?\n\n\
         {}\n\n\
         Consider: missing metrics, vague TAM, no mention of competition.",
        text
    )
}

/// Parse a comma-separated keyword response into trimmed, non-empty
/// keywords
pub fn parse_keyword_list(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty())
        .map(|kw| kw.to_string())
        .collect()
}

/// Vocabulary terms not matched by any extracted keyword.
///
/// A term counts as covered when it appears as a case-insensitive
/// substring of at least one keyword. Substring containment against
/// free-form LLM phrasing is a heuristic, not a contract; the policy
/// lives here so it can be tuned in one place.
pub fn missing_elements(vocabulary: &[&str], keywords: &[String]) -> Vec<String> {
    let lowered: Vec<String> = keywords.iter().map(|kw| kw.to_lowercase()).collect();

    vocabulary
        .iter()
        .filter(|term| {
            let term = term.to_lowercase();
            !lowered.iter().any(|kw| kw.contains(&term))
        })
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_list() {
        let response = "big market, team , , AI tooling,\n traction ";
        assert_eq!(
            parse_keyword_list(response),
            vec!["big market", "team", "AI tooling", "traction"]
        );
    }

    #[test]
    fn test_missing_elements_substring_semantics() {
        let vocabulary = &["market size", "team"];
        let keywords = vec!["big market".to_string(), "team".to_string()];

        let missing = missing_elements(vocabulary, &keywords);

        // "market size" is not a substring of any keyword; "team" is
        assert_eq!(missing, vec!["market size"]);
    }

    #[test]
    fn test_missing_elements_case_insensitive() {
        let vocabulary = &["tam"];
        let keywords = vec!["Vague TAM estimate".to_string()];
        assert!(missing_elements(vocabulary, &keywords).is_empty());
    }

    #[test]
    fn test_missing_elements_empty_keywords() {
        let vocabulary = &["team", "traction"];
        let missing = missing_elements(vocabulary, &[]);
        assert_eq!(missing, vec!["team", "traction"]);
    }

    #[test]
    fn test_prompt_templates_embed_text() {
        assert!(summary_prompt("our pitch").contains("our pitch"));
        assert!(summary_prompt("x").starts_with("Summarize the following pitch"));
        assert!(improvement_prompt("our pitch").contains("3 ways it could be improved"));
        assert!(keyword_prompt("our pitch").contains("comma-separated list"));
    }
}
