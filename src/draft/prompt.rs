//! Prompt construction for post generation.

use std::fmt;

/// Tone of the generated posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Style {
    #[default]
    Technical,
    Casual,
    Celebratory,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Technical => "technical",
            Style::Casual => "casual",
            Style::Celebratory => "celebratory",
        }
    }

    /// Look up a style by name. Unknown names fall back to [`Style::Technical`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "casual" => Style::Casual,
            "celebratory" => Style::Celebratory,
            _ => Style::Technical,
        }
    }

    /// Tone instruction embedded in the prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Style::Technical => {
                "Technical but accessible - explain what was built and why it matters"
            }
            Style::Casual => "Conversational and story-driven - share the journey and learnings",
            Style::Celebratory => {
                "Enthusiastic and milestone-focused - highlight wins and progress"
            }
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const TWEETS_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that turns git commits into engaging tweets for developers.";

pub const THREAD_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that turns git commits into engaging tweet threads.";

/// Build the prompt asking for `option_count` standalone posts in `style`.
pub fn build_tweets_prompt(commit_text: &str, style: Style, option_count: usize) -> String {
    format!(
        r#"You are a developer building in public on Twitter/X. Your audience wants to follow your JOURNEY, not just see a changelog.

Analyze these git commits and generate {option_count} engaging tweet options for the #buildinpublic community:

COMMITS:
{commit_text}

TWEET FORMULA - Use this structure:
1. START with what you're building (the product/vision) - NOT technical details
2. TODAY'S PROGRESS - Specific wins framed as user value or business impact
3. INSIGHT or next step - What you learned or what's next

STYLE: {style_instruction}

GOOD EXAMPLES (all under 260 chars):
✓ "Building a legal case tool. Shipped a client portal today - lawyers can share updates in real-time. No more 'what's my status?' calls. Notifications next 🚀" (157 chars)

✓ "Day 12 of #buildinpublic: Deployed my SaaS to Vercel in 20 mins. Localhost → production feels amazing. Learning DevOps the hard way. Auth next week!" (149 chars)

✓ "Solved offline mode today. Rewrote our sync logic and tested on airplane mode - it just works. This polish will set us apart." (128 chars)

BAD EXAMPLES (Don't do this):
✗ "Updated styling across multiple pages and fixed config for Vercel deployment"
✗ "Just shipped styling improvements and Vercel fixes for my Next.js app"
✗ "Next.js project update: Fixed Vercel deployment issues, updated multiple page components"

REQUIREMENTS:
- CRITICAL: Keep under 260 characters (aim for 240-260 to be safe)
- Lead with WHAT you're building, not how
- Frame technical work as user/business value
- Be concise - every word must earn its place
- Sound human - use "I" and "we", share learnings
- Emojis are fine but don't overdo it (1-2 max)
- Avoid generic words like "updated", "improved", "fixed" without context

Generate {option_count} different tweet options, each on its own line, numbered 1., 2., 3., etc.
"#,
        style_instruction = style.instruction(),
    )
}

/// Build the prompt asking for a 2-4 post thread with a hook, details and a close.
pub fn build_thread_prompt(commit_text: &str) -> String {
    format!(
        r#"You are a developer building in public on Twitter/X. Create a tweet thread that tells the STORY of today's work.

Analyze these git commits and create an engaging thread for the #buildinpublic community:

COMMITS:
{commit_text}

THREAD STRUCTURE:
Tweet 1 (HOOK): What you're building + today's big win. Make people want to read more.
Tweet 2-3 (DETAILS): Expand on the journey - what you built, challenges solved, learnings
Tweet 4 (CLOSE): What's next or key insight

GOOD THREAD EXAMPLE (each under 260 chars):
1/ "Shipped client portal for my legal SaaS. Lawyers share updates in real-time, clients stop calling for status. #1 requested feature ✅" (136 chars)

2/ "Built a notification system that emails + saves to portal. Took 3 tries to nail Next.js state management, but it's solid." (124 chars)

3/ "Deployed to Vercel in 20 mins. Polished contact & careers pages too. The styling makes it feel professional." (112 chars)

4/ "Next: document uploads for file sharing. Then beta users. Building in public keeps me accountable 💪" (103 chars)

BAD THREAD EXAMPLE (Don't do this):
1/ "Today's Next.js progress: Updated styling across multiple pages"
2/ "Fixed config for Vercel deployment. Updated package.json"
3/ "Changed 2,895 lines of code. Building in public!"

REQUIREMENTS:
- CRITICAL: Each tweet must be under 260 characters (aim for 240-260)
- Tell a story, not a changelog
- Include specific wins with business/user context
- Be concise and punchy - cut unnecessary words
- Sound authentic and human
- 2-4 tweets depending on content
- End with what's next or a key insight

Generate the thread with each tweet on its own line, numbered 1., 2., 3., etc.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_falls_back_to_technical() {
        assert_eq!(Style::from_name("sarcastic"), Style::Technical);
        assert_eq!(Style::from_name(""), Style::Technical);
        assert_eq!(Style::from_name("Casual"), Style::Casual);
        assert_eq!(Style::from_name("celebratory"), Style::Celebratory);
    }

    #[test]
    fn test_tweets_prompt_embeds_inputs() {
        let prompt = build_tweets_prompt("COMMITS (2 total):", Style::Casual, 5);

        assert!(prompt.contains("generate 5 engaging tweet options"));
        assert!(prompt.contains("Generate 5 different tweet options"));
        assert!(prompt.contains("COMMITS:\nCOMMITS (2 total):\n"));
        assert!(prompt.contains(
            "STYLE: Conversational and story-driven - share the journey and learnings"
        ));
    }

    #[test]
    fn test_each_style_has_distinct_instruction() {
        let technical = build_tweets_prompt("x", Style::Technical, 3);
        let celebratory = build_tweets_prompt("x", Style::Celebratory, 3);

        assert!(technical.contains(Style::Technical.instruction()));
        assert!(!technical.contains(Style::Celebratory.instruction()));
        assert!(celebratory.contains(Style::Celebratory.instruction()));
    }

    #[test]
    fn test_thread_prompt_has_narrative_arc() {
        let prompt = build_thread_prompt("1. Commit: Add login");

        assert!(prompt.contains("1. Commit: Add login"));
        assert!(prompt.contains("(HOOK)"));
        assert!(prompt.contains("(DETAILS)"));
        assert!(prompt.contains("(CLOSE)"));
        assert!(prompt.contains("2-4 tweets"));
    }
}
