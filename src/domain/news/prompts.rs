//! Prompt templates for the two generation steps.

use super::story::Country;

/// Prompt asking the grounded text backend for the day's top story.
pub fn news_prompt(country: &Country) -> String {
    format!(
        "Find the single most significant, newsworthy story that happened in {country} within the last 24 hours.\n\
         Focus on major political, social, or cultural events.\n\
         \n\
         Strictly format your response as follows:\n\
         HEADLINE: [Insert a catchy, short headline here]\n\
         SUMMARY: [Insert a 2-3 sentence summary of the event here]\n\
         \n\
         Do not include any other text or markdown formatting like **."
    )
}

/// Prompt asking the image backend for an editorial illustration of the story.
pub fn image_prompt(country: &Country, headline: &str) -> String {
    format!(
        "Create a high-quality, artistic, editorial-style illustration representing this news headline from {country}: \"{headline}\".\n\
         Compose it as a single wide 16:9 frame.\n\
         The style should be modern, evocative, and suitable for a top-tier news magazine.\n\
         Do not include text in the image.\n\
         Use a moody or dramatic lighting depending on the subject."
    )
}
