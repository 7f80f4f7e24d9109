//! Instruction templates sent to the generation providers.
//!
//! Every builder is pure: the scaffolding is fixed and only the interpolated
//! topic, research or story text varies.

use crate::core::text::{excerpt, TITLE_EXCERPT_CHARS};

/// Asks the research provider for a brief covering seven angles of `topic`.
pub fn build_research_prompt(topic: &str) -> String {
    format!(
        r#"
You are a world-class research agent. Your job is to conduct thorough research on the following topic and prepare findings for an engaging podcast-style story.

TOPIC: "{topic}"

Your research should include:
1. Key historical context and background
2. Important facts, statistics, and data points
3. Interesting stories, anecdotes, or case studies
4. Current developments or recent discoveries
5. Why this topic matters or is relevant today
6. Surprising or counterintuitive insights
7. Different perspectives or debates around the topic

Structure your response as a comprehensive research brief that will be used to create an engaging 10-15 minute story. Focus on finding the most interesting, surprising, and educational aspects of this topic.

Make sure to include specific examples, numbers, dates, and concrete details that will make the story vivid and memorable.
"#
    )
}

/// Asks the story provider to turn `research` into a 2,500-3,000 word narrative.
pub fn build_story_prompt(research: &str, original_query: &str) -> String {
    format!(
        r#"
You are a master storyteller and podcast host. Transform the following research into an engaging, conversational story that teaches the listener about this topic.

ORIGINAL QUESTION: "{original_query}"

RESEARCH DATA:
{research}

Create a compelling 10-15 minute narrative (approximately 2,500-3,000 words) with these requirements:

STRUCTURE:
1. HOOK (First 30 seconds): Start with a surprising fact, intriguing question, or fascinating scenario that immediately grabs attention
2. SETUP: Provide necessary context and introduce the main concepts
3. JOURNEY: Take the listener through the most interesting aspects, using storytelling techniques
4. CLIMAX: Build to the most surprising or important revelation
5. CONCLUSION: Tie everything together with key takeaways

STYLE REQUIREMENTS:
- Conversational, podcast-style tone (like you're talking to a friend)
- Use "you" to address the listener directly
- Include vivid descriptions and paint mental pictures
- Use analogies and metaphors to explain complex concepts
- Create narrative tension and curiosity gaps
- Include specific examples, stories, and anecdotes
- Build emotional connection to the material
- Use varied sentence lengths for rhythm

STORYTELLING TECHNIQUES:
- Start scenes with "Imagine..." or "Picture this..."
- Use dialogue when appropriate
- Create character-driven moments
- Build suspense before revealing key information
- Use rhetorical questions to engage the listener
- Include "plot twists" or surprising revelations

LENGTH: Target 2,500-3,000 words (10-15 minutes when spoken)

Remember: This isn't a lecture or academic paper. It's an engaging story that happens to teach something fascinating. Make the listener excited to keep listening!
"#
    )
}

/// Asks for a podcast-episode title, showing only the opening of `story`.
pub fn build_title_prompt(story: &str, original_query: &str) -> String {
    let opening = excerpt(story, TITLE_EXCERPT_CHARS);
    format!(
        r#"
Based on this story about "{original_query}", create a catchy, engaging title that would make someone want to listen. Make it curious and intriguing, like a good podcast episode title.

Story excerpt: {opening}...

Provide just the title, nothing else.
"#
    )
}

/// Asks for five contextual questions that narrow down what the learner wants.
pub fn build_clarifying_questions_prompt(initial_topic: &str) -> String {
    format!(
        r#"
You are an expert educator having a conversation with someone who wants to learn. They just told you:

"{initial_topic}"

Your job is to ask 5 specific, contextual questions that will help you create the perfect learning story for them. These questions should be:

1. **Directly related to their specific topic** - not generic learning questions
2. **Conversational and engaging** - like you're having a real discussion
3. **Help you understand what angle/depth/focus they want**
4. **Reveal any specific curiosities or misconceptions they might have**
5. **Allow you to tailor the story to their interests**

Think about:
- What are the key dimensions/perspectives of this topic?
- What choices need to be made about scope, depth, and angle?
- What specific aspects might they be most curious about?
- What context or background might be needed?
- What level of complexity are they ready for?

Write your response as if you're ChatGPT having a natural conversation. Start with a brief acknowledgment of their topic, then ask your 5 questions in a conversational way.

Example style:
"Absolutely! This is a fascinating and complex topic. Before I dive into creating your story, let me ask a few questions to make sure I give you exactly what you're looking for:

1. [Specific question about their topic]
2. [Another contextual question]
..."

Be natural, engaging, and specific to their exact topic.
"#
    )
}
