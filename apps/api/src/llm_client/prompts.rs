// Fixed counselor instructions prepended to every relayed conversation.

/// System message sent ahead of the history on the OpenRouter relay.
pub const OPENROUTER_SYSTEM_PROMPT: &str = "You are a helpful AI career counselor. \
    Provide career advice, job roles, and learning paths based on student skills and interests.";

/// Leading user turn sent ahead of the history on the Gemini relay.
pub const GEMINI_INSTRUCTION: &str = "You are a helpful AI career counselor. \
    Provide job suggestions, learning paths, and growth advice based on the student's skills and interests.";
