// Shared prompt fragments. Endpoint-specific prompts live in their own prompts.rs.

/// System prompt fragment that enforces a bare JSON array as the answer.
pub const JSON_ARRAY_ONLY: &str = "Deine Antwort MUSS ein valides JSON-Array sein. \
    KEIN Text davor, kein Text danach.";

/// Closing rule for user prompts that expect machine-readable output.
pub const NO_MARKDOWN_RULE: &str = "- KEINE extra Kommentare, KEIN Markdown, NUR JSON.";
