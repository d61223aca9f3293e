//! Title generation from mode-specific inputs.

use crate::domain::models::TitleInput;

/// Longest title the generator will return.
pub const MAX_TITLE_LENGTH: usize = 60;

const ELLIPSIS: &str = "...";

/// Derive a human-readable title for `input`.
///
/// Pure; empty strings count as missing fields. Results longer than
/// [`MAX_TITLE_LENGTH`] characters are cut to exactly that length, ending in
/// `"..."`.
pub fn generate_title(input: &TitleInput) -> String {
    let title = match input {
        TitleInput::Template { goal, category } => match (present(goal), present(category)) {
            (Some(goal), _) => format!("{goal} Prompt Template"),
            (None, Some(category)) => {
                format!("{} Template", capitalize_words(&category.replace('-', " ")))
            }
            (None, None) => "Custom Prompt Template".to_string(),
        },
        TitleInput::Agent { agent_name, goal } => match (present(agent_name), present(goal)) {
            (Some(name), _) => format!("{name} - AI Assistant"),
            (None, Some(goal)) => format!("{goal} Agent"),
            (None, None) => "Custom AI Agent".to_string(),
        },
        TitleInput::Blueprint {
            platform,
            media_style,
        } => match (present(platform), present(media_style)) {
            (Some(platform), Some(style)) => {
                format!("{} {style} Blueprint", capitalize_words(platform))
            }
            (Some(platform), None) => format!("{} Media Blueprint", capitalize_words(platform)),
            (None, Some(style)) => format!("{style} Creation Blueprint"),
            (None, None) => "Media Generation Blueprint".to_string(),
        },
        TitleInput::Unknown => "Untitled Prompt".to_string(),
    };

    truncate_title(title)
}

/// Title-case each space-separated word: first letter upper, rest lower.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn truncate_title(title: String) -> String {
    if title.chars().count() <= MAX_TITLE_LENGTH {
        return title;
    }

    let mut truncated: String = title
        .chars()
        .take(MAX_TITLE_LENGTH - ELLIPSIS.len())
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
