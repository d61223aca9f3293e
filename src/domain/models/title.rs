//! Mode-specific inputs for title generation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the user asked the generator for.
///
/// Each mode carries only the fields that mode can use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TitleInput {
    Template {
        #[serde(default)]
        goal: Option<String>,
        #[serde(default)]
        category: Option<String>,
    },
    Agent {
        #[serde(default, rename = "agentName")]
        agent_name: Option<String>,
        #[serde(default)]
        goal: Option<String>,
    },
    #[serde(alias = "media")]
    Blueprint {
        #[serde(default)]
        platform: Option<String>,
        #[serde(default, rename = "mediaStyle")]
        media_style: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl TitleInput {
    /// Build the input for `mode` from a loose metadata bag.
    ///
    /// `category` is only consulted for template mode. Mode names are matched
    /// exactly, so `"Template"` or `" agent "` map to [`TitleInput::Unknown`]
    /// like any other unrecognised mode.
    pub fn from_metadata(mode: &str, metadata: &Map<String, Value>, category: Option<&str>) -> Self {
        let field = |key: &str| {
            metadata
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        match mode {
            "template" => Self::Template {
                goal: field("goal"),
                category: category.filter(|c| !c.is_empty()).map(str::to_string),
            },
            "agent" => Self::Agent {
                agent_name: field("agentName"),
                goal: field("goal"),
            },
            "blueprint" | "media" => Self::Blueprint {
                platform: field("platform"),
                media_style: field("mediaStyle"),
            },
            _ => Self::Unknown,
        }
    }
}
