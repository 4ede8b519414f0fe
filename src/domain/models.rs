use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Navigation,
    Actions,
    Ai,
    Recent,
    Suggestions,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Navigation,
        Category::Actions,
        Category::Ai,
        Category::Recent,
        Category::Suggestions,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::Navigation => "Navigation",
            Category::Actions => "Actions",
            Category::Ai => "AI Tools",
            Category::Recent => "Recent",
            Category::Suggestions => "Suggestions",
        }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Navigation => "→",
            Category::Actions => "⚡",
            Category::Ai => "✦",
            Category::Recent => "↺",
            Category::Suggestions => "★",
        }
    }
}

/// Side effect run when a command is confirmed. Opaque to the engine.
pub type CommandAction = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

#[derive(Clone)]
pub struct CommandDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub category: Category,
    pub priority: i32,
    pub shortcut: Option<String>,
    pub action: CommandAction,
}

impl CommandDescriptor {
    pub fn new<F>(id: impl Into<String>, name: impl Into<String>, category: Category, action: F) -> Self
    where
        F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            keywords: Vec::new(),
            category,
            priority: 0,
            shortcut: None,
            action: Arc::new(action),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("keywords", &self.keywords)
            .field("category", &self.category)
            .field("priority", &self.priority)
            .field("shortcut", &self.shortcut)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    Browse,   // Empty query, every command qualifies
    Contains, // Query found in name, description or keywords
    Prefix,   // Name starts with the query
}

/// Rank of a match. Greater sorts first; the registry index breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub kind: MatchKind,
    pub priority: i32,
}

impl Ord for MatchScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then(self.priority.cmp(&other.priority))
    }
}

impl PartialOrd for MatchScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub command: Arc<CommandDescriptor>,
    pub score: MatchScore,
    /// Position of the command in the registry snapshot.
    pub index: usize,
}

impl MatchResult {
    pub fn id(&self) -> &str {
        &self.command.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ordering() {
        let prefix_low = MatchScore {
            kind: MatchKind::Prefix,
            priority: -5,
        };
        let contains_high = MatchScore {
            kind: MatchKind::Contains,
            priority: 100,
        };
        assert!(prefix_low > contains_high);

        let a = MatchScore {
            kind: MatchKind::Contains,
            priority: 2,
        };
        let b = MatchScore {
            kind: MatchKind::Contains,
            priority: 1,
        };
        assert!(a > b);
    }

    #[test]
    fn test_every_category_has_label_and_icon() {
        for category in Category::ALL {
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty());
        }
    }

    #[test]
    fn test_category_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            order: Vec<Category>,
        }
        let parsed: Wrapper = toml::from_str(r#"order = ["ai", "navigation", "suggestions"]"#).unwrap();
        assert_eq!(
            parsed.order,
            vec![Category::Ai, Category::Navigation, Category::Suggestions]
        );
    }

    #[test]
    fn test_debug_skips_action() {
        let cmd = CommandDescriptor::new("x", "X", Category::Actions, || Ok(()));
        let rendered = format!("{cmd:?}");
        assert!(rendered.contains("\"x\""));
        assert!(!rendered.contains("action"));
    }
}
