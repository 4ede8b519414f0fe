use super::action::Action;
use crate::domain::{Category, CommandDescriptor, Registry, RegistryError};
use anyhow::anyhow;
use tokio::sync::mpsc;

fn reporting(
    tx: &mpsc::Sender<Action>,
    id: &str,
    name: &str,
    category: Category,
) -> CommandDescriptor {
    let tx = tx.clone();
    let label = name.to_string();
    CommandDescriptor::new(id, name, category, move || {
        tx.try_send(Action::CommandExecuted(label.clone()))
            .map_err(|e| anyhow!("could not report completion: {e}"))
    })
}

/// Built-in commands for the demo host. Actions report back on `tx`.
pub fn default_registry(tx: &mpsc::Sender<Action>) -> Result<Registry, RegistryError> {
    let quit_tx = tx.clone();
    Registry::new(vec![
        // --- Navigation ---
        reporting(tx, "nav-dashboard", "Go to Dashboard", Category::Navigation)
            .description("Workspace overview and recent activity")
            .keywords(["home", "overview"])
            .priority(10)
            .shortcut("g d"),
        reporting(tx, "nav-projects", "View All Projects", Category::Navigation)
            .description("Browse every project")
            .keywords(["list", "repos"])
            .priority(9)
            .shortcut("g p"),
        reporting(tx, "nav-analytics", "Open Analytics", Category::Navigation)
            .description("Usage and performance charts")
            .keywords(["metrics", "stats"])
            .priority(7),
        reporting(tx, "nav-settings", "Open Settings", Category::Navigation)
            .description("Account and workspace preferences")
            .keywords(["preferences", "config"])
            .priority(5)
            .shortcut("g s"),
        // --- Actions ---
        reporting(tx, "act-new-project", "Create New Project", Category::Actions)
            .description("Start a project from a template")
            .keywords(["add", "start"])
            .priority(8)
            .shortcut("c"),
        reporting(tx, "act-deploy", "Deploy to Production", Category::Actions)
            .description("Ship the current build")
            .keywords(["release", "ship"])
            .priority(6),
        CommandDescriptor::new("act-sync", "Sync Remote Data", Category::Actions, || {
            Err(anyhow!("remote is unreachable in demo mode"))
        })
        .description("Pull the latest data from the server")
        .keywords(["refresh", "fetch"])
        .priority(3),
        CommandDescriptor::new("act-quit", "Quit", Category::Actions, move || {
            quit_tx
                .try_send(Action::Quit)
                .map_err(|e| anyhow!("could not request quit: {e}"))
        })
        .description("Exit the application")
        .keywords(["exit", "close"])
        .priority(-10)
        .shortcut("q"),
        // --- AI ---
        reporting(tx, "ai-optimize", "AI Performance Optimizer", Category::Ai)
            .description("Find slow paths and suggest fixes")
            .keywords(["speed", "tune"])
            .priority(10),
        reporting(tx, "ai-review", "AI Code Review", Category::Ai)
            .description("Review the latest changes")
            .keywords(["lint", "check"])
            .priority(6),
        reporting(tx, "ai-docs", "Generate Documentation", Category::Ai)
            .description("Draft docs from source comments")
            .keywords(["write", "readme"])
            .priority(4),
        // --- Recent & Suggestions ---
        reporting(tx, "recent-api", "API Gateway Project", Category::Recent)
            .description("Last opened yesterday")
            .priority(2),
        reporting(tx, "suggest-invite", "Invite Team Members", Category::Suggestions)
            .description("Collaborate on your projects")
            .keywords(["share", "people"])
            .priority(1),
    ])
}
