use super::*;
use crate::domain::{Category, CommandDescriptor, MatchResult};
use std::sync::atomic::{AtomicUsize, Ordering};

struct Fixture {
    palette: CommandPalette,
    runs: Arc<AtomicUsize>,
}

fn counting(id: &str, name: &str, category: Category, priority: i32, runs: &Arc<AtomicUsize>) -> CommandDescriptor {
    let runs = runs.clone();
    CommandDescriptor::new(id, name, category, move || {
        runs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
    .priority(priority)
}

fn fixture() -> Fixture {
    let runs = Arc::new(AtomicUsize::new(0));
    let registry = Registry::new(vec![
        counting("nav-dashboard", "Go to Dashboard", Category::Navigation, 10, &runs),
        counting("nav-projects", "View All Projects", Category::Navigation, 9, &runs),
        counting("ai-optimize", "AI Performance Optimizer", Category::Ai, 10, &runs),
    ])
    .unwrap();
    Fixture {
        palette: CommandPalette::new(Arc::new(registry), PaletteConfig::default()),
        runs,
    }
}

fn result_ids(palette: &CommandPalette) -> Vec<String> {
    palette
        .state()
        .results()
        .iter()
        .map(MatchResult::id)
        .map(str::to_string)
        .collect()
}

#[test]
fn test_open_with_empty_query_browses_by_priority() {
    let mut f = fixture();
    f.palette.open();
    assert!(f.palette.is_open());
    assert_eq!(result_ids(&f.palette), vec!["nav-dashboard", "ai-optimize", "nav-projects"]);
    assert_eq!(f.palette.state().cursor(), 0);
}

#[test]
fn test_query_narrows_and_groups() {
    let mut f = fixture();
    f.palette.open();
    f.palette.set_query("proj");
    assert_eq!(result_ids(&f.palette), vec!["nav-projects"]);

    let grouped = f.palette.state().grouped();
    assert_eq!(grouped.categories(), vec![Category::Navigation]);
    let bucket: Vec<_> = grouped
        .get(Category::Navigation)
        .unwrap()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(bucket, vec!["nav-projects"]);
}

#[test]
fn test_prefix_query_ranks_first() {
    let mut f = fixture();
    f.palette.open();
    f.palette.set_query("go");
    assert_eq!(result_ids(&f.palette)[0], "nav-dashboard");
}

#[test]
fn test_navigate_and_confirm_runs_once_then_closes() {
    let mut f = fixture();
    f.palette.open();
    f.palette.move_down();
    f.palette.move_down();
    f.palette.move_down();
    assert_eq!(f.palette.state().cursor(), 2);

    let outcome = f.palette.confirm();
    assert!(matches!(outcome, ConfirmOutcome::Executed { ref id } if id == "nav-projects"));
    assert_eq!(f.runs.load(Ordering::SeqCst), 1);
    assert!(!f.palette.is_open());

    assert!(matches!(f.palette.confirm(), ConfirmOutcome::Closed));
    assert_eq!(f.runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_query_change_resets_cursor_unconditionally() {
    let mut f = fixture();
    f.palette.open();
    f.palette.set_query("proj");
    let seq = f.palette.state().query_seq();
    f.palette.set_query("");
    assert_eq!(f.palette.state().cursor(), 0);
    assert!(f.palette.state().query_seq() > seq);
    assert_eq!(f.palette.state().results().len(), 3);
}

#[test]
fn test_close_is_idempotent() {
    let mut f = fixture();
    f.palette.close();
    assert!(!f.palette.is_open());

    f.palette.open();
    f.palette.set_query("ai");
    f.palette.close();
    f.palette.close();
    assert!(!f.palette.is_open());
    assert_eq!(f.palette.state().query(), "");
    assert!(f.palette.state().results().is_empty());
}

#[test]
fn test_edits_ignored_while_closed() {
    let mut f = fixture();
    f.palette.set_query("proj");
    f.palette.push_char('x');
    assert_eq!(f.palette.state().query(), "");
    assert!(f.palette.state().results().is_empty());
}

#[test]
fn test_failing_action_still_closes() {
    let registry = Registry::new(vec![CommandDescriptor::new(
        "broken",
        "Broken Command",
        Category::Actions,
        || Err(anyhow::anyhow!("backend unavailable")),
    )])
    .unwrap();
    let mut palette = CommandPalette::new(Arc::new(registry), PaletteConfig::default());
    palette.open();

    match palette.confirm() {
        ConfirmOutcome::Failed { id, error } => {
            assert_eq!(id, "broken");
            assert!(error.contains("backend unavailable"));
        }
        other => panic!("Expected ConfirmOutcome::Failed, got {other:?}"),
    }
    assert!(!palette.is_open());
    assert_eq!(palette.state().cursor(), 0);
}

#[test]
fn test_confirm_with_no_results_keeps_session() {
    let mut f = fixture();
    f.palette.open();
    f.palette.set_query("zzz");
    assert!(matches!(f.palette.confirm(), ConfirmOutcome::NoSelection));
    assert!(f.palette.is_open());
    assert_eq!(f.palette.state().query(), "zzz");
    assert_eq!(f.runs.load(Ordering::SeqCst), 0);

    // Editing the query back to something that matches still works.
    f.palette.clear_query();
    f.palette.push_char('g');
    f.palette.push_char('o');
    assert!(matches!(
        f.palette.confirm(),
        ConfirmOutcome::Executed { ref id } if id == "nav-dashboard"
    ));
    assert!(!f.palette.is_open());
}

#[test]
fn test_execute_by_id() {
    let mut f = fixture();
    f.palette.open();
    assert!(matches!(
        f.palette.execute("ai-optimize"),
        ConfirmOutcome::Executed { ref id } if id == "ai-optimize"
    ));
    assert_eq!(f.runs.load(Ordering::SeqCst), 1);

    f.palette.open();
    f.palette.set_query("proj");
    assert!(matches!(f.palette.execute("ai-optimize"), ConfirmOutcome::NoSelection));
    assert_eq!(f.runs.load(Ordering::SeqCst), 1);
    assert!(f.palette.is_open());
    assert_eq!(f.palette.state().query(), "proj");
}

#[test]
fn test_result_limit_from_config() {
    let registry = Registry::new(
        (0..12)
            .map(|i| CommandDescriptor::new(format!("c{i}"), format!("Command {i}"), Category::Actions, || Ok(())))
            .collect(),
    )
    .unwrap();
    let config = PaletteConfig {
        result_limit: 4,
        ..Default::default()
    };
    let mut palette = CommandPalette::new(Arc::new(registry), config);
    palette.open();
    assert_eq!(palette.state().results().len(), 4);
    palette.set_query("command");
    assert_eq!(palette.state().results().len(), 4);
}

#[test]
fn test_category_order_override() {
    let runs = Arc::new(AtomicUsize::new(0));
    let registry = Registry::new(vec![
        counting("nav", "Go Home", Category::Navigation, 10, &runs),
        counting("ai", "Ask AI", Category::Ai, 1, &runs),
    ])
    .unwrap();
    let config = PaletteConfig {
        category_order: Some(vec![Category::Ai, Category::Navigation]),
        ..Default::default()
    };
    let mut palette = CommandPalette::new(Arc::new(registry), config);
    palette.open();
    assert_eq!(
        palette.state().grouped().categories(),
        vec![Category::Ai, Category::Navigation]
    );
    // The cursor still follows rank order.
    assert!(palette.state().is_selected("nav"));
}

#[test]
fn test_replace_registry_while_open() {
    let mut f = fixture();
    f.palette.open();
    f.palette.set_query("go");
    f.palette.move_down();

    let registry = Registry::new(vec![
        CommandDescriptor::new("a", "Go Fast", Category::Actions, || Ok(())),
        CommandDescriptor::new("b", "Go Slow", Category::Actions, || Ok(())),
    ])
    .unwrap();
    f.palette.replace_registry(Arc::new(registry));

    assert_eq!(f.palette.state().query(), "go");
    assert_eq!(f.palette.state().cursor(), 0);
    assert_eq!(result_ids(&f.palette), vec!["a", "b"]);
}

#[test]
fn test_toggle_opens_fresh_and_closes() {
    let mut f = fixture();
    f.palette.toggle();
    assert!(f.palette.is_open());
    f.palette.set_query("ai");

    f.palette.toggle();
    assert!(!f.palette.is_open());

    f.palette.toggle();
    assert_eq!(f.palette.state().query(), "");
    assert_eq!(f.palette.state().results().len(), 3);
}
