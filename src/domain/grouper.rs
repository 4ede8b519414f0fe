use super::models::{Category, CommandDescriptor, MatchResult};
use std::sync::Arc;

/// Ranked results bucketed by category, buckets in display order.
#[derive(Debug, Clone, Default)]
pub struct GroupedResults {
    groups: Vec<(Category, Vec<Arc<CommandDescriptor>>)>,
}

impl GroupedResults {
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Arc<CommandDescriptor>])> {
        self.groups.iter().map(|(c, cmds)| (*c, cmds.as_slice()))
    }

    pub fn get(&self, category: Category) -> Option<&[Arc<CommandDescriptor>]> {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, cmds)| cmds.as_slice())
    }

    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|(c, _)| *c).collect()
    }

    /// Concatenate the buckets in iteration order.
    pub fn flatten(&self) -> Vec<Arc<CommandDescriptor>> {
        self.groups
            .iter()
            .flat_map(|(_, cmds)| cmds.iter().cloned())
            .collect()
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Bucket `results` by category.
///
/// Buckets appear in the order their category is first seen in `results`,
/// unless `order` is given: listed categories then come first in the listed
/// order, followed by any unlisted ones in first-seen order.
#[must_use]
pub fn group_results(results: &[MatchResult], order: Option<&[Category]>) -> GroupedResults {
    let mut groups: Vec<(Category, Vec<Arc<CommandDescriptor>>)> = Vec::new();

    for result in results {
        let category = result.command.category;
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, bucket)) => bucket.push(result.command.clone()),
            None => groups.push((category, vec![result.command.clone()])),
        }
    }

    if let Some(order) = order {
        // Stable, so unlisted categories keep first-seen order.
        groups.sort_by_key(|(c, _)| order.iter().position(|o| o == c).unwrap_or(order.len()));
    }

    GroupedResults { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matcher::match_commands;
    use crate::domain::registry::Registry;

    fn registry() -> Registry {
        let cmd = |id: &str, name: &str, category, priority| {
            CommandDescriptor::new(id, name, category, || Ok(())).priority(priority)
        };
        Registry::new(vec![
            cmd("nav-dashboard", "Go to Dashboard", Category::Navigation, 10),
            cmd("nav-projects", "View All Projects", Category::Navigation, 9),
            cmd("ai-optimize", "AI Performance Optimizer", Category::Ai, 10),
            cmd("act-deploy", "Deploy Project", Category::Actions, 5),
        ])
        .unwrap()
    }

    fn names(cmds: &[Arc<CommandDescriptor>]) -> Vec<&str> {
        cmds.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_first_seen_order() {
        let results = match_commands("", &registry(), 8);
        let grouped = group_results(&results, None);

        assert_eq!(
            grouped.categories(),
            vec![Category::Navigation, Category::Ai, Category::Actions]
        );
        assert_eq!(
            names(grouped.get(Category::Navigation).unwrap()),
            vec!["nav-dashboard", "nav-projects"]
        );
        assert!(grouped.get(Category::Recent).is_none());
    }

    #[test]
    fn test_single_bucket() {
        let results = match_commands("proj", &registry(), 8);
        let grouped = group_results(&results, None);
        assert_eq!(grouped.categories(), vec![Category::Navigation, Category::Actions]);
        assert_eq!(names(grouped.get(Category::Navigation).unwrap()), vec!["nav-projects"]);
    }

    #[test]
    fn test_flatten_preserves_relative_order_within_category() {
        let results = match_commands("o", &registry(), 8);
        let flat = group_results(&results, None).flatten();
        assert_eq!(flat.len(), results.len());

        for category in Category::ALL {
            let ranked: Vec<_> = results
                .iter()
                .filter(|r| r.command.category == category)
                .map(|r| r.command.id.clone())
                .collect();
            let grouped: Vec<_> = flat
                .iter()
                .filter(|c| c.category == category)
                .map(|c| c.id.clone())
                .collect();
            assert_eq!(ranked, grouped);
        }
    }

    #[test]
    fn test_category_order_override() {
        let results = match_commands("", &registry(), 8);
        let order = [Category::Actions, Category::Recent];
        let grouped = group_results(&results, Some(&order));
        assert_eq!(
            grouped.categories(),
            vec![Category::Actions, Category::Navigation, Category::Ai]
        );
    }

    #[test]
    fn test_empty() {
        let grouped = group_results(&[], None);
        assert!(grouped.is_empty());
        assert!(grouped.flatten().is_empty());
    }
}
