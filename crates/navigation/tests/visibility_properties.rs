#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property tests for visibility filtering and identity collection over
//! randomly shaped category trees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use catalog_navigation::{
    CategoryId, Identities, InMemoryCategoryStore, MokaTagCache, NavigationBuilder,
    NavigationType, TagCache,
};
use catalog_navigation_test_utils::{TestCategory, forest_ids, test_category, test_store};

const ROOT: CategoryId = 0;

/// One generated category: parent index (into the nodes before it, 0 = root)
/// plus its two visibility flags.
#[derive(Debug, Clone)]
struct GeneratedNode {
    parent: usize,
    desktop: bool,
    mobile: bool,
}

fn tree_strategy() -> impl Strategy<Value = Vec<GeneratedNode>> {
    proptest::collection::vec((any::<prop::sample::Index>(), any::<bool>(), any::<bool>()), 1..40)
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (parent, desktop, mobile))| GeneratedNode {
                    // node ids are i + 1; parents are chosen among 0..=i
                    parent: parent.index(i + 1),
                    desktop,
                    mobile,
                })
                .collect()
        })
}

fn node_id(index: usize) -> CategoryId {
    index as CategoryId
}

fn tag_of(id: CategoryId) -> String {
    format!("tag_{id}")
}

fn build_store(nodes: &[GeneratedNode]) -> InMemoryCategoryStore {
    let mut children: Vec<Vec<CategoryId>> = vec![Vec::new(); nodes.len() + 1];
    for (i, node) in nodes.iter().enumerate() {
        children[node.parent].push(node_id(i + 1));
    }

    let mut categories: Vec<TestCategory> =
        vec![test_category(ROOT, "Root").with_children(&children[0])];
    for (i, node) in nodes.iter().enumerate() {
        let id = node_id(i + 1);
        let tag = tag_of(id);
        let mut category = test_category(id, &format!("Category {id}"))
            .with_children(&children[i + 1])
            .with_identities(&[tag.as_str()]);
        if !node.desktop {
            category = category.hidden_on_desktop();
        }
        if !node.mobile {
            category = category.hidden_on_mobile();
        }
        categories.push(category);
    }

    test_store(categories)
}

/// Ids whose whole ancestor chain (excluding the root) is visible.
fn expected_visible(nodes: &[GeneratedNode], navigation_type: NavigationType) -> BTreeSet<CategoryId> {
    let mut reachable = vec![true; nodes.len() + 1];
    for (i, node) in nodes.iter().enumerate() {
        let flag = match navigation_type {
            NavigationType::Desktop => node.desktop,
            NavigationType::Mobile => node.mobile,
        };
        reachable[i + 1] = flag && reachable[node.parent];
    }
    (1..=nodes.len())
        .filter(|&i| reachable[i])
        .map(node_id)
        .collect()
}

fn navigation_type_strategy() -> impl Strategy<Value = NavigationType> {
    prop_oneof![Just(NavigationType::Desktop), Just(NavigationType::Mobile)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// Output holds exactly the categories whose ancestor chain is visible.
    #[test]
    fn output_matches_visible_chains(
        nodes in tree_strategy(),
        navigation_type in navigation_type_strategy(),
    ) {
        let builder = NavigationBuilder::new(build_store(&nodes), MokaTagCache::default());
        let items = builder.build(ROOT, navigation_type).unwrap();

        let ids = forest_ids(&items);
        let unique: BTreeSet<CategoryId> = ids.iter().copied().collect();
        prop_assert_eq!(ids.len(), unique.len());
        prop_assert_eq!(unique, expected_visible(&nodes, navigation_type));
    }

    /// Cached identities are the tags of exactly the categories in the output.
    #[test]
    fn cached_identities_cover_output_only(
        nodes in tree_strategy(),
        navigation_type in navigation_type_strategy(),
    ) {
        let builder = NavigationBuilder::new(build_store(&nodes), MokaTagCache::default());
        let items = builder.build(ROOT, navigation_type).unwrap();

        let expected: Identities = forest_ids(&items).into_iter().map(tag_of).collect();
        let cached = builder
            .cache()
            .load(&builder.cache_key(ROOT, navigation_type))
            .unwrap()
            .unwrap();
        prop_assert_eq!(cached, expected);
    }

    /// Rebuilding an unchanged tree yields the same navigation.
    #[test]
    fn rebuild_is_identical(
        nodes in tree_strategy(),
        navigation_type in navigation_type_strategy(),
    ) {
        let builder = NavigationBuilder::new(build_store(&nodes), MokaTagCache::default());
        let first = builder.build(ROOT, navigation_type).unwrap();
        let second = builder.build(ROOT, navigation_type).unwrap();
        prop_assert_eq!(first, second);
    }
}
