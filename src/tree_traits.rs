use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{DomainResult, OrgChart};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for OrgChart {
    fn to_tree_string(&self) -> Tree<String> {
        // the root always exists
        self.subtree_to_tree_string(self.root())
            .unwrap_or_else(|_| Tree::new("Empty chart".to_string()))
    }
}

impl OrgChart {
    /// Renders the subtree rooted at `idx`, direct reports in attach order.
    #[instrument(level = "debug", skip(self))]
    pub fn subtree_to_tree_string(&self, idx: Index) -> DomainResult<Tree<String>> {
        let mut tree = Tree::new(self.employee(idx)?.to_string());

        fn build_tree(chart: &OrgChart, node_idx: Index, parent_tree: &mut Tree<String>) {
            if let Some(node) = chart.get_node(node_idx) {
                for &child_idx in node.children() {
                    if let Some(child) = chart.get_node(child_idx) {
                        let mut child_tree = Tree::new(child.employee().to_string());
                        build_tree(chart, child_idx, &mut child_tree);
                        parent_tree.push(child_tree);
                    }
                }
            }
        }

        build_tree(self, idx, &mut tree);
        Ok(tree)
    }
}
