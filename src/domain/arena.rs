use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::entities::Employee;
use crate::domain::error::{DomainError, DomainResult};

/// Org chart node in the arena-based hierarchy.
///
/// Relations are private: `parent` changes only through [`OrgChart::attach`],
/// which keeps it consistent with the parent's `children`.
#[derive(Debug)]
pub struct OrgNode {
    employee: Employee,
    parent: Option<Index>,
    children: Vec<Index>,
}

impl OrgNode {
    fn new(employee: Employee) -> Self {
        Self {
            employee,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Index of the boss in the arena, None for the root and unattached hires
    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    /// Direct reports in attach order
    pub fn children(&self) -> &[Index] {
        &self.children
    }
}

/// Arena-based org chart.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// The root is fixed at construction; every other node starts unattached and
/// joins the hierarchy via [`OrgChart::attach`]. Nodes are never removed.
#[derive(Debug)]
pub struct OrgChart {
    arena: Arena<OrgNode>,
    root: Index,
}

impl OrgChart {
    pub fn new(root: Employee) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(OrgNode::new(root));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Adds an employee without relations.
    #[instrument(level = "trace", skip(self))]
    pub fn hire(&mut self, employee: Employee) -> Index {
        self.arena.insert(OrgNode::new(employee))
    }

    /// Adds an employee and attaches it below `boss`.
    #[instrument(level = "trace", skip(self))]
    pub fn hire_under(&mut self, boss: Index, employee: Employee) -> DomainResult<Index> {
        self.node(boss)?;
        let idx = self.hire(employee);
        self.attach(boss, idx)?;
        Ok(idx)
    }

    /// Appends `child` to the direct reports of `parent` and sets its boss.
    ///
    /// Rejects self attachment, attaching the root, re-parenting a node that
    /// already has a boss, and attaching an ancestor of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, child: Index) -> DomainResult<()> {
        let parent_name = self.node(parent)?.employee.name.clone();
        let child_node = self.node(child)?;
        let child_name = child_node.employee.name.clone();

        if parent == child {
            return Err(DomainError::SelfAttachment { name: child_name });
        }
        if child == self.root {
            return Err(DomainError::RootAttachment { name: child_name });
        }
        if let Some(boss) = child_node.parent {
            return Err(DomainError::AlreadyAttached {
                child: child_name,
                boss: self.node(boss)?.employee.name.clone(),
            });
        }
        if self.chain_of_command(parent)?.any(|idx| idx == child) {
            return Err(DomainError::CycleDetected {
                child: child_name,
                parent: parent_name,
            });
        }

        if let Some(node) = self.arena.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.arena.get_mut(parent) {
            node.children.push(child);
        }
        debug!("attached {} under {}", child_name, parent_name);
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&OrgNode> {
        self.arena.get(idx)
    }

    /// Indices carry no chart identity: an index from another chart resolves
    /// to whatever node occupies that slot here. Only indices without a live
    /// slot are reported as [`DomainError::UnknownNode`].
    fn node(&self, idx: Index) -> DomainResult<&OrgNode> {
        self.arena.get(idx).ok_or(DomainError::UnknownNode(idx))
    }

    pub fn employee(&self, idx: Index) -> DomainResult<&Employee> {
        self.node(idx).map(OrgNode::employee)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn boss_of(&self, idx: Index) -> DomainResult<Option<Index>> {
        Ok(self.node(idx)?.parent)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn count_children(&self, idx: Index) -> DomainResult<usize> {
        Ok(self.node(idx)?.children.len())
    }

    /// Ancestors of `idx`, nearest boss first, ending at the root.
    #[instrument(level = "trace", skip(self))]
    pub fn chain_of_command(&self, idx: Index) -> DomainResult<ChainOfCommand> {
        let node = self.node(idx)?;
        Ok(ChainOfCommand {
            chart: self,
            next: node.parent,
        })
    }

    /// Number of edges between `idx` and the top of its hierarchy.
    #[instrument(level = "debug", skip(self))]
    pub fn depth_to_root(&self, idx: Index) -> DomainResult<usize> {
        Ok(self.chain_of_command(idx)?.count())
    }

    /// Identity comparison of both bosses. Two parentless nodes share a boss: nobody.
    #[instrument(level = "debug", skip(self))]
    pub fn same_parent(&self, a: Index, b: Index) -> DomainResult<bool> {
        Ok(self.node(a)?.parent == self.node(b)?.parent)
    }

    /// Pre-order iterator over the subtree rooted at `idx`, `idx` included.
    #[instrument(level = "trace", skip(self))]
    pub fn descendants(&self, idx: Index) -> DomainResult<Descendants> {
        self.node(idx)?;
        Ok(Descendants {
            chart: self,
            stack: vec![idx],
        })
    }

    /// Nodes in the subtree of `idx` (inclusive) earning strictly more than
    /// `threshold`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn employees_over(&self, idx: Index, threshold: f64) -> DomainResult<Vec<Index>> {
        Ok(self
            .descendants(idx)?
            .filter(|(_, node)| node.employee.earns_over(threshold))
            .map(|(idx, _)| idx)
            .collect())
    }

    /// Number of proper descendants of `idx`; the node itself is not counted.
    #[instrument(level = "debug", skip(self))]
    pub fn total_descendants(&self, idx: Index) -> DomainResult<usize> {
        let mut total = 0;
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            let node = self.node(current)?;
            total += node.children.len();
            stack.extend(node.children.iter().copied());
        }
        Ok(total)
    }

    /// Size of the subtree rooted at `idx`, `idx` included.
    pub fn headcount(&self, idx: Index) -> DomainResult<usize> {
        Ok(self.total_descendants(idx)? + 1)
    }

    /// First employee named `name` in pre-order from the root.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, name: &str) -> DomainResult<Index> {
        self.descendants(self.root)?
            .find(|(_, node)| node.employee.name == name)
            .map(|(idx, _)| idx)
            .ok_or_else(|| DomainError::EmployeeNotFound(name.to_string()))
    }
}

pub struct ChainOfCommand<'a> {
    chart: &'a OrgChart,
    next: Option<Index>,
}

impl<'a> Iterator for ChainOfCommand<'a> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.chart.get_node(current).and_then(|node| node.parent);
        Some(current)
    }
}

pub struct Descendants<'a> {
    chart: &'a OrgChart,
    stack: Vec<Index>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (Index, &'a OrgNode);

    #[instrument(level = "trace", skip(self))]
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.chart.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                self.stack.extend(node.children.iter().rev().copied());
                return Some((current_idx, node));
            }
        }
        None
    }
}
