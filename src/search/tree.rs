//! Breadth-first search over a city hierarchy.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Node {
    city: String,
    children: Vec<Node>,
}

impl Node {
    fn new(city: &str) -> Self {
        Self {
            city: city.to_string(),
            children: Vec::new(),
        }
    }
}

/// A rooted city tree with breadth-first reachability queries.
///
/// Children are addressed by position: a path is the sequence of child
/// indices leading from the root to the node a new city should be
/// attached under.
///
/// # Example
///
/// ```
/// use evo_search::search::Tree;
///
/// let mut map = Tree::new("Goiânia");
/// assert!(map.add("Anápolis", &[]));
/// assert!(map.add("Brasília", &[0]));
/// assert!(map.search("Brasília"));
/// assert!(!map.search("Trindade"));
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Creates a tree holding only the root city.
    pub fn new(root_city: &str) -> Self {
        Self {
            root: Node::new(root_city),
        }
    }

    /// Attaches `city` as a new child of the node reached by following
    /// `path` (child indices from the root).
    ///
    /// Returns `false` if any index along the path does not exist; the
    /// tree is left unchanged in that case.
    pub fn add(&mut self, city: &str, path: &[usize]) -> bool {
        let mut current = &mut self.root;
        for &index in path {
            match current.children.get_mut(index) {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.children.push(Node::new(city));
        true
    }

    /// Breadth-first reachability: is `city` anywhere in the tree?
    pub fn search(&self, city: &str) -> bool {
        let mut queue: VecDeque<&Node> = VecDeque::new();
        queue.push_back(&self.root);

        while let Some(node) = queue.pop_front() {
            if node.city == city {
                return true;
            }
            queue.extend(node.children.iter());
        }
        false
    }
}
