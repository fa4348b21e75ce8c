//! A* shortest path over a weighted city graph.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A weighted, directed connection to a neighboring city.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Destination city.
    pub city: String,
    /// Travel distance to the destination.
    pub distance: f64,
}

impl Edge {
    /// Creates an edge to `city` with the given distance.
    pub fn new(city: &str, distance: f64) -> Self {
        Self {
            city: city.to_string(),
            distance,
        }
    }
}

/// Heap entry ordered by lowest estimated total cost first.
struct Candidate {
    f_score: f64,
    g_score: f64,
    city: String,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, A* wants the smallest f.
        other.f_score.total_cmp(&self.f_score)
    }
}

/// A weighted city graph with A* shortest-path queries.
///
/// # Example
///
/// ```
/// use evo_search::search::{Edge, Graph};
///
/// let mut g = Graph::new();
/// g.add("A", [Edge::new("B", 1.0)], true);
/// g.add("B", [Edge::new("C", 2.0)], true);
///
/// let (path, distance) = g.a_star("A", "C", |_| 0.0).unwrap();
/// assert_eq!(path, ["A", "B", "C"]);
/// assert_eq!(distance, 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds outgoing edges to `vertex`, creating the vertex as needed.
    ///
    /// An edge to a city that `vertex` already connects to is ignored;
    /// the first-added distance wins. With `bidirectional`, the reverse
    /// edge is added under each destination city as well.
    pub fn add<I>(&mut self, vertex: &str, edges: I, bidirectional: bool)
    where
        I: IntoIterator<Item = Edge>,
    {
        for edge in edges {
            if bidirectional {
                self.insert_edge(&edge.city, Edge::new(vertex, edge.distance));
            }
            self.insert_edge(vertex, edge);
        }
    }

    fn insert_edge(&mut self, vertex: &str, edge: Edge) {
        let edges = self.adjacency.entry(vertex.to_string()).or_default();
        if !edges.iter().any(|existing| existing.city == edge.city) {
            edges.push(edge);
        }
    }

    /// The outgoing edges of `vertex`, empty for unknown vertices.
    pub fn edges(&self, vertex: &str) -> &[Edge] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// A* shortest path from `start` to `goal`.
    ///
    /// `heuristic` estimates the remaining distance from a city to the
    /// goal; with an admissible estimate the returned path is optimal.
    /// Returns the visited cities in order plus the total distance, or
    /// `None` when the goal is unreachable.
    pub fn a_star<H>(&self, start: &str, goal: &str, heuristic: H) -> Option<(Vec<String>, f64)>
    where
        H: Fn(&str) -> f64,
    {
        let mut open = BinaryHeap::new();
        let mut g_scores: HashMap<String, f64> = HashMap::new();
        let mut came_from: HashMap<String, String> = HashMap::new();

        g_scores.insert(start.to_string(), 0.0);
        open.push(Candidate {
            f_score: heuristic(start),
            g_score: 0.0,
            city: start.to_string(),
        });

        while let Some(candidate) = open.pop() {
            // A stale entry: this city was re-queued with a better cost
            // after the entry was pushed.
            if candidate.g_score > g_scores[&candidate.city] {
                continue;
            }

            if candidate.city == goal {
                return Some((
                    reconstruct_path(&came_from, goal),
                    candidate.g_score,
                ));
            }

            for edge in self.edges(&candidate.city) {
                let tentative = candidate.g_score + edge.distance;
                let known = g_scores.get(&edge.city).copied();
                if known.map_or(true, |g| tentative < g) {
                    g_scores.insert(edge.city.clone(), tentative);
                    came_from.insert(edge.city.clone(), candidate.city.clone());
                    open.push(Candidate {
                        f_score: tentative + heuristic(&edge.city),
                        g_score: tentative,
                        city: edge.city.clone(),
                    });
                }
            }
        }

        None
    }
}

fn reconstruct_path(came_from: &HashMap<String, String>, goal: &str) -> Vec<String> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while let Some(previous) = came_from.get(current) {
        path.push(previous.clone());
        current = previous;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The Romania road map of Russell & Norvig.
    fn romania() -> Graph {
        let mut g = Graph::new();
        g.add(
            "Arad",
            [
                Edge::new("Zerind", 75.0),
                Edge::new("Sibiu", 140.0),
                Edge::new("Timisoara", 118.0),
            ],
            false,
        );
        g.add(
            "Bucharest",
            [
                Edge::new("Pitesti", 101.0),
                Edge::new("Fagaras", 211.0),
                Edge::new("Urziceni", 85.0),
                Edge::new("Giurgiu", 90.0),
            ],
            false,
        );
        g.add(
            "Craiova",
            [
                Edge::new("Dobreta", 120.0),
                Edge::new("Rimnicu Vilcea", 146.0),
                Edge::new("Pitesti", 138.0),
            ],
            false,
        );
        g.add(
            "Dobreta",
            [Edge::new("Mehadia", 75.0), Edge::new("Craiova", 120.0)],
            false,
        );
        g.add("Eforie", [Edge::new("Hirsova", 86.0)], false);
        g.add(
            "Fagaras",
            [Edge::new("Sibiu", 99.0), Edge::new("Bucharest", 211.0)],
            false,
        );
        g.add("Giurgiu", [Edge::new("Bucharest", 90.0)], false);
        g.add(
            "Hirsova",
            [Edge::new("Urziceni", 98.0), Edge::new("Eforie", 86.0)],
            false,
        );
        g.add(
            "Iasi",
            [Edge::new("Neamt", 87.0), Edge::new("Vaslui", 92.0)],
            false,
        );
        g.add(
            "Lugoj",
            [Edge::new("Timisoara", 111.0), Edge::new("Mehadia", 70.0)],
            false,
        );
        g.add(
            "Mehadia",
            [Edge::new("Lugoj", 70.0), Edge::new("Dobreta", 75.0)],
            false,
        );
        g.add("Neamt", [Edge::new("Iasi", 87.0)], false);
        g.add(
            "Oradea",
            [Edge::new("Sibiu", 151.0), Edge::new("Zerind", 71.0)],
            false,
        );
        g.add(
            "Pitesti",
            [
                Edge::new("Bucharest", 101.0),
                Edge::new("Craiova", 138.0),
                Edge::new("Rimnicu Vilcea", 97.0),
            ],
            false,
        );
        g.add(
            "Rimnicu Vilcea",
            [
                Edge::new("Pitesti", 97.0),
                Edge::new("Craiova", 146.0),
                Edge::new("Sibiu", 80.0),
            ],
            false,
        );
        g.add(
            "Sibiu",
            [
                Edge::new("Fagaras", 99.0),
                Edge::new("Rimnicu Vilcea", 80.0),
                Edge::new("Arad", 140.0),
                Edge::new("Oradea", 151.0),
            ],
            false,
        );
        g.add(
            "Timisoara",
            [Edge::new("Arad", 118.0), Edge::new("Lugoj", 111.0)],
            false,
        );
        g.add(
            "Urziceni",
            [
                Edge::new("Vaslui", 142.0),
                Edge::new("Hirsova", 98.0),
                Edge::new("Bucharest", 85.0),
            ],
            false,
        );
        g.add(
            "Vaslui",
            [Edge::new("Urziceni", 142.0), Edge::new("Iasi", 92.0)],
            false,
        );
        g.add(
            "Zerind",
            [Edge::new("Oradea", 71.0), Edge::new("Arad", 75.0)],
            false,
        );
        g
    }

    /// Straight-line distances to Bucharest.
    fn distance_to_bucharest(city: &str) -> f64 {
        match city {
            "Arad" => 366.0,
            "Bucharest" => 0.0,
            "Craiova" => 160.0,
            "Dobreta" => 242.0,
            "Eforie" => 161.0,
            "Fagaras" => 178.0,
            "Giurgiu" => 77.0,
            "Hirsova" => 151.0,
            "Iasi" => 226.0,
            "Lugoj" => 244.0,
            "Mehadia" => 241.0,
            "Neamt" => 234.0,
            "Oradea" => 380.0,
            "Pitesti" => 98.0,
            "Rimnicu Vilcea" => 193.0,
            "Sibiu" => 253.0,
            "Timisoara" => 329.0,
            "Urziceni" => 80.0,
            "Vaslui" => 199.0,
            "Zerind" => 374.0,
            _ => panic!("unknown city {city}"),
        }
    }

    #[test]
    fn test_arad_to_bucharest() {
        let g = romania();
        let (path, distance) = g
            .a_star("Arad", "Bucharest", distance_to_bucharest)
            .unwrap();

        assert_eq!(
            path,
            ["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]
        );
        assert_eq!(distance, 418.0);
    }

    #[test]
    fn test_every_city_reaches_bucharest() {
        let g = romania();
        for city in [
            "Arad", "Craiova", "Dobreta", "Eforie", "Fagaras", "Giurgiu", "Hirsova", "Iasi",
            "Lugoj", "Mehadia", "Neamt", "Oradea", "Pitesti", "Rimnicu Vilcea", "Sibiu",
            "Timisoara", "Urziceni", "Vaslui", "Zerind",
        ] {
            let result = g.a_star(city, "Bucharest", distance_to_bucharest);
            assert!(result.is_some(), "{city} should reach Bucharest");
        }
    }

    #[test]
    fn test_start_equals_goal() {
        let g = romania();
        let (path, distance) = g
            .a_star("Sibiu", "Sibiu", distance_to_bucharest)
            .unwrap();

        assert_eq!(path, ["Sibiu"]);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_unreachable_goal_returns_none() {
        let mut g = Graph::new();
        g.add("A", [Edge::new("B", 1.0)], false);
        g.add("C", [Edge::new("D", 1.0)], false);

        assert!(g.a_star("A", "D", |_| 0.0).is_none());
        assert!(g.a_star("A", "Nowhere", |_| 0.0).is_none());
    }

    #[test]
    fn test_heuristic_zero_degrades_to_dijkstra() {
        let g = romania();
        let (path, distance) = g.a_star("Arad", "Bucharest", |_| 0.0).unwrap();

        // Same optimum, found without guidance.
        assert_eq!(
            path,
            ["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"]
        );
        assert_eq!(distance, 418.0);
    }

    #[test]
    fn test_bidirectional_add_creates_reverse_edges() {
        let mut g = Graph::new();
        g.add("A", [Edge::new("B", 5.0)], true);

        assert_eq!(g.edges("B"), [Edge::new("A", 5.0)]);

        let (path, distance) = g.a_star("B", "A", |_| 0.0).unwrap();
        assert_eq!(path, ["B", "A"]);
        assert_eq!(distance, 5.0);
    }

    #[test]
    fn test_duplicate_edges_keep_first_distance() {
        let mut g = Graph::new();
        g.add("A", [Edge::new("B", 5.0)], false);
        g.add("A", [Edge::new("B", 99.0)], false);

        assert_eq!(g.edges("A"), [Edge::new("B", 5.0)]);
    }

    #[test]
    fn test_prefers_cheaper_multi_hop_route() {
        let mut g = Graph::new();
        g.add(
            "A",
            [Edge::new("B", 1.0), Edge::new("C", 10.0)],
            false,
        );
        g.add("B", [Edge::new("C", 1.0)], false);

        let (path, distance) = g.a_star("A", "C", |_| 0.0).unwrap();
        assert_eq!(path, ["A", "B", "C"]);
        assert_eq!(distance, 2.0);
    }
}
