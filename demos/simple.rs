use sp_suite::{BellmanFord, Dijkstra, FloydWarshall, Graph, Johnson};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A small grid-like graph to compare the solvers on
    let mut edges = Vec::new();
    for i in 1..25 {
        edges.push((i, i + 1, (i % 5 + 1) as i64));
        if i > 5 {
            edges.push((i, i - 5, 2));
        }
    }

    // Some cross connections, one of them negative
    edges.push((1, 11, 15));
    edges.push((6, 21, 12));
    edges.push((13, 4, -3));
    edges.push((19, 8, 6));

    let graph = Graph::build(25, edges)?;

    let distances = BellmanFord::new(&graph).solve(1)?;
    println!("Shortest distances from vertex 1:");
    for v in graph.vertices() {
        match distances.distance(v) {
            Some(d) => println!("  {v} -> {d}"),
            None => println!("  {v} -> ∞"),
        }
    }

    if let Some(path) = distances.path_to(25) {
        println!("Path to 25: {path:?}");
    }

    let all_pairs = Johnson::new(&graph).all_pairs()?;
    assert_eq!(all_pairs, FloydWarshall::new(&graph).solve());
    println!("Johnson and Floyd–Warshall agree on all {} rows", all_pairs.vertex_count());

    let non_negative = Graph::build(3, vec![(1, 2, 4), (2, 3, 1), (1, 3, 7)])?;
    if let Some((distance, path)) = Dijkstra::new(&non_negative).solve_to(1, 3)? {
        println!("Dijkstra 1 -> 3: {distance} via {path:?}");
    }
    Ok(())
}
