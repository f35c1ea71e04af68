use std::error::Error;

use warshall::{algo::ShortestPaths, infra::load};

const NETWORK: &str = include_str!("graphs/logistics.txt");

const HUBS: [&str; 12] = [
    "Lille",
    "Paris",
    "Nantes",
    "Lyon",
    "Marseille",
    "Toulouse",
    "Bordeaux",
    "Strasbourg",
    "Rennes",
    "Nice",
    "Clermont-Ferrand",
    "Montpellier",
];

// Origin, destination and a note on the route taken.
const ITINERARIES: [(usize, usize, &str); 4] = [
    (0, 9, "the Paris to Lyon corridor carries the north to southeast traffic"),
    (5, 9, "the Mediterranean hubs avoid a detour through the north"),
    (8, 4, "the west to east crossing goes through the Bordeaux hub"),
    (7, 11, "the diagonal route continues from Lyon through Clermont-Ferrand"),
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut network = load::from_str::<u32>(NETWORK)?;

    println!(
        "{} hubs connected by {} direct routes",
        network.vertex_count(),
        network.arc_count()
    );

    // Travel times are unsigned so the network cannot contain a negative
    // cycle, but the check is the same for any weights.
    let Some(routes) = ShortestPaths::on(&mut network).run().solved() else {
        println!("the network contains a negative cycle and must be fixed");
        return Ok(());
    };

    for (from, to, note) in ITINERARIES {
        let hours = routes[(from, to)];
        let route = routes
            .reconstruct(from, to)
            .ok_or("route must exist")?
            .into_iter()
            .map(|hub| HUBS[hub])
            .collect::<Vec<_>>()
            .join(" - ");

        println!("{hours} h from {} to {} through {route}", HUBS[from], HUBS[to]);
        println!("  {note}");
    }
    // 11 h from Lille to Nice through Lille - Paris - Lyon - Marseille - Nice
    // 6 h from Toulouse to Nice through Toulouse - Montpellier - Marseille - Nice
    // 10 h from Rennes to Marseille through Rennes - Nantes - Bordeaux - Toulouse - Montpellier - Marseille
    // 9 h from Strasbourg to Montpellier through Strasbourg - Lyon - Clermont-Ferrand - Montpellier

    Ok(())
}
