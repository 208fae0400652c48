use flarefit::configuration::Configuration;

fn main() {
    let scenario_path = std::env::args()
        .nth(1)
        .unwrap_or("json/scenarios.json".to_owned());

    let config = Configuration::new();
    config.from_reader(scenario_path).unwrap();

    let names = config.
        scenario_manager().
        names();
    for name in names {
        let scenario = config.
            scenario_manager().
            get(&name).
            unwrap();
        let computer = scenario.computer();
        println!("{} ({:?})", scenario.name(), scenario.model());
        match computer.key_points(scenario.model()) {
            Some(points) => {
                println!("{:>10} {:>10} {:>9} {:>11} {:>10}",
                         "t [min]", "dist [ft]", "alt [ft]", "gs [ft/min]", "vs [ft/min]");
                for point in points {
                    println!("{:>10.4} {:>10.1} {:>9.2} {:>11.1} {:>10.1}",
                             point.elapsed(),
                             point.distance(),
                             point.height(),
                             point.ground_rate(),
                             point.vertical_rate());
                }
            }
            None => println!("  no feasible fit"),
        }
        println!();
    }
}
