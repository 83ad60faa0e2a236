use plexus::Simulation;

fn main() {
    env_logger::init();

    if let Err(err) = Simulation::new().with_title("Plexus").run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
