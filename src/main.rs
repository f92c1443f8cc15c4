use sky_shooter::plugins::session::Session;

/// Usage: `sky-shooter [player-name]`
fn main() {
    let name = std::env::args().nth(1).unwrap_or_else(|| "Player".to_owned());
    sky_shooter::game::run(Session::new(&name));
}
