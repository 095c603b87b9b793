use bullscows::game::StatisticsStore;
use bullscows::ui;
use log::error;
use std::io;

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    let store = StatisticsStore::default();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = ui::menu::run(&mut stdin.lock(), &mut stdout.lock(), &store) {
        error!("exiting: {}", e);
        std::process::exit(1);
    }
}
