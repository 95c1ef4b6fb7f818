use clap::Parser;
use env_logger::{Builder, Env};
use log::error;

use robonav_lib::{Args, Config};

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    if let Err(e) = robonav_lib::run(&config) {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}
