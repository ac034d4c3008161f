use std::process;

use member_recon_lib::{reconcile_payments, Config};

fn main() {
    env_logger::init();

    match reconcile_payments(&Config::default()) {
        Ok(summary) => {
            println!("{}", summary);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
