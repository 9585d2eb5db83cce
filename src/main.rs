use std::env;
use std::io;
use std::process;

use log::{debug, error};

use testapi_smoke::SmokeTest;

fn main() {
    env_logger::init();

    let message = match env::args_os().nth(1) {
        Some(message) => message,
        None => {
            eprintln!("please supply a message");
            eprintln!("usage: testapi-smoke <message>");
            process::exit(1);
        }
    };
    debug!("message argument: {}", message.to_string_lossy());

    let stdout = io::stdout();
    if let Err(err) = SmokeTest::new().run(stdout.lock()) {
        error!("smoke test aborted: {}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
