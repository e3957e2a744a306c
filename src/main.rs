use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    //
    log::info!("#Start main()");

    let stdin = io::stdin();
    let stdout = io::stdout();
    ipv4_subnet_summary::run(stdin.lock(), stdout.lock())?;

    Ok(())
}
