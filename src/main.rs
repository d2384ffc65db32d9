use bridge_address_filter::output::format_filter_report;
use bridge_address_filter::{
    filter_system_bridge_addresses, new_addresses, BridgeFilter, BridgeSettings,
    SystemAddressLookup,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Error initializing log4rs: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let report = args.first().is_some_and(|a| a == "--report");
    if report {
        args.remove(0);
    }
    let candidates = new_addresses(&args);
    if candidates.is_empty() {
        return Err("usage: bridge-address-filter [--report] ADDRESS...".into());
    }

    if report {
        let filter = BridgeFilter::new(BridgeSettings::from_env(), SystemAddressLookup);
        let exclusions = filter.exclusions()?;
        log::info!("Bridge addresses: [{exclusions}]");
        for row in format_filter_report(&candidates, &exclusions) {
            println!("{row}");
        }
        return Ok(());
    }

    for addr in filter_system_bridge_addresses(&candidates)? {
        println!("{addr}");
    }
    Ok(())
}
