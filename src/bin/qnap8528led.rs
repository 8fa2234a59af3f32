#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

extern crate qnap8528led;
use qnap8528led::*;

use std::process::exit;

fn main_app() -> AResult<()> {
	let _matches = clap_app!(@app (app_from_crate!())
		(about: "Set the QNAP status LED to the boot indicator pattern (IT8528 EC)")
	).get_matches();

	let ports = port::open_dev_port()?;

	let mut driver = driver::BootLedDriver::new(ports);
	driver.on_load();
	driver.on_unload();

	Ok(())
}

fn main() {
	env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(e) = main_app() {
		error!("Error: {}", e);
		exit(1);
	}
}
