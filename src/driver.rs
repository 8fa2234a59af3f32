use crate::ec;
use crate::port::PortIo;

/// Lifecycle hooks for the host loading the driver.
pub struct BootLedDriver<P: PortIo> {
	ports: P,
}

impl<P: PortIo> BootLedDriver<P> {
	pub fn new(ports: P) -> Self {
		BootLedDriver {
			ports,
		}
	}

	/// load hook; runs the indicator sequence once. The host doesn't
	/// branch on the outcome, a timeout only shows up in the log.
	pub fn on_load(&mut self) {
		if let Err(e) = ec::set_boot_indicator(&mut self.ports) {
			warn!("EC status LED not set: {}", e);
		}
	}

	/// unload hook; the indicator needs no teardown.
	pub fn on_unload(&mut self) {
	}
}

#[cfg(test)]
mod test {
	use std::time::Duration;

	use crate::port::PortIo;

	use super::BootLedDriver;

	struct AlwaysBusy {
		writes: usize,
	}

	impl PortIo for AlwaysBusy {
		fn read_byte(&mut self, _port: u16) -> u8 {
			0x02
		}

		fn write_byte(&mut self, _port: u16, _data: u8) {
			self.writes += 1;
		}

		fn sleep(&mut self, _duration: Duration) {
		}
	}

	#[test]
	fn load_hook_swallows_timeout() {
		let mut ports = AlwaysBusy { writes: 0 };
		{
			let mut driver = BootLedDriver::new(&mut ports);
			driver.on_load();
			driver.on_unload();
		}
		assert_eq!(0, ports.writes);
	}
}
