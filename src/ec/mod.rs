/* IT8528 EC register write protocol, as used by the QNAP firmware */

use crate::port::PortIo;

mod consts {
	use std::time::Duration;

	pub const EC_PORT_STATUS: u16 = 0x6c; // status read, command write
	pub const EC_PORT_DATA: u16 = 0x68;

	// status bits
	pub const EC_STATUS_IBF: u8 = 0x02; // input buffer full: EC didn't consume the last byte yet

	// commands for EC_PORT_STATUS
	pub const EC_CMD_WRITE_REGISTER: u8 = 0x88; // followed by address (2 bytes) and value on EC_PORT_DATA

	// register addresses are sent high byte first, ORed with the write flag
	pub const EC_REGISTER_WRITE_FLAG: u16 = 0x8000;

	pub const EC_REGISTER_STATUS_LED: u16 = 0x155;
	// values for EC_REGISTER_STATUS_LED
	pub const STATUS_LED_BOOTING: u8 = 0x05; // flashing green/red

	pub const IBF_POLL_LIMIT: u32 = 1000;
	pub const IBF_POLL_INTERVAL: Duration = Duration::from_millis(1);
}

use self::consts::*;

trait PortIoEcExt: PortIo {
	/// returns once the EC input buffer is clear; returns error on
	/// timeout (IBF_POLL_LIMIT polls, 1ms apart - about a second)
	fn ec_wait_ibf(&mut self) -> crate::AResult<()> {
		for _ in 0..IBF_POLL_LIMIT {
			if 0 == self.read_byte(EC_PORT_STATUS) & EC_STATUS_IBF {
				return Ok(());
			}
			self.sleep(IBF_POLL_INTERVAL);
		}
		bail!("Timeout waiting for EC IBF");
	}

	fn ec_command(&mut self, command: u8) -> crate::AResult<()> {
		self.ec_wait_ibf()?;
		self.write_byte(EC_PORT_STATUS, command);
		Ok(())
	}

	fn ec_send_data(&mut self, data: u8) -> crate::AResult<()> {
		self.ec_wait_ibf()?;
		self.write_byte(EC_PORT_DATA, data);
		Ok(())
	}

	fn ec_write_register(&mut self, register: u16, value: u8) -> crate::AResult<()> {
		let address = register | EC_REGISTER_WRITE_FLAG;
		self.ec_command(EC_CMD_WRITE_REGISTER)?;
		self.ec_send_data((address >> 8) as u8)?;
		self.ec_send_data(address as u8)?;
		self.ec_send_data(value)?;
		Ok(())
	}
}
impl<P: PortIo + ?Sized> PortIoEcExt for P {}

/// Switch the status LED to the boot indicator pattern (alternating
/// green/red). The command sequence stops at the first timeout; a
/// partial sequence is simply abandoned, the EC keeps its state.
pub fn set_boot_indicator<P: PortIo>(ports: &mut P) -> crate::AResult<()> {
	debug!("EC register write: 0x{:04x} = 0x{:02x}", EC_REGISTER_STATUS_LED, STATUS_LED_BOOTING);
	ports.ec_write_register(EC_REGISTER_STATUS_LED, STATUS_LED_BOOTING)
}
