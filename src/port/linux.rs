use std::ffi::CString;
use std::fs;
use std::io;
use std::os::unix::fs::FileExt;
use std::os::unix::io::{
	FromRawFd,
};

use libc::{
	O_CLOEXEC,
	O_RDWR,
	O_SYNC,
	open,
};

use crate::port::PortIo;

const DEV_PORT_PATH: &str = "/dev/port";

/// x86 port I/O through `/dev/port`: the byte at file offset `p` is
/// I/O port `p`.
struct DevPort {
	file: fs::File,
}

impl PortIo for DevPort {
	fn read_byte(&mut self, port: u16) -> u8 {
		let mut buf = [0u8];
		let l = self.file.read_at(&mut buf, port as u64).expect("port read must not fail");
		assert!(1 == l, "port read must transfer a single byte");
		buf[0]
	}

	fn write_byte(&mut self, port: u16, data: u8) {
		let l = self.file.write_at(&[data], port as u64).expect("port write must not fail");
		assert!(1 == l, "port write must transfer a single byte");
	}
}

pub fn open_dev_port() -> crate::AResult<impl PortIo> {
	with_context!(("open {}", DEV_PORT_PATH), {
		let path = CString::new(DEV_PORT_PATH)?;

		let fd = unsafe { open(path.as_ptr(), O_RDWR | O_CLOEXEC | O_SYNC) };
		if -1 == fd {
			return Err(io::Error::last_os_error().into());
		}
		// now get fd managed to prevent resource leak
		let file = unsafe { fs::File::from_raw_fd(fd) };

		Ok(DevPort { file })
	})
}
