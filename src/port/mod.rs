mod io;
mod linux;

pub use self::io::{
	PortIo,
};

// OS-specific. for now linux only.
pub use self::linux::{
	open_dev_port,
};
