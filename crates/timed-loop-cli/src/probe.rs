//! Conditions the CLI can wait for.
//!
//! Each probe returns `true` once the condition holds. `Err` means the probe
//! itself cannot work (bad address, missing program) and ends the wait.

use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::trace;

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

pub fn tcp_reachable(addr: &str, connect_timeout: Duration) -> io::Result<bool> {
    let addrs: Vec<SocketAddr> = addr.to_socket_addrs()?.collect();
    if addrs.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{addr} did not resolve to any address"),
        ));
    }

    for candidate in &addrs {
        match TcpStream::connect_timeout(candidate, connect_timeout) {
            Ok(_) => return Ok(true),
            Err(e) => trace!(%candidate, error = %e, "connect failed"),
        }
    }
    Ok(false)
}

pub fn exec_succeeds(program: &str, args: &[String]) -> io::Result<bool> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    trace!(program, ?status, "program exited");
    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn tcp_reachable_with_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        assert!(tcp_reachable(&addr, Duration::from_millis(500)).unwrap());
    }

    #[test]
    fn tcp_address_without_port_is_an_error() {
        assert!(tcp_reachable("localhost", Duration::from_millis(100)).is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(exec_succeeds("definitely-not-a-real-program-4711", &[]).is_err());
    }
}
