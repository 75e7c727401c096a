//! Ephemeral port allocation

use std::net::TcpListener;

use crate::error::Result;

/// Determine a free port by binding a transient loopback listener to port 0
/// and reading back the OS-assigned number.
///
/// The socket is closed before returning, so the port is a hint, not a
/// reservation: another process may claim it before the caller binds.
/// Callers must tolerate that race; holding the socket open would defeat
/// the point of freeing the port for the next bind.
pub fn free_port() -> Result<u16> {
    let listener = TcpListener::bind(("127.0.0.1", 0))?;
    let port = listener.local_addr()?.port();
    drop(listener);
    Ok(port)
}
