//! The crate path may name the real crate.

use flagbind::{BindFlags, FlagTable};

/// `#[flag(crate = "flagbind")]` names the real crate, so no workspace
/// reconfiguration is needed.
#[derive(Default, BindFlags)]
#[flag(crate = "flagbind")]
struct Server {
    #[flag("port;p;8080;port to listen on")]
    port: u16,
}

fn main() {
    let mut table = FlagTable::new();
    let mut server = Server::default();
    let result: flagbind::BindResult<()> = flagbind::bind_pflags(&mut table, &mut server);
    assert!(result.is_ok());
}
