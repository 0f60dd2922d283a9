//! Generated code must reach the crate through the alias.

use flagbind as flags;
use flags::{BindFlags, FlagTable};

#[derive(Default, BindFlags)]
#[flag(crate = "flags")]
struct Server {
    #[flag("host;h;localhost;host name")]
    host: String,
    #[flag("limits", nested)]
    limits: Limits,
}

#[derive(Default, BindFlags)]
#[flag(crate = "flags")]
struct Limits {
    #[flag("max;m;10;maximum connections")]
    max: u32,
}

fn main() {
    let mut table = FlagTable::new();
    let mut server = Server::default();
    let result: flags::BindResult<()> = flags::bind_pflags(&mut table, &mut server);
    assert!(result.is_ok());
}
