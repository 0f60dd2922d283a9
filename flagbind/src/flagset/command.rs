//! Registration of flags as `clap` arguments.

use clap::{Arg, ArgAction, Command};
use tracing::debug;

use super::{Claims, FlagSet, FlagSpec, help_text};
use crate::BindResult;
use crate::convert::{FlagScalar, FlagValue};

/// Builds [`clap::Arg`]s for every bound field.
///
/// Each flag becomes `--<name>` with an optional `-<shorthand>`. Values are
/// validated with the field's scalar parser, so a malformed value is
/// reported by `clap` with the usual diagnostics. Booleans may be given bare
/// (`--verbose`) or with an explicit value (`--verbose=false`). A repeated
/// scalar flag keeps its last value. Lists accept repeated flags and
/// comma-separated values.
///
/// Registering stores the default in each field.
#[derive(Debug, Clone)]
pub struct CommandFlags {
    command: Command,
    args: Vec<Arg>,
    claims: Claims,
}

impl CommandFlags {
    /// Wraps `command`, reserving the names and shorthands it already uses.
    #[must_use]
    pub fn new(command: Command) -> Self {
        let mut claims = Claims::default();
        for arg in command.get_arguments() {
            claims.reserve(arg.get_id().as_str(), arg.get_short());
            if let Some(long) = arg.get_long() {
                claims.reserve(long, None);
            }
        }
        if !command.is_disable_help_flag_set() {
            claims.reserve("help", Some('h'));
        }
        if command.get_version().is_some() && !command.is_disable_version_flag_set() {
            claims.reserve("version", Some('V'));
        }
        Self {
            command,
            args: Vec::new(),
            claims,
        }
    }

    /// Returns the command with every registered argument attached.
    #[must_use]
    pub fn into_command(self) -> Command {
        self.command.args(self.args)
    }
}

impl FlagSet for CommandFlags {
    fn flag<T: FlagValue>(&mut self, spec: &FlagSpec, default: T, cell: &mut T) -> BindResult<()> {
        self.claims.claim(spec)?;
        debug!(flag = %spec.name, "registering clap argument");
        self.args.push(build_arg::<T>(spec));
        *cell = default;
        Ok(())
    }
}

fn build_arg<T: FlagValue>(spec: &FlagSpec) -> Arg {
    let mut arg = Arg::new(spec.name.clone())
        .long(spec.name.clone())
        .help(help_text(spec))
        .value_name(spec.kind.scalar().type_name())
        .value_parser(<T::Item as FlagScalar>::parse_scalar);
    if let Some(short) = spec.shorthand {
        arg = arg.short(short);
    }

    if spec.kind.is_list() {
        return arg.action(ArgAction::Append).value_delimiter(',');
    }

    // A repeated scalar keeps its last occurrence.
    let arg = arg
        .action(ArgAction::Set)
        .overrides_with(spec.name.clone());
    if spec.kind.is_switch() {
        arg.num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else {
        arg
    }
}
