//! Application of parsed `clap` matches to bound fields.

use clap::ArgMatches;
use tracing::debug;

use super::{FlagSet, FlagSpec};
use crate::convert::FlagValue;
use crate::{BindError, BindResult};

/// Writes parsed values from [`ArgMatches`] into bound fields.
///
/// Walk the same struct with the same options used for registration. A flag
/// absent from the command line leaves its field at the tag default.
#[derive(Debug, Clone, Copy)]
pub struct MatchedFlags<'m> {
    matches: &'m ArgMatches,
}

impl<'m> MatchedFlags<'m> {
    /// Reads values from `matches`.
    #[must_use]
    pub const fn new(matches: &'m ArgMatches) -> Self {
        Self { matches }
    }
}

impl FlagSet for MatchedFlags<'_> {
    fn flag<T: FlagValue>(&mut self, spec: &FlagSpec, default: T, cell: &mut T) -> BindResult<()> {
        let occurrences = self
            .matches
            .try_get_many::<T::Item>(&spec.name)
            .map_err(|err| BindError::matches(&spec.name, err))?;
        let parsed = occurrences.and_then(|values| T::from_items(values.cloned().collect()));
        if parsed.is_some() {
            debug!(flag = %spec.name, "applying command-line value");
        }
        *cell = parsed.unwrap_or(default);
        Ok(())
    }
}
