//! Resolution of tag tokens into a [`FlagTag`] record.

use std::collections::VecDeque;

use super::{FlagTag, TagKey};
use crate::TagError;

/// Raw values collected per key before normalisation.
#[derive(Debug, Default)]
struct Slots {
    name: Option<String>,
    shorthand: Option<String>,
    value: Option<String>,
    usage: Option<String>,
}

impl Slots {
    const fn slot_mut(&mut self, key: TagKey) -> &mut Option<String> {
        match key {
            TagKey::Name => &mut self.name,
            TagKey::Shorthand => &mut self.shorthand,
            TagKey::Value => &mut self.value,
            TagKey::Usage => &mut self.usage,
        }
    }

    fn into_tag(self) -> FlagTag {
        let finish = |slot: Option<String>| slot.as_deref().map(unquote).unwrap_or_default();
        FlagTag {
            name: finish(self.name),
            shorthand: finish(self.shorthand),
            value: finish(self.value),
            usage: finish(self.usage),
        }
    }
}

/// Builds a [`FlagTag`] from `tokens`, accepting only the keys in `keys`.
///
/// A token of the form `key:value` assigns `value` to `key`; the key is
/// matched case-insensitively after trimming and a repeated key keeps the
/// last assignment. Tokens without a `:` are positional: once every token has
/// been read they fill the keys that were not assigned explicitly, in the
/// order given by `keys`, until the positional values run out.
///
/// Every assigned value loses one layer of matching `"` or `'` quotes when it
/// is wholly wrapped in them, and is trimmed of surrounding whitespace
/// otherwise.
///
/// # Errors
///
/// Returns [`TagError::InvalidKey`] when a keyed token names a key outside
/// `keys`.
///
/// # Examples
///
/// ```rust
/// use flagbind::tag::{resolve, Flavor};
///
/// let tag = resolve(&["name:123", "shorthand:asd", "as", "123"], Flavor::Posix.keys())?;
/// assert_eq!(tag.name, "123");
/// assert_eq!(tag.shorthand, "asd");
/// assert_eq!(tag.value, "as");
/// assert_eq!(tag.usage, "123");
/// # Ok::<(), flagbind::TagError>(())
/// ```
pub fn resolve<S: AsRef<str>>(tokens: &[S], keys: &[TagKey]) -> Result<FlagTag, TagError> {
    let mut slots = Slots::default();
    let mut positional = VecDeque::new();

    for raw in tokens {
        let token = raw.as_ref();
        let Some((raw_key, value)) = token.split_once(':') else {
            positional.push_back(token);
            continue;
        };
        let key = TagKey::parse(raw_key)
            .filter(|key| keys.contains(key))
            .ok_or_else(|| TagError::InvalidKey {
                key: raw_key.to_owned(),
            })?;
        *slots.slot_mut(key) = Some(value.to_owned());
    }

    for key in keys {
        if positional.is_empty() {
            break;
        }
        let slot = slots.slot_mut(*key);
        if slot.is_none() {
            *slot = positional.pop_front().map(str::to_owned);
        }
    }

    Ok(slots.into_tag())
}

/// Removes one layer of wrapping quotes, or trims the value.
fn unquote(value: &str) -> String {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            value
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .map_or_else(|| value.trim().to_owned(), str::to_owned)
}
