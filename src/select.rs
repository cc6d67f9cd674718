//! Channel selection against a user-supplied selector string.

use crate::image::Channel;

/// Decides whether a channel name satisfies a selector, and how early it
/// should be listed.
///
/// Lower ranks sort first. Any `Fn(&str, &str) -> Option<usize>` works as a
/// matcher.
pub trait ChannelMatcher {
    /// Rank of `name` under `selector`, or `None` if the channel is excluded.
    fn rank(&self, name: &str, selector: &str) -> Option<usize>;
}

impl<F> ChannelMatcher for F
where
    F: Fn(&str, &str) -> Option<usize>,
{
    fn rank(&self, name: &str, selector: &str) -> Option<usize> {
        self(name, selector)
    }
}

/// Default matcher.
///
/// The selector is a list of parts separated by commas or spaces. A channel
/// matches if its name contains any part (ASCII case-insensitive); its rank is
/// the index of the first such part. A selector without parts matches every
/// channel at rank 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubstringMatcher;

impl ChannelMatcher for SubstringMatcher {
    fn rank(&self, name: &str, selector: &str) -> Option<usize> {
        let name = name.to_ascii_lowercase();
        let mut parts = selector
            .split([',', ' '])
            .filter(|p| !p.is_empty())
            .peekable();
        if parts.peek().is_none() {
            return Some(0);
        }
        parts.position(|part| name.contains(&part.to_ascii_lowercase()))
    }
}

/// Keep the channels that match `selector`.
///
/// With a non-empty selector the survivors are ordered by `(rank, original
/// index)`; with an empty one they keep their original order. Unmatched
/// channels are dropped.
pub(crate) fn select_channels(
    channels: Vec<Channel>,
    selector: &str,
    matcher: &dyn ChannelMatcher,
) -> Vec<Channel> {
    let mut matches: Vec<(usize, usize)> = channels
        .iter()
        .enumerate()
        .filter_map(|(i, c)| matcher.rank(c.name(), selector).map(|rank| (rank, i)))
        .collect();

    if !selector.is_empty() {
        matches.sort_unstable();
    }

    let mut slots: Vec<Option<Channel>> = channels.into_iter().map(Some).collect();
    let selected: Vec<Channel> = matches
        .into_iter()
        .filter_map(|(_, i)| slots[i].take())
        .collect();

    log::debug!(
        "PFM channel selection {selector:?}: {:?}",
        selected.iter().map(Channel::name).collect::<Vec<_>>()
    );
    selected
}
